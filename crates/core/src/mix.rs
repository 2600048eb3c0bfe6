//! Channel mix: percentage allocation of spend across media channels.

use serde::{Deserialize, Serialize};

/// One channel's share of the mix. Weights are unsigned percentages, so
/// negative allocations are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelWeight {
    pub channel: String,
    pub percent: u32,
}

/// An ordered mapping from channel name to an integer percentage weight.
///
/// Insertion order is preserved for display. Weights are not required to sum
/// to 100 — [`ChannelMix::deviation`] reports the gap so the caller can warn
/// the user — and the estimators operate on whatever weights are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMix {
    weights: Vec<ChannelWeight>,
}

impl ChannelMix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mix from `(channel, percent)` pairs, keeping the given order.
    /// Later duplicates overwrite the earlier weight in place.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut mix = Self::new();
        for (channel, percent) in pairs {
            mix.set(channel.into(), percent);
        }
        mix
    }

    /// Sets a channel's weight, appending the channel if it is new.
    pub fn set(&mut self, channel: impl Into<String>, percent: u32) {
        let channel = channel.into();
        match self.weights.iter_mut().find(|w| w.channel == channel) {
            Some(existing) => existing.percent = percent,
            None => self.weights.push(ChannelWeight { channel, percent }),
        }
    }

    pub fn get(&self, channel: &str) -> Option<u32> {
        self.weights
            .iter()
            .find(|w| w.channel == channel)
            .map(|w| w.percent)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.weights.iter().map(|w| (w.channel.as_str(), w.percent))
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn total_weight(&self) -> u32 {
        self.weights.iter().map(|w| w.percent).sum()
    }

    /// Signed distance of the total weight from 100%. Zero means balanced;
    /// the UI surfaces any other value as a warning.
    pub fn deviation(&self) -> i64 {
        self.total_weight() as i64 - 100
    }

    pub fn is_balanced(&self) -> bool {
        self.deviation() == 0
    }
}
