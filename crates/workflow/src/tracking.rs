//! Tracking codes issued when a proposal is finalized.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 4;

/// An order/tracking identifier of the form `ORDER-<YYYYMMDD>-<XXXX>`.
///
/// Uniqueness is probabilistic — four random characters are plenty for a
/// planning tool but not billing-grade. Every call to [`TrackingCode::generate`]
/// yields a fresh code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingCode(String);

impl TrackingCode {
    /// Issues a new code dated today, drawing the suffix from `rng`.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let date = Utc::now().format("%Y%m%d");
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
            .collect();
        Self(format!("ORDER-{}-{}", date, suffix))
    }

    /// Issues a new code from the thread RNG.
    pub fn random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks the `ORDER-\d{8}-[A-Z0-9]{4}` shape.
    pub fn is_well_formed(code: &str) -> bool {
        let Some(rest) = code.strip_prefix("ORDER-") else {
            return false;
        };
        let mut parts = rest.splitn(2, '-');
        let (Some(date), Some(suffix)) = (parts.next(), parts.next()) else {
            return false;
        };
        date.len() == 8
            && date.bytes().all(|b| b.is_ascii_digit())
            && suffix.len() == SUFFIX_LEN
            && suffix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }
}

impl std::fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_code_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let code = TrackingCode::generate(&mut rng);
            assert!(
                TrackingCode::is_well_formed(code.as_str()),
                "malformed: {}",
                code
            );
        }
    }

    #[test]
    fn test_random_code_is_well_formed() {
        assert!(TrackingCode::is_well_formed(TrackingCode::random().as_str()));
    }

    #[test]
    fn test_codes_differ_across_calls() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = TrackingCode::generate(&mut rng);
        let b = TrackingCode::generate(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_well_formed_rejects_bad_shapes() {
        assert!(TrackingCode::is_well_formed("ORDER-20250824-A1B2"));
        assert!(!TrackingCode::is_well_formed("ORDER-2025824-A1B2"));
        assert!(!TrackingCode::is_well_formed("ORDER-20250824-a1b2"));
        assert!(!TrackingCode::is_well_formed("ORDER-20250824-A1B23"));
        assert!(!TrackingCode::is_well_formed("TICKET-20250824-A1B2"));
        assert!(!TrackingCode::is_well_formed(""));
    }
}
