//! Audience scorer: ranks canonical personas against an (industry, goal)
//! pair with a fixed keyword-marker heuristic.
//!
//! Scoring is fully deterministic. Marker hits on the persona's concatenated
//! text fields carry the ranking; a size-derived score capped at 1.0 only
//! breaks ties between equal keyword scores.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use planner_core::{Goal, Industry};

use crate::normalize::PersonaRecord;

/// Size at which the size contribution saturates.
const SIZE_CAP: f64 = 200_000.0;

/// Marker substrings and their weights per industry. Matched against the
/// lowercased concatenation of a persona's text fields.
fn industry_markers(industry: Industry) -> &'static [(&'static str, u32)] {
    match industry {
        Industry::Beauty => &[("妝", 2), ("女性", 1)],
        Industry::HomeAppliance => &[("理性", 2), ("比價", 2), ("功能", 1)],
        Industry::Wellness => &[("健康", 2), ("上班", 1)],
        Industry::Pet => &[("寵物", 3), ("毛孩", 3)],
        Industry::Fitness => &[("健身", 3), ("效率", 1)],
        Industry::Fmcg => &[("比價", 1), ("促銷", 1)],
        Industry::Other => &[],
    }
}

/// Marker substrings and their weights per marketing goal.
fn goal_markers(goal: Goal) -> &'static [(&'static str, u32)] {
    match goal {
        Goal::Awareness => &[("社群", 1), ("口碑", 1), ("年輕", 1)],
        Goal::Leads => &[("搜尋", 1), ("關鍵字", 1), ("line", 1), ("edm", 1)],
        Goal::Purchase => &[("比價", 1), ("功能", 1), ("評價", 1)],
    }
}

/// Keyword score plus the size tie-breaker for one persona.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonaScore {
    pub keyword_score: u32,
    /// `min(size / 200 000, 1.0)` — never dominant over keyword matches.
    pub size_score: f64,
}

/// Top-k recommendation plus the residual pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Best-ranked personas, highest score first.
    pub top: Vec<PersonaRecord>,
    /// Everything else, in original input order.
    pub residual: Vec<PersonaRecord>,
}

/// Scores one persona against the industry and goal marker tables.
pub fn score_persona(persona: &PersonaRecord, industry: Industry, goal: Goal) -> PersonaScore {
    let haystack = format!(
        "{} {} {} {} {}",
        persona.name, persona.pain_point, persona.keywords, persona.slots, persona.attitudes
    )
    .to_lowercase();

    let mut keyword_score = 0;
    for (marker, weight) in industry_markers(industry).iter().chain(goal_markers(goal)) {
        if haystack.contains(marker) {
            keyword_score += weight;
        }
    }

    PersonaScore {
        keyword_score,
        size_score: (persona.size as f64 / SIZE_CAP).min(1.0),
    }
}

/// Ranks `personas` and splits off the top `k`.
///
/// The sort is stable on (keyword score desc, size score desc), so personas
/// with identical scores keep their original relative order, and growing `k`
/// only ever appends previously-residual entries. `k` larger than the input
/// returns everything; empty input returns two empty pools.
pub fn recommend(
    industry: Industry,
    goal: Goal,
    personas: &[PersonaRecord],
    k: usize,
) -> Recommendation {
    let mut ranked: Vec<usize> = (0..personas.len()).collect();
    let scores: Vec<PersonaScore> = personas
        .iter()
        .map(|p| score_persona(p, industry, goal))
        .collect();

    ranked.sort_by(|&a, &b| {
        scores[b]
            .keyword_score
            .cmp(&scores[a].keyword_score)
            .then_with(|| {
                scores[b]
                    .size_score
                    .partial_cmp(&scores[a].size_score)
                    .unwrap_or(Ordering::Equal)
            })
    });

    let cut = k.min(ranked.len());
    let top: Vec<PersonaRecord> = ranked[..cut].iter().map(|&i| personas[i].clone()).collect();

    let mut in_top = vec![false; personas.len()];
    for &i in &ranked[..cut] {
        in_top[i] = true;
    }
    let residual: Vec<PersonaRecord> = personas
        .iter()
        .enumerate()
        .filter(|(i, _)| !in_top[*i])
        .map(|(_, p)| p.clone())
        .collect();

    tracing::debug!(
        industry = industry.label(),
        goal = goal.label(),
        candidates = personas.len(),
        recommended = top.len(),
        "audience recommendation computed"
    );

    Recommendation { top, residual }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::sample_personas;

    #[test]
    fn test_top_and_residual_partition_the_input() {
        let personas = sample_personas();
        let rec = recommend(Industry::Fitness, Goal::Purchase, &personas, 5);

        assert_eq!(rec.top.len() + rec.residual.len(), personas.len());
        for p in &personas {
            let in_top = rec.top.iter().filter(|r| r.name == p.name).count();
            let in_residual = rec.residual.iter().filter(|r| r.name == p.name).count();
            assert_eq!(in_top + in_residual, 1, "{} duplicated or lost", p.name);
        }
    }

    #[test]
    fn test_keyword_match_dominates_size() {
        let personas = sample_personas();
        let rec = recommend(Industry::Pet, Goal::Awareness, &personas, 1);
        // 有毛孩家庭 is far from the largest persona but carries the pet marker.
        assert_eq!(rec.top[0].name, "有毛孩家庭");
    }

    #[test]
    fn test_ties_resolved_by_size_then_input_order() {
        let personas = sample_personas();
        // Industry::Other contributes no markers, so only the purchase
        // markers and the size tie-breaker rank the demo personas.
        let rec = recommend(Industry::Other, Goal::Purchase, &personas, 3);
        // 理性比價族 is the only demo persona hitting a purchase marker.
        assert_eq!(rec.top[0].name, "理性比價族");
        // The rest tie at keyword 0 and fall back to size.
        assert_eq!(rec.top[1].name, "注重健康上班族"); // 220 000
        assert_eq!(rec.top[2].name, "年輕都會女性"); // 180 000
    }

    #[test]
    fn test_growing_k_only_appends() {
        let personas = sample_personas();
        let small = recommend(Industry::Wellness, Goal::Leads, &personas, 3);
        let large = recommend(Industry::Wellness, Goal::Leads, &personas, 6);

        let small_names: Vec<&str> = small.top.iter().map(|p| p.name.as_str()).collect();
        let large_names: Vec<&str> = large.top.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(&large_names[..3], &small_names[..]);
    }

    #[test]
    fn test_k_beyond_input_returns_everything() {
        let personas = sample_personas();
        let rec = recommend(Industry::Beauty, Goal::Awareness, &personas, 100);
        assert_eq!(rec.top.len(), personas.len());
        assert!(rec.residual.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let rec = recommend(Industry::Beauty, Goal::Awareness, &[], 5);
        assert!(rec.top.is_empty());
        assert!(rec.residual.is_empty());
    }

    #[test]
    fn test_residual_preserves_input_order() {
        let personas = sample_personas();
        let rec = recommend(Industry::Fitness, Goal::Awareness, &personas, 2);

        let input_order: Vec<&str> = personas.iter().map(|p| p.name.as_str()).collect();
        let residual_positions: Vec<usize> = rec
            .residual
            .iter()
            .map(|p| input_order.iter().position(|n| *n == p.name).unwrap())
            .collect();
        assert!(residual_positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let personas = sample_personas();
        let a = recommend(Industry::Fmcg, Goal::Purchase, &personas, 5);
        let b = recommend(Industry::Fmcg, Goal::Purchase, &personas, 5);
        assert_eq!(a, b);
    }
}
