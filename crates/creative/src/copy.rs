//! Copy suggestions assembled from fixed hook, pain-point, and CTA pools.

use rand::Rng;
use serde::{Deserialize, Serialize};

use planner_core::AudienceSelection;

const HOOKS: &[&str] = &[
    "限時優惠",
    "熱銷口碑",
    "專屬會員禮",
    "新品搶先",
    "買一送一",
    "醫師推薦",
    "運動必備",
    "萌寵必囤",
];

const PAIN_POINTS: &[&str] = &[
    "時間不夠",
    "不知道選哪款",
    "價格敏感",
    "怕踩雷",
    "需要快速見效",
];

const CTAS: &[&str] = &[
    "立即了解",
    "加入購物車",
    "領取優惠",
    "免費試用",
    "馬上逛逛",
];

/// Suggestions per persona.
pub const SUGGESTIONS_PER_PERSONA: usize = 5;

/// A single labeled copy line, e.g. `文案1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyLine {
    pub label: String,
    pub text: String,
}

/// All suggestions for one selected persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyBlock {
    pub audience: String,
    pub lines: Vec<CopyLine>,
}

fn pick<'a>(pool: &'a [&'a str], rng: &mut impl Rng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Generates five copy suggestions for every persona in the selection,
/// drawing a hook, a pain point, and a CTA from the fixed pools per line.
///
/// An empty selection yields an empty list, never an error: the caller may
/// legitimately arrive here with no audience locked.
pub fn copy_suggestions(audience: &AudienceSelection, rng: &mut impl Rng) -> Vec<CopyBlock> {
    let blocks: Vec<CopyBlock> = audience
        .names()
        .map(|name| CopyBlock {
            audience: name.to_string(),
            lines: (1..=SUGGESTIONS_PER_PERSONA)
                .map(|i| CopyLine {
                    label: format!("文案{}", i),
                    text: format!(
                        "{}！{}的你，{}？{}。",
                        pick(HOOKS, rng),
                        name,
                        pick(PAIN_POINTS, rng),
                        pick(CTAS, rng)
                    ),
                })
                .collect(),
        })
        .collect();
    tracing::debug!(personas = blocks.len(), "copy suggestions generated");
    blocks
}
