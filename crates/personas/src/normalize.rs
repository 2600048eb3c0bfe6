//! Persona normalization: maps a table with arbitrary column names onto
//! canonical [`PersonaRecord`]s.
//!
//! Column discovery is schema-discovery, not schema-enforcement: for each
//! canonical field an ordered candidate list of header names is tried and the
//! first match wins. A field with no matching column falls back to the first
//! column (name) or a fixed default (everything else). Malformed rows never
//! abort the pass; a cell that cannot be coerced simply gets the default.

use serde::{Deserialize, Serialize};

use crate::table::PersonaTable;

/// Canonical audience-segment record produced by normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaRecord {
    pub name: String,
    /// Estimated audience size.
    pub size: u64,
    pub pain_point: String,
    /// Preferred channel slots, free-form token list like "IG/FB".
    pub slots: String,
    pub keywords: String,
    /// Attitude tags, comma separated.
    pub attitudes: String,
}

/// Candidate header names per canonical field, in priority order.
const NAME_CANDIDATES: &[&str] = &["Persona", "名稱", "人物", "族群", "TA", "人設"];
const SIZE_CANDIDATES: &[&str] = &["規模", "人數", "樣本數", "估計規模"];
const PAIN_CANDIDATES: &[&str] = &["痛點", "需求", "阻礙"];
const KEYWORD_CANDIDATES: &[&str] = &["關鍵字", "關鍵詞", "Keywords"];
const SLOT_CANDIDATES: &[&str] = &["推薦版位", "偏好版位", "版位", "渠道偏好"];
const ATTITUDE_CANDIDATES: &[&str] = &["態度", "傾向", "Attitude"];

pub const DEFAULT_SIZE: u64 = 100_000;
const DEFAULT_NAME: &str = "Persona";
const DEFAULT_PAIN: &str = "價格敏感/怕踩雷";
const DEFAULT_SLOTS: &str = "FB/IG/Google";
const DEFAULT_ATTITUDES: &str = "價格敏感, 品牌忠誠中等, 追求體驗";

/// Resolved column indices for one table.
#[derive(Debug, Clone, Default)]
struct ColumnMap {
    name: Option<usize>,
    size: Option<usize>,
    pain: Option<usize>,
    keywords: Option<usize>,
    slots: Option<usize>,
    attitudes: Option<usize>,
}

impl ColumnMap {
    fn discover(table: &PersonaTable) -> Self {
        Self {
            // Name falls back to the first column when nothing matches.
            name: table
                .find_column(NAME_CANDIDATES)
                .or(if table.headers().is_empty() { None } else { Some(0) }),
            size: table.find_column(SIZE_CANDIDATES),
            pain: table.find_column(PAIN_CANDIDATES),
            keywords: table.find_column(KEYWORD_CANDIDATES),
            slots: table.find_column(SLOT_CANDIDATES),
            attitudes: table.find_column(ATTITUDE_CANDIDATES),
        }
    }
}

/// Converts every row of the table into a [`PersonaRecord`]. Pure and
/// deterministic: the same table always yields the same records.
pub fn normalize(table: &PersonaTable) -> Vec<PersonaRecord> {
    let columns = ColumnMap::discover(table);

    table
        .rows()
        .iter()
        .map(|row| PersonaRecord {
            name: text_or(table, row, columns.name, DEFAULT_NAME),
            size: size_or_default(table, row, columns.size),
            pain_point: text_or(table, row, columns.pain, DEFAULT_PAIN),
            slots: text_or(table, row, columns.slots, DEFAULT_SLOTS),
            keywords: text_or(table, row, columns.keywords, ""),
            attitudes: text_or(table, row, columns.attitudes, DEFAULT_ATTITUDES),
        })
        .collect()
}

fn text_or(table: &PersonaTable, row: &[String], column: Option<usize>, default: &str) -> String {
    column
        .and_then(|idx| table.cell(row, idx))
        .unwrap_or(default)
        .to_string()
}

fn size_or_default(table: &PersonaTable, row: &[String], column: Option<usize>) -> u64 {
    let Some(cell) = column.and_then(|idx| table.cell(row, idx)) else {
        return DEFAULT_SIZE;
    };
    let cleaned: String = cell.chars().filter(|c| *c != ',').collect();
    if let Ok(size) = cleaned.parse::<u64>() {
        return size;
    }
    // Spreadsheet exports often carry integer sizes as "180000.0".
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value as u64,
        _ => DEFAULT_SIZE,
    }
}

/// The bundled demo persona set, used when no source table is available.
pub fn sample_personas() -> Vec<PersonaRecord> {
    let rows: &[(&str, u64, &str, &str, &str)] = &[
        ("年輕都會女性", 180_000, "時間不夠", "IG/FB", "追求體驗"),
        ("注重健康上班族", 220_000, "健康管理", "Google/FB", "理性務實"),
        ("有毛孩家庭", 130_000, "用品選擇多", "FB/IG", "家庭導向"),
        ("健身重訓者", 90_000, "訓練效率", "IG/YouTube", "自我挑戰"),
        ("理性比價族", 160_000, "價格敏感", "Google/FB", "理性比價"),
        ("旅遊成癮者", 80_000, "預算有限", "IG/FB", "享受生活"),
        ("環保極簡族", 70_000, "綠色消費", "Google/YouTube", "綠色價值"),
        ("科技嘗鮮族", 60_000, "新舊轉換成本", "FB/YouTube", "科技感"),
        ("實用務實爸媽", 120_000, "親子時間", "FB/IG", "務實效率"),
        ("小資通勤族", 150_000, "通勤疲累", "IG/FB", "省時省力"),
    ];
    rows.iter()
        .map(|(name, size, pain, slots, attitudes)| PersonaRecord {
            name: name.to_string(),
            size: *size,
            pain_point: pain.to_string(),
            slots: slots.to_string(),
            keywords: String::new(),
            attitudes: attitudes.to_string(),
        })
        .collect()
}
