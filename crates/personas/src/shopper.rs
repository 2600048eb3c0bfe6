//! Shopper-list analysis: a deterministic first-pass profile of an uploaded
//! customer list, carried forward into the market-insight stage.

use serde::{Deserialize, Serialize};

use crate::table::PersonaTable;

const REGION_CANDIDATES: &[&str] = &["region", "地區"];

/// Summary of an uploaded shopper list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopperInsight {
    pub rows: usize,
    /// Most frequent value of the region column, if the list has one.
    /// Ties resolve to the value seen first.
    pub top_region: Option<String>,
    pub note: String,
}

/// Profiles a parsed shopper list. Pure; parse failures are handled by the
/// upload boundary before this is reached.
pub fn analyze_shopper_list(table: &PersonaTable) -> ShopperInsight {
    let top_region = table.find_column(REGION_CANDIDATES).and_then(|idx| {
        // Counted in first-appearance order so ties are deterministic.
        let mut counts: Vec<(String, usize)> = Vec::new();
        for row in table.rows() {
            let Some(value) = table.cell(row, idx) else {
                continue;
            };
            match counts.iter_mut().find(|(v, _)| v == value) {
                Some((_, n)) => *n += 1,
                None => counts.push((value.to_string(), 1)),
            }
        }
        let mut best: Option<(String, usize)> = None;
        for (value, n) in counts {
            let beaten = best.as_ref().map(|(_, m)| n > *m).unwrap_or(true);
            if beaten {
                best = Some((value, n));
            }
        }
        best.map(|(value, _)| value)
    });

    let note = match &top_region {
        Some(region) => format!(
            "名單共 {} 筆，主要地區：{}，已導入提案分析。",
            table.row_count(),
            region
        ),
        None => format!("名單共 {} 筆，已導入提案分析。", table.row_count()),
    };

    ShopperInsight {
        rows: table.row_count(),
        top_region,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(csv: &str) -> PersonaTable {
        PersonaTable::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_counts_rows_and_top_region() {
        let t = table("name,region\nA,台北\nB,台中\nC,台北\n");
        let insight = analyze_shopper_list(&t);
        assert_eq!(insight.rows, 3);
        assert_eq!(insight.top_region.as_deref(), Some("台北"));
        assert!(insight.note.contains("3 筆"));
        assert!(insight.note.contains("台北"));
    }

    #[test]
    fn test_chinese_region_header() {
        let t = table("姓名,地區\nA,高雄\nB,高雄\n");
        let insight = analyze_shopper_list(&t);
        assert_eq!(insight.top_region.as_deref(), Some("高雄"));
    }

    #[test]
    fn test_no_region_column() {
        let t = table("name,email\nA,a@x.tw\n");
        let insight = analyze_shopper_list(&t);
        assert_eq!(insight.rows, 1);
        assert_eq!(insight.top_region, None);
    }

    #[test]
    fn test_region_tie_resolves_to_first_seen() {
        let t = table("name,region\nA,台中\nB,台北\nC,台北\nD,台中\n");
        let insight = analyze_shopper_list(&t);
        assert_eq!(insight.top_region.as_deref(), Some("台中"));
    }
}
