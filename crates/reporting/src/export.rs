//! Performance-table CSV export.

use planner_core::{PlannerError, PlannerResult};

use crate::samples::MatrixRow;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Serializes the performance matrix as the weekly-report CSV
/// (版位/平台, 文案, 圖片版型, CTR(%), CPA), UTF-8 with a BOM.
pub fn performance_csv(rows: &[MatrixRow]) -> PlannerResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record(["版位/平台", "文案", "圖片版型", "CTR(%)", "CPA"])?;
    for row in rows {
        writer.write_record([
            row.channel.as_str(),
            &row.copy,
            &row.frame,
            &format!("{:.2}", row.ctr),
            &format!("{:.2}", row.cpa),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| PlannerError::Io(e.into_error()))
}
