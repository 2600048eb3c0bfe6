//! Copy-table CSV export.

use planner_core::{PlannerError, PlannerResult};

use crate::copy::CopyBlock;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Serializes the copy suggestions as a `TA, 文案名稱, 內容` CSV, UTF-8 with
/// a BOM so spreadsheet tools pick the encoding up.
pub fn copy_csv(blocks: &[CopyBlock]) -> PlannerResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record(["TA", "文案名稱", "內容"])?;
    for block in blocks {
        for line in &block.lines {
            writer.write_record([block.audience.as_str(), &line.label, &line.text])?;
        }
    }
    writer
        .into_inner()
        .map_err(|e| PlannerError::Io(e.into_error()))
}
