//! Display-sample generators for the performance and insight stages, and the
//! performance CSV export.
//!
//! Everything here is illustrative data for the reporting views. The samples
//! are deterministic per seed and never feed back into scoring or estimation.

pub mod export;
pub mod samples;

pub use export::performance_csv;
pub use samples::{daily_series, kpi_sample, matrix_sample, DailyPerf, KpiSample, MatrixRow};
