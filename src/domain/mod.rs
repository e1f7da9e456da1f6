//! Grading ROI math and the state the calculator page works from.

pub mod app_state;
pub mod entities;
pub mod report;
pub mod roi;

pub use app_state::{AppState, Settings};
#[allow(unused_imports)]
pub use entities::{Calculation, PriceQuote, Recommendation, RoiResult};
#[allow(unused_imports)]
pub use report::{breakdown_rows, quote_metrics, BreakdownRow, Metric};
#[allow(unused_imports)]
pub use roi::{calculate, compute_roi, compute_roi_for_quote};
