// Automation module
// Finds the Vortex and website download buttons on screen and clicks them,
// alternating between the two for as long as the process runs.

pub mod arrange;
pub mod config;
pub mod cursor;
pub mod error;
pub mod fsm;
pub mod mapper;
pub mod match_image;
pub mod topology;
pub mod types;


#[cfg(test)]
pub(crate) mod test_support;

// Re-export the main types and functions for easy access
pub use arrange::{WindowLayout, arrange_windows, plan_window_layout};
pub use config::{FeatureConfig, ScanConfig};
pub use cursor::{CursorGuard, click_preserving_cursor};
pub use error::{ClickerError, ClickerResult};
pub use fsm::{ScanContext, ScanController};
pub use mapper::{CoordinateMapper, map_point};
pub use match_image::{Frame, TemplateId, TemplateMatcher};
pub use topology::MonitorTopology;
pub use types::{ScanState, StepOutcome};
