pub mod args;
pub mod automation;
pub mod desktop;
pub mod logging;

pub use automation::{ClickerError, ClickerResult, ScanContext, ScanController};
