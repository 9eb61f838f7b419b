// Desktop module - capability layer between the clicker core and the host OS.
// Monitor geometry and screen capture come from xcap, cursor and click injection
// from enigo, window placement from Win32 where available.

pub mod capture;
pub mod error;
pub mod input;
pub mod types;
pub mod window;

#[cfg(test)]
mod tests;

// Re-export the main types and functions for easy access
pub use capture::XcapDesktop;
pub use error::{DesktopError, DesktopResult};
pub use input::EnigoPointer;
pub use types::{
    CaptureRegion, Monitor, MonitorSource, Point, Pointer, Rect, ScreenCapture, Sleeper,
    ThreadSleeper,
};
pub use window::{NativeWindowManager, WindowManager};
