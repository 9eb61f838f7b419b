use thiserror::Error;

/// A specialized `Result` type for desktop capability operations.
pub type DesktopResult<T> = Result<T, DesktopError>;

/// The error type for everything that touches the host display or input devices.
#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("Failed to enumerate monitors: {source}")]
    MonitorEnumeration { source: xcap::XCapError },

    #[error("Screen capture of monitor at ({x}, {y}) failed: {source}")]
    MonitorCapture {
        x: i32,
        y: i32,
        source: xcap::XCapError,
    },

    #[error("Screen capture failed: {description}")]
    Capture { description: String },

    #[error("Failed to connect to the input backend: {source}")]
    InputConnection { source: enigo::NewConError },

    #[error("Input injection '{action}' failed: {source}")]
    InputFailed {
        action: &'static str,
        source: enigo::InputError,
    },

    #[error("Window '{title}' not found")]
    WindowNotFound { title: String },

    #[error("Window operation '{operation}' failed on '{title}': {description}")]
    WindowOperation {
        operation: &'static str,
        title: String,
        description: String,
    },

    #[error("Failed to launch browser: {source}")]
    BrowserLaunch { source: std::io::Error },

    #[error("Window arrangement is not supported on this platform")]
    Unsupported,
}

impl DesktopError {
    /// Check if this error came from the screen capture path
    pub fn is_capture_failure(&self) -> bool {
        matches!(
            self,
            DesktopError::MonitorCapture { .. } | DesktopError::Capture { .. }
        )
    }

    /// Check if this error came from synthetic input
    pub fn is_input_failure(&self) -> bool {
        matches!(
            self,
            DesktopError::InputConnection { .. } | DesktopError::InputFailed { .. }
        )
    }
}
