// Application window discovery and placement
use super::error::DesktopResult;
use super::types::Rect;

/// Show-and-move primitives for top level windows plus the browser launch
/// used by the `--chrome` startup step
pub trait WindowManager {
    fn open_blank_browser_tab(&mut self) -> DesktopResult<()>;
    /// Restore the window titled `title` and move it to `rect`
    fn place_window(&mut self, title: &str, rect: Rect) -> DesktopResult<()>;
}

#[derive(Debug, Default)]
pub struct NativeWindowManager;

#[cfg(target_os = "windows")]
mod imp {
    use super::{NativeWindowManager, WindowManager};
    use crate::desktop::error::{DesktopError, DesktopResult};
    use crate::desktop::types::Rect;
    use std::process::Command;
    use windows::Win32::Foundation::TRUE;
    use windows::Win32::UI::WindowsAndMessaging::{
        FindWindowW, MoveWindow, SW_SHOWNORMAL, ShowWindow,
    };
    use windows::core::{HSTRING, PCWSTR};

    impl WindowManager for NativeWindowManager {
        fn open_blank_browser_tab(&mut self) -> DesktopResult<()> {
            Command::new("cmd")
                .args(["/C", "start", "chrome", "/new-tab", "about:blank"])
                .spawn()
                .map_err(|source| DesktopError::BrowserLaunch { source })?;
            Ok(())
        }

        fn place_window(&mut self, title: &str, rect: Rect) -> DesktopResult<()> {
            let wide_title = HSTRING::from(title);
            let hwnd = unsafe { FindWindowW(PCWSTR::null(), &wide_title) }.map_err(|_| {
                DesktopError::WindowNotFound {
                    title: title.to_string(),
                }
            })?;
            if hwnd.is_invalid() {
                return Err(DesktopError::WindowNotFound {
                    title: title.to_string(),
                });
            }

            // Return value is the previous visibility state, not an error
            let _ = unsafe { ShowWindow(hwnd, SW_SHOWNORMAL) };

            unsafe { MoveWindow(hwnd, rect.x, rect.y, rect.width, rect.height, TRUE) }.map_err(
                |e| DesktopError::WindowOperation {
                    operation: "move",
                    title: title.to_string(),
                    description: e.to_string(),
                },
            )
        }
    }
}

#[cfg(not(target_os = "windows"))]
mod imp {
    use super::{NativeWindowManager, WindowManager};
    use crate::desktop::error::{DesktopError, DesktopResult};
    use crate::desktop::types::Rect;

    impl WindowManager for NativeWindowManager {
        fn open_blank_browser_tab(&mut self) -> DesktopResult<()> {
            Err(DesktopError::Unsupported)
        }

        fn place_window(&mut self, _title: &str, _rect: Rect) -> DesktopResult<()> {
            Err(DesktopError::Unsupported)
        }
    }
}
