//! Browser and Vortex window placement for `--chrome`

use super::error::{ClickerError, ClickerResult};
use super::topology::MonitorTopology;
use crate::desktop::{Rect, Sleeper, WindowManager};
use std::time::Duration;

/// Title of a freshly opened blank Chrome tab
pub const BROWSER_WINDOW_TITLE: &str = "about:blank - Google Chrome";
pub const VORTEX_WINDOW_TITLE: &str = "Vortex";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub browser: Rect,
    pub vortex: Rect,
}

/// Browser on the leftmost monitor and Vortex on the next one; a single
/// monitor is split into a top-left and a bottom-right quadrant.
pub fn plan_window_layout(topology: &MonitorTopology) -> WindowLayout {
    let monitors = topology.monitors();
    if monitors.len() > 1 {
        let rect = |i: usize| {
            let m = monitors[i];
            Rect::new(m.x, m.y, m.width as i32, m.height as i32)
        };
        return WindowLayout {
            browser: rect(0),
            vortex: rect(1),
        };
    }

    let m = monitors[0];
    let half_w = m.width as i32 / 2;
    let half_h = m.height as i32 / 2;
    WindowLayout {
        browser: Rect::new(m.x, m.y, half_w, half_h),
        vortex: Rect::new(
            m.x + half_w,
            m.y + half_h,
            m.width as i32 - half_w,
            m.height as i32 - half_h,
        ),
    }
}

/// Open a blank browser tab, give it `settle` to appear, then place both windows
pub fn arrange_windows<W, S>(
    manager: &mut W,
    sleeper: &mut S,
    topology: &MonitorTopology,
    settle: Duration,
) -> ClickerResult<WindowLayout>
where
    W: WindowManager + ?Sized,
    S: Sleeper + ?Sized,
{
    let wrap = |source| ClickerError::WindowArrangement { source };

    manager.open_blank_browser_tab().map_err(wrap)?;
    log::info!("Opened chrome");
    sleeper.sleep(settle);

    let layout = plan_window_layout(topology);
    manager
        .place_window(BROWSER_WINDOW_TITLE, layout.browser)
        .map_err(wrap)?;
    manager
        .place_window(VORTEX_WINDOW_TITLE, layout.vortex)
        .map_err(wrap)?;
    log::info!(
        "Moved chrome to {:?} and vortex to {:?}",
        layout.browser,
        layout.vortex
    );
    Ok(layout)
}
