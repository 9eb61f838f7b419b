//! Monitor layout and the virtual-desktop offsets derived from it

use super::error::{ClickerError, ClickerResult};
use crate::desktop::{CaptureRegion, Monitor, MonitorSource};

/// Displays ordered by ascending `x`, plus the offsets the click mapping and
/// the capture region need. Built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorTopology {
    monitors: Vec<Monitor>,
    negative_offset_x: i32,
    negative_offset_y: i32,
    biggest_display: Monitor,
}

impl MonitorTopology {
    /// Query the host for its displays and derive the offsets
    pub fn enumerate(source: &dyn MonitorSource) -> ClickerResult<Self> {
        let monitors = source.enumerate_monitors()?;
        let topology = Self::from_monitors(monitors)?;

        log::info!("Found {} monitors", topology.monitors.len());
        log::info!("Monitors: {:?}", topology.monitors);
        log::info!(
            "Found {} negative displays",
            topology.negative_displays().count()
        );
        log::info!(
            "Calculated offsets: x={} y={} biggest display {}",
            topology.negative_offset_x,
            topology.negative_offset_y,
            topology.biggest_display
        );
        Ok(topology)
    }

    pub fn from_monitors(mut monitors: Vec<Monitor>) -> ClickerResult<Self> {
        // Stable, so monitors sharing an x keep the host's order
        monitors.sort_by_key(|m| m.x);

        let negative_offset_x = monitors.iter().filter(|m| m.x < 0).map(|m| m.x).sum();
        let negative_offset_y = monitors
            .iter()
            .map(|m| m.y)
            .min()
            .ok_or(ClickerError::NoMonitorsFound)?;

        // Largest |x| wins; on ties the later monitor in x order wins
        let mut biggest_display = monitors[0];
        for monitor in &monitors[1..] {
            if monitor.x.unsigned_abs() >= biggest_display.x.unsigned_abs() {
                biggest_display = *monitor;
            }
        }

        Ok(Self {
            monitors,
            negative_offset_x,
            negative_offset_y,
            biggest_display,
        })
    }

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    pub fn is_multi_monitor(&self) -> bool {
        self.monitors.len() > 1
    }

    /// Sum of `x` over monitors left of the primary origin
    pub fn negative_offset_x(&self) -> i32 {
        self.negative_offset_x
    }

    /// `y` of the topmost monitor
    pub fn negative_offset_y(&self) -> i32 {
        self.negative_offset_y
    }

    pub fn biggest_display(&self) -> Monitor {
        self.biggest_display
    }

    pub fn negative_displays(&self) -> impl Iterator<Item = &Monitor> {
        self.monitors.iter().filter(|m| m.x < 0)
    }

    /// Bounding box of every monitor
    pub fn virtual_bounds(&self) -> Monitor {
        let left = self.monitors.iter().map(|m| m.x).min().unwrap_or(0);
        let top = self.monitors.iter().map(|m| m.y).min().unwrap_or(0);
        let right = self.monitors.iter().map(Monitor::right).max().unwrap_or(0);
        let bottom = self.monitors.iter().map(Monitor::bottom).max().unwrap_or(0);
        Monitor::new(left, top, (right - left) as u32, (bottom - top) as u32)
    }

    /// The area grabbed every iteration: the full desktop width, and a height
    /// of `numerator / denominator` times the biggest display's width.
    pub fn capture_region(&self, aspect: (u32, u32)) -> CaptureRegion {
        let bounds = self.virtual_bounds();
        let (numerator, denominator) = aspect;
        let height = u64::from(self.biggest_display.width) * u64::from(numerator)
            / u64::from(denominator.max(1));
        CaptureRegion {
            top: bounds.y,
            left: bounds.x,
            width: bounds.width,
            height: (height as u32).max(1),
        }
    }
}
