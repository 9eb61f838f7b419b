//! Monitor enumeration and virtual-desktop region capture backed by xcap

use super::error::{DesktopError, DesktopResult};
use super::types::{CaptureRegion, Monitor, MonitorSource, ScreenCapture};
use image::{Rgba, RgbaImage};
use xcap::XCapError;

/// Pixel value for parts of a region no monitor covers
const UNCOVERED_PIXEL: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Host desktop as seen through xcap. The monitor handles are fetched once;
/// every capture grabs the monitors that intersect the requested region and
/// stitches them together.
pub struct XcapDesktop {
    monitors: Vec<xcap::Monitor>,
}

impl XcapDesktop {
    pub fn new() -> DesktopResult<Self> {
        let monitors =
            xcap::Monitor::all().map_err(|source| DesktopError::MonitorEnumeration { source })?;
        log::debug!("xcap reported {} monitors", monitors.len());
        Ok(Self { monitors })
    }

    fn geometry(monitor: &xcap::Monitor) -> Result<Monitor, XCapError> {
        Ok(Monitor::new(
            monitor.x()?,
            monitor.y()?,
            monitor.width()?,
            monitor.height()?,
        ))
    }
}

impl MonitorSource for XcapDesktop {
    fn enumerate_monitors(&self) -> DesktopResult<Vec<Monitor>> {
        self.monitors
            .iter()
            .map(|monitor| {
                Self::geometry(monitor).map_err(|source| DesktopError::MonitorEnumeration { source })
            })
            .collect()
    }
}

impl ScreenCapture for XcapDesktop {
    fn capture_region(&mut self, region: &CaptureRegion) -> DesktopResult<RgbaImage> {
        let mut tiles = Vec::with_capacity(self.monitors.len());
        for monitor in &self.monitors {
            let geometry = Self::geometry(monitor)
                .map_err(|source| DesktopError::MonitorEnumeration { source })?;
            if Overlap::between(region, &geometry).is_none() {
                continue;
            }
            let image = monitor
                .capture_image()
                .map_err(|source| DesktopError::MonitorCapture {
                    x: geometry.x,
                    y: geometry.y,
                    source,
                })?;
            tiles.push(CapturedTile {
                monitor: geometry,
                image,
            });
        }
        compose_region(region, &tiles)
    }
}

/// A single monitor's pixels together with where that monitor sits
pub struct CapturedTile {
    pub monitor: Monitor,
    pub image: RgbaImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Overlap {
    src_x: u32,
    src_y: u32,
    dst_x: u32,
    dst_y: u32,
    width: u32,
    height: u32,
}

impl Overlap {
    fn between(region: &CaptureRegion, monitor: &Monitor) -> Option<Self> {
        let left = region.left.max(monitor.x);
        let top = region.top.max(monitor.y);
        let right = region.right().min(monitor.right());
        let bottom = region.bottom().min(monitor.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self {
            src_x: (left - monitor.x) as u32,
            src_y: (top - monitor.y) as u32,
            dst_x: (left - region.left) as u32,
            dst_y: (top - region.top) as u32,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }
}

/// Stitch monitor captures into one image covering `region`.
///
/// Areas outside every monitor stay black. Tiles whose pixel size is smaller
/// than their logical geometry (scaled displays) are clipped to the pixels
/// they actually have.
pub fn compose_region(region: &CaptureRegion, tiles: &[CapturedTile]) -> DesktopResult<RgbaImage> {
    if region.width == 0 || region.height == 0 {
        return Err(DesktopError::Capture {
            description: format!("empty capture region ({region})"),
        });
    }

    let mut canvas = RgbaImage::from_pixel(region.width, region.height, UNCOVERED_PIXEL);
    for tile in tiles {
        let Some(overlap) = Overlap::between(region, &tile.monitor) else {
            continue;
        };
        let width = overlap
            .width
            .min(tile.image.width().saturating_sub(overlap.src_x));
        let height = overlap
            .height
            .min(tile.image.height().saturating_sub(overlap.src_y));
        if width == 0 || height == 0 {
            continue;
        }
        let view =
            image::imageops::crop_imm(&tile.image, overlap.src_x, overlap.src_y, width, height)
                .to_image();
        image::imageops::replace(
            &mut canvas,
            &view,
            i64::from(overlap.dst_x),
            i64::from(overlap.dst_y),
        );
    }
    Ok(canvas)
}
