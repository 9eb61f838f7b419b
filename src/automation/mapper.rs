//! Capture-space to click-space coordinate conversion

use super::topology::MonitorTopology;
use crate::desktop::Point;

/// Translates detections into the absolute coordinates the pointer expects.
///
/// With several monitors the accumulated negative offsets are added back;
/// a single monitor maps every point onto itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    offset_x: i32,
    offset_y: i32,
    multi_monitor: bool,
}

impl CoordinateMapper {
    pub fn new(topology: &MonitorTopology) -> Self {
        Self {
            offset_x: topology.negative_offset_x(),
            offset_y: topology.negative_offset_y(),
            multi_monitor: topology.is_multi_monitor(),
        }
    }

    pub fn map(&self, point: Point) -> Point {
        if self.multi_monitor {
            Point::new(self.offset_x + point.x, self.offset_y + point.y)
        } else {
            point
        }
    }
}

/// One-shot form of [`CoordinateMapper::map`]
pub fn map_point(point: Point, topology: &MonitorTopology) -> Point {
    CoordinateMapper::new(topology).map(point)
}
