// Core desktop types and the capability traits the clicker core drives
use super::error::DesktopResult;
use image::RgbaImage;
use std::fmt;
use std::time::Duration;

/// A pixel position, either in capture space or in virtual-desktop space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One display in virtual-desktop coordinates. `x`/`y` are negative for
/// monitors placed left of or above the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Monitor {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Monitor {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{} {}x{}]",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Window placement rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Rectangular area of the virtual desktop to grab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub top: i32,
    pub left: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    pub fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }
}

impl fmt::Display for CaptureRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top={} left={} width={} height={}",
            self.top, self.left, self.width, self.height
        )
    }
}

/// Physical/virtual display geometry
pub trait MonitorSource {
    fn enumerate_monitors(&self) -> DesktopResult<Vec<Monitor>>;
}

/// Grabs a rectangular area of the virtual desktop
pub trait ScreenCapture {
    fn capture_region(&mut self, region: &CaptureRegion) -> DesktopResult<RgbaImage>;
}

/// Cursor save/move/click primitives
pub trait Pointer {
    fn cursor_position(&mut self) -> DesktopResult<Point>;
    fn set_cursor_position(&mut self, at: Point) -> DesktopResult<()>;
    /// Left button down followed by left button up wherever the cursor is
    fn synthesize_click(&mut self) -> DesktopResult<()>;
}

/// Blocking delay on the calling thread
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
