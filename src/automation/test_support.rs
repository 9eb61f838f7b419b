// Fakes for the desktop capabilities and synthetic button images
use crate::automation::match_image::{FeatureExtractor, Template, TemplateId, TemplateMatcher};
use crate::desktop::{
    CaptureRegion, DesktopError, DesktopResult, Monitor, MonitorSource, Point, Pointer, Rect,
    ScreenCapture, Sleeper, WindowManager,
};
use image::{DynamicImage, GrayImage, Luma, RgbaImage};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

pub const BACKGROUND: u8 = 20;
pub const BUTTON_SIZE: u32 = 128;

/// (x, y, width, height, intensity) blocks, all well inside the button
pub const VORTEX_BLOCKS: &[(u32, u32, u32, u32, u8)] = &[
    (30, 30, 26, 18, 230),
    (64, 34, 30, 30, 160),
    (34, 66, 20, 34, 200),
    (70, 74, 26, 22, 250),
];

pub const WEBSITE_BLOCKS: &[(u32, u32, u32, u32, u8)] = &[
    (28, 40, 40, 14, 240),
    (76, 28, 18, 44, 190),
    (40, 70, 14, 14, 255),
    (62, 82, 36, 16, 170),
];

pub fn button_image(blocks: &[(u32, u32, u32, u32, u8)]) -> GrayImage {
    let mut image = GrayImage::from_pixel(BUTTON_SIZE, BUTTON_SIZE, Luma([BACKGROUND]));
    for &(x, y, w, h, value) in blocks {
        for py in y..y + h {
            for px in x..x + w {
                image.put_pixel(px, py, Luma([value]));
            }
        }
    }
    image
}

/// Flat screen with `button` pasted at `at`
pub fn screen_with(button: &GrayImage, at: (u32, u32)) -> RgbaImage {
    let mut screen = GrayImage::from_pixel(400, 300, Luma([BACKGROUND]));
    image::imageops::replace(&mut screen, button, i64::from(at.0), i64::from(at.1));
    DynamicImage::ImageLuma8(screen).to_rgba8()
}

/// 1080p desktop covered in small high-contrast blocks on a 12 px grid, with
/// `button` pasted at `at` inside a cleared margin
pub fn busy_screen(button: &GrayImage, at: (u32, u32)) -> RgbaImage {
    const MARGIN: u32 = 24;
    let (width, height) = (1920, 1080);
    let clear_x = at.0.saturating_sub(MARGIN)..at.0 + button.width() + MARGIN;
    let clear_y = at.1.saturating_sub(MARGIN)..at.1 + button.height() + MARGIN;

    let mut screen = GrayImage::from_pixel(width, height, Luma([BACKGROUND]));
    for y in 0..height {
        for x in 0..width {
            if clear_x.contains(&x) && clear_y.contains(&y) {
                continue;
            }
            if x % 12 < 6 && y % 12 < 5 {
                screen.put_pixel(x, y, Luma([230]));
            }
        }
    }
    image::imageops::replace(&mut screen, button, i64::from(at.0), i64::from(at.1));
    DynamicImage::ImageLuma8(screen).to_rgba8()
}

pub fn empty_screen() -> RgbaImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(400, 300, Luma([BACKGROUND]))).to_rgba8()
}

pub fn synthetic_matcher() -> TemplateMatcher {
    let extractor = FeatureExtractor::default();
    let templates = vec![
        Template::from_image(
            TemplateId::VortexButton,
            &button_image(VORTEX_BLOCKS),
            &extractor,
        ),
        Template::from_image(
            TemplateId::WebsiteButton,
            &button_image(WEBSITE_BLOCKS),
            &extractor,
        ),
    ];
    TemplateMatcher::new(extractor, templates)
}

/// Fresh directory under the system temp dir
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "vortex-autoclick-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub struct FakeMonitors(pub Vec<Monitor>);

impl MonitorSource for FakeMonitors {
    fn enumerate_monitors(&self) -> DesktopResult<Vec<Monitor>> {
        Ok(self.0.clone())
    }
}

/// Hands out queued frames, then fails
#[derive(Default)]
pub struct ScriptedCapture {
    pub frames: VecDeque<RgbaImage>,
    pub regions: Vec<CaptureRegion>,
}

impl ScriptedCapture {
    pub fn new(frames: impl IntoIterator<Item = RgbaImage>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            regions: Vec::new(),
        }
    }
}

impl ScreenCapture for ScriptedCapture {
    fn capture_region(&mut self, region: &CaptureRegion) -> DesktopResult<RgbaImage> {
        self.regions.push(*region);
        self.frames.pop_front().ok_or_else(|| DesktopError::Capture {
            description: "no more frames".to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Query,
    Move(Point),
    Click(Point),
}

pub struct RecordingPointer {
    pub position: Point,
    pub events: Vec<PointerEvent>,
    pub fail_clicks: bool,
}

impl RecordingPointer {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            events: Vec::new(),
            fail_clicks: false,
        }
    }

    pub fn clicks(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PointerEvent::Click(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl Pointer for RecordingPointer {
    fn cursor_position(&mut self) -> DesktopResult<Point> {
        self.events.push(PointerEvent::Query);
        Ok(self.position)
    }

    fn set_cursor_position(&mut self, at: Point) -> DesktopResult<()> {
        self.events.push(PointerEvent::Move(at));
        self.position = at;
        Ok(())
    }

    fn synthesize_click(&mut self) -> DesktopResult<()> {
        if self.fail_clicks {
            return Err(DesktopError::Capture {
                description: "injected click failure".to_string(),
            });
        }
        self.events.push(PointerEvent::Click(self.position));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    pub sleeps: Vec<Duration>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

#[derive(Default)]
pub struct RecordingWindows {
    pub opened: usize,
    pub placed: Vec<(String, Rect)>,
    pub missing_title: Option<&'static str>,
}

impl WindowManager for RecordingWindows {
    fn open_blank_browser_tab(&mut self) -> DesktopResult<()> {
        self.opened += 1;
        Ok(())
    }

    fn place_window(&mut self, title: &str, rect: Rect) -> DesktopResult<()> {
        if self.missing_title == Some(title) {
            return Err(DesktopError::WindowNotFound {
                title: title.to_string(),
            });
        }
        self.placed.push((title.to_string(), rect));
        Ok(())
    }
}
