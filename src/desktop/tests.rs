//! Tests for region composition, geometry helpers and error classification

use super::capture::{CapturedTile, compose_region};
use super::*;
use image::{Rgba, RgbaImage};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn tile(monitor: Monitor, colour: Rgba<u8>) -> CapturedTile {
    CapturedTile {
        monitor,
        image: RgbaImage::from_pixel(monitor.width, monitor.height, colour),
    }
}

fn region(left: i32, top: i32, width: u32, height: u32) -> CaptureRegion {
    CaptureRegion {
        top,
        left,
        width,
        height,
    }
}

// ============================================================
// GEOMETRY
// ============================================================

#[test]
fn test_monitor_edges() {
    let monitor = Monitor::new(-1920, -200, 1920, 1080);
    assert_eq!(monitor.right(), 0);
    assert_eq!(monitor.bottom(), 880);
    assert_eq!(monitor.to_string(), "[-1920,-200 1920x1080]");
}

#[test]
fn test_capture_region_edges() {
    let r = region(-100, 50, 300, 20);
    assert_eq!(r.right(), 200);
    assert_eq!(r.bottom(), 70);
    assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
}

// ============================================================
// REGION COMPOSITION
// ============================================================

#[test]
fn test_compose_two_monitors_side_by_side() {
    let left = Monitor::new(-40, 0, 40, 30);
    let right = Monitor::new(0, 0, 50, 30);
    let r = region(-40, 0, 90, 30);

    let image = compose_region(&r, &[tile(left, RED), tile(right, BLUE)]).unwrap();
    assert_eq!(image.dimensions(), (90, 30));
    assert_eq!(*image.get_pixel(0, 0), RED);
    assert_eq!(*image.get_pixel(39, 29), RED);
    assert_eq!(*image.get_pixel(40, 0), BLUE);
    assert_eq!(*image.get_pixel(89, 29), BLUE);
}

#[test]
fn test_compose_leaves_uncovered_area_black() {
    // Second monitor sits lower, so the top right corner has no pixels
    let primary = Monitor::new(0, 0, 20, 20);
    let lower = Monitor::new(20, 10, 20, 20);
    let r = region(0, 0, 40, 30);

    let image = compose_region(&r, &[tile(primary, RED), tile(lower, BLUE)]).unwrap();
    assert_eq!(*image.get_pixel(25, 5), BLACK);
    assert_eq!(*image.get_pixel(5, 25), BLACK);
    assert_eq!(*image.get_pixel(25, 15), BLUE);
    assert_eq!(*image.get_pixel(5, 5), RED);
}

#[test]
fn test_compose_crops_to_region() {
    let monitor = Monitor::new(0, 0, 100, 100);
    let mut pixels = RgbaImage::from_pixel(100, 100, RED);
    pixels.put_pixel(60, 70, BLUE);
    let r = region(50, 60, 20, 20);

    let image = compose_region(
        &r,
        &[CapturedTile {
            monitor,
            image: pixels,
        }],
    )
    .unwrap();
    assert_eq!(image.dimensions(), (20, 20));
    assert_eq!(*image.get_pixel(10, 10), BLUE);
    assert_eq!(*image.get_pixel(0, 0), RED);
}

#[test]
fn test_compose_clips_scaled_tile() {
    // Logical size 40x40 but only 20x20 physical pixels were delivered
    let monitor = Monitor::new(0, 0, 40, 40);
    let small = CapturedTile {
        monitor,
        image: RgbaImage::from_pixel(20, 20, RED),
    };

    let image = compose_region(&region(0, 0, 40, 40), &[small]).unwrap();
    assert_eq!(*image.get_pixel(19, 19), RED);
    assert_eq!(*image.get_pixel(30, 30), BLACK);
}

#[test]
fn test_compose_skips_monitors_outside_region() {
    let far = Monitor::new(1000, 1000, 10, 10);
    let image = compose_region(&region(0, 0, 10, 10), &[tile(far, RED)]).unwrap();
    assert!(image.pixels().all(|p| *p == BLACK));
}

#[test]
fn test_compose_empty_region_fails() {
    let result = compose_region(&region(0, 0, 0, 10), &[]);
    let err = result.unwrap_err();
    assert!(err.is_capture_failure());
    assert!(!err.is_input_failure());
}

// ============================================================
// ERRORS
// ============================================================

#[test]
fn test_error_classification() {
    let capture = DesktopError::Capture {
        description: "boom".to_string(),
    };
    assert!(capture.is_capture_failure());

    let missing = DesktopError::WindowNotFound {
        title: "Vortex".to_string(),
    };
    assert!(!missing.is_capture_failure());
    assert!(!missing.is_input_failure());
    assert_eq!(missing.to_string(), "Window 'Vortex' not found");

    assert!(!DesktopError::Unsupported.is_capture_failure());
}

#[test]
fn test_thread_sleeper_waits() {
    let start = std::time::Instant::now();
    ThreadSleeper.sleep(std::time::Duration::from_millis(5));
    assert!(start.elapsed() >= std::time::Duration::from_millis(5));
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_window_management_unsupported_off_windows() {
    let mut manager = NativeWindowManager;
    assert!(matches!(
        manager.open_blank_browser_tab(),
        Err(DesktopError::Unsupported)
    ));
    assert!(matches!(
        manager.place_window("Vortex", Rect::new(0, 0, 10, 10)),
        Err(DesktopError::Unsupported)
    ));
}
