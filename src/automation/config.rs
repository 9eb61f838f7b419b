//! Configuration for the scan loop and the feature matcher

use std::path::PathBuf;
use std::time::Duration;

/// Directory holding the two button templates, relative to the working directory
pub const ASSET_DIR: &str = "assets";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Hamming distance a template descriptor's nearest neighbour must stay below
    pub distance_threshold: u32,
    /// Wait after every iteration
    pub poll_interval: Duration,
    /// Extra wait after the website button was clicked
    pub cooldown: Duration,
    /// Capture height as a fraction of the biggest display's width
    pub capture_aspect: (u32, u32),
    /// Where the template images live
    pub asset_dir: PathBuf,
    /// Delay between opening the browser and moving its window
    pub window_settle_delay: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 40,
            poll_interval: Duration::from_secs(2),
            cooldown: Duration::from_secs(5),
            capture_aspect: (9, 16),
            asset_dir: PathBuf::from(ASSET_DIR),
            window_settle_delay: Duration::from_millis(400),
        }
    }
}

/// Tuning for keypoint extraction
#[derive(Debug, Clone)]
pub struct FeatureConfig {
    /// FAST-9 intensity threshold
    pub fast_threshold: u8,
    /// Number of pyramid levels, including the full resolution one
    pub pyramid_levels: usize,
    /// Downscale factor between consecutive levels
    pub pyramid_scale: f32,
    /// Strongest corners kept per level. `None` keeps every corner, so a small
    /// button on a busy desktop is never crowded out by background clutter.
    pub max_keypoints_per_level: Option<usize>,
    /// Gaussian sigma applied before sampling descriptor tests
    pub blur_sigma: f32,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            fast_threshold: 20,
            pyramid_levels: 4,
            pyramid_scale: 1.2,
            max_keypoints_per_level: None,
            blur_sigma: 2.0,
        }
    }
}
