//! Scale and rotation tolerant keypoint descriptors.
//!
//! Keypoints are FAST-9 corners found on every level of a small image
//! pyramid. Each keypoint gets an orientation from the intensity centroid of
//! its neighbourhood and a 256-bit binary descriptor whose sampling pattern is
//! rotated by that orientation, so a button seen slightly rotated or scaled
//! still produces close descriptors.

use crate::automation::config::FeatureConfig;
use image::GrayImage;
use image::imageops::{FilterType, resize};
use imageproc::corners::{Corner, corners_fast9};
use imageproc::filter::gaussian_blur_f32;

/// Number of intensity comparisons per descriptor
pub const DESCRIPTOR_BITS: usize = 256;

/// Sampling offsets stay inside this radius before rotation
const PATTERN_RADIUS: i32 = 12;
/// Radius of the patch used for the orientation estimate
const ORIENTATION_RADIUS: i32 = 15;
/// Keypoints closer than this to an edge are dropped. A rotated pattern
/// offset reaches at most `PATTERN_RADIUS * sqrt(2)` pixels.
const BORDER: u32 = 18;

const PATTERN_SEED: u32 = 0x9E37_79B9;

/// 256-bit binary descriptor compared by Hamming distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Descriptor(pub [u64; 4]);

impl Descriptor {
    pub fn hamming(&self, other: &Descriptor) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }

    fn set_bit(&mut self, bit: usize) {
        self.0[bit / 64] |= 1 << (bit % 64);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// Position in full resolution pixel coordinates
    pub x: f32,
    pub y: f32,
    /// Orientation in radians
    pub angle: f32,
    /// Pyramid level the corner was found on
    pub level: usize,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub keypoint: Keypoint,
    pub descriptor: Descriptor,
}

#[derive(Debug, Clone, Copy)]
struct TestPair {
    a: (f32, f32),
    b: (f32, f32),
}

pub struct FeatureExtractor {
    config: FeatureConfig,
    pattern: Vec<TestPair>,
}

impl FeatureExtractor {
    pub fn new(config: FeatureConfig) -> Self {
        Self {
            config,
            pattern: sampling_pattern(),
        }
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Keypoints and descriptors over all pyramid levels of `image`
    pub fn extract(&self, image: &GrayImage) -> Vec<Feature> {
        let mut features = Vec::new();
        let min_side = 2 * BORDER + 1;

        for level in 0..self.config.pyramid_levels.max(1) {
            let scale = self.config.pyramid_scale.powi(level as i32);
            if level == 0 {
                if image.width() < min_side || image.height() < min_side {
                    break;
                }
                self.extract_level(image, level, scale, &mut features);
                continue;
            }

            let width = (image.width() as f32 / scale).round() as u32;
            let height = (image.height() as f32 / scale).round() as u32;
            if width < min_side || height < min_side {
                break;
            }
            let scaled = resize(image, width, height, FilterType::Triangle);
            self.extract_level(&scaled, level, scale, &mut features);
        }

        features
    }

    fn extract_level(&self, image: &GrayImage, level: usize, scale: f32, out: &mut Vec<Feature>) {
        let corners = corners_fast9(image, self.config.fast_threshold);
        let mut corners = suppress_non_maxima(image.width(), image.height(), corners);
        if let Some(cap) = self.config.max_keypoints_per_level {
            corners.sort_by(|a, b| b.score.total_cmp(&a.score));
            corners.truncate(cap);
        }
        if corners.is_empty() {
            return;
        }

        let smoothed = gaussian_blur_f32(image, self.config.blur_sigma);
        for corner in corners {
            let angle = intensity_centroid_angle(image, corner.x, corner.y);
            let descriptor = self.describe(&smoothed, corner.x, corner.y, angle);
            out.push(Feature {
                keypoint: Keypoint {
                    x: corner.x as f32 * scale,
                    y: corner.y as f32 * scale,
                    angle,
                    level,
                    score: corner.score,
                },
                descriptor,
            });
        }
    }

    fn describe(&self, smoothed: &GrayImage, x: u32, y: u32, angle: f32) -> Descriptor {
        let (sin, cos) = angle.sin_cos();
        let sample = |(dx, dy): (f32, f32)| -> u8 {
            let rx = (cos * dx - sin * dy).round() as i32;
            let ry = (sin * dx + cos * dy).round() as i32;
            let px = (x as i32 + rx) as u32;
            let py = (y as i32 + ry) as u32;
            smoothed.get_pixel(px, py).0[0]
        };

        let mut descriptor = Descriptor::default();
        for (bit, pair) in self.pattern.iter().enumerate() {
            if sample(pair.a) < sample(pair.b) {
                descriptor.set_bit(bit);
            }
        }
        descriptor
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(FeatureConfig::default())
    }
}

/// Keep corners that score at least as high as their 8 neighbours and sit
/// far enough from the edge for a full descriptor.
fn suppress_non_maxima(width: u32, height: u32, corners: Vec<Corner>) -> Vec<Corner> {
    if width <= 2 * BORDER || height <= 2 * BORDER {
        return Vec::new();
    }
    let mut scores = vec![0.0f32; (width * height) as usize];
    for corner in &corners {
        scores[(corner.y * width + corner.x) as usize] = corner.score;
    }

    corners
        .into_iter()
        .filter(|c| {
            c.x >= BORDER && c.y >= BORDER && c.x < width - BORDER && c.y < height - BORDER
        })
        .filter(|c| {
            for ny in c.y - 1..=c.y + 1 {
                for nx in c.x - 1..=c.x + 1 {
                    if (nx, ny) != (c.x, c.y) && scores[(ny * width + nx) as usize] > c.score {
                        return false;
                    }
                }
            }
            true
        })
        .collect()
}

fn intensity_centroid_angle(image: &GrayImage, x: u32, y: u32) -> f32 {
    let mut m10 = 0i64;
    let mut m01 = 0i64;
    let r2 = ORIENTATION_RADIUS * ORIENTATION_RADIUS;
    for dy in -ORIENTATION_RADIUS..=ORIENTATION_RADIUS {
        for dx in -ORIENTATION_RADIUS..=ORIENTATION_RADIUS {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let px = (x as i32 + dx) as u32;
            let py = (y as i32 + dy) as u32;
            let intensity = i64::from(image.get_pixel(px, py).0[0]);
            m10 += i64::from(dx) * intensity;
            m01 += i64::from(dy) * intensity;
        }
    }
    (m01 as f32).atan2(m10 as f32)
}

/// Fixed pseudo-random comparison pairs, clustered around the centre.
/// Templates and frames must share the exact same pattern.
fn sampling_pattern() -> Vec<TestPair> {
    let mut state = PATTERN_SEED;
    let mut next_uniform = move || {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state as f32 / u32::MAX as f32) * 2.0 - 1.0
    };
    let mut next_offset = move || {
        let spread: f32 = (0..4).map(|_| next_uniform()).sum();
        ((spread * 4.5).round() as i32).clamp(-PATTERN_RADIUS, PATTERN_RADIUS) as f32
    };

    let mut pattern = Vec::with_capacity(DESCRIPTOR_BITS);
    while pattern.len() < DESCRIPTOR_BITS {
        let a = (next_offset(), next_offset());
        let b = (next_offset(), next_offset());
        if a != b {
            pattern.push(TestPair { a, b });
        }
    }
    pattern
}
