//! Descriptor matching and median localisation

use super::features::{Feature, FeatureExtractor};
use super::template::{Template, TemplateId};
use crate::automation::config::FeatureConfig;
use crate::automation::error::{ClickerError, ClickerResult};
use crate::desktop::Point;
use image::{GrayImage, RgbaImage};
use std::path::Path;

/// One captured screen image in grayscale, dropped after matching
pub struct Frame {
    gray: GrayImage,
}

impl Frame {
    pub fn from_rgba(image: &RgbaImage) -> Self {
        Self {
            gray: image::imageops::grayscale(image),
        }
    }

    pub fn from_gray(gray: GrayImage) -> Self {
        Self { gray }
    }

    pub fn gray(&self) -> &GrayImage {
        &self.gray
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.gray.dimensions()
    }
}

/// A neighbour found for one template descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorMatch {
    /// Index into the template's features
    pub query_idx: usize,
    /// Index into the frame's features
    pub train_idx: usize,
    pub distance: u32,
}

/// Holds the precomputed template descriptors and locates templates in frames
pub struct TemplateMatcher {
    extractor: FeatureExtractor,
    templates: Vec<Template>,
}

impl TemplateMatcher {
    pub fn new(extractor: FeatureExtractor, templates: Vec<Template>) -> Self {
        Self {
            extractor,
            templates,
        }
    }

    /// Load and describe every template in `asset_dir`.
    ///
    /// All asset files are checked before any is decoded, so a broken install
    /// fails without doing any image work.
    pub fn initialize(asset_dir: &Path, config: FeatureConfig) -> ClickerResult<Self> {
        log::info!("Initializing detector");
        for id in TemplateId::ALL {
            let path = id.asset_path(asset_dir);
            if !path.is_file() {
                return Err(ClickerError::MissingAsset { path });
            }
        }

        let extractor = FeatureExtractor::new(config);
        let templates = TemplateId::ALL
            .iter()
            .map(|id| Template::load(*id, &id.asset_path(asset_dir), &extractor))
            .collect::<ClickerResult<Vec<_>>>()?;
        log::info!("Initialized descriptors");

        Ok(Self::new(extractor, templates))
    }

    pub fn template(&self, id: TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Estimated capture-space location of `id` in `frame`, or `None` when no
    /// template descriptor has a neighbour closer than `distance_threshold`.
    pub fn detect(&self, frame: &Frame, id: TemplateId, distance_threshold: u32) -> Option<Point> {
        let Some(template) = self.template(id) else {
            log::warn!("Template '{}' is not loaded", id);
            return None;
        };

        let frame_features = self.extractor.extract(frame.gray());
        let points = accepted_points(
            template.features(),
            &frame_features,
            distance_threshold,
        );
        let located = median_point(&points);

        log::debug!(
            "'{}': {} frame descriptors, {} accepted matches -> {:?}",
            id,
            frame_features.len(),
            points.len(),
            located
        );
        located
    }
}

/// Frame keypoint positions of every template descriptor whose nearest
/// neighbour is strictly closer than `distance_threshold`
pub fn accepted_points(query: &[Feature], train: &[Feature], distance_threshold: u32) -> Vec<Point> {
    knn_match(query, train, 2)
        .into_iter()
        .filter_map(|neighbours| neighbours.first().copied())
        .filter(|best| best.distance < distance_threshold)
        .map(|best| {
            let keypoint = &train[best.train_idx].keypoint;
            Point::new(keypoint.x as i32, keypoint.y as i32)
        })
        .collect()
}

/// Brute-force k nearest neighbours by Hamming distance.
///
/// Returns one list per query feature, closest first. Lists are shorter than
/// `k` when `train` has fewer than `k` features; equal distances keep the
/// lower train index first.
pub fn knn_match(query: &[Feature], train: &[Feature], k: usize) -> Vec<Vec<DescriptorMatch>> {
    query
        .iter()
        .enumerate()
        .map(|(query_idx, q)| {
            let mut best: Vec<DescriptorMatch> = Vec::with_capacity(k + 1);
            for (train_idx, t) in train.iter().enumerate() {
                let distance = q.descriptor.hamming(&t.descriptor);
                if best.len() == k && best.last().is_some_and(|worst| worst.distance <= distance) {
                    continue;
                }
                let at = best.partition_point(|m| m.distance <= distance);
                best.insert(
                    at,
                    DescriptorMatch {
                        query_idx,
                        train_idx,
                        distance,
                    },
                );
                best.truncate(k);
            }
            best
        })
        .collect()
}

/// Coordinate-wise median; `None` for an empty set.
///
/// Even counts average the two middle values and the result is truncated
/// toward zero.
pub fn median_point(points: &[Point]) -> Option<Point> {
    let mut xs: Vec<i32> = points.iter().map(|p| p.x).collect();
    let mut ys: Vec<i32> = points.iter().map(|p| p.y).collect();
    let x = median(&mut xs)?;
    let y = median(&mut ys)?;
    Some(Point::new(x as i32, y as i32))
}

fn median(values: &mut [i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(f64::from(values[mid]))
    } else {
        Some((f64::from(values[mid - 1]) + f64::from(values[mid])) / 2.0)
    }
}
