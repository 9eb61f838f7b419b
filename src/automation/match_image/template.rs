//! Button templates and their precomputed descriptors

use super::features::{Feature, FeatureExtractor};
use crate::automation::error::{ClickerError, ClickerResult};
use image::GrayImage;
use std::fmt;
use std::path::{Path, PathBuf};

/// The two buttons the clicker knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    VortexButton,
    WebsiteButton,
}

impl TemplateId {
    pub const ALL: [TemplateId; 2] = [TemplateId::VortexButton, TemplateId::WebsiteButton];

    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::VortexButton => "vortex-button",
            TemplateId::WebsiteButton => "website-button",
        }
    }

    /// File name inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateId::VortexButton => "VortexDownloadButton.png",
            TemplateId::WebsiteButton => "WebsiteDownloadButton.png",
        }
    }

    pub fn asset_path(&self, asset_dir: &Path) -> PathBuf {
        asset_dir.join(self.file_name())
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Template {
    pub id: TemplateId,
    pub width: u32,
    pub height: u32,
    features: Vec<Feature>,
}

impl Template {
    pub fn from_image(id: TemplateId, image: &GrayImage, extractor: &FeatureExtractor) -> Self {
        let features = extractor.extract(image);
        if features.is_empty() {
            log::warn!(
                "⚠️ Template '{}' ({}x{}) has no keypoints and will never be detected",
                id,
                image.width(),
                image.height()
            );
        }
        Self {
            id,
            width: image.width(),
            height: image.height(),
            features,
        }
    }

    /// Decode the image at `path` and describe it
    pub fn load(id: TemplateId, path: &Path, extractor: &FeatureExtractor) -> ClickerResult<Self> {
        if !path.is_file() {
            return Err(ClickerError::MissingAsset {
                path: path.to_path_buf(),
            });
        }
        let image = image::open(path).map_err(|source| ClickerError::AssetDecode {
            path: path.to_path_buf(),
            source,
        })?;
        let template = Self::from_image(id, &image.to_luma8(), extractor);
        log::info!(
            "Template '{}' loaded from {} with {} descriptors",
            id,
            path.display(),
            template.features.len()
        );
        Ok(template)
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}
