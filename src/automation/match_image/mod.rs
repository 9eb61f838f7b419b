//! Feature based template detection
//!
//! Templates and frames are reduced to binary keypoint descriptors; every
//! template descriptor looks up its two nearest frame descriptors and the
//! close ones vote for a location through a coordinate-wise median.

pub mod features;
pub mod matcher;
pub mod template;


// Re-export main types and functions
pub use features::{DESCRIPTOR_BITS, Descriptor, Feature, FeatureExtractor, Keypoint};
pub use matcher::{
    DescriptorMatch, Frame, TemplateMatcher, accepted_points, knn_match, median_point,
};
pub use template::{Template, TemplateId};
