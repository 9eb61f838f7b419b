// Types and enums for the scan loop
use super::match_image::TemplateId;
use crate::desktop::Point;

/// Which button the scan loop is currently looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    AwaitingVortex,
    AwaitingWebsite,
}

impl ScanState {
    pub fn initial(vortex_mode: bool) -> Self {
        if vortex_mode {
            ScanState::AwaitingVortex
        } else {
            ScanState::AwaitingWebsite
        }
    }

    pub fn target(self) -> TemplateId {
        match self {
            ScanState::AwaitingVortex => TemplateId::VortexButton,
            ScanState::AwaitingWebsite => TemplateId::WebsiteButton,
        }
    }

    /// State after the current target was found and clicked. Without vortex
    /// mode the loop never leaves `AwaitingWebsite`.
    pub fn after_click(self, vortex_mode: bool) -> Self {
        match self {
            ScanState::AwaitingVortex => ScanState::AwaitingWebsite,
            ScanState::AwaitingWebsite => ScanState::initial(vortex_mode),
        }
    }

    /// The website click opens a new page, which gets extra time to render
    pub fn needs_cooldown_after_click(self) -> bool {
        self == ScanState::AwaitingWebsite
    }
}

/// Result of one scan iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Clicked {
        target: TemplateId,
        detected: Point,
        clicked: Point,
    },
    NotFound {
        target: TemplateId,
    },
}

impl StepOutcome {
    pub fn clicked(&self) -> bool {
        matches!(self, StepOutcome::Clicked { .. })
    }
}
