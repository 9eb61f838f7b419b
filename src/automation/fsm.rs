// Scan loop state machine: capture -> detect -> map -> click -> wait
use super::config::{FeatureConfig, ScanConfig};
use super::cursor::click_preserving_cursor;
use super::error::{ClickerError, ClickerResult};
use super::mapper::CoordinateMapper;
use super::match_image::{Frame, TemplateMatcher};
use super::topology::MonitorTopology;
use super::types::{ScanState, StepOutcome};
use crate::desktop::{CaptureRegion, MonitorSource, Pointer, ScreenCapture, Sleeper};
use std::convert::Infallible;

/// Everything the loop reads but never changes, built once at startup
pub struct ScanContext {
    topology: MonitorTopology,
    matcher: TemplateMatcher,
    config: ScanConfig,
    capture_region: CaptureRegion,
    mapper: CoordinateMapper,
}

impl ScanContext {
    pub fn new(topology: MonitorTopology, matcher: TemplateMatcher, config: ScanConfig) -> Self {
        let capture_region = topology.capture_region(config.capture_aspect);
        let mapper = CoordinateMapper::new(&topology);
        log::info!("Initialized screen capture with region: {}", capture_region);
        Self {
            topology,
            matcher,
            config,
            capture_region,
            mapper,
        }
    }

    /// Enumerate monitors and load both templates. Fails before anything is
    /// captured or clicked if a monitor or asset is missing.
    pub fn initialize(
        monitors: &dyn MonitorSource,
        config: ScanConfig,
        features: FeatureConfig,
    ) -> ClickerResult<Self> {
        let topology = MonitorTopology::enumerate(monitors)?;
        let matcher = TemplateMatcher::initialize(&config.asset_dir, features)?;
        log::info!("Loaded assets");
        Ok(Self::new(topology, matcher, config))
    }

    pub fn topology(&self) -> &MonitorTopology {
        &self.topology
    }

    pub fn matcher(&self) -> &TemplateMatcher {
        &self.matcher
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn capture_region(&self) -> CaptureRegion {
        self.capture_region
    }

    pub fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }
}

pub struct ScanController<C, P, S> {
    context: ScanContext,
    capture: C,
    pointer: P,
    sleeper: S,
    vortex_mode: bool,
    state: ScanState,
    clicks: u64,
}

impl<C: ScreenCapture, P: Pointer, S: Sleeper> ScanController<C, P, S> {
    pub fn new(context: ScanContext, capture: C, pointer: P, sleeper: S, vortex_mode: bool) -> Self {
        Self {
            context,
            capture,
            pointer,
            sleeper,
            vortex_mode,
            state: ScanState::initial(vortex_mode),
            clicks: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn context(&self) -> &ScanContext {
        &self.context
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    pub fn pointer(&self) -> &P {
        &self.pointer
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Scan until a capture or click fails. There is no other way out.
    pub fn run(&mut self) -> ClickerResult<Infallible> {
        log::info!(
            "🚀 Scan loop started in {:?} (vortex mode: {})",
            self.state,
            self.vortex_mode
        );
        loop {
            self.step()?;
        }
    }

    /// One iteration, including the polling wait at its end
    pub fn step(&mut self) -> ClickerResult<StepOutcome> {
        let outcome = self.scan_once()?;
        let interval = self.context.config.poll_interval;
        log::info!("Waiting {} seconds", interval.as_secs_f32());
        self.sleeper.sleep(interval);
        Ok(outcome)
    }

    fn scan_once(&mut self) -> ClickerResult<StepOutcome> {
        let image = self
            .capture
            .capture_region(&self.context.capture_region)
            .map_err(|source| ClickerError::Capture { source })?;
        log::info!("Captured screen");
        let frame = Frame::from_rgba(&image);

        let target = self.state.target();
        let Some(detected) =
            self.context
                .matcher
                .detect(&frame, target, self.context.config.distance_threshold)
        else {
            log::debug!("👀 No {} on screen", target);
            return Ok(StepOutcome::NotFound { target });
        };

        let clicked = self.context.mapper.map(detected);
        log::info!("🎯 Found {} at {}", target, clicked);
        click_preserving_cursor(&mut self.pointer, clicked)
            .map_err(|source| ClickerError::Injection { source })?;
        self.clicks += 1;

        let previous = self.state;
        self.change_state(previous.after_click(self.vortex_mode));
        if previous.needs_cooldown_after_click() {
            let cooldown = self.context.config.cooldown;
            log::info!("Waiting {} seconds", cooldown.as_secs_f32());
            self.sleeper.sleep(cooldown);
        }

        Ok(StepOutcome::Clicked {
            target,
            detected,
            clicked,
        })
    }

    fn change_state(&mut self, new_state: ScanState) {
        if self.state != new_state {
            log::debug!("Scan state: {:?} -> {:?}", self.state, new_state);
            self.state = new_state;
        }
    }
}
