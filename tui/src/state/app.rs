use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use log::{debug, info, warn};
use regress_core::{Dataset, DatasetConfig, LinearModel, MetricsTracker, Optimizer, OptimizerKind};

/// Training stops once this many optimizer steps have been applied.
pub const MAX_ITERATIONS: usize = 5000;

pub const MIN_DELAY_MS: u64 = 1;
pub const MAX_DELAY_MS: u64 = 200;
const DELAY_STEP_MS: u64 = 5;
const DEFAULT_DELAY_MS: u64 = 20;

// Upper bound on catch-up steps in a single frame so a stalled terminal
// cannot freeze the UI replaying a backlog.
const MAX_STEPS_PER_FRAME: usize = 25;

/// What the event loop should do after a key press.
pub enum Action {
    None,
    Quit,
}

/// Training lifecycle. `Idle` is the state before the first start and after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "READY",
            Phase::Running => "TRAINING",
            Phase::Paused => "PAUSED",
        }
    }
}

/// All loop-local state: dataset, model, active optimizer and view flags.
pub struct App {
    config: DatasetConfig,
    dataset: Dataset,
    pub model: LinearModel,
    optimizer: Box<dyn Optimizer>,
    kind: OptimizerKind,
    pub metrics: MetricsTracker,
    pub iteration: usize,
    pub phase: Phase,
    pub show_residuals: bool,
    pub show_legend: bool,
    pub step_delay_ms: u64,
    step_accumulator: f32,
    pub started_at: Instant,
}

impl App {
    /// Creates the initial application state with a freshly drawn dataset.
    ///
    /// # Errors
    /// Returns an error if the dataset configuration is rejected.
    pub fn new() -> anyhow::Result<Self> {
        let config = DatasetConfig::default();
        let dataset = Dataset::generate(&config)?;
        Ok(Self::with_dataset(config, dataset))
    }

    #[cfg(test)]
    fn new_seeded(seed: u64) -> Self {
        let config = DatasetConfig::default();
        let dataset = Dataset::generate_seeded(&config, seed).unwrap();
        Self::with_dataset(config, dataset)
    }

    fn with_dataset(config: DatasetConfig, dataset: Dataset) -> Self {
        let model = LinearModel::new();
        let kind = OptimizerKind::Sgd;

        // Record a baseline sample so the legend shows values before any step.
        let mut metrics = MetricsTracker::new();
        metrics.record(&dataset, &model, 0);

        Self {
            config,
            dataset,
            model,
            optimizer: kind.build(),
            kind,
            metrics,
            iteration: 0,
            phase: Phase::Idle,
            show_residuals: true,
            show_legend: true,
            step_delay_ms: DEFAULT_DELAY_MS,
            step_accumulator: 0.0,
            started_at: Instant::now(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn optimizer_kind(&self) -> OptimizerKind {
        self.kind
    }

    pub fn ground_truth(&self) -> (f32, f32) {
        (self.config.true_slope, self.config.true_intercept)
    }

    /// Applies a single key press. Keys are case-insensitive.
    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        let key = match key {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };

        match key {
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char(' ') => {
                self.phase = match self.phase {
                    Phase::Running => Phase::Paused,
                    Phase::Idle | Phase::Paused => Phase::Running,
                };
                debug!("phase -> {:?}", self.phase);
            }
            KeyCode::Char('t') => self.phase = Phase::Running,
            KeyCode::Char('p') => {
                if self.phase == Phase::Running {
                    self.phase = Phase::Paused;
                }
            }
            KeyCode::Char('s') => self.step_once(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('n') => self.regenerate(),
            KeyCode::Char('1') => self.select_optimizer(OptimizerKind::Sgd),
            KeyCode::Char('2') => self.select_optimizer(OptimizerKind::Momentum),
            KeyCode::Char('3') => self.select_optimizer(OptimizerKind::Adam),
            KeyCode::Char('v') => self.show_residuals = !self.show_residuals,
            KeyCode::Char('f') => self.show_legend = !self.show_legend,
            KeyCode::Char('[') => {
                self.step_delay_ms = self.step_delay_ms.saturating_sub(DELAY_STEP_MS).max(MIN_DELAY_MS);
                self.step_accumulator = 0.0;
            }
            KeyCode::Char(']') => {
                self.step_delay_ms = (self.step_delay_ms + DELAY_STEP_MS).min(MAX_DELAY_MS);
                self.step_accumulator = 0.0;
            }
            _ => {}
        }

        Action::None
    }

    /// Advances training according to elapsed wall time when `Running`.
    ///
    /// Should be called once per frame.
    pub fn tick(&mut self, dt: Duration) {
        if self.phase != Phase::Running {
            return;
        }

        let steps_per_second = 1000.0 / self.step_delay_ms.max(MIN_DELAY_MS) as f32;
        self.step_accumulator += dt.as_secs_f32() * steps_per_second;

        let steps = (self.step_accumulator as usize).min(MAX_STEPS_PER_FRAME);
        self.step_accumulator -= steps as f32;

        for _ in 0..steps {
            if self.iteration >= MAX_ITERATIONS {
                break;
            }
            self.step_once();
        }

        if self.iteration >= MAX_ITERATIONS {
            info!("iteration cap reached, pausing");
            self.phase = Phase::Paused;
        }
    }

    /// Performs exactly one optimizer step. The run phase is left untouched.
    ///
    /// A no-op on an empty dataset or at the iteration cap.
    fn step_once(&mut self) {
        if self.iteration >= MAX_ITERATIONS {
            return;
        }

        let Some(grads) = self.model.gradients(&self.dataset) else {
            return;
        };

        self.optimizer.step(&mut self.model, grads);
        self.iteration += 1;
        self.metrics.record(&self.dataset, &self.model, self.iteration);
    }

    /// Restores the initial model parameters, discards optimizer state and
    /// metric history, and returns to `Idle`.
    fn reset(&mut self) {
        self.model.reset();
        self.optimizer.reset();
        self.iteration = 0;
        self.phase = Phase::Idle;
        self.step_accumulator = 0.0;

        self.metrics.clear();
        self.metrics.record(&self.dataset, &self.model, 0);
        debug!("model reset");
    }

    /// Replaces the dataset with a fresh random draw.
    ///
    /// Model parameters, optimizer state and the run phase are deliberately
    /// untouched; only the metric history restarts against the new data.
    fn regenerate(&mut self) {
        match Dataset::generate(&self.config) {
            Ok(dataset) => {
                self.dataset = dataset;
                self.metrics.clear();
                self.metrics.record(&self.dataset, &self.model, self.iteration);
                debug!("dataset regenerated ({} points)", self.dataset.len());
            }
            Err(err) => warn!("keeping previous dataset: {err}"),
        }
    }

    /// Activates an optimizer kind with zeroed internal state.
    ///
    /// Re-selecting the active kind also discards its state.
    fn select_optimizer(&mut self, kind: OptimizerKind) {
        self.kind = kind;
        self.optimizer = kind.build();
        self.step_accumulator = 0.0;
        debug!("optimizer -> {}", kind.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyCode::Char(c));
    }

    #[test]
    fn space_toggles_between_running_and_paused() {
        let mut app = App::new_seeded(42);
        assert_eq!(app.phase, Phase::Idle);

        press(&mut app, ' ');
        assert_eq!(app.phase, Phase::Running);
        press(&mut app, ' ');
        assert_eq!(app.phase, Phase::Paused);
        press(&mut app, ' ');
        assert_eq!(app.phase, Phase::Running);
    }

    #[test]
    fn pause_from_idle_stays_idle() {
        let mut app = App::new_seeded(42);
        press(&mut app, 'p');
        assert_eq!(app.phase, Phase::Idle);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let mut app = App::new_seeded(42);
        press(&mut app, 'T');
        assert_eq!(app.phase, Phase::Running);
        press(&mut app, 'P');
        assert_eq!(app.phase, Phase::Paused);
    }

    #[test]
    fn single_step_preserves_the_run_phase() {
        let mut app = App::new_seeded(42);
        press(&mut app, ' ');
        press(&mut app, ' ');
        assert_eq!(app.phase, Phase::Paused);

        let before = app.model;
        press(&mut app, 's');

        assert_eq!(app.phase, Phase::Paused);
        assert_eq!(app.iteration, 1);
        assert_ne!(app.model, before);
    }

    #[test]
    fn five_manual_steps_match_the_core_api_directly() {
        let mut app = App::new_seeded(42);
        press(&mut app, 't');
        for _ in 0..5 {
            press(&mut app, 's');
        }

        let config = DatasetConfig::default();
        let data = Dataset::generate_seeded(&config, 42).unwrap();
        let mut model = LinearModel::new();
        let mut opt = OptimizerKind::Sgd.build();
        for _ in 0..5 {
            let grads = model.gradients(&data).unwrap();
            opt.step(&mut model, grads);
        }

        assert_eq!(app.model, model);
        assert_eq!(app.iteration, 5);
    }

    #[test]
    fn identically_seeded_sessions_agree_exactly() {
        let script = ['t', 's', 's', '3', 's', 's', 's'];

        let mut a = App::new_seeded(7);
        let mut b = App::new_seeded(7);
        for c in script {
            press(&mut a, c);
            press(&mut b, c);
        }

        assert_eq!(a.model, b.model);
        assert_eq!(a.iteration, b.iteration);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut app = App::new_seeded(42);
        for _ in 0..3 {
            press(&mut app, 's');
        }
        press(&mut app, 't');
        press(&mut app, 'r');

        assert_eq!(app.model, LinearModel::new());
        assert_eq!(app.iteration, 0);
        assert_eq!(app.phase, Phase::Idle);
        assert_eq!(app.metrics.len(), 1);
    }

    #[test]
    fn reset_also_discards_optimizer_state() {
        // After R, a momentum step must equal the very first step of a fresh
        // session, which only holds if the velocity was zeroed.
        let mut warmed = App::new_seeded(42);
        press(&mut warmed, '2');
        press(&mut warmed, 's');
        press(&mut warmed, 's');
        press(&mut warmed, 'r');
        press(&mut warmed, 's');

        let mut fresh = App::new_seeded(42);
        press(&mut fresh, '2');
        press(&mut fresh, 's');

        assert_eq!(warmed.model, fresh.model);
    }

    #[test]
    fn regenerate_keeps_model_and_point_count() {
        let mut app = App::new_seeded(42);
        for _ in 0..4 {
            press(&mut app, 's');
        }

        let model = app.model;
        let count = app.dataset().len();
        let iteration = app.iteration;

        press(&mut app, 'n');

        assert_eq!(app.model, model);
        assert_eq!(app.dataset().len(), count);
        assert_eq!(app.iteration, iteration);
        assert_eq!(app.phase, Phase::Idle);
    }

    #[test]
    fn switching_optimizer_starts_from_zeroed_state() {
        let mut switched = App::new_seeded(42);
        press(&mut switched, '2');
        press(&mut switched, 's');
        press(&mut switched, 's');
        press(&mut switched, '3');
        assert_eq!(switched.optimizer_kind(), OptimizerKind::Adam);

        // Replay the same trajectory with a fresh Adam from the core API.
        let config = DatasetConfig::default();
        let data = Dataset::generate_seeded(&config, 42).unwrap();
        let mut model = LinearModel::new();
        let mut momentum = OptimizerKind::Momentum.build();
        for _ in 0..2 {
            let grads = model.gradients(&data).unwrap();
            momentum.step(&mut model, grads);
        }
        let mut adam = OptimizerKind::Adam.build();
        let grads = model.gradients(&data).unwrap();
        adam.step(&mut model, grads);

        press(&mut switched, 's');
        assert_eq!(switched.model, model);
    }

    #[test]
    fn delay_is_clamped_to_its_bounds() {
        let mut app = App::new_seeded(42);
        for _ in 0..100 {
            press(&mut app, '[');
        }
        assert_eq!(app.step_delay_ms, MIN_DELAY_MS);

        for _ in 0..100 {
            press(&mut app, ']');
        }
        assert_eq!(app.step_delay_ms, MAX_DELAY_MS);
    }

    #[test]
    fn tick_is_inert_unless_running() {
        let mut app = App::new_seeded(42);
        app.tick(Duration::from_secs(1));
        assert_eq!(app.iteration, 0);

        press(&mut app, 'p');
        app.tick(Duration::from_secs(1));
        assert_eq!(app.iteration, 0);
    }

    #[test]
    fn tick_caps_steps_per_frame() {
        let mut app = App::new_seeded(42);
        press(&mut app, 't');

        // One enormous frame still applies at most the per-frame cap.
        app.tick(Duration::from_secs(60));
        assert_eq!(app.iteration, MAX_STEPS_PER_FRAME);
    }

    #[test]
    fn empty_dataset_makes_steps_no_ops() {
        let config = DatasetConfig { n_points: 0, ..Default::default() };
        let dataset = Dataset::generate(&config).unwrap();
        let mut app = App::with_dataset(config, dataset);

        press(&mut app, 's');
        assert_eq!(app.iteration, 0);
        assert_eq!(app.model, LinearModel::new());
    }
}
