use crate::data::Dataset;
use crate::model::LinearModel;

/// Mean squared error of the model over the dataset. Zero for an empty set.
pub fn mse(data: &Dataset, model: &LinearModel) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    data.points()
        .map(|(x, y)| (model.predict(x) - y).powi(2))
        .sum::<f32>()
        / data.len() as f32
}

/// Mean absolute error of the model over the dataset. Zero for an empty set.
pub fn mae(data: &Dataset, model: &LinearModel) -> f32 {
    if data.is_empty() {
        return 0.0;
    }
    data.points()
        .map(|(x, y)| (model.predict(x) - y).abs())
        .sum::<f32>()
        / data.len() as f32
}

/// Coefficient of determination (R²).
///
/// Reported as 0 when the observed values have no variance.
pub fn r_squared(data: &Dataset, model: &LinearModel) -> f32 {
    if data.is_empty() {
        return 0.0;
    }

    let mean_y = data.ys().sum() / data.len() as f32;
    let ss_res: f32 = data.points().map(|(x, y)| (y - model.predict(x)).powi(2)).sum();
    let ss_tot: f32 = data.ys().iter().map(|y| (y - mean_y).powi(2)).sum();

    if ss_tot == 0.0 {
        return 0.0;
    }
    1.0 - ss_res / ss_tot
}

/// Aggregate view over a finished (or in-flight) training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSummary {
    pub iterations: usize,
    pub final_mse: f32,
    pub min_mse: f32,
    pub max_mse: f32,
    pub final_mae: f32,
    pub final_r2: f32,
}

/// Per-iteration history of the fit quality metrics.
#[derive(Debug, Clone, Default)]
pub struct MetricsTracker {
    mse_history: Vec<f32>,
    mae_history: Vec<f32>,
    r2_history: Vec<f32>,
    iterations: Vec<usize>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one sample of all metrics for the given iteration.
    pub fn record(&mut self, data: &Dataset, model: &LinearModel, iteration: usize) {
        self.iterations.push(iteration);
        self.mse_history.push(mse(data, model));
        self.mae_history.push(mae(data, model));
        self.r2_history.push(r_squared(data, model));
    }

    /// Latest (mse, mae, r²) sample, if any was recorded.
    pub fn current(&self) -> Option<(f32, f32, f32)> {
        Some((
            *self.mse_history.last()?,
            *self.mae_history.last()?,
            *self.r2_history.last()?,
        ))
    }

    pub fn mse_history(&self) -> &[f32] {
        &self.mse_history
    }

    pub fn len(&self) -> usize {
        self.mse_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mse_history.is_empty()
    }

    pub fn clear(&mut self) {
        self.mse_history.clear();
        self.mae_history.clear();
        self.r2_history.clear();
        self.iterations.clear();
    }

    pub fn summary(&self) -> Option<TrainingSummary> {
        let final_mse = *self.mse_history.last()?;
        let min_mse = self.mse_history.iter().copied().fold(f32::INFINITY, f32::min);
        let max_mse = self.mse_history.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        Some(TrainingSummary {
            iterations: self.mse_history.len(),
            final_mse,
            min_mse,
            max_mse,
            final_mae: *self.mae_history.last()?,
            final_r2: *self.r2_history.last()?,
        })
    }
}
