use crate::data::Dataset;

/// Starting parameters chosen as a deliberately poor fit so training is visible.
pub const INITIAL_WEIGHT: f32 = 0.5;
pub const INITIAL_BIAS: f32 = 10.0;

/// Mean-squared-error partial derivatives over a full dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradients {
    pub weight: f32,
    pub bias: f32,
}

/// A two-parameter linear model `y = weight * x + bias`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub weight: f32,
    pub bias: f32,
}

impl Default for LinearModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearModel {
    pub fn new() -> Self {
        Self { weight: INITIAL_WEIGHT, bias: INITIAL_BIAS }
    }

    pub fn predict(&self, x: f32) -> f32 {
        self.weight * x + self.bias
    }

    /// Restores the documented initial parameters.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Closed-form MSE gradients over the full dataset.
    ///
    /// Returns `None` for an empty dataset; callers treat that as a no-op
    /// training step rather than an error.
    pub fn gradients(&self, data: &Dataset) -> Option<Gradients> {
        if data.is_empty() {
            return None;
        }

        let predicted = data.xs().mapv(|x| self.predict(x));
        let error = predicted - data.ys();
        let scale = 2.0 / data.len() as f32;

        Some(Gradients {
            weight: scale * (&error * data.xs()).sum(),
            bias: scale * error.sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatasetConfig;

    #[test]
    fn predict_is_affine() {
        let model = LinearModel { weight: 2.0, bias: -1.0 };
        assert_eq!(model.predict(0.0), -1.0);
        assert_eq!(model.predict(3.0), 5.0);
    }

    #[test]
    fn reset_restores_initial_parameters() {
        let mut model = LinearModel { weight: 9.9, bias: -3.3 };
        model.reset();
        assert_eq!(model.weight, INITIAL_WEIGHT);
        assert_eq!(model.bias, INITIAL_BIAS);
    }

    #[test]
    fn gradients_vanish_on_a_perfect_fit() {
        let config = DatasetConfig { true_slope: 1.5, true_intercept: 2.0, noise_std: 0.0, ..Default::default() };
        let data = Dataset::generate_seeded(&config, 1).unwrap();
        let model = LinearModel { weight: 1.5, bias: 2.0 };

        let grads = model.gradients(&data).unwrap();
        assert!(grads.weight.abs() < 1e-4);
        assert!(grads.bias.abs() < 1e-4);
    }

    #[test]
    fn gradients_point_uphill_from_an_underestimate() {
        // All predictions land below the data, so both partials are negative.
        let config = DatasetConfig { true_slope: 1.5, true_intercept: 2.0, noise_std: 0.0, ..Default::default() };
        let data = Dataset::generate_seeded(&config, 1).unwrap();
        let model = LinearModel { weight: 0.0, bias: 0.0 };

        let grads = model.gradients(&data).unwrap();
        assert!(grads.weight < 0.0);
        assert!(grads.bias < 0.0);
    }

    #[test]
    fn empty_dataset_yields_no_gradients() {
        let config = DatasetConfig { n_points: 0, ..Default::default() };
        let data = Dataset::generate(&config).unwrap();
        assert!(LinearModel::new().gradients(&data).is_none());
    }
}
