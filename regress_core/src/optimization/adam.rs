use super::Optimizer;
use crate::model::{Gradients, LinearModel};

/// Adaptive moment estimation with bias-corrected first/second moments.
#[derive(Debug)]
pub struct Adam {
    learning_rate: f32,
    beta1: f32,
    beta2: f32,
    epsilon: f32,
    m_weight: f32,
    m_bias: f32,
    v_weight: f32,
    v_bias: f32,
    t: u32,
}

impl Adam {
    /// Creates a new `Adam` optimizer.
    ///
    /// # Arguments
    /// * `learning_rate` - The small coefficient that modulates the amount of training per update.
    /// * `beta1`, `beta2`, `epsilon` - Hyperparameters to the optimization algorithm.
    pub fn new(learning_rate: f32, beta1: f32, beta2: f32, epsilon: f32) -> Self {
        Self {
            learning_rate,
            beta1,
            beta2,
            epsilon,
            m_weight: 0.0,
            m_bias: 0.0,
            v_weight: 0.0,
            v_bias: 0.0,
            t: 0,
        }
    }

    /// Number of steps taken since construction or the last reset.
    pub fn step_count(&self) -> u32 {
        self.t
    }
}

impl Optimizer for Adam {
    fn step(&mut self, model: &mut LinearModel, grads: Gradients) {
        self.t += 1;

        let b1 = self.beta1;
        let b2 = self.beta2;

        self.m_weight = b1 * self.m_weight + (1.0 - b1) * grads.weight;
        self.m_bias = b1 * self.m_bias + (1.0 - b1) * grads.bias;

        self.v_weight = b2 * self.v_weight + (1.0 - b2) * grads.weight.powi(2);
        self.v_bias = b2 * self.v_bias + (1.0 - b2) * grads.bias.powi(2);

        let bc1 = 1.0 - b1.powi(self.t as i32);
        let bc2 = 1.0 - b2.powi(self.t as i32);

        let m_hat_weight = self.m_weight / bc1;
        let m_hat_bias = self.m_bias / bc1;
        let v_hat_weight = self.v_weight / bc2;
        let v_hat_bias = self.v_bias / bc2;

        model.weight -= self.learning_rate * m_hat_weight / (v_hat_weight.sqrt() + self.epsilon);
        model.bias -= self.learning_rate * m_hat_bias / (v_hat_bias.sqrt() + self.epsilon);
    }

    fn reset(&mut self) {
        self.m_weight = 0.0;
        self.m_bias = 0.0;
        self.v_weight = 0.0;
        self.v_bias = 0.0;
        self.t = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_adam() -> Adam {
        Adam::new(0.01, 0.9, 0.999, 1e-8)
    }

    #[test]
    fn first_step_moves_by_roughly_the_learning_rate() {
        // With bias correction the first update is ~lr * sign(grad).
        let mut model = LinearModel { weight: 0.0, bias: 0.0 };
        let mut opt = default_adam();

        opt.step(&mut model, Gradients { weight: 2.0, bias: -3.0 });

        assert!((model.weight + 0.01).abs() < 1e-4);
        assert!((model.bias - 0.01).abs() < 1e-4);
    }

    #[test]
    fn step_counter_tracks_calls_and_reset() {
        let mut model = LinearModel::new();
        let mut opt = default_adam();
        assert_eq!(opt.step_count(), 0);

        opt.step(&mut model, Gradients { weight: 1.0, bias: 1.0 });
        opt.step(&mut model, Gradients { weight: 1.0, bias: 1.0 });
        assert_eq!(opt.step_count(), 2);

        opt.reset();
        assert_eq!(opt.step_count(), 0);
    }

    #[test]
    fn reset_makes_the_next_step_identical_to_a_fresh_instance() {
        let grads = Gradients { weight: 1.0, bias: -1.0 };

        let mut warmed = default_adam();
        let mut scratch = LinearModel::new();
        warmed.step(&mut scratch, grads);
        warmed.step(&mut scratch, grads);
        warmed.reset();

        let mut fresh = default_adam();
        let mut a = LinearModel::new();
        let mut b = LinearModel::new();
        warmed.step(&mut a, grads);
        fresh.step(&mut b, grads);

        assert_eq!(a, b);
    }
}
