use super::Optimizer;
use crate::model::{Gradients, LinearModel};

/// Plain stochastic gradient descent: `param -= lr * grad`.
#[derive(Debug)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Creates a new `GradientDescent` optimizer.
    ///
    /// # Arguments
    /// * `learning_rate` - The small coefficient that modulates the amount of training per update.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    fn step(&mut self, model: &mut LinearModel, grads: Gradients) {
        model.weight -= self.learning_rate * grads.weight;
        model.bias -= self.learning_rate * grads.bias;
    }

    fn reset(&mut self) {
        // Stateless.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step_matches_the_update_rule() {
        let mut model = LinearModel { weight: 1.0, bias: 2.0 };
        let mut opt = GradientDescent::new(0.1);

        opt.step(&mut model, Gradients { weight: 4.0, bias: -2.0 });

        assert!((model.weight - 0.6).abs() < 1e-6);
        assert!((model.bias - 2.2).abs() < 1e-6);
    }
}
