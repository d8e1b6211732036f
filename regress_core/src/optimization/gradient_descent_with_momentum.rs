use super::Optimizer;
use crate::model::{Gradients, LinearModel};

/// Gradient descent with a velocity term that smooths successive updates:
/// `v = momentum * v - lr * grad; param += v`.
#[derive(Debug)]
pub struct GradientDescentWithMomentum {
    learning_rate: f32,
    momentum: f32,
    velocity_weight: f32,
    velocity_bias: f32,
}

impl GradientDescentWithMomentum {
    /// Creates a new `GradientDescentWithMomentum` optimizer.
    ///
    /// # Arguments
    /// * `learning_rate` - The small coefficient that modulates the amount of training per update.
    /// * `momentum` - Decay factor applied to the accumulated velocity.
    pub fn new(learning_rate: f32, momentum: f32) -> Self {
        Self {
            learning_rate,
            momentum,
            velocity_weight: 0.0,
            velocity_bias: 0.0,
        }
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.velocity_weight, self.velocity_bias)
    }
}

impl Optimizer for GradientDescentWithMomentum {
    fn step(&mut self, model: &mut LinearModel, grads: Gradients) {
        self.velocity_weight = self.momentum * self.velocity_weight - self.learning_rate * grads.weight;
        self.velocity_bias = self.momentum * self.velocity_bias - self.learning_rate * grads.bias;

        model.weight += self.velocity_weight;
        model.bias += self.velocity_bias;
    }

    fn reset(&mut self) {
        self.velocity_weight = 0.0;
        self.velocity_bias = 0.0;
    }
}
