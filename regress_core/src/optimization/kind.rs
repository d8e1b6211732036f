use super::{Adam, GradientDescent, GradientDescentWithMomentum, Optimizer};

/// Shared learning rate across all optimizers.
pub const LEARNING_RATE: f32 = 0.01;

const MOMENTUM: f32 = 0.9;
const ADAM_BETA1: f32 = 0.9;
const ADAM_BETA2: f32 = 0.999;
const ADAM_EPSILON: f32 = 1e-8;

/// Selects which update rule drives training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerKind {
    Sgd,
    Momentum,
    Adam,
}

impl OptimizerKind {
    /// Display name shown in the legend and header.
    pub fn label(self) -> &'static str {
        match self {
            OptimizerKind::Sgd => "SGD",
            OptimizerKind::Momentum => "Momentum",
            OptimizerKind::Adam => "Adam",
        }
    }

    /// Builds a fresh optimizer of this kind with default hyperparameters.
    ///
    /// The returned instance always starts with zeroed internal state, so
    /// switching kinds (or re-selecting the active one) discards history.
    pub fn build(self) -> Box<dyn Optimizer> {
        match self {
            OptimizerKind::Sgd => Box::new(GradientDescent::new(LEARNING_RATE)),
            OptimizerKind::Momentum => {
                Box::new(GradientDescentWithMomentum::new(LEARNING_RATE, MOMENTUM))
            }
            OptimizerKind::Adam => {
                Box::new(Adam::new(LEARNING_RATE, ADAM_BETA1, ADAM_BETA2, ADAM_EPSILON))
            }
        }
    }
}
