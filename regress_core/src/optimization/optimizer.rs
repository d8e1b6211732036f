use crate::model::{Gradients, LinearModel};

/// Defines the strategy for updating model parameters based on calculated gradients.
pub trait Optimizer {
    /// Mutates the model parameters in place using the provided gradients and
    /// the optimizer's own state and hyperparameters.
    fn step(&mut self, model: &mut LinearModel, grads: Gradients);

    /// Reinitializes any internal state (velocity, moment estimates, counters).
    fn reset(&mut self);
}
