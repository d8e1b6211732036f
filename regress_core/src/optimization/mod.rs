mod adam;
mod gradient_descent;
mod gradient_descent_with_momentum;
mod kind;
mod optimizer;

pub use adam::Adam;
pub use gradient_descent::GradientDescent;
pub use gradient_descent_with_momentum::GradientDescentWithMomentum;
pub use kind::{OptimizerKind, LEARNING_RATE};
pub use optimizer::Optimizer;
