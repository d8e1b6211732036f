mod data;
mod error;
mod metrics;
mod model;
pub mod optimization;

pub use data::{Dataset, DatasetConfig};
pub use error::CoreError;
pub use metrics::{mae, mse, r_squared, MetricsTracker, TrainingSummary};
pub use model::{Gradients, LinearModel};
pub use optimization::{Optimizer, OptimizerKind};
