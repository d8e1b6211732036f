mod app;

pub use app::{Action, App, Phase, MAX_ITERATIONS};
