//! Headless controller for the SaverX demo: section navigation with a gated
//! result section, the simulation run lifecycle, and the prediction client.

pub mod charts;
pub mod config;
pub mod device;
pub mod domain;
pub mod lifecycle;
pub mod navigation;
pub mod prediction;
pub mod runtime;
pub mod telemetry;

pub use config::Config;
pub use lifecycle::{RunOutcome, SimulationLifecycle};
pub use navigation::SectionController;
pub use prediction::{HttpPredictionClient, PredictionClient, PredictionError};
pub use runtime::{AppEvent, AppHandle, AppRuntime, AppSnapshot};
