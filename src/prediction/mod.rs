pub mod http;
pub mod wire;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{BuildingType, PredictionResult, SimulationInput};

pub use http::HttpPredictionClient;
pub use wire::{PredictionRequest, RawChartPoint, RawPrediction};

#[derive(Debug, Error)]
pub enum PredictionError {
    /// Connection failure, timeout, or body read failure.
    #[error("prediction service unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("prediction service returned HTTP {status}: {body}")]
    Protocol { status: u16, body: String },

    #[error("prediction response malformed: {0}")]
    Decode(String),
}

impl PredictionError {
    /// Short label for structured logs. Control flow never branches on it.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Protocol { .. } => "protocol",
            Self::Decode(_) => "decode",
        }
    }
}

#[async_trait]
pub trait PredictionClient: Send + Sync {
    async fn predict(
        &self,
        input: &SimulationInput,
        building: BuildingType,
    ) -> Result<PredictionResult, PredictionError>;
}
