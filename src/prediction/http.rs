use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, info, warn};

use super::{PredictionClient, PredictionError, PredictionRequest, RawPrediction};
use crate::config::PredictionConfig;
use crate::domain::{BuildingType, PredictionResult, SimulationInput};

/// Client for the hosted `/predict` endpoint. Issues exactly one POST per call,
/// with no retries.
#[derive(Clone)]
pub struct HttpPredictionClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPredictionClient {
    pub fn new(cfg: &PredictionConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&cfg.user_agent)?);
        let client = reqwest::Client::builder()
            .timeout(cfg.http_timeout())
            .default_headers(headers)
            .build()?;
        Ok(Self {
            endpoint: cfg.endpoint.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(
        &self,
        input: &SimulationInput,
        building: BuildingType,
    ) -> Result<PredictionResult, PredictionError> {
        let request = PredictionRequest::new(input, building);
        debug!(endpoint = %self.endpoint, city = %request.city, building_type = %request.building_type, "POST prediction");

        let resp = self.client.post(&self.endpoint).json(&request).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "prediction service rejected request");
            return Err(PredictionError::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        let raw: RawPrediction =
            serde_json::from_str(&body).map_err(|e| PredictionError::Decode(e.to_string()))?;
        info!(
            savings_percent = raw.savings,
            daily_points = raw.two_day_chart_data.len(),
            monthly_points = raw.monthly_chart_data.len(),
            "prediction received"
        );
        Ok(raw.into())
    }
}
