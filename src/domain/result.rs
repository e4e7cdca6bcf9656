use serde::{Deserialize, Serialize};

/// One sample of a chart series: baseline consumption next to the optimized one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: String,
    pub baseline: f64,
    pub optimized: f64,
}

impl ChartPoint {
    pub fn new(timestamp: impl Into<String>, baseline: f64, optimized: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            baseline,
            optimized,
        }
    }
}

/// Outcome of a successful prediction. Replaced wholesale on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// kWh in the building's original state.
    pub energy_without_system: f64,
    /// kWh with the optimizer integrated.
    pub energy_with_system: f64,
    pub savings_percent: f64,
    pub daily_series: Vec<ChartPoint>,
    pub monthly_series: Vec<ChartPoint>,
}

impl PredictionResult {
    pub fn energy_saved(&self) -> f64 {
        self.energy_without_system - self.energy_with_system
    }
}
