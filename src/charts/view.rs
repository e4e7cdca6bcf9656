use serde::{Deserialize, Serialize};

use super::bucket_chart_data;
use crate::domain::{ChartPoint, PredictionResult};

/// Which chart the result panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartView {
    #[default]
    Monthly,
    Daily,
}

impl ChartView {
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Daily,
            Self::Daily => Self::Monthly,
        }
    }

    /// Series to plot. The daily view is downsampled to `bucket_minutes`.
    pub fn series(self, result: &PredictionResult, bucket_minutes: u32) -> Vec<ChartPoint> {
        match self {
            Self::Monthly => result.monthly_series.clone(),
            Self::Daily => bucket_chart_data(&result.daily_series, bucket_minutes),
        }
    }

    pub fn tick_label(self, timestamp: &str) -> String {
        match self {
            Self::Monthly => monthly_tick_label(timestamp),
            Self::Daily => daily_tick_label(timestamp).to_string(),
        }
    }
}

/// Everything after the last `-`.
pub fn daily_tick_label(timestamp: &str) -> &str {
    timestamp.rsplit('-').next().unwrap_or(timestamp)
}

/// Characters 6 through 9, clamped to the string's length.
pub fn monthly_tick_label(timestamp: &str) -> String {
    timestamp.chars().skip(6).take(4).collect()
}
