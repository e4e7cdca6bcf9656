//! JSON shapes exchanged with the prediction service.

use serde::{Deserialize, Serialize};

use crate::domain::{BuildingType, ChartPoint, PredictionResult, SimulationInput};

/// POST body. The service's setpoint names are crossed relative to the form:
/// the chilled water temperature travels as `cooling_water_temperature_setpoint`
/// and the cooling water temperature as `chiller_setpoint_temperature`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub cooling_water_temperature_setpoint: String,
    pub chiller_setpoint_temperature: String,
    pub ahu_opening_percentage: String,
    pub city: String,
    pub building_type: String,
}

impl PredictionRequest {
    pub fn new(input: &SimulationInput, building: BuildingType) -> Self {
        Self {
            cooling_water_temperature_setpoint: input.chilled_water_temp.to_string(),
            chiller_setpoint_temperature: input.cooling_water_temp.to_string(),
            ahu_opening_percentage: input.ahu_opening.to_string(),
            city: input.location.to_string().to_lowercase(),
            building_type: building.wire_code().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawChartPoint {
    pub date: String,
    pub normal: f64,
    pub saverx: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPrediction {
    #[serde(rename = "Energy_Consumption_without_SaverX")]
    pub energy_without: f64,
    #[serde(rename = "Predicted_Energy_Consumption_with_SaverX")]
    pub energy_with: f64,
    #[serde(rename = "Predicted_Savings")]
    pub savings: f64,
    pub two_day_chart_data: Vec<RawChartPoint>,
    pub monthly_chart_data: Vec<RawChartPoint>,
}

impl From<RawChartPoint> for ChartPoint {
    fn from(raw: RawChartPoint) -> Self {
        ChartPoint {
            timestamp: raw.date,
            baseline: raw.normal,
            optimized: raw.saverx,
        }
    }
}

impl From<RawPrediction> for PredictionResult {
    fn from(raw: RawPrediction) -> Self {
        PredictionResult {
            energy_without_system: raw.energy_without,
            energy_with_system: raw.energy_with,
            savings_percent: raw.savings,
            daily_series: raw.two_day_chart_data.into_iter().map(Into::into).collect(),
            monthly_series: raw.monthly_chart_data.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AhuOpening, ChilledWaterTemp, CoolingWaterTemp, Location};
    use serde_json::json;

    #[test]
    fn test_request_maps_form_fields() {
        let input = SimulationInput {
            location: Location::Tokyo,
            chilled_water_temp: ChilledWaterTemp::C7,
            cooling_water_temp: CoolingWaterTemp::C30,
            ahu_opening: AhuOpening::P90,
        };
        let body = serde_json::to_value(PredictionRequest::new(&input, BuildingType::Office)).unwrap();
        assert_eq!(
            body,
            json!({
                "cooling_water_temperature_setpoint": "7",
                "chiller_setpoint_temperature": "30",
                "ahu_opening_percentage": "90",
                "city": "tokyo",
                "building_type": "1"
            })
        );
    }

    #[test]
    fn test_mall_uses_code_two() {
        let input = SimulationInput {
            location: Location::Delhi,
            chilled_water_temp: ChilledWaterTemp::C6,
            cooling_water_temp: CoolingWaterTemp::C29,
            ahu_opening: AhuOpening::P80,
        };
        assert_eq!(PredictionRequest::new(&input, BuildingType::Mall).building_type, "2");
    }

    #[test]
    fn test_response_decodes_into_result() {
        let raw: RawPrediction = serde_json::from_value(json!({
            "Energy_Consumption_without_SaverX": 1200.5,
            "Predicted_Energy_Consumption_with_SaverX": 1000.0,
            "Predicted_Savings": 16.7,
            "two_day_chart_data": [{"date": "2024-01-01-10:05", "normal": 10.0, "saverx": 8.0}],
            "monthly_chart_data": []
        }))
        .unwrap();
        let result = PredictionResult::from(raw);
        assert_eq!(result.energy_without_system, 1200.5);
        assert_eq!(result.savings_percent, 16.7);
        assert_eq!(result.daily_series, vec![ChartPoint::new("2024-01-01-10:05", 10.0, 8.0)]);
        assert!(result.monthly_series.is_empty());
    }

    #[test]
    fn test_non_numeric_field_fails_decode() {
        let res = serde_json::from_value::<RawPrediction>(json!({
            "Energy_Consumption_without_SaverX": "lots",
            "Predicted_Energy_Consumption_with_SaverX": 1000.0,
            "Predicted_Savings": 16.7,
            "two_day_chart_data": [],
            "monthly_chart_data": []
        }));
        assert!(res.is_err());
    }
}
