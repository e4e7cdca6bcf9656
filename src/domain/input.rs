use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Location {
    Hyderabad,
    Delhi,
    Chennai,
    Tokyo,
    Houston,
    Dusseldorf,
}

impl Location {
    /// Label shown by the form's location picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hyderabad => "Hyderabad (IND)",
            Self::Delhi => "Delhi (IND)",
            Self::Chennai => "Chennai (IND)",
            Self::Tokyo => "Tokyo (JP)",
            Self::Houston => "Houston (US)",
            Self::Dusseldorf => "Dusseldorf (DE)",
        }
    }
}

/// Chilled water temperature setpoint in °C.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
pub enum ChilledWaterTemp {
    #[serde(rename = "6")]
    #[strum(serialize = "6")]
    C6,
    #[serde(rename = "7")]
    #[strum(serialize = "7")]
    C7,
    #[serde(rename = "8")]
    #[strum(serialize = "8")]
    C8,
    #[serde(rename = "9")]
    #[strum(serialize = "9")]
    C9,
}

/// Cooling tower water temperature in °C.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
pub enum CoolingWaterTemp {
    #[serde(rename = "29")]
    #[strum(serialize = "29")]
    C29,
    #[serde(rename = "30")]
    #[strum(serialize = "30")]
    C30,
    #[serde(rename = "31")]
    #[strum(serialize = "31")]
    C31,
}

/// Air handling unit opening in percent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
pub enum AhuOpening {
    #[serde(rename = "80")]
    #[strum(serialize = "80")]
    P80,
    #[serde(rename = "90")]
    #[strum(serialize = "90")]
    P90,
    #[serde(rename = "100")]
    #[strum(serialize = "100")]
    P100,
}

/// A validated form submission. Consumed by exactly one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    pub location: Location,
    pub chilled_water_temp: ChilledWaterTemp,
    pub cooling_water_temp: CoolingWaterTemp,
    pub ahu_opening: AhuOpening,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("incomplete form: {0}")]
    Missing(#[from] ValidationErrors),

    #[error("invalid {field}: {value:?}")]
    InvalidChoice { field: &'static str, value: String },
}

/// Raw form state as the presentation layer collects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulationForm {
    #[validate(required(message = "Please select a location"))]
    pub location: Option<String>,

    #[validate(required(message = "Please select chilled water temperature"))]
    pub chilled_water_temp: Option<String>,

    #[validate(required(message = "Please select cooling water temperature"))]
    pub cooling_water_temp: Option<String>,

    #[validate(required(message = "Please select AHU opening percentage"))]
    pub ahu_opening: Option<String>,
}

impl SimulationForm {
    /// Checks that every field is set and holds one of the offered choices.
    pub fn submit(&self) -> Result<SimulationInput, FormError> {
        self.validate()?;
        Ok(SimulationInput {
            location: parse_choice("location", self.location.as_deref())?,
            chilled_water_temp: parse_choice("chilledWaterTemp", self.chilled_water_temp.as_deref())?,
            cooling_water_temp: parse_choice("coolingWaterTemp", self.cooling_water_temp.as_deref())?,
            ahu_opening: parse_choice("ahuOpening", self.ahu_opening.as_deref())?,
        })
    }
}

fn parse_choice<T: std::str::FromStr>(field: &'static str, raw: Option<&str>) -> Result<T, FormError> {
    let value = raw.unwrap_or_default().trim();
    value.parse().map_err(|_| FormError::InvalidChoice {
        field,
        value: value.to_string(),
    })
}
