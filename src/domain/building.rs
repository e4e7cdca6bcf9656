use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum BuildingType {
    #[default]
    Office,
    Mall,
}

/// 3D scene the building-info panel renders for a building type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingScene {
    OfficeTower,
    ShoppingMall,
}

impl BuildingType {
    /// `building_type` value expected by the prediction service.
    pub fn wire_code(self) -> &'static str {
        match self {
            Self::Office => "1",
            Self::Mall => "2",
        }
    }

    pub fn scene(self) -> BuildingScene {
        match self {
            Self::Office => BuildingScene::OfficeTower,
            Self::Mall => BuildingScene::ShoppingMall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_tables() {
        assert_eq!(BuildingType::Office.wire_code(), "1");
        assert_eq!(BuildingType::Mall.wire_code(), "2");
        assert_eq!(BuildingType::Mall.scene(), BuildingScene::ShoppingMall);
        assert_eq!(BuildingType::default(), BuildingType::Office);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("mall".parse::<BuildingType>().unwrap(), BuildingType::Mall);
        assert_eq!("OFFICE".parse::<BuildingType>().unwrap(), BuildingType::Office);
        assert!("warehouse".parse::<BuildingType>().is_err());
    }
}
