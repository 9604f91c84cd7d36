//! Questionnaire answers, raw and parsed

use serde::{Deserialize, Serialize};
use crate::types::{CarType, HeatingSource, ClothingFrequency, Recycling};

/// A validated answer set, input of the estimator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Answer {
    /// Hours spent driving per day (finite, >= 0)
    pub hours_driving_per_day: f64,
    pub public_transport_trips_per_week: u32,
    pub domestic_flights_per_year: u32,
    pub international_flights_per_year: u32,
    pub meat_meals_per_week: u32,
    pub new_devices_per_year: u32,
    pub car_type: CarType,
    pub heating_cooling_source: HeatingSource,
    pub clothing_purchase_frequency: ClothingFrequency,
    /// 1-5 rating; 0 when the slider was never moved
    pub energy_consciousness: u8,
    pub recycling: Recycling,
}

/// Answers exactly as collected: one string per field
///
/// Missing fields deserialize to the questionnaire's starting values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAnswers {
    pub hours_driving: String,
    pub public_transport_trips: String,
    pub domestic_flights: String,
    pub international_flights: String,
    pub meat_meals_per_week: String,
    pub new_devices_per_year: String,
    pub car_type: String,
    pub heating_cooling_source: String,
    pub clothing_purchase_frequency: String,
    pub energy_consciousness: String,
    pub recycling: String,
}

impl Default for RawAnswers {
    fn default() -> Self {
        Self {
            hours_driving: String::new(),
            public_transport_trips: String::new(),
            domestic_flights: String::new(),
            international_flights: String::new(),
            meat_meals_per_week: String::new(),
            new_devices_per_year: String::new(),
            car_type: CarType::None.label().to_string(),
            heating_cooling_source: HeatingSource::None.label().to_string(),
            clothing_purchase_frequency: String::new(),
            energy_consciousness: "0".to_string(),
            recycling: Recycling::No.label().to_string(),
        }
    }
}

impl RawAnswers {
    /// Mutable access by questionnaire key
    pub fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "hours_driving" => Some(&mut self.hours_driving),
            "public_transport_trips" => Some(&mut self.public_transport_trips),
            "domestic_flights" => Some(&mut self.domestic_flights),
            "international_flights" => Some(&mut self.international_flights),
            "meat_meals_per_week" => Some(&mut self.meat_meals_per_week),
            "new_devices_per_year" => Some(&mut self.new_devices_per_year),
            "car_type" => Some(&mut self.car_type),
            "heating_cooling_source" => Some(&mut self.heating_cooling_source),
            "clothing_purchase_frequency" => Some(&mut self.clothing_purchase_frequency),
            "energy_consciousness" => Some(&mut self.energy_consciousness),
            "recycling" => Some(&mut self.recycling),
            _ => None,
        }
    }

    /// Read access by questionnaire key
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "hours_driving" => Some(&self.hours_driving),
            "public_transport_trips" => Some(&self.public_transport_trips),
            "domestic_flights" => Some(&self.domestic_flights),
            "international_flights" => Some(&self.international_flights),
            "meat_meals_per_week" => Some(&self.meat_meals_per_week),
            "new_devices_per_year" => Some(&self.new_devices_per_year),
            "car_type" => Some(&self.car_type),
            "heating_cooling_source" => Some(&self.heating_cooling_source),
            "clothing_purchase_frequency" => Some(&self.clothing_purchase_frequency),
            "energy_consciousness" => Some(&self.energy_consciousness),
            "recycling" => Some(&self.recycling),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_defaults_match_questionnaire_start() {
        let raw = RawAnswers::default();
        assert_eq!(raw.car_type, "None");
        assert_eq!(raw.heating_cooling_source, "None");
        assert_eq!(raw.recycling, "No");
        assert_eq!(raw.energy_consciousness, "0");
        assert!(raw.hours_driving.is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let raw: RawAnswers = serde_json::from_str(r#"{"hours_driving": "2"}"#).unwrap();
        assert_eq!(raw.hours_driving, "2");
        assert_eq!(raw.recycling, "No");
    }

    #[test]
    fn test_field_access() {
        let mut raw = RawAnswers::default();
        *raw.field_mut("meat_meals_per_week").unwrap() = "7".to_string();
        assert_eq!(raw.field("meat_meals_per_week"), Some("7"));
        assert!(raw.field_mut("unknown").is_none());
    }
}
