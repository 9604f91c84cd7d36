//! Categorical answers and their label lookups
//!
//! Labels are matched case-insensitively with spaces and punctuation ignored,
//! so "Petrol/Diesel" and "petrol diesel" select the same choice. A label
//! that matches nothing takes the type's fallback.

use serde::{Deserialize, Serialize};

/// Lowercase alphanumerics only
fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Car owned by the respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CarType {
    Electric,
    Hybrid,
    PetrolDiesel,
    #[default]
    None,
}

impl CarType {
    /// Labels offered by the questionnaire, in display order
    pub const LABELS: &'static [&'static str] = &["Electric", "Hybrid", "Petrol/Diesel", "None"];

    /// Unknown labels fall back to `None`
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "electric" => Self::Electric,
            "hybrid" => Self::Hybrid,
            "petroldiesel" | "petrol" | "diesel" => Self::PetrolDiesel,
            _ => Self::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Electric => "Electric",
            Self::Hybrid => "Hybrid",
            Self::PetrolDiesel => "Petrol/Diesel",
            Self::None => "None",
        }
    }
}

/// Primary source of heating and cooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeatingSource {
    Gas,
    Electric,
    Solar,
    #[default]
    None,
}

impl HeatingSource {
    pub const LABELS: &'static [&'static str] = &["Gas", "Electric", "Solar", "None"];

    /// Unknown labels fall back to `None`
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "gas" => Self::Gas,
            "electric" => Self::Electric,
            "solar" => Self::Solar,
            _ => Self::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gas => "Gas",
            Self::Electric => "Electric",
            Self::Solar => "Solar",
            Self::None => "None",
        }
    }
}

/// How often new clothing or household items are bought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClothingFrequency {
    Rarely,
    Occasionally,
    Frequently,
    /// No recognised answer; contributes nothing
    #[default]
    Unspecified,
}

impl ClothingFrequency {
    pub const LABELS: &'static [&'static str] = &["Rarely", "Occasionally", "Frequently"];

    /// Unknown or empty labels fall back to `Unspecified`
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "rarely" => Self::Rarely,
            "occasionally" => Self::Occasionally,
            "frequently" => Self::Frequently,
            _ => Self::Unspecified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rarely => "Rarely",
            Self::Occasionally => "Occasionally",
            Self::Frequently => "Frequently",
            Self::Unspecified => "",
        }
    }
}

/// Whether the respondent recycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Recycling {
    Yes,
    #[default]
    No,
    Sometimes,
}

impl Recycling {
    pub const LABELS: &'static [&'static str] = &["Yes", "No", "Sometimes"];

    /// Unknown labels fall back to `No`
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "yes" => Self::Yes,
            "sometimes" => Self::Sometimes,
            _ => Self::No,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Sometimes => "Sometimes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for label in CarType::LABELS {
            assert_eq!(CarType::from_label(label).label(), *label);
        }
        for label in HeatingSource::LABELS {
            assert_eq!(HeatingSource::from_label(label).label(), *label);
        }
        for label in ClothingFrequency::LABELS {
            assert_eq!(ClothingFrequency::from_label(label).label(), *label);
        }
        for label in Recycling::LABELS {
            assert_eq!(Recycling::from_label(label).label(), *label);
        }
    }

    #[test]
    fn test_loose_matching() {
        assert_eq!(CarType::from_label("petrol diesel"), CarType::PetrolDiesel);
        assert_eq!(CarType::from_label("  HYBRID "), CarType::Hybrid);
        assert_eq!(Recycling::from_label("sometimes"), Recycling::Sometimes);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(CarType::from_label("Hovercraft"), CarType::None);
        assert_eq!(HeatingSource::from_label(""), HeatingSource::None);
        assert_eq!(ClothingFrequency::from_label("Weekly"), ClothingFrequency::Unspecified);
        assert_eq!(Recycling::from_label("maybe"), Recycling::No);
    }
}
