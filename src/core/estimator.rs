//! Emissions estimator: answers → category contributions → reduced total
//!
//! Contributions (kg CO2/year):
//! - Driving:          hours/day × 12.5 × 365
//! - Public transport: trips/week × 0.6 × 52
//! - Flights:          domestic × 250 + international × 500
//! - Meat:             meals/week × 5 × 52
//! - Electronics:      devices/year × 120
//! - Car, Heating/Cooling, Clothing: flat lookups
//!
//! Reductions come off the raw total only: 0.453 × consciousness × 100 for
//! energy, 30% / 15% / 0% of the raw total for recycling.

use log::debug;
use crate::{
    DRIVING_KG_PER_HOUR, PUBLIC_TRANSPORT_KG_PER_TRIP, DOMESTIC_FLIGHT_KG,
    INTERNATIONAL_FLIGHT_KG, MEAT_MEAL_KG, DEVICE_KG, DAYS_PER_YEAR, WEEKS_PER_YEAR,
    CAR_ELECTRIC_KG, CAR_HYBRID_KG, CAR_PETROL_DIESEL_KG,
    HEATING_GAS_KG, HEATING_ELECTRIC_KG,
    CLOTHING_RARELY_KG, CLOTHING_OCCASIONALLY_KG, CLOTHING_FREQUENTLY_KG,
    ENERGY_REDUCTION_FACTOR, ENERGY_REDUCTION_SCALE, ENERGY_CONSCIOUSNESS_MAX,
    RECYCLING_YES_SHARE, RECYCLING_SOMETIMES_SHARE,
};
use crate::types::{
    Answer, RawAnswers, Category, Contribution, EmissionsBreakdown, InvalidInputError,
    CarType, HeatingSource, ClothingFrequency, Recycling,
};

/// Stateless emissions estimator
#[derive(Debug, Default, Clone, Copy)]
pub struct EmissionsEstimator;

impl EmissionsEstimator {
    /// Create new estimator
    pub fn new() -> Self {
        Self
    }

    /// Estimate annual emissions for a validated answer set
    pub fn estimate(&self, answer: &Answer) -> EmissionsBreakdown {
        let contributions = Category::ALL
            .iter()
            .map(|&category| Contribution {
                category,
                value: self.contribution(answer, category),
            })
            .collect();

        EmissionsBreakdown::new(
            contributions,
            energy_reduction(answer.energy_consciousness),
            recycling_share(answer.recycling),
        )
    }

    /// Parse raw answers, failing on the first bad numeric field
    pub fn parse(&self, raw: &RawAnswers) -> Result<Answer, InvalidInputError> {
        Ok(Answer {
            hours_driving_per_day: parse_hours(&raw.hours_driving)
                .map_err(|e| log_rejected("hours_driving", e))?,
            public_transport_trips_per_week: parse_count(&raw.public_transport_trips)
                .map_err(|e| log_rejected("public_transport_trips", e))?,
            domestic_flights_per_year: parse_count(&raw.domestic_flights)
                .map_err(|e| log_rejected("domestic_flights", e))?,
            international_flights_per_year: parse_count(&raw.international_flights)
                .map_err(|e| log_rejected("international_flights", e))?,
            meat_meals_per_week: parse_count(&raw.meat_meals_per_week)
                .map_err(|e| log_rejected("meat_meals_per_week", e))?,
            new_devices_per_year: parse_count(&raw.new_devices_per_year)
                .map_err(|e| log_rejected("new_devices_per_year", e))?,
            car_type: CarType::from_label(&raw.car_type),
            heating_cooling_source: HeatingSource::from_label(&raw.heating_cooling_source),
            clothing_purchase_frequency: ClothingFrequency::from_label(&raw.clothing_purchase_frequency),
            energy_consciousness: parse_consciousness(&raw.energy_consciousness)
                .map_err(|e| log_rejected("energy_consciousness", e))?,
            recycling: Recycling::from_label(&raw.recycling),
        })
    }

    /// Parse then estimate; no breakdown on invalid input
    pub fn estimate_raw(&self, raw: &RawAnswers) -> Result<EmissionsBreakdown, InvalidInputError> {
        let answer = self.parse(raw)?;
        Ok(self.estimate(&answer))
    }

    /// Pre-reduction contribution of one category
    fn contribution(&self, answer: &Answer, category: Category) -> f64 {
        match category {
            Category::Driving => {
                answer.hours_driving_per_day * DRIVING_KG_PER_HOUR * DAYS_PER_YEAR
            }
            Category::PublicTransport => {
                answer.public_transport_trips_per_week as f64
                    * PUBLIC_TRANSPORT_KG_PER_TRIP
                    * WEEKS_PER_YEAR
            }
            Category::Flights => {
                answer.domestic_flights_per_year as f64 * DOMESTIC_FLIGHT_KG
                    + answer.international_flights_per_year as f64 * INTERNATIONAL_FLIGHT_KG
            }
            Category::MeatConsumption => {
                answer.meat_meals_per_week as f64 * MEAT_MEAL_KG * WEEKS_PER_YEAR
            }
            Category::Electronics => answer.new_devices_per_year as f64 * DEVICE_KG,
            Category::Car => car_emissions(answer.car_type),
            Category::HeatingCooling => heating_emissions(answer.heating_cooling_source),
            Category::Clothing => clothing_emissions(answer.clothing_purchase_frequency),
        }
    }
}

fn car_emissions(car: CarType) -> f64 {
    match car {
        CarType::Electric => CAR_ELECTRIC_KG,
        CarType::Hybrid => CAR_HYBRID_KG,
        CarType::PetrolDiesel => CAR_PETROL_DIESEL_KG,
        CarType::None => 0.0,
    }
}

fn heating_emissions(source: HeatingSource) -> f64 {
    match source {
        HeatingSource::Gas => HEATING_GAS_KG,
        HeatingSource::Electric => HEATING_ELECTRIC_KG,
        HeatingSource::Solar | HeatingSource::None => 0.0,
    }
}

fn clothing_emissions(frequency: ClothingFrequency) -> f64 {
    match frequency {
        ClothingFrequency::Rarely => CLOTHING_RARELY_KG,
        ClothingFrequency::Occasionally => CLOTHING_OCCASIONALLY_KG,
        ClothingFrequency::Frequently => CLOTHING_FREQUENTLY_KG,
        ClothingFrequency::Unspecified => 0.0,
    }
}

fn energy_reduction(consciousness: u8) -> f64 {
    ENERGY_REDUCTION_FACTOR * consciousness as f64 * ENERGY_REDUCTION_SCALE
}

fn recycling_share(recycling: Recycling) -> f64 {
    match recycling {
        Recycling::Yes => RECYCLING_YES_SHARE,
        Recycling::Sometimes => RECYCLING_SOMETIMES_SHARE,
        Recycling::No => 0.0,
    }
}

fn log_rejected(field: &str, err: InvalidInputError) -> InvalidInputError {
    debug!("rejected answer for {}", field);
    err
}

/// Non-negative finite real
fn parse_hours(text: &str) -> Result<f64, InvalidInputError> {
    let value: f64 = text.trim().parse().map_err(|_| InvalidInputError)?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidInputError)
    }
}

/// Non-negative whole number
fn parse_count(text: &str) -> Result<u32, InvalidInputError> {
    text.trim().parse().map_err(|_| InvalidInputError)
}

/// 0 ..= 5
fn parse_consciousness(text: &str) -> Result<u8, InvalidInputError> {
    let value: u8 = text.trim().parse().map_err(|_| InvalidInputError)?;
    if value <= ENERGY_CONSCIOUSNESS_MAX {
        Ok(value)
    } else {
        Err(InvalidInputError)
    }
}

// =============================================================================
// TESTS
// =============================================================================
