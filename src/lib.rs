//! Footprint: carbon footprint questionnaire and emissions estimator
//!
//! raw answers → parse → estimate → chart / JSON / HTTP

pub mod core;
pub mod types;

// =============================================================================
// CATEGORY COEFFICIENTS - kg CO2 per year
// =============================================================================

/// kg CO2 per hour of driving
pub const DRIVING_KG_PER_HOUR: f64 = 12.5;

/// Public transport, kg CO2 per trip
pub const PUBLIC_TRANSPORT_KG_PER_TRIP: f64 = 0.6;

/// Domestic flight, kg CO2 per flight
pub const DOMESTIC_FLIGHT_KG: f64 = 250.0;

/// International flight, kg CO2 per flight
pub const INTERNATIONAL_FLIGHT_KG: f64 = 500.0;

/// kg CO2 per meat meal
pub const MEAT_MEAL_KG: f64 = 5.0;

/// kg CO2 per new electronic device
pub const DEVICE_KG: f64 = 120.0;

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;

// =============================================================================
// LOOKUP TABLES - flat annual figures
// =============================================================================

pub const CAR_ELECTRIC_KG: f64 = 1800.0;
pub const CAR_HYBRID_KG: f64 = 3000.0;
pub const CAR_PETROL_DIESEL_KG: f64 = 4600.0;

pub const HEATING_GAS_KG: f64 = 2800.0;
pub const HEATING_ELECTRIC_KG: f64 = 4500.0;

pub const CLOTHING_RARELY_KG: f64 = 90.0;
pub const CLOTHING_OCCASIONALLY_KG: f64 = 270.0;
pub const CLOTHING_FREQUENTLY_KG: f64 = 540.0;

// =============================================================================
// REDUCTIONS - subtracted from the raw total, never from a category
// =============================================================================

/// Energy reduction = factor × consciousness × scale
pub const ENERGY_REDUCTION_FACTOR: f64 = 0.453;
pub const ENERGY_REDUCTION_SCALE: f64 = 100.0;

/// Highest energy consciousness rating (slider 1-5, 0 = untouched)
pub const ENERGY_CONSCIOUSNESS_MAX: u8 = 5;

/// Share of the raw total removed for "Yes"
pub const RECYCLING_YES_SHARE: f64 = 0.30;

/// Share of the raw total removed for "Sometimes"
pub const RECYCLING_SOMETIMES_SHARE: f64 = 0.15;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
