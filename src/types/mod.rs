//! Core types for Footprint

mod choice;
mod answer;
mod breakdown;
mod error;
mod report;

pub use choice::{CarType, HeatingSource, ClothingFrequency, Recycling};
pub use answer::{Answer, RawAnswers};
pub use breakdown::{Category, Contribution, EmissionsBreakdown};
pub use error::InvalidInputError;
pub use report::{EstimateReport, answers_digest};
