//! Estimation output: per-category contributions and the reduced total

use serde::{Deserialize, Serialize};

/// The eight emission categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Driving,
    PublicTransport,
    Flights,
    MeatConsumption,
    Electronics,
    Car,
    HeatingCooling,
    Clothing,
}

impl Category {
    /// Display order
    pub const ALL: [Category; 8] = [
        Category::Driving,
        Category::PublicTransport,
        Category::Flights,
        Category::MeatConsumption,
        Category::Electronics,
        Category::Car,
        Category::HeatingCooling,
        Category::Clothing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Driving => "Driving",
            Category::PublicTransport => "Public Transport",
            Category::Flights => "Flights",
            Category::MeatConsumption => "Meat Consumption",
            Category::Electronics => "Electronics",
            Category::Car => "Car",
            Category::HeatingCooling => "Heating/Cooling",
            Category::Clothing => "Clothing",
        }
    }

    /// Bar colour for terminal charts
    pub fn color(&self) -> colored::Color {
        use colored::Color;
        match self {
            Category::Driving => Color::Blue,
            Category::PublicTransport => Color::BrightBlue,
            Category::Flights => Color::Green,
            Category::MeatConsumption => Color::Red,
            Category::Electronics => Color::Magenta,
            Category::Car => Color::Yellow,
            Category::HeatingCooling => Color::BrightRed,
            Category::Clothing => Color::Cyan,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One category's pre-reduction share, kg CO2/year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub category: Category,
    pub value: f64,
}

/// Result of a single estimation
///
/// `contributions` are raw figures and sum to `raw_total`. `total` has both
/// reductions applied, so the two do not agree whenever a reduction is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsBreakdown {
    /// One entry per category, in `Category::ALL` order
    pub contributions: Vec<Contribution>,
    /// Sum of contributions
    pub raw_total: f64,
    pub energy_reduction: f64,
    pub recycling_reduction: f64,
    /// raw_total - energy_reduction - recycling_reduction, not clamped
    pub total: f64,
}

impl EmissionsBreakdown {
    /// Build from raw contributions and the answer's reductions
    pub fn new(contributions: Vec<Contribution>, energy_reduction: f64, recycling_share: f64) -> Self {
        let raw_total: f64 = contributions.iter().map(|c| c.value).sum();
        let recycling_reduction = recycling_share * raw_total;
        Self {
            contributions,
            raw_total,
            energy_reduction,
            recycling_reduction,
            total: raw_total - energy_reduction - recycling_reduction,
        }
    }

    /// Contribution of one category (0 if absent)
    pub fn value(&self, category: Category) -> f64 {
        self.contributions
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.value)
            .unwrap_or(0.0)
    }

    /// Share of `raw_total` in percent; 0 when nothing was emitted
    pub fn share_percent(&self, category: Category) -> f64 {
        if self.raw_total > 0.0 {
            self.value(category) / self.raw_total * 100.0
        } else {
            0.0
        }
    }

    pub fn total_reduction(&self) -> f64 {
        self.energy_reduction + self.recycling_reduction
    }

    /// Reductions exceed the raw total
    pub fn is_net_negative(&self) -> bool {
        self.total < 0.0
    }
}
