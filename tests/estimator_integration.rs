//! Integration tests for the estimation path
//!
//! raw answers → parse → estimate → breakdown

use pretty_assertions::assert_eq;
use footprint::core::{EmissionsEstimator, Questionnaire, render_chart, ChartStyle};
use footprint::types::{
    Answer, RawAnswers, Category, InvalidInputError,
    CarType, HeatingSource, ClothingFrequency, Recycling,
};

fn raw(pairs: &[(&str, &str)]) -> RawAnswers {
    let mut raw = RawAnswers {
        hours_driving: "0".into(),
        public_transport_trips: "0".into(),
        domestic_flights: "0".into(),
        international_flights: "0".into(),
        meat_meals_per_week: "0".into(),
        new_devices_per_year: "0".into(),
        ..RawAnswers::default()
    };
    for (key, value) in pairs {
        *raw.field_mut(key).unwrap() = value.to_string();
    }
    raw
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Test the full path from raw strings
#[test]
fn test_full_path() {
    let estimator = EmissionsEstimator::new();
    let input = raw(&[
        ("hours_driving", "1.5"),
        ("public_transport_trips", "4"),
        ("domestic_flights", "2"),
        ("international_flights", "1"),
        ("meat_meals_per_week", "7"),
        ("new_devices_per_year", "2"),
        ("car_type", "Hybrid"),
        ("heating_cooling_source", "Gas"),
        ("clothing_purchase_frequency", "Occasionally"),
        ("energy_consciousness", "3"),
        ("recycling", "Sometimes"),
    ]);

    let answer = estimator.parse(&input).unwrap();
    assert_eq!(
        answer,
        Answer {
            hours_driving_per_day: 1.5,
            public_transport_trips_per_week: 4,
            domestic_flights_per_year: 2,
            international_flights_per_year: 1,
            meat_meals_per_week: 7,
            new_devices_per_year: 2,
            car_type: CarType::Hybrid,
            heating_cooling_source: HeatingSource::Gas,
            clothing_purchase_frequency: ClothingFrequency::Occasionally,
            energy_consciousness: 3,
            recycling: Recycling::Sometimes,
        }
    );

    let b = estimator.estimate(&answer);
    let expected_raw = 6843.75 + 124.8 + 1000.0 + 1820.0 + 240.0 + 3000.0 + 2800.0 + 270.0;
    assert!(close(b.raw_total, expected_raw));
    assert!(close(b.energy_reduction, 135.9));
    assert!(close(b.recycling_reduction, 0.15 * expected_raw));
    assert!(close(b.total, expected_raw - 135.9 - 0.15 * expected_raw));
}

/// Breakdown values sum to the raw total, not the reduced total
#[test]
fn test_breakdown_sums_to_raw_total() {
    let estimator = EmissionsEstimator::new();
    let b = estimator
        .estimate_raw(&raw(&[("meat_meals_per_week", "14"), ("recycling", "Yes"), ("energy_consciousness", "2")]))
        .unwrap();

    let sum: f64 = b.contributions.iter().map(|c| c.value).sum();
    assert!(close(sum, b.raw_total));
    assert!(b.total < sum);
}

/// Categories always come out in display order
#[test]
fn test_category_order() {
    let b = EmissionsEstimator::new().estimate(&Answer::default());
    let order: Vec<Category> = b.contributions.iter().map(|c| c.category).collect();
    assert_eq!(order, Category::ALL.to_vec());
}

/// Electric car alone
#[test]
fn test_electric_car_alone() {
    let b = EmissionsEstimator::new()
        .estimate_raw(&raw(&[("car_type", "Electric")]))
        .unwrap();
    assert_eq!(b.value(Category::Car), 1800.0);
    assert_eq!(b.raw_total, 1800.0);
}

/// Unrecognised labels contribute nothing
#[test]
fn test_unrecognised_labels() {
    let b = EmissionsEstimator::new()
        .estimate_raw(&raw(&[
            ("car_type", "Horse"),
            ("heating_cooling_source", "Wood"),
            ("clothing_purchase_frequency", "Daily"),
            ("recycling", "Occasionally"),
        ]))
        .unwrap();
    assert_eq!(b.total, 0.0);
}

/// Non-numeric input fails atomically
#[test]
fn test_invalid_numbers() {
    let estimator = EmissionsEstimator::new();
    for key in [
        "hours_driving",
        "public_transport_trips",
        "domestic_flights",
        "international_flights",
        "meat_meals_per_week",
        "new_devices_per_year",
        "energy_consciousness",
    ] {
        let result = estimator.estimate_raw(&raw(&[(key, "abc")]));
        assert_eq!(result, Err(InvalidInputError), "{} accepted non-numeric text", key);
    }
}

/// Same input, same output
#[test]
fn test_idempotent() {
    let estimator = EmissionsEstimator::new();
    let input = raw(&[("hours_driving", "2"), ("car_type", "Petrol/Diesel"), ("recycling", "Yes")]);
    let first = estimator.estimate_raw(&input).unwrap();
    let second = estimator.estimate_raw(&input).unwrap();
    assert_eq!(first, second);
}

/// Questionnaire run ending in a chart
#[test]
fn test_questionnaire_to_chart() {
    let mut q = Questionnaire::new();
    for text in ["0", "10", "0", "0", "0", "0", "None", "Solar", "", "1", "Yes"] {
        q.answer(text);
        q.next();
    }
    let b = q.calculate().unwrap();
    assert!(close(b.total, 173.1));

    let chart = render_chart(&b, ChartStyle { color: false, verbose: false });
    assert!(chart.contains("173.10 kg CO2/year"));
    assert!(chart.contains("100.0%"));
}
