//! Property-based tests for the forecast aggregation core
//!
//! These tests use proptest to verify the aggregation invariants across many
//! random inputs.

use domain::value_objects::CityName;
use domain::{DailySummary, FORECAST_DAYS, RawSample, aggregate_daily};
use proptest::prelude::*;

/// Strategy for a plausible 3-hour sample on one of a handful of dates
fn sample_strategy() -> impl Strategy<Value = RawSample> {
    (
        1u32..=9u32,
        0u32..=7u32,
        -40.0f64..=45.0f64,
        prop_oneof![
            Just("Clear"),
            Just("Clouds"),
            Just("Rain"),
            Just("Snow"),
            Just("Thunderstorm"),
        ],
    )
        .prop_map(|(day, slot, temperature, condition)| {
            RawSample::new(
                format!("2024-04-{day:02} {:02}:00:00", slot * 3),
                temperature,
                condition,
                condition.to_lowercase(),
            )
        })
}

fn distinct_dates(samples: &[RawSample]) -> Vec<&str> {
    let mut dates: Vec<&str> = Vec::new();
    for sample in samples {
        let date = sample.timestamp.split(' ').next().unwrap_or_default();
        if !dates.contains(&date) {
            dates.push(date);
        }
    }
    dates
}

proptest! {
    #[test]
    fn output_length_is_min_of_five_and_distinct_dates(
        samples in prop::collection::vec(sample_strategy(), 1..60)
    ) {
        let result = aggregate_daily(&samples).unwrap();
        let expected = distinct_dates(&samples).len().min(FORECAST_DAYS);
        prop_assert_eq!(result.len(), expected);
    }

    #[test]
    fn mean_is_bounded_by_min_and_max(
        samples in prop::collection::vec(sample_strategy(), 1..60)
    ) {
        let result = aggregate_daily(&samples).unwrap();
        for day in &result {
            prop_assert!(day.temp_min <= day.temp, "min {} > mean {}", day.temp_min, day.temp);
            prop_assert!(day.temp <= day.temp_max, "mean {} > max {}", day.temp, day.temp_max);
        }
    }

    #[test]
    fn output_dates_follow_first_seen_input_order(
        samples in prop::collection::vec(sample_strategy(), 1..60)
    ) {
        let result = aggregate_daily(&samples).unwrap();
        let expected: Vec<&str> = distinct_dates(&samples)
            .into_iter()
            .take(FORECAST_DAYS)
            .collect();
        let actual: Vec<&str> = result.iter().map(|d| d.date.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn dominant_condition_occurs_in_that_days_samples(
        samples in prop::collection::vec(sample_strategy(), 1..60)
    ) {
        let result = aggregate_daily(&samples).unwrap();
        for day in &result {
            let seen = samples.iter().any(|s| {
                s.timestamp.starts_with(&day.date) && s.condition == day.condition
            });
            prop_assert!(seen, "condition {} never observed on {}", day.condition, day.date);
        }
    }

    #[test]
    fn aggregation_is_deterministic(
        samples in prop::collection::vec(sample_strategy(), 1..40)
    ) {
        let first: Vec<DailySummary> = aggregate_daily(&samples).unwrap();
        let second: Vec<DailySummary> = aggregate_daily(&samples).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn city_name_accepts_reasonable_input(name in "[A-Za-z][A-Za-z ]{0,40}") {
        // Names made of letters and interior spaces always survive trimming
        prop_assume!(!name.trim().is_empty());
        let city = CityName::new(&name);
        prop_assert!(city.is_ok());
        let city = city.unwrap();
        prop_assert_eq!(city.as_str(), name.trim());
    }
}
