//! Forecast aggregation
//!
//! Reduces the provider's 3-hour forecast readings into at most
//! [`FORECAST_DAYS`] daily summaries: temperature range and mean per calendar
//! date, plus the dominant condition and description labels for that date.
//!
//! The aggregation is a pure, synchronous reduction. It owns no external
//! resource and is safe to call concurrently from independent invocations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Maximum number of daily summaries one aggregation emits
pub const FORECAST_DAYS: usize = 5;

/// One 3-hour forecast reading as delivered by the upstream provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Sample timestamp, "YYYY-MM-DD HH:MM:SS"
    pub timestamp: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Primary condition label, e.g. "Rain"
    pub condition: String,
    /// Detailed description, e.g. "light rain"
    pub description: String,
}

impl RawSample {
    /// Create a new sample
    pub fn new(
        timestamp: impl Into<String>,
        temperature: f64,
        condition: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            temperature,
            condition: condition.into(),
            description: description.into(),
        }
    }
}

/// One aggregated day of forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar date, "YYYY-MM-DD"
    pub date: String,
    /// English weekday name, e.g. "Monday"
    pub day_of_week: String,
    /// Mean temperature in Celsius, rounded
    pub temp: i32,
    /// Minimum temperature in Celsius, rounded
    pub temp_min: i32,
    /// Maximum temperature in Celsius, rounded
    pub temp_max: i32,
    /// Dominant condition label for the day
    pub condition: String,
    /// Dominant detailed description for the day
    pub description: String,
}

/// Occurrence tally that preserves the first-seen order of labels
#[derive(Debug, Default)]
struct Tally {
    counts: Vec<(String, u32)>,
}

impl Tally {
    fn bump(&mut self, label: &str) {
        if let Some(entry) = self.counts.iter_mut().find(|(seen, _)| seen == label) {
            entry.1 += 1;
        } else {
            self.counts.push((label.to_string(), 1));
        }
    }

    /// Label with the highest count; on equal counts the earlier-seen label wins
    fn dominant(&self) -> &str {
        let mut best: Option<(&str, u32)> = None;
        for (label, count) in &self.counts {
            // Strict comparison keeps the first-seen label on ties
            if best.is_none_or(|(_, top)| *count > top) {
                best = Some((label, *count));
            }
        }
        best.map_or("", |(label, _)| label)
    }
}

/// Accumulator for one calendar date, in input order
#[derive(Debug)]
struct DayGroup {
    date: NaiveDate,
    date_str: String,
    temps: Vec<f64>,
    conditions: Tally,
    descriptions: Tally,
}

impl DayGroup {
    fn new(date: NaiveDate, date_str: &str) -> Self {
        Self {
            date,
            date_str: date_str.to_string(),
            temps: Vec::new(),
            conditions: Tally::default(),
            descriptions: Tally::default(),
        }
    }
}

/// Aggregate 3-hour forecast samples into at most [`FORECAST_DAYS`] daily
/// summaries, one per distinct calendar date, in the order dates first appear
/// in the input.
///
/// An empty input yields an empty output. Fewer than [`FORECAST_DAYS`]
/// distinct dates yield fewer summaries, never padded.
///
/// # Errors
///
/// Returns [`DomainError::InvalidSample`] when any sample is missing its date
/// or condition, carries a malformed date, or has a non-finite temperature.
/// A malformed record is an upstream contract violation and is never
/// silently skipped.
pub fn aggregate_daily(samples: &[RawSample]) -> Result<Vec<DailySummary>, DomainError> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for sample in samples {
        let (date, date_str) = parse_sample_date(sample)?;
        if sample.condition.trim().is_empty() {
            return Err(DomainError::invalid_sample(format!(
                "missing condition at {}",
                sample.timestamp
            )));
        }
        if !sample.temperature.is_finite() {
            return Err(DomainError::invalid_sample(format!(
                "non-finite temperature at {}",
                sample.timestamp
            )));
        }

        let idx = match groups.iter().position(|group| group.date_str == date_str) {
            Some(idx) => idx,
            None => {
                groups.push(DayGroup::new(date, date_str));
                groups.len() - 1
            },
        };
        let group = &mut groups[idx];
        group.temps.push(sample.temperature);
        group.conditions.bump(&sample.condition);
        group.descriptions.bump(&sample.description);
    }

    Ok(groups
        .into_iter()
        .take(FORECAST_DAYS)
        .map(summarize)
        .collect())
}

/// Extract and validate the calendar-date portion of a sample timestamp
fn parse_sample_date(sample: &RawSample) -> Result<(NaiveDate, &str), DomainError> {
    let date_str = sample
        .timestamp
        .split(' ')
        .next()
        .unwrap_or_default()
        .trim();
    if date_str.is_empty() {
        return Err(DomainError::invalid_sample("missing date".to_string()));
    }
    // Parsed as a plain calendar date: no time-of-day, no timezone conversion,
    // so the weekday can never shift to an adjacent day.
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        DomainError::invalid_sample(format!("malformed date: {date_str}"))
    })?;
    Ok((date, date_str))
}

#[allow(clippy::cast_possible_truncation)]
fn summarize(group: DayGroup) -> DailySummary {
    // A group only exists once a sample was recorded for it, so temps is
    // non-empty here.
    let max = group.temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = group.temps.iter().copied().fold(f64::INFINITY, f64::min);
    #[allow(clippy::cast_precision_loss)]
    let mean = group.temps.iter().sum::<f64>() / group.temps.len() as f64;

    DailySummary {
        day_of_week: group.date.format("%A").to_string(),
        date: group.date_str,
        temp: mean.round() as i32,
        temp_min: min.round() as i32,
        temp_max: max.round() as i32,
        condition: group.conditions.dominant().to_string(),
        description: group.descriptions.dominant().to_string(),
    }
}
