//! Vimshottari dasha timeline: which period is running at a given instant.

use crate::payload::{DashaInfo, DashaPeriod};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an instant from `primary`, falling back to `fallback`.
///
/// Accepts RFC 3339, a naive date-time or a bare `Y-M-D` date. Naive values are
/// taken as UTC.
pub fn parse_period_instant(primary: Option<&str>, fallback: Option<&str>) -> Option<DateTime<Utc>> {
    primary
        .and_then(parse_instant)
        .or_else(|| fallback.and_then(parse_instant))
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn from_parts(year: Option<f64>, month: Option<f64>, day: Option<f64>) -> Option<DateTime<Utc>> {
    let (year, month, day) = (year?, month?, day?);
    if !(year.is_finite() && month.is_finite() && day.is_finite()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}

impl DashaPeriod {
    pub fn start(&self) -> Option<DateTime<Utc>> {
        parse_period_instant(self.start_datetime.as_deref(), self.start_date.as_deref())
            .or_else(|| from_parts(self.start_year, self.start_month, self.start_day))
    }

    /// `None` means the period is open-ended.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        parse_period_instant(self.end_datetime.as_deref(), self.end_date.as_deref())
            .or_else(|| from_parts(self.end_year, self.end_month, self.end_day))
    }

    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        match self.start() {
            Some(start) if now >= start => self.end().map_or(true, |end| now <= end),
            _ => false,
        }
    }
}

/// First period running at `now`.
pub fn active_period_index(periods: &[DashaPeriod], now: DateTime<Utc>) -> Option<usize> {
    periods.iter().position(|period| period.contains(now))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    Past,
    Active,
    Future,
}

/// Status of every period relative to the active one.
pub fn period_statuses(periods: &[DashaPeriod], now: DateTime<Utc>) -> Vec<PeriodStatus> {
    let active = active_period_index(periods, now);
    (0..periods.len())
        .map(|index| match active {
            Some(a) if index == a => PeriodStatus::Active,
            Some(a) if index < a => PeriodStatus::Past,
            _ => PeriodStatus::Future,
        })
        .collect()
}

/// Planet ruling at `now`, then the payload's own `current_dasha`.
pub fn current_planet(info: &DashaInfo, now: DateTime<Utc>) -> String {
    active_period_index(&info.periods, now)
        .map(|i| info.periods[i].planet.clone())
        .or_else(|| info.current_dasha.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaEntry {
    pub planet: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub years: Option<f64>,
    pub status: PeriodStatus,
}

/// Resolved timeline for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaTimeline {
    pub current_planet: String,
    pub moon_nakshatra: Option<String>,
    pub active_index: Option<usize>,
    pub entries: Vec<DashaEntry>,
}

impl DashaTimeline {
    pub fn resolve(info: &DashaInfo, now: DateTime<Utc>) -> Self {
        let statuses = period_statuses(&info.periods, now);
        let entries = info
            .periods
            .iter()
            .zip(statuses)
            .map(|(period, status)| DashaEntry {
                planet: period.planet.clone(),
                start: period.start(),
                end: period.end(),
                years: period.years,
                status,
            })
            .collect();
        let active_index = active_period_index(&info.periods, now);
        log::trace!("dasha: {} periods, active {:?}", info.periods.len(), active_index);
        Self {
            current_planet: current_planet(info, now),
            moon_nakshatra: info.moon_nakshatra_name.clone(),
            active_index,
            entries,
        }
    }
}
