//! Configuration types for the scheduler.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `scheduler.yaml`. Every field has a default, so an
//! empty file (or a file that only overrides one section) is valid.

use chrono::{NaiveTime, Weekday};
use serde::Deserialize;

use crate::scheduling::{DEFAULT_LOOKBACK_MONTHS, DEFAULT_WEEK_START};

/// The day a scheduling week begins on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks begin on Monday.
    Monday,
    /// Weeks begin on Tuesday.
    Tuesday,
    /// Weeks begin on Wednesday.
    Wednesday,
    /// Weeks begin on Thursday.
    Thursday,
    /// Weeks begin on Friday.
    Friday,
    /// Weeks begin on Saturday.
    Saturday,
    /// Weeks begin on Sunday.
    Sunday,
}

impl WeekStart {
    /// Converts to the chrono weekday.
    pub fn to_weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Tuesday => Weekday::Tue,
            WeekStart::Wednesday => Weekday::Wed,
            WeekStart::Thursday => Weekday::Thu,
            WeekStart::Friday => Weekday::Fri,
            WeekStart::Saturday => Weekday::Sat,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl From<Weekday> for WeekStart {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => WeekStart::Monday,
            Weekday::Tue => WeekStart::Tuesday,
            Weekday::Wed => WeekStart::Wednesday,
            Weekday::Thu => WeekStart::Thursday,
            Weekday::Fri => WeekStart::Friday,
            Weekday::Sat => WeekStart::Saturday,
            Weekday::Sun => WeekStart::Sunday,
        }
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart::from(DEFAULT_WEEK_START)
    }
}

/// Settings for copying a prior period's roster forward.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// How many calendar months before the target the source week lies.
    pub lookback_months: u32,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            lookback_months: DEFAULT_LOOKBACK_MONTHS,
        }
    }
}

/// Presentation settings for payroll reports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Decimal places pay is rounded to when presented.
    pub pay_decimal_places: u32,
    /// Decimal places hours are rounded to when presented.
    pub hours_decimal_places: u32,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            pay_decimal_places: 2,
            hours_decimal_places: 2,
        }
    }
}

/// A wall-clock shift template, e.g. 23:00 to 07:00.
///
/// An end at or before the start means the shift finishes the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClockWindow {
    /// Clock time the shift starts.
    pub start: NaiveTime,
    /// Clock time the shift ends.
    pub end: NaiveTime,
}

impl ClockWindow {
    fn from_hours(start: u32, end: u32) -> Self {
        Self {
            start: NaiveTime::from_hms_opt(start, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(end, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// Templates used when seeding a default rotation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Day shift templates cycled through by day staff.
    pub day_shifts: Vec<ClockWindow>,
    /// The shift worked every day by night staff.
    pub night_shift: ClockWindow,
    /// Substring of an employee's position that marks them as night staff.
    pub night_position_marker: String,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            day_shifts: vec![ClockWindow::from_hours(7, 15), ClockWindow::from_hours(15, 23)],
            night_shift: ClockWindow::from_hours(23, 7),
            night_position_marker: "Night".to_string(),
        }
    }
}

/// Complete scheduler configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// The day weeks begin on.
    pub week_start: WeekStart,
    /// Period-copy settings.
    pub copy: CopyConfig,
    /// Report presentation settings.
    pub reporting: ReportingConfig,
    /// Rotation seeding templates.
    pub rotation: RotationConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.week_start.to_weekday(), Weekday::Sun);
        assert_eq!(config.copy.lookback_months, 1);
        assert_eq!(config.reporting.pay_decimal_places, 2);
        assert_eq!(config.rotation.day_shifts.len(), 2);
        assert_eq!(config.rotation.night_position_marker, "Night");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: SchedulerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let yaml = "week_start: monday\ncopy:\n  lookback_months: 3\n";
        let config: SchedulerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.copy.lookback_months, 3);
        assert_eq!(config.reporting, ReportingConfig::default());
    }

    #[test]
    fn test_clock_window_parses_times() {
        let yaml = "rotation:\n  night_shift:\n    start: \"22:00:00\"\n    end: \"06:00:00\"\n";
        let config: SchedulerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.rotation.night_shift.start,
            NaiveTime::from_hms_opt(22, 0, 0).unwrap()
        );
        assert_eq!(config.rotation.day_shifts.len(), 2);
    }

    #[test]
    fn test_unknown_week_start_rejected() {
        let result: Result<SchedulerConfig, _> = serde_yaml::from_str("week_start: someday");
        assert!(result.is_err());
    }
}
