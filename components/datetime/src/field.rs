//! Calendar fields and field bags
//!
//! A [`FieldBag`] is the plain-data option bag collaborators hand to
//! construction, [`change`](crate::DateTime::change) and
//! [`advance`](crate::DateTime::advance). Every slot is optional; an empty
//! slot means "leave this field alone".

use crate::error::{DateTimeError, DateTimeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One calendar component of a date/time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Full year
    Year,
    /// Month of the year, January is 1
    Month,
    /// Day of the month, starting at 1
    Day,
    /// Day of the week, Sunday is 0 (read-only)
    DayOfWeek,
    /// Hour of the day, 0-23
    Hours,
    /// Minute of the hour
    Minutes,
    /// Second of the minute
    Seconds,
    /// Millisecond of the second
    Milliseconds,
}

impl Field {
    /// Every field, coarsest first
    pub const ALL: [Field; 8] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::DayOfWeek,
        Field::Hours,
        Field::Minutes,
        Field::Seconds,
        Field::Milliseconds,
    ];

    /// Fields that can be written, coarsest first
    pub const SETTABLE: [Field; 7] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Hours,
        Field::Minutes,
        Field::Seconds,
        Field::Milliseconds,
    ];

    /// The field's name as used in option bags
    pub fn name(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::DayOfWeek => "dayOfWeek",
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
            Field::Milliseconds => "milliseconds",
        }
    }

    /// Whether the field can be written
    pub fn is_settable(self) -> bool {
        self != Field::DayOfWeek
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional values for each settable field.
///
/// Values are signed and unbounded so that bags can carry deltas and
/// out-of-range values; the calendar normalizes them when they are applied
/// (month 13 becomes January of the next year, day 0 the last day of the
/// previous month, and so on).
///
/// # Examples
///
/// ```
/// use datetime::FieldBag;
///
/// let bag = FieldBag::new().year(1985).month(5).day(8);
/// assert_eq!(bag.month, Some(5));
/// assert_eq!(bag.hours, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldBag {
    /// Full year
    pub year: Option<i64>,
    /// Month, January is 1
    pub month: Option<i64>,
    /// Day of the month
    pub day: Option<i64>,
    /// Hour of the day
    pub hours: Option<i64>,
    /// Minute of the hour
    pub minutes: Option<i64>,
    /// Second of the minute
    pub seconds: Option<i64>,
    /// Millisecond of the second
    pub milliseconds: Option<i64>,
}

impl FieldBag {
    /// An empty bag
    pub fn new() -> Self {
        FieldBag::default()
    }

    /// Read a bag from a JSON object such as `{"year": 1985, "month": 5}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the year
    pub fn year(mut self, value: i64) -> Self {
        self.year = Some(value);
        self
    }

    /// Set the month (January is 1)
    pub fn month(mut self, value: i64) -> Self {
        self.month = Some(value);
        self
    }

    /// Set the day of the month
    pub fn day(mut self, value: i64) -> Self {
        self.day = Some(value);
        self
    }

    /// Set the hours
    pub fn hours(mut self, value: i64) -> Self {
        self.hours = Some(value);
        self
    }

    /// Set the minutes
    pub fn minutes(mut self, value: i64) -> Self {
        self.minutes = Some(value);
        self
    }

    /// Set the seconds
    pub fn seconds(mut self, value: i64) -> Self {
        self.seconds = Some(value);
        self
    }

    /// Set the milliseconds
    pub fn milliseconds(mut self, value: i64) -> Self {
        self.milliseconds = Some(value);
        self
    }

    fn slot(&self, field: Field) -> Option<&Option<i64>> {
        match field {
            Field::Year => Some(&self.year),
            Field::Month => Some(&self.month),
            Field::Day => Some(&self.day),
            Field::DayOfWeek => None,
            Field::Hours => Some(&self.hours),
            Field::Minutes => Some(&self.minutes),
            Field::Seconds => Some(&self.seconds),
            Field::Milliseconds => Some(&self.milliseconds),
        }
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut Option<i64>> {
        match field {
            Field::Year => Some(&mut self.year),
            Field::Month => Some(&mut self.month),
            Field::Day => Some(&mut self.day),
            Field::DayOfWeek => None,
            Field::Hours => Some(&mut self.hours),
            Field::Minutes => Some(&mut self.minutes),
            Field::Seconds => Some(&mut self.seconds),
            Field::Milliseconds => Some(&mut self.milliseconds),
        }
    }

    /// Value supplied for `field`, if any
    pub fn get(&self, field: Field) -> Option<i64> {
        self.slot(field).copied().flatten()
    }

    /// Store `value` for `field`
    pub fn set(&mut self, field: Field, value: i64) -> DateTimeResult<()> {
        let slot = self
            .slot_mut(field)
            .ok_or(DateTimeError::ReadOnlyField(field))?;
        *slot = Some(value);
        Ok(())
    }

    /// Whether no field is supplied
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Supplied fields with their values, coarsest first
    pub fn iter(&self) -> impl Iterator<Item = (Field, i64)> + '_ {
        Field::SETTABLE
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    /// Fill every empty slot of `self` from `other`
    pub fn or(self, other: FieldBag) -> FieldBag {
        FieldBag {
            year: self.year.or(other.year),
            month: self.month.or(other.month),
            day: self.day.or(other.day),
            hours: self.hours.or(other.hours),
            minutes: self.minutes.or(other.minutes),
            seconds: self.seconds.or(other.seconds),
            milliseconds: self.milliseconds.or(other.milliseconds),
        }
    }

    /// This bag with the cascading reset applied.
    ///
    /// Supplying a time field zeroes every finer time field that is not
    /// supplied itself: `hours` resets `minutes`, `hours` or `minutes` reset
    /// `seconds`, and any of the three resets `milliseconds`. Date fields
    /// neither trigger nor receive a reset.
    ///
    /// ```
    /// use datetime::FieldBag;
    ///
    /// let bag = FieldBag::new().hours(3).with_cascading_reset();
    /// assert_eq!(bag, FieldBag::new().hours(3).minutes(0).seconds(0).milliseconds(0));
    /// ```
    pub fn with_cascading_reset(self) -> FieldBag {
        let hours = self.hours.is_some();
        let minutes = self.minutes.is_some();
        let seconds = self.seconds.is_some();

        let mut resets = FieldBag::new();
        if hours {
            resets.minutes = Some(0);
        }
        if hours || minutes {
            resets.seconds = Some(0);
        }
        if hours || minutes || seconds {
            resets.milliseconds = Some(0);
        }
        self.or(resets)
    }
}
