//! Local date/time value
//!
//! [`DateTime`] wraps a UTC instant with millisecond resolution and reads and
//! writes calendar fields in the host's local time zone:
//! - Construction from the current time, a [`FieldBag`], a timestamp or a string
//! - Enum-keyed and per-field getters
//! - A guarded in-place setter plus copy-producing `change`/`advance`
//! - Full, date-only and time-only comparison

use crate::error::{DateTimeError, DateTimeResult};
use crate::field::{Field, FieldBag};
use chrono::{
    Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
    Timelike, Utc,
};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use tracing::warn;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// A point in time viewed through the local calendar.
///
/// Values are independently owned: cloning copies the instant, so two holders
/// can never observe each other's edits. Public derivations (`change`,
/// `advance`, `beginning_of_week`) always return a new value and work on
/// frozen receivers too; only [`set`](DateTime::set) mutates in place, and it
/// refuses to touch a frozen value.
///
/// # Examples
///
/// ```
/// use datetime::{DateTime, FieldBag};
///
/// let birthday = DateTime::from_fields(
///     &FieldBag::new().year(1985).month(5).day(8).hours(1).seconds(22),
/// ).unwrap();
/// assert_eq!(birthday.month(), 5);
/// assert_eq!(birthday.day_of_week(), 3); // Wednesday
///
/// let later = birthday.advance(&FieldBag::new().month(1)).unwrap();
/// assert_eq!(later.month(), 6);
/// assert_eq!(later.seconds(), 22);
/// ```
#[derive(Debug, Clone)]
pub struct DateTime {
    instant: chrono::DateTime<Utc>,
    frozen: bool,
}

/// Local calendar components in signed, unnormalized form.
#[derive(Debug, Clone, Copy)]
struct Parts {
    year: i64,
    month: i64,
    day: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
}

impl Parts {
    fn of(local: &NaiveDateTime) -> Self {
        Parts {
            year: i64::from(local.year()),
            month: i64::from(local.month()),
            day: i64::from(local.day()),
            hours: i64::from(local.hour()),
            minutes: i64::from(local.minute()),
            seconds: i64::from(local.second()),
            milliseconds: i64::from(local.nanosecond() / 1_000_000),
        }
    }

    fn overwrite(&mut self, fields: &FieldBag) {
        for (field, value) in fields.iter() {
            match field {
                Field::Year => self.year = value,
                Field::Month => self.month = value,
                Field::Day => self.day = value,
                Field::Hours => self.hours = value,
                Field::Minutes => self.minutes = value,
                Field::Seconds => self.seconds = value,
                Field::Milliseconds => self.milliseconds = value,
                Field::DayOfWeek => {}
            }
        }
    }

    /// Local wall-clock time with every overflow carried into the next
    /// coarser unit.
    fn normalize(&self) -> DateTimeResult<NaiveDateTime> {
        let out_of_range = |field, value| DateTimeError::OutOfRange { field, value };
        let month0 = self
            .month
            .checked_sub(1)
            .ok_or_else(|| out_of_range(Field::Month, self.month))?;
        let year = self
            .year
            .checked_add(month0.div_euclid(12))
            .ok_or_else(|| out_of_range(Field::Year, self.year))?;
        let month = month0.rem_euclid(12) as u32 + 1;

        let first = i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, 1))
            .ok_or_else(|| out_of_range(Field::Year, year))?;
        let date = self
            .day
            .checked_sub(1)
            .and_then(TimeDelta::try_days)
            .and_then(|days| first.checked_add_signed(days))
            .ok_or_else(|| out_of_range(Field::Day, self.day))?;

        let millis = self
            .hours
            .checked_mul(MS_PER_HOUR)
            .zip(self.minutes.checked_mul(MS_PER_MINUTE))
            .zip(self.seconds.checked_mul(MS_PER_SECOND))
            .and_then(|((h, m), s)| h.checked_add(m)?.checked_add(s)?.checked_add(self.milliseconds))
            .ok_or_else(|| out_of_range(Field::Hours, self.hours))?;
        TimeDelta::try_milliseconds(millis)
            .and_then(|delta| date.and_time(NaiveTime::MIN).checked_add_signed(delta))
            .ok_or_else(|| out_of_range(Field::Milliseconds, millis))
    }
}

/// Map a local wall-clock time to an instant.
///
/// Ambiguous times (clocks set back) take the earlier instant. Times skipped
/// by a forward transition are read with the offset in force before the gap,
/// which lands them the gap's length later.
fn resolve_local(local: NaiveDateTime) -> Option<chrono::DateTime<Utc>> {
    match Local.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let before = local.checked_sub_signed(TimeDelta::days(1))?;
            let offset = Local.offset_from_local_datetime(&before).earliest()?;
            let utc = local
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

impl DateTime {
    /// The current instant
    pub fn now() -> Self {
        DateTime {
            instant: Utc::now(),
            frozen: false,
        }
    }

    /// The instant `ms` milliseconds after 1970-01-01T00:00:00Z
    pub fn from_timestamp_millis(ms: i64) -> DateTimeResult<Self> {
        let instant = chrono::DateTime::<Utc>::from_timestamp_millis(ms).ok_or(
            DateTimeError::OutOfRange {
                field: Field::Milliseconds,
                value: ms,
            },
        )?;
        Ok(DateTime {
            instant,
            frozen: false,
        })
    }

    /// Create a value from an option bag.
    ///
    /// Fields left out of the bag take their value from the current time,
    /// except that the cascading reset of [`change`](DateTime::change)
    /// applies: `{hours: 9}` yields 09:00:00.000 today.
    pub fn from_fields(fields: &FieldBag) -> DateTimeResult<Self> {
        let mut datetime = DateTime::now();
        datetime.apply(&fields.with_cascading_reset())?;
        Ok(datetime)
    }

    /// Milliseconds since 1970-01-01T00:00:00Z
    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    pub(crate) fn local(&self) -> chrono::DateTime<Local> {
        self.instant.with_timezone(&Local)
    }

    fn naive_local(&self) -> NaiveDateTime {
        self.local().naive_local()
    }

    /// Read one field
    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::Year => i64::from(self.year()),
            Field::Month => i64::from(self.month()),
            Field::Day => i64::from(self.day()),
            Field::DayOfWeek => i64::from(self.day_of_week()),
            Field::Hours => i64::from(self.hours()),
            Field::Minutes => i64::from(self.minutes()),
            Field::Seconds => i64::from(self.seconds()),
            Field::Milliseconds => i64::from(self.milliseconds()),
        }
    }

    /// Full year
    pub fn year(&self) -> i32 {
        self.naive_local().year()
    }

    /// Month of the year (1-12)
    pub fn month(&self) -> u32 {
        self.naive_local().month()
    }

    /// Day of the month (1-31)
    pub fn day(&self) -> u32 {
        self.naive_local().day()
    }

    /// Day of the week (0 = Sunday, 6 = Saturday)
    pub fn day_of_week(&self) -> u32 {
        self.naive_local().weekday().num_days_from_sunday()
    }

    /// Hour of the day (0-23)
    pub fn hours(&self) -> u32 {
        self.naive_local().hour()
    }

    /// Minute of the hour (0-59)
    pub fn minutes(&self) -> u32 {
        self.naive_local().minute()
    }

    /// Second of the minute (0-59)
    pub fn seconds(&self) -> u32 {
        self.naive_local().second()
    }

    /// Millisecond of the second (0-999)
    pub fn milliseconds(&self) -> u32 {
        self.naive_local().nanosecond() / 1_000_000
    }

    /// Whether the year is a Gregorian leap year
    pub fn is_leap_year(&self) -> bool {
        Self::is_leap_year_of(self.year())
    }

    /// Number of days in the month (28-31)
    pub fn days_in_month(&self) -> u32 {
        Self::days_in_month_of(self.year(), self.month())
    }

    /// Gregorian leap-year rule
    pub fn is_leap_year_of(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Number of days in `month` (1-12) of `year`
    pub fn days_in_month_of(year: i32, month: u32) -> u32 {
        match month {
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year_of(year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Write one field in place.
    ///
    /// The value goes straight into the calendar with no cascading; overflow
    /// carries (setting month 13 moves to January of the next year). Fails on
    /// a frozen value and on the read-only `DayOfWeek`.
    pub fn set(&mut self, field: Field, value: i64) -> DateTimeResult<()> {
        let mut fields = FieldBag::new();
        fields.set(field, value)?;
        self.apply(&fields)
    }

    /// Write every supplied field at once, then normalize.
    fn apply(&mut self, fields: &FieldBag) -> DateTimeResult<()> {
        if self.frozen {
            warn!(?fields, "attempted to modify a frozen date/time");
            return Err(DateTimeError::Frozen);
        }
        if fields.is_empty() {
            return Ok(());
        }

        let mut parts = Parts::of(&self.naive_local());
        parts.overwrite(fields);
        let local = parts.normalize()?;
        self.instant = resolve_local(local).ok_or(DateTimeError::OutOfRange {
            field: Field::Year,
            value: parts.year,
        })?;
        Ok(())
    }

    /// A new value with `fields` overwritten, applying the cascading reset.
    ///
    /// Supplying `hours` zeroes unsupplied `minutes`, `seconds` and
    /// `milliseconds`; supplying `minutes` zeroes `seconds` and
    /// `milliseconds`; supplying `seconds` zeroes `milliseconds`. The result is
    /// never frozen, even if `self` is.
    pub fn change(&self, fields: &FieldBag) -> DateTimeResult<DateTime> {
        let mut copy = self.copy();
        copy.apply(&fields.with_cascading_reset())?;
        Ok(copy)
    }

    /// A new value with each supplied delta added to the current field value,
    /// then [`change`](DateTime::change)d with the sums.
    ///
    /// `advance({month: 1})` means next month, not January. Deltas are
    /// integers; the cascading reset still applies, so advancing by one hour
    /// zeroes the minutes.
    pub fn advance(&self, deltas: &FieldBag) -> DateTimeResult<DateTime> {
        let mut target = FieldBag::new();
        for (field, delta) in deltas.iter() {
            let value = self
                .get(field)
                .checked_add(delta)
                .ok_or(DateTimeError::OutOfRange { field, value: delta })?;
            target.set(field, value)?;
        }
        self.change(&target)
    }

    /// Monday 00:00:00.000 of this value's week
    pub fn beginning_of_week(&self) -> DateTimeResult<DateTime> {
        let days_to_monday = match self.day_of_week() {
            0 => 6,
            dow => i64::from(dow) - 1,
        };
        self.change(
            &FieldBag::new()
                .day(i64::from(self.day()) - days_to_monday)
                .hours(0),
        )
    }

    /// Order by instant
    pub fn compare(&self, other: &DateTime) -> Ordering {
        self.instant.cmp(&other.instant)
    }

    /// Order by local `(year, month, day)` only
    pub fn compare_date(&self, other: &DateTime) -> Ordering {
        let (a, b) = (self.naive_local().date(), other.naive_local().date());
        (a.year(), a.month(), a.day()).cmp(&(b.year(), b.month(), b.day()))
    }

    /// Order by local `(hours, minutes, seconds, milliseconds)` only
    pub fn compare_time(&self, other: &DateTime) -> Ordering {
        let key = |dt: &DateTime| {
            let local = dt.naive_local();
            (
                local.hour(),
                local.minute(),
                local.second(),
                local.nanosecond() / 1_000_000,
            )
        };
        key(self).cmp(&key(other))
    }

    /// Whether this value falls on the current local date
    pub fn is_today(&self) -> bool {
        self.compare_date(&DateTime::now()) == Ordering::Equal
    }

    /// Forbid further in-place mutation
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// This value, frozen
    pub fn frozen(mut self) -> Self {
        self.freeze();
        self
    }

    /// Whether the value is frozen
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// An unfrozen copy of the same instant
    pub fn copy(&self) -> DateTime {
        DateTime {
            instant: self.instant,
            frozen: false,
        }
    }
}

impl Default for DateTime {
    fn default() -> Self {
        DateTime::now()
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for DateTime {}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for DateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}
