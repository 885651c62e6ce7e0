//! Parsing strings back into date/time values
//!
//! The parser reads the same directive grammar as the formatter and drives a
//! [`Scanner`] over the input one directive at a time:
//! - names (`%a %A %b %B`) are matched against the caller's [`NameTable`]
//! - `%d %H %I %m %M %S %y` read exactly two digits, `%Y` four, `%w` one;
//!   `%I` must lie in `01`-`12`
//! - `%p` reads `AM`/`PM` and is folded into the hour once the whole pattern
//!   has been read
//! - any other pattern character must appear verbatim in the input
//!
//! `%c %x %X %j %U %W %Z` cannot be parsed and make the pattern unsupported.

use crate::datetime::DateTime;
use crate::error::{ParseError, ParseResult};
use crate::field::FieldBag;
use crate::names::NameTable;
use scanner::Scanner;
use tracing::{debug, trace};

const MERIDIANS: [&str; 2] = ["AM", "PM"];

/// Fields collected while walking the pattern.
#[derive(Debug, Default)]
struct Parsed {
    fields: FieldBag,
    hour12: Option<i64>,
    meridian: Option<usize>,
    weekday: Option<u32>,
}

impl Parsed {
    /// Fold `%I` and `%p` into `hours`.
    ///
    /// A 12-hour value counts 12 as 0 before the meridian applies. PM adds
    /// 12 hours modulo 24 to whatever hour was read.
    fn resolve_hours(&mut self) {
        if let Some(hour12) = self.hour12 {
            self.fields.hours = Some(hour12 % 12);
        }
        if let (Some(1), Some(hours)) = (self.meridian, self.fields.hours) {
            self.fields.hours = Some((hours + 12) % 24);
        }
        self.meridian = None;
    }
}

fn scan_two_digits(scanner: &mut Scanner<'_>) -> ParseResult<i64> {
    Ok(i64::from(scanner.scan_int(2)?))
}

impl DateTime {
    /// Parse `input` according to `pattern`.
    ///
    /// Fields the pattern does not mention take their value from the current
    /// time, subject to the cascading reset (a pattern with `%H` yields zero
    /// milliseconds). Out-of-range values carry: `31/02/1985` with
    /// `%d/%m/%Y` is 3 March 1985. When the pattern names the weekday, the
    /// result must fall on that weekday. Input left over after the last
    /// directive is ignored.
    ///
    /// ```
    /// use datetime::{DateTime, NameTable};
    ///
    /// let dt = DateTime::parse("08/05/1985 01:00:22", "%d/%m/%Y %H:%M:%S", &NameTable::english()).unwrap();
    /// assert_eq!((dt.year(), dt.month(), dt.day()), (1985, 5, 8));
    /// assert_eq!(dt.milliseconds(), 0);
    /// ```
    pub fn parse(input: &str, pattern: &str, names: &NameTable) -> ParseResult<DateTime> {
        let mut scanner = Scanner::new(input);
        let mut parsed = Parsed::default();
        let mut literal = [0u8; 4];

        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                scanner.skip_string(c.encode_utf8(&mut literal))?;
                continue;
            }
            let Some(directive) = chars.next() else {
                scanner.skip_string("%")?;
                break;
            };
            trace!(%directive, position = scanner.position(), "parsing directive");

            let fields = &mut parsed.fields;
            match directive {
                'a' => {
                    parsed.weekday = Some(scanner.scan_array(names.abbreviated_day_names())? as u32)
                }
                'A' => parsed.weekday = Some(scanner.scan_array(names.day_names())? as u32),
                'b' => {
                    fields.month = Some(scanner.scan_array(names.abbreviated_month_names())? as i64 + 1)
                }
                'B' => fields.month = Some(scanner.scan_array(names.month_names())? as i64 + 1),
                'd' => fields.day = Some(scan_two_digits(&mut scanner)?),
                'H' => fields.hours = Some(scan_two_digits(&mut scanner)?),
                'I' => {
                    let position = scanner.position();
                    let hour = scan_two_digits(&mut scanner)?;
                    if !(1..=12).contains(&hour) {
                        return Err(ParseError::HourOutOfRange { position, hour });
                    }
                    parsed.hour12 = Some(hour);
                }
                'm' => fields.month = Some(scan_two_digits(&mut scanner)?),
                'M' => fields.minutes = Some(scan_two_digits(&mut scanner)?),
                'p' => parsed.meridian = Some(scanner.scan_array(&MERIDIANS)?),
                'S' => fields.seconds = Some(scan_two_digits(&mut scanner)?),
                'w' => parsed.weekday = Some(scanner.scan_int(1)?),
                'y' => {
                    let year = scan_two_digits(&mut scanner)?;
                    fields.year = Some(year + if year > 70 { 1900 } else { 2000 });
                }
                'Y' => fields.year = Some(i64::from(scanner.scan_int(4)?)),
                '%' => scanner.skip_string("%")?,
                'c' | 'j' | 'U' | 'W' | 'x' | 'X' | 'Z' => {
                    return Err(ParseError::UnsupportedDirective(directive))
                }
                other => {
                    scanner.skip_string("%")?;
                    scanner.skip_string(other.encode_utf8(&mut literal))?;
                }
            }
        }

        if !scanner.is_at_end() {
            trace!(rest = scanner.remaining(), "ignoring input after pattern");
        }

        parsed.resolve_hours();
        let datetime = DateTime::from_fields(&parsed.fields).map_err(ParseError::InvalidDate)?;

        if let Some(weekday) = parsed.weekday {
            let actual = datetime.day_of_week();
            if actual != weekday {
                return Err(ParseError::WeekdayMismatch {
                    parsed: weekday,
                    actual,
                });
            }
        }
        Ok(datetime)
    }

    /// Like [`parse`](DateTime::parse), with failure reported as `None`.
    ///
    /// Malformed input is an expected outcome here: the reason is logged at
    /// debug level and dropped.
    pub fn create_from_string(input: &str, pattern: &str, names: &NameTable) -> Option<DateTime> {
        match DateTime::parse(input, pattern, names) {
            Ok(datetime) => Some(datetime),
            Err(error) => {
                debug!(input, pattern, %error, "rejected date string");
                None
            }
        }
    }
}
