//! strftime-style formatting
//!
//! Supported directives:
//!
//! | Directive | Output |
//! |---|---|
//! | `%a` `%A` | abbreviated / full weekday name |
//! | `%b` `%B` | abbreviated / full month name |
//! | `%c` | date and time, `Wed May 08 1985 01:00:22 GMT+0200` |
//! | `%d` | day of the month, `01`-`31` |
//! | `%H` `%I` | hour on the 24 / 12 hour clock, `00`-`23` / `01`-`12` |
//! | `%m` `%M` `%S` | month, minute, second, two digits |
//! | `%p` | `AM` or `PM` |
//! | `%w` | weekday number, Sunday is `0` |
//! | `%x` `%X` | date only / time only parts of `%c` |
//! | `%y` `%Y` | two-digit / full year |
//! | `%%` | a literal `%` |
//!
//! `%j`, `%U`, `%W` and `%Z` are reserved and produce nothing. Any other
//! `%`-sequence, and a trailing lone `%`, is copied as is.

use crate::datetime::DateTime;
use crate::names::NameTable;
use std::fmt;

fn pad(value: u32) -> String {
    format!("{:02}", value)
}

impl DateTime {
    /// Format according to `pattern`, taking names from `names`.
    ///
    /// ```
    /// use datetime::{DateTime, FieldBag, NameTable};
    ///
    /// let dt = DateTime::from_fields(&FieldBag::new().year(1985).month(5).day(8).hours(13)).unwrap();
    /// assert_eq!(dt.to_formatted_string("%A %d %B %Y, %I %p", &NameTable::english()), "Wednesday 08 May 1985, 01 PM");
    /// ```
    pub fn to_formatted_string(&self, pattern: &str, names: &NameTable) -> String {
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some(directive) => match self.directive(directive, names) {
                    Some(text) => out.push_str(&text),
                    None => {
                        out.push('%');
                        out.push(directive);
                    }
                },
                None => out.push('%'),
            }
        }
        out
    }

    /// Text for one directive, `None` if the directive is unknown.
    fn directive(&self, directive: char, names: &NameTable) -> Option<String> {
        let hours = self.hours();
        let text = match directive {
            'a' => names.abbreviated_day_name(self.day_of_week()).to_string(),
            'A' => names.day_name(self.day_of_week()).to_string(),
            'b' => names.abbreviated_month_name(self.month()).to_string(),
            'B' => names.month_name(self.month()).to_string(),
            'c' => format!("{} {}", self.date_string(names), self.time_string()),
            'd' => pad(self.day()),
            'H' => pad(hours),
            'I' => pad(if hours == 0 || hours == 12 { 12 } else { hours % 12 }),
            'm' => pad(self.month()),
            'M' => pad(self.minutes()),
            'p' => (if hours < 12 { "AM" } else { "PM" }).to_string(),
            'S' => pad(self.seconds()),
            'w' => self.day_of_week().to_string(),
            'x' => self.date_string(names),
            'X' => self.time_string(),
            'y' => pad(self.year().rem_euclid(100) as u32),
            'Y' => self.year().to_string(),
            'j' | 'U' | 'W' | 'Z' => String::new(),
            '%' => "%".to_string(),
            _ => return None,
        };
        Some(text)
    }

    /// Date part of `%c`: `Wed May 08 1985`
    fn date_string(&self, names: &NameTable) -> String {
        format!(
            "{} {} {:02} {:04}",
            names.abbreviated_day_name(self.day_of_week()),
            names.abbreviated_month_name(self.month()),
            self.day(),
            self.year()
        )
    }

    /// Time part of `%c`: `01:00:22 GMT+0200`
    fn time_string(&self) -> String {
        let offset_seconds = self.local().offset().local_minus_utc();
        let offset_hours = offset_seconds.abs() / 3600;
        let offset_minutes = (offset_seconds.abs() % 3600) / 60;
        let offset_sign = if offset_seconds >= 0 { '+' } else { '-' };

        format!(
            "{:02}:{:02}:{:02} GMT{}{:02}{:02}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            offset_sign,
            offset_hours,
            offset_minutes
        )
    }
}

/// Renders `%c` with English names
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formatted_string("%c", &NameTable::english()))
    }
}
