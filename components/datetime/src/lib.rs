//! Local date/time values with cascading field changes, formatting and parsing.
//!
//! This crate provides the date model behind calendar views:
//! - [`DateTime`] - an instant read through the local Gregorian calendar
//! - [`FieldBag`] - optional field values for construction, `change` and `advance`
//! - [`NameTable`] / [`LocaleRegistry`] - localized weekday and month names
//! - strftime-style [`DateTime::to_formatted_string`] and its inverse [`DateTime::parse`]
//! - [`DateTimeTransform`] - two-way conversion for text bindings
//!
//! # Example
//!
//! ```
//! use datetime::{DateTime, FieldBag, NameTable};
//!
//! let names = NameTable::english();
//! let dt = DateTime::from_fields(
//!     &FieldBag::new().year(1985).month(5).day(8).hours(1).seconds(22).milliseconds(925),
//! ).unwrap();
//!
//! assert_eq!(
//!     dt.to_formatted_string("%a %A %b %B %d %H %I %m %M %p %S %w %y %Y %%a", &names),
//!     "Wed Wednesday May May 08 01 01 05 00 AM 22 3 85 1985 %a"
//! );
//!
//! // Supplying hours resets the finer fields
//! let three = dt.change(&FieldBag::new().hours(3)).unwrap();
//! assert_eq!((three.minutes(), three.seconds(), three.milliseconds()), (0, 0, 0));
//!
//! let parsed = DateTime::create_from_string("08/05/1985", "%d/%m/%Y", &names).unwrap();
//! assert_eq!(parsed.compare_date(&dt), std::cmp::Ordering::Equal);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod datetime;
mod error;
mod field;
mod format;
mod names;
mod parse;
mod transform;

pub use datetime::DateTime;
pub use error::{
    DateTimeError, DateTimeResult, NameTableError, NameTableResult, ParseError, ParseResult,
};
pub use field::{Field, FieldBag};
pub use names::{LocaleRegistry, NameTable};
pub use transform::{BoundValue, DateTimeTransform};
