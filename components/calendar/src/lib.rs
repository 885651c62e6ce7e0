//! Month calendar selection model.
//!
//! [`MonthView`] holds the displayed month, the selected day and optional
//! selection bounds, and computes the six-week grid a view renders. It does
//! no rendering and handles no input events itself.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod month_view;

pub use month_view::{DayCell, MonthView, VISIBLE_DAYS};
