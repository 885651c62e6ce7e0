//! Month view state
//!
//! The grid always shows six full weeks (42 days) starting on the Monday on
//! or before the first of the month, so it includes trailing days of the
//! previous month and leading days of the next.

use datetime::{DateTime, DateTimeResult, FieldBag, NameTable};
use std::cmp::Ordering;
use tracing::debug;

/// Number of days shown in the grid
pub const VISIBLE_DAYS: usize = 42;

/// Display state of one grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// The day, at the time of day of the view's first visible day
    pub date: DateTime,
    /// Day of the month shown in the cell
    pub day: u32,
    /// Whether the day belongs to the displayed month
    pub in_current_month: bool,
    /// Whether the day is today
    pub is_today: bool,
    /// Whether the day is the selection
    pub is_selected: bool,
    /// Whether the day lies within the selection bounds
    pub is_selectable: bool,
}

/// Selection model behind a month calendar.
///
/// # Examples
///
/// ```
/// use calendar::MonthView;
/// use datetime::{DateTime, FieldBag};
///
/// let may = DateTime::from_fields(&FieldBag::new().year(1985).month(5).day(8)).unwrap();
/// let view = MonthView::new(&may).unwrap();
/// let first = view.first_visible_day().unwrap();
/// assert_eq!((first.month(), first.day()), (4, 29));
/// ```
#[derive(Debug, Clone)]
pub struct MonthView {
    month: DateTime,
    selection: Option<DateTime>,
    min_selection: Option<DateTime>,
    max_selection: Option<DateTime>,
}

impl MonthView {
    /// A view of the month containing `date`.
    ///
    /// The month is kept as its first day at midnight, so stepping from the
    /// 31st never skips a shorter month.
    pub fn new(date: &DateTime) -> DateTimeResult<Self> {
        Ok(MonthView {
            month: Self::first_of_month(date)?,
            selection: None,
            min_selection: None,
            max_selection: None,
        })
    }

    /// A view of the current month
    pub fn current() -> DateTimeResult<Self> {
        Self::new(&DateTime::now())
    }

    fn first_of_month(date: &DateTime) -> DateTimeResult<DateTime> {
        date.change(&FieldBag::new().day(1).hours(0))
    }

    /// Restrict selection to days between `min` and `max`, inclusive
    pub fn with_bounds(mut self, min: Option<DateTime>, max: Option<DateTime>) -> Self {
        self.min_selection = min;
        self.max_selection = max;
        self
    }

    /// First day of the displayed month
    pub fn month(&self) -> &DateTime {
        &self.month
    }

    /// The selected day, if any
    pub fn selection(&self) -> Option<&DateTime> {
        self.selection.as_ref()
    }

    /// Earliest selectable day
    pub fn min_selection(&self) -> Option<&DateTime> {
        self.min_selection.as_ref()
    }

    /// Latest selectable day
    pub fn max_selection(&self) -> Option<&DateTime> {
        self.max_selection.as_ref()
    }

    /// Monday on or before the first of the month
    pub fn first_visible_day(&self) -> DateTimeResult<DateTime> {
        self.month.beginning_of_week()
    }

    /// The 42 days of the grid, in order
    pub fn visible_days(&self) -> DateTimeResult<Vec<DateTime>> {
        let mut day = self.first_visible_day()?;
        let mut days = Vec::with_capacity(VISIBLE_DAYS);
        for _ in 0..VISIBLE_DAYS {
            let next = day.advance(&FieldBag::new().day(1))?;
            days.push(day);
            day = next;
        }
        Ok(days)
    }

    /// Whether `day` lies within the selection bounds, comparing dates only
    pub fn can_select(&self, day: &DateTime) -> bool {
        let after_min = self
            .min_selection
            .as_ref()
            .map_or(true, |min| min.compare_date(day) != Ordering::Greater);
        let before_max = self
            .max_selection
            .as_ref()
            .map_or(true, |max| max.compare_date(day) != Ordering::Less);
        after_min && before_max
    }

    /// Select `day` if it is selectable; returns whether it was
    pub fn select(&mut self, day: DateTime) -> bool {
        if !self.can_select(&day) {
            debug!(%day, "selection outside bounds");
            return false;
        }
        self.selection = Some(day);
        true
    }

    /// Select the grid cell at `index` (0-41).
    ///
    /// An index outside the grid selects nothing.
    pub fn select_index(&mut self, index: usize) -> DateTimeResult<bool> {
        if index >= VISIBLE_DAYS {
            debug!(index, "cell index outside grid");
            return Ok(false);
        }
        let offset = index as i64;
        let day = self
            .first_visible_day()?
            .advance(&FieldBag::new().day(offset))?;
        Ok(self.select(day))
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Show the next month unless its first day is past the maximum
    pub fn increment_month(&mut self) -> DateTimeResult<bool> {
        let next = self.month.advance(&FieldBag::new().month(1))?;
        if !self.can_select(&next) {
            debug!(month = %next, "next month outside bounds");
            return Ok(false);
        }
        self.month = next;
        Ok(true)
    }

    /// Show the previous month unless its last day is before the minimum
    pub fn decrement_month(&mut self) -> DateTimeResult<bool> {
        let previous = self.month.advance(&FieldBag::new().month(-1))?;
        let last_day = previous.change(&FieldBag::new().day(i64::from(previous.days_in_month())))?;
        if !self.can_select(&last_day) {
            debug!(month = %previous, "previous month outside bounds");
            return Ok(false);
        }
        self.month = previous;
        Ok(true)
    }

    /// Display state of every grid cell
    pub fn cells(&self) -> DateTimeResult<Vec<DayCell>> {
        let today = DateTime::now();
        let cells = self
            .visible_days()?
            .into_iter()
            .map(|date| DayCell {
                day: date.day(),
                in_current_month: date.month() == self.month.month(),
                is_today: date.compare_date(&today) == Ordering::Equal,
                is_selected: self
                    .selection
                    .as_ref()
                    .map_or(false, |selected| selected.compare_date(&date) == Ordering::Equal),
                is_selectable: self.can_select(&date),
                date,
            })
            .collect();
        Ok(cells)
    }

    /// Abbreviated weekday names in grid order, Monday first
    pub fn weekday_header(names: &NameTable) -> Vec<String> {
        (1..=7)
            .map(|day| names.abbreviated_day_name(day % 7).to_string())
            .collect()
    }

    /// Title of the displayed month, such as `May 1985`
    pub fn title(&self, names: &NameTable) -> String {
        self.month.to_formatted_string("%B %Y", names)
    }
}
