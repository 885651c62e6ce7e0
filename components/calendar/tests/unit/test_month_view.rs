//! Unit tests for MonthView grid, selection and navigation

use calendar::{MonthView, VISIBLE_DAYS};
use datetime::{DateTime, FieldBag};

fn date(year: i64, month: i64, day: i64) -> DateTime {
    DateTime::from_fields(&FieldBag::new().year(year).month(month).day(day)).unwrap()
}

fn ymd(value: &DateTime) -> (i32, u32, u32) {
    (value.year(), value.month(), value.day())
}

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn test_first_visible_day_is_monday_before_first() {
        let view = MonthView::new(&date(1985, 5, 8)).unwrap();
        let first = view.first_visible_day().unwrap();
        assert_eq!(ymd(&first), (1985, 4, 29));
        assert_eq!(first.day_of_week(), 1);
    }

    #[test]
    fn test_first_visible_day_when_month_starts_monday() {
        // 1 April 1985 was a Monday
        let view = MonthView::new(&date(1985, 4, 20)).unwrap();
        assert_eq!(ymd(&view.first_visible_day().unwrap()), (1985, 4, 1));
    }

    #[test]
    fn test_visible_days_are_consecutive() {
        let view = MonthView::new(&date(1985, 5, 8)).unwrap();
        let days = view.visible_days().unwrap();
        assert_eq!(days.len(), VISIBLE_DAYS);
        assert_eq!(ymd(&days[0]), (1985, 4, 29));
        assert_eq!(ymd(&days[2]), (1985, 5, 1));
        assert_eq!(ymd(&days[41]), (1985, 6, 9));
        for pair in days.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_cells_mark_current_month() {
        let view = MonthView::new(&date(1985, 5, 8)).unwrap();
        let cells = view.cells().unwrap();
        assert_eq!(cells.iter().filter(|cell| cell.in_current_month).count(), 31);
        assert!(!cells[0].in_current_month);
        assert_eq!(cells[0].day, 29);
        assert!(cells[2].in_current_month);
        assert!(cells.iter().all(|cell| cell.is_selectable));
        assert!(cells.iter().all(|cell| !cell.is_selected));
    }

    #[test]
    fn test_current_month_contains_today_once() {
        let view = MonthView::current().unwrap();
        let cells = view.cells().unwrap();
        assert_eq!(cells.iter().filter(|cell| cell.is_today).count(), 1);
    }
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    fn bounded_may() -> MonthView {
        MonthView::new(&date(1985, 5, 8))
            .unwrap()
            .with_bounds(Some(date(1985, 5, 10)), Some(date(1985, 5, 20)))
    }

    #[test]
    fn test_can_select_compares_dates_only() {
        let view = bounded_may();
        let late_on_min = date(1985, 5, 10)
            .change(&FieldBag::new().hours(23))
            .unwrap();
        assert!(view.can_select(&late_on_min));
        assert!(view.can_select(&date(1985, 5, 20)));
        assert!(!view.can_select(&date(1985, 5, 9)));
        assert!(!view.can_select(&date(1985, 5, 21)));
    }

    #[test]
    fn test_unbounded_view_selects_anything() {
        let view = MonthView::new(&date(1985, 5, 8)).unwrap();
        assert!(view.can_select(&date(1, 1, 1)));
        assert!(view.can_select(&date(9999, 12, 31)));
    }

    #[test]
    fn test_select_index_within_bounds() {
        let mut view = bounded_may();
        assert!(view.select_index(13).unwrap());
        assert_eq!(ymd(view.selection().unwrap()), (1985, 5, 12));

        let cells = view.cells().unwrap();
        assert!(cells[13].is_selected);
        assert_eq!(cells.iter().filter(|cell| cell.is_selected).count(), 1);
    }

    #[test]
    fn test_select_index_outside_bounds_keeps_selection() {
        let mut view = bounded_may();
        view.select_index(13).unwrap();
        assert!(!view.select_index(0).unwrap());
        assert_eq!(ymd(view.selection().unwrap()), (1985, 5, 12));
    }

    #[test]
    fn test_select_index_outside_grid_selects_nothing() {
        let mut view = MonthView::new(&date(1985, 5, 8)).unwrap();
        assert!(!view.select_index(VISIBLE_DAYS).unwrap());
        assert!(!view.select_index(100).unwrap());
        assert!(view.selection().is_none());

        assert!(view.select_index(VISIBLE_DAYS - 1).unwrap());
        assert_eq!(ymd(view.selection().unwrap()), (1985, 6, 9));
    }

    #[test]
    fn test_selectable_cells_follow_bounds() {
        let view = bounded_may();
        let cells = view.cells().unwrap();
        assert_eq!(cells.iter().filter(|cell| cell.is_selectable).count(), 11);
    }

    #[test]
    fn test_clear_selection() {
        let mut view = MonthView::new(&date(1985, 5, 8)).unwrap();
        assert!(view.select(date(1985, 5, 8)));
        view.clear_selection();
        assert!(view.selection().is_none());
    }
}

#[cfg(test)]
mod navigation_tests {
    use super::*;

    #[test]
    fn test_increment_from_month_end_lands_on_next_month() {
        let mut view = MonthView::new(&date(1985, 1, 31)).unwrap();
        assert!(view.increment_month().unwrap());
        assert_eq!(ymd(view.month()), (1985, 2, 1));
    }

    #[test]
    fn test_navigation_crosses_year() {
        let mut view = MonthView::new(&date(1985, 12, 15)).unwrap();
        assert!(view.increment_month().unwrap());
        assert_eq!(ymd(view.month()), (1986, 1, 1));
        assert!(view.decrement_month().unwrap());
        assert!(view.decrement_month().unwrap());
        assert_eq!(ymd(view.month()), (1985, 11, 1));
    }

    #[test]
    fn test_navigation_blocked_by_bounds() {
        let mut view = MonthView::new(&date(1985, 5, 8))
            .unwrap()
            .with_bounds(Some(date(1985, 5, 10)), Some(date(1985, 5, 20)));
        assert!(!view.increment_month().unwrap());
        assert!(!view.decrement_month().unwrap());
        assert_eq!(ymd(view.month()), (1985, 5, 1));
    }

    #[test]
    fn test_navigation_allowed_when_bound_touches_month() {
        let mut view = MonthView::new(&date(1985, 5, 8))
            .unwrap()
            .with_bounds(Some(date(1985, 4, 30)), Some(date(1985, 6, 1)));
        assert!(view.increment_month().unwrap());
        assert_eq!(ymd(view.month()), (1985, 6, 1));
        assert!(!view.increment_month().unwrap());

        assert!(view.decrement_month().unwrap());
        assert!(view.decrement_month().unwrap());
        assert_eq!(ymd(view.month()), (1985, 4, 1));
        assert!(!view.decrement_month().unwrap());
    }
}
