//! Unit tests for DateTime construction, accessors and comparison

use datetime::{DateTime, DateTimeError, Field, FieldBag};
use std::cmp::Ordering;

fn test_hash() -> FieldBag {
    FieldBag::new()
        .year(1985)
        .month(5)
        .day(8)
        .hours(1)
        .minutes(0)
        .seconds(22)
        .milliseconds(925)
}

fn assert_fields(dt: &DateTime, expected: &FieldBag) {
    for (field, value) in expected.iter() {
        assert_eq!(dt.get(field), value, "field {}", field);
    }
}

#[cfg(test)]
mod accessor_tests {
    use super::*;

    #[test]
    fn test_create_from_field_bag() {
        let dt = DateTime::from_fields(&test_hash()).unwrap();
        assert_fields(&dt, &test_hash());
    }

    #[test]
    fn test_change_from_now() {
        let dt = DateTime::now().change(&test_hash()).unwrap();
        assert_fields(&dt, &test_hash());
    }

    #[test]
    fn test_setters_one_by_one() {
        let mut dt = DateTime::now();
        dt.set(Field::Year, 1985).unwrap();
        dt.set(Field::Month, 5).unwrap();
        dt.set(Field::Day, 8).unwrap();
        dt.set(Field::Hours, 1).unwrap();
        dt.set(Field::Minutes, 0).unwrap();
        dt.set(Field::Seconds, 22).unwrap();
        dt.set(Field::Milliseconds, 925).unwrap();
        assert_fields(&dt, &test_hash());
    }

    #[test]
    fn test_setter_does_not_cascade() {
        let mut dt = DateTime::from_fields(&test_hash()).unwrap();
        dt.set(Field::Hours, 5).unwrap();
        assert_eq!(dt.seconds(), 22);
        assert_eq!(dt.milliseconds(), 925);
    }

    #[test]
    fn test_day_of_week_is_read_only() {
        let mut dt = DateTime::from_fields(&test_hash()).unwrap();
        assert_eq!(dt.get(Field::DayOfWeek), 3);
        assert_eq!(
            dt.set(Field::DayOfWeek, 0),
            Err(DateTimeError::ReadOnlyField(Field::DayOfWeek))
        );
    }

    #[test]
    fn test_get_matches_named_accessors() {
        let dt = DateTime::from_fields(&test_hash()).unwrap();
        assert_eq!(dt.get(Field::Year), i64::from(dt.year()));
        assert_eq!(dt.get(Field::Month), i64::from(dt.month()));
        assert_eq!(dt.get(Field::Milliseconds), i64::from(dt.milliseconds()));
    }

    #[test]
    fn test_timestamp_round_trip() {
        let dt = DateTime::from_fields(&test_hash()).unwrap();
        let again = DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap();
        assert_eq!(again, dt);
        assert_fields(&again, &test_hash());
    }

    #[test]
    fn test_epoch() {
        let epoch = DateTime::from_timestamp_millis(0).unwrap();
        assert_eq!(epoch.timestamp_millis(), 0);
    }

    #[test]
    fn test_leap_year_queries() {
        let leap = DateTime::from_fields(&FieldBag::new().year(2024).month(2).day(1)).unwrap();
        assert!(leap.is_leap_year());
        assert_eq!(leap.days_in_month(), 29);

        let common = DateTime::from_fields(&FieldBag::new().year(1900).month(2).day(1)).unwrap();
        assert!(!common.is_leap_year());
        assert_eq!(common.days_in_month(), 28);
    }
}

#[cfg(test)]
mod comparison_tests {
    use super::*;

    #[test]
    fn test_compare_instants() {
        let a = DateTime::from_fields(&test_hash()).unwrap();
        let b = a.advance(&FieldBag::new().milliseconds(1)).unwrap();
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a.copy()), Ordering::Equal);
        assert!(a < b);
    }

    #[test]
    fn test_compare_date_ignores_time() {
        let morning = DateTime::from_fields(&test_hash()).unwrap();
        let evening = morning.change(&FieldBag::new().hours(23)).unwrap();
        assert_eq!(morning.compare_date(&evening), Ordering::Equal);

        let next_day = morning.advance(&FieldBag::new().day(1)).unwrap();
        assert_eq!(evening.compare_date(&next_day), Ordering::Less);
    }

    #[test]
    fn test_compare_time_ignores_date() {
        let a = DateTime::from_fields(&test_hash()).unwrap();
        let b = a.change(&FieldBag::new().year(2020)).unwrap();
        assert_eq!(a.compare_time(&b), Ordering::Equal);

        let c = b.change(&FieldBag::new().hours(0)).unwrap();
        assert_eq!(c.compare_time(&a), Ordering::Less);
        assert_eq!(c.compare(&a), Ordering::Greater);
    }

    #[test]
    fn test_is_today() {
        assert!(DateTime::now().is_today());
        let past = DateTime::from_fields(&test_hash()).unwrap();
        assert!(!past.is_today());
    }
}
