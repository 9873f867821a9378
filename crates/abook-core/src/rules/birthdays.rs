use crate::domain::Record;
use chrono::{Datelike, Days, NaiveDate};

/// One match from the upcoming-birthday query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Date of birth as stored, original year included.
    pub birthday: NaiveDate,
    /// The next occurrence of the birthday on or after `today`.
    pub occurs_on: NaiveDate,
}

/// Scans `records` (in the order the iterator yields them) and returns
/// every contact whose birthday occurs within `today..=today + window_days`.
///
/// The next occurrence is computed on the calendar: a birthday whose
/// month/day anchored onto the current year has already passed rolls
/// over to next year, so a January birthday queried in late December is
/// still found. Feb 29 anchored onto a non-leap year is observed on
/// Feb 28.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window_end = today
        .checked_add_days(Days::new(window_days.max(0) as u64))
        .unwrap_or(NaiveDate::MAX);
    records
        .into_iter()
        .filter_map(|record| {
            let occurs_on = next_occurrence(record.birthday.date(), today);
            (occurs_on <= window_end).then(|| UpcomingBirthday {
                name: record.name.as_str().to_string(),
                birthday: record.birthday.date(),
                occurs_on,
            })
        })
        .collect()
}

/// Next calendar occurrence of `birthday`'s month/day on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let anchored = anchor_to_year(birthday, today.year());
    if anchored < today {
        anchor_to_year(birthday, today.year() + 1)
    } else {
        anchored
    }
}

fn anchor_to_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()) {
        Some(date) => date,
        // Feb 29 anchored onto a non-leap year.
        None => NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(birthday),
    }
}

#[cfg(test)]
mod tests {
    use super::{next_occurrence, upcoming_birthdays};
    use crate::domain::{Birthday, Name, Record};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(name: &str, birthday: &str) -> Record {
        Record::new(
            Name::new(name).unwrap(),
            Birthday::parse(birthday).unwrap(),
        )
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let records = vec![
            record("Start", "1990-06-01"),
            record("End", "1990-06-11"),
            record("Past", "1990-06-15"),
        ];
        let today = date(2024, 6, 1);
        let matches = upcoming_birthdays(&records, today, 10);
        let names: Vec<_> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Start", "End"]);
    }

    #[test]
    fn birthday_within_window_matches_regardless_of_birth_year() {
        let records = vec![
            record("Soon", "1987-06-05"),
            record("Later", "1987-06-15"),
            record("Passed", "1987-05-25"),
        ];
        let today = date(2024, 6, 1);
        let matches = upcoming_birthdays(&records, today, 10);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Soon");
        assert_eq!(matches[0].occurs_on, date(2024, 6, 5));
        assert_eq!(matches[0].birthday, date(1987, 6, 5));
    }

    #[test]
    fn december_query_finds_january_birthdays() {
        let records = vec![record("NewYear", "1995-01-05")];
        let today = date(2024, 12, 20);
        let matches = upcoming_birthdays(&records, today, 30);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].occurs_on, date(2025, 1, 5));
    }

    #[test]
    fn passed_birthday_rolls_over_outside_short_window() {
        // Rolled over to next year it is ~364 days away, so a short
        // window must not report it.
        let records = vec![record("Passed", "1990-05-25")];
        let matches = upcoming_birthdays(&records, date(2024, 6, 1), 10);
        assert!(matches.is_empty());
    }

    #[test]
    fn matches_preserve_iteration_order() {
        let records = vec![
            record("Second", "1990-06-07"),
            record("First", "1990-06-03"),
        ];
        let matches = upcoming_birthdays(&records, date(2024, 6, 1), 10);
        let names: Vec<_> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn empty_input_yields_no_matches() {
        let records: Vec<Record> = Vec::new();
        assert!(upcoming_birthdays(&records, date(2024, 6, 1), 7).is_empty());
    }

    #[test]
    fn leap_day_observed_on_feb_28_in_non_leap_years() {
        let birthday = date(2000, 2, 29);
        assert_eq!(next_occurrence(birthday, date(2023, 2, 1)), date(2023, 2, 28));
        assert_eq!(next_occurrence(birthday, date(2024, 2, 1)), date(2024, 2, 29));
    }

    #[test]
    fn next_occurrence_today_is_today() {
        assert_eq!(
            next_occurrence(date(1990, 6, 1), date(2024, 6, 1)),
            date(2024, 6, 1)
        );
    }
}
