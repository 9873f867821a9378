use abook_core::rules::upcoming_birthdays;
use abook_store::ContactBook;
use chrono::NaiveDate;
use std::fmt::Write as _;

/// Renders the upcoming-birthday query. An empty result gets its own
/// explicit message instead of an empty listing.
pub fn upcoming(book: &ContactBook, today: NaiveDate, window_days: i64) -> String {
    let matches = upcoming_birthdays(book.iter(), today, window_days);
    if matches.is_empty() {
        return format!("No birthdays in next {window_days} days");
    }

    let mut out = String::new();
    for entry in matches {
        let _ = writeln!(
            out,
            "{} has a birthday in the next {} days: {}",
            entry.name,
            window_days,
            entry.occurs_on.format("%Y-%m-%d")
        );
    }
    out.pop();
    out
}
