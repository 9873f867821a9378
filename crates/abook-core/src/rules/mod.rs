pub mod birthdays;

pub use birthdays::{next_occurrence, upcoming_birthdays, UpcomingBirthday};
