pub mod birthday;
pub mod fields;
pub mod record;

pub use birthday::Birthday;
pub use fields::{Address, Email, Name, Phone};
pub use record::Record;
