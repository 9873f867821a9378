pub mod birthday;
pub mod contacts;
