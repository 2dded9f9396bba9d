pub mod dictionaries;
pub mod presence;
pub mod study;
