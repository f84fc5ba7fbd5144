pub mod contacts;
pub mod trigger;
