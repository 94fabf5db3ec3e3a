pub mod complete;
pub mod quiz;
pub mod study;
