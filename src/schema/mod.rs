pub mod taxonomy;
pub mod unit;
pub mod vitals;
