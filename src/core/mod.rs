pub mod assessment;
pub mod composer;
pub mod grouping;
pub mod sentence;
pub mod vitals;
