pub mod display;
pub mod submission;
