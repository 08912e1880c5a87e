pub mod display;
pub mod probes;
pub mod ui;
