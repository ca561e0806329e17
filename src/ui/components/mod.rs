pub mod cargo_input;
pub mod settlement_marker;
pub mod toast;
pub mod travel_plan;
