pub mod break_even;
pub mod economics;
pub mod indifference;
pub mod scenario;
pub mod simulation;
pub mod summary;
pub mod sweep;
