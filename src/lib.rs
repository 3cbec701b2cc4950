// Reusable library API — visible to both the CLI and library consumers
pub mod coords;
pub mod errors;
pub mod finders;
pub mod grid;
pub mod log;
pub mod matches;
pub mod puzzle;
pub mod solver;

mod letters;
