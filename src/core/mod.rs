pub mod calculator;
pub mod loader;
pub mod logic;
