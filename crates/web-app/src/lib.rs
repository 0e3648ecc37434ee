#![warn(clippy::pedantic)]

pub mod display;
pub mod log;
pub mod rest_timer;

pub use rest_timer::{RestTimer, format_mm_ss};
