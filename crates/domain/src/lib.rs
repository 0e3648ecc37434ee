#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod rounding;

mod aggregation;
mod error;
mod estimation;
mod export;
mod name;
mod plates;
mod pr;
mod program;
mod service;
mod set_log;
mod settings;
mod training_set;
mod warmup;
mod week;

pub use aggregation::*;
pub use error::*;
pub use estimation::*;
pub use export::*;
pub use name::*;
pub use plates::*;
pub use pr::*;
pub use program::*;
pub use service::*;
pub use set_log::*;
pub use settings::*;
pub use training_set::*;
pub use warmup::*;
pub use week::*;
