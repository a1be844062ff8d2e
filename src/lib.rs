#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ScoringConfig;
pub use core::podium::PodiumValidator;
pub use domain::model::{PodiumPosition, Submission};
pub use domain::ports::FormSource;
pub use utils::error::{BetError, Result, DUPLICATE_PODIUM_ALERT};
