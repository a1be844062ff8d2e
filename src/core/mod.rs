pub mod locks;
pub mod podium;
pub mod report;
pub mod scoring;
pub mod season;

pub use crate::domain::model::{RaceGuess, RaceResult, ScoreBreakdown, Submission};
pub use crate::domain::ports::FormSource;
pub use crate::utils::error::Result;
