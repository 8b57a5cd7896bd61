pub mod algorithms;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod random;
pub mod report;
pub mod session;
pub mod validator;

/// Integers being sorted. Parsed values stay at or below 999,999,999;
/// generated values at or below 2^31 - 1.
pub type IntegerList = Vec<u32>;

pub use config::Config;
pub use engine::{Algorithm, Selection, SortEngine, SortOutcome, SortRequest};
pub use error::SorterError;
pub use session::Session;
pub use validator::{validate, ValidationReason, ValidationResult};
