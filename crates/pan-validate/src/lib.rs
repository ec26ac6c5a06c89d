//! PAN validation core.
//!
//! Raw records flow through [`normalize_records`], each distinct cleaned
//! value is labelled by [`classify`], and [`summarize`] derives the counts.
//! [`validate_records`] runs the whole pipeline.

pub mod aggregate;
pub mod checks;
pub mod classify;
pub mod engine;
pub mod normalize;

pub use aggregate::summarize;
pub use checks::{has_adjacent_repeat, is_strictly_sequential, matches_format};
pub use classify::{classify, classify_all, evaluate};
pub use engine::{ValidationOutcome, validate_records};
pub use normalize::{CleanedSet, normalize, normalize_records};
