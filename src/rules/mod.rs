//! Resolution rules: the 5x5 outcome table and the round resolver.

pub mod outcome;
pub mod resolver;

pub use outcome::{NarrativeKey, Outcome};
pub use resolver::resolve_round;
