//! Error types produced by argument resolution and help generation.

mod constructors;
mod types;

pub use types::{TacitError, TacitResult};

#[cfg(test)]
mod tests;
