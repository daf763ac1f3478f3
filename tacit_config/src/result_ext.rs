//! Extensions for mapping errors into `TacitResult` concisely.
//!
//! Reduces repetitive `.map_err(|e| Arc::new(e.into()))` patterns when
//! converting external error types into the crate's `TacitResult<T>` alias
//! (`Result<T, Arc<TacitError>>`).

use std::sync::Arc;

use crate::{TacitError, TacitResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<TacitError>`
/// into a `TacitResult<T>`.
///
/// # Examples
///
/// ```
/// use tacit_config::{TacitResult, TacitResultExt};
///
/// fn extract() -> TacitResult<u8> {
///     let parsed: Result<u8, Box<figment::Error>> =
///         Err(Box::new(figment::Error::from("boom".to_owned())));
///     parsed.into_tacit()
/// }
/// assert!(extract().is_err());
/// ```
pub trait TacitResultExt<T, E> {
    /// Convert `Result<T, E>` into `TacitResult<T>` using `Into<TacitError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<TacitError>`.
    fn into_tacit(self) -> TacitResult<T>;
}

impl<T, E> TacitResultExt<T, E> for Result<T, E>
where
    E: Into<TacitError>,
{
    fn into_tacit(self) -> TacitResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
