//! Normalize payment button parameters and hand them to an external renderer.
//!
//! Every parameter is checked against a closed set of legal values. Anything
//! outside the set falls back to that set's default, so malformed input only
//! ever changes the button's appearance. The rendering itself is delegated to
//! a [`Renderer`].
use thiserror::Error;

pub mod choice;
pub mod factory;
pub mod record;

pub use choice::{sanitize, sanitize_str, Choice};
pub use factory::{ButtonFactory, ButtonOptions, Renderer};
pub use record::{normalize_config, normalize_data, ButtonConfig, ButtonData};

/// Failure to bind to the external rendering entry point.
///
/// Parameter validation never produces one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no global object to load the button renderer from")]
    NoWindow,
    #[error("button renderer `{path}` is not defined")]
    MissingEntryPoint { path: String },
    #[error("button renderer `{path}` is not a function")]
    NotCallable { path: String },
}

pub type Result<T> = std::result::Result<T, Error>;
