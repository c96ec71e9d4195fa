//! Context for foreign errors
//!
//! Converts `toml`, `figment` and I/O failures into the crate-wide
//! [`Error`], prefixed with what was being attempted.

use std::fmt::Display;

use sysprobe_domain::error::{Error, Result};

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Attach a description to a failing `Result`
///
/// ```ignore
/// let text = std::fs::read_to_string(&path)
///     .io_context(format!("Cannot read {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Fail with [`Error::Internal`]
    fn context<C: Display>(self, context: C) -> Result<T>;

    /// Like [`ErrorContext::context`], building the description only on failure
    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T>;

    /// Fail with [`Error::Io`], keeping the source
    fn io_context<C: Display>(self, context: C) -> Result<T>;

    /// Fail with [`Error::Configuration`], keeping the source
    fn config_context<C: Display>(self, context: C) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|err| Error::internal(format!("{context}: {err}")))
    }

    fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
        self.map_err(|err| Error::internal(format!("{}: {err}", f())))
    }

    fn io_context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            let (message, source) = describe(&context, err);
            Error::Io { message, source }
        })
    }

    fn config_context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|err| {
            let (message, source) = describe(&context, err);
            Error::Configuration { message, source }
        })
    }
}

fn describe<C, E>(context: &C, err: E) -> (String, Option<BoxedSource>)
where
    C: Display,
    E: std::error::Error + Send + Sync + 'static,
{
    (format!("{context}: {err}"), Some(Box::new(err)))
}
