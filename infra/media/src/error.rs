use std::borrow::Cow;

/// A specialized [`MediaError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// Validation errors.
    #[error("Media validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Failures reported by the object store.
    #[error("Object storage error{}: {message}", format_context(.context))]
    Storage { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal media error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<&'static str> for MediaError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for MediaError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

/// Adds contextual information to `Result`s in this crate.
pub trait MediaErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, MediaError>;
}

impl<T> MediaErrorExt<T> for Result<T, MediaError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                MediaError::Validation { context: c, .. }
                | MediaError::Storage { context: c, .. }
                | MediaError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
