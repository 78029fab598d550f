use std::borrow::Cow;

/// A specialized [`BlogError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// Database failures while seeding or reading posts.
    #[cfg(feature = "server")]
    #[error("Blog database error{}: {source}", format_context(.context))]
    Database {
        #[source]
        source: sqlx::Error,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal blog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait BlogErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, BlogError>;
}

impl<T> BlogErrorExt<T> for Result<T, BlogError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                #[cfg(feature = "server")]
                BlogError::Database { context: c, .. } => *c = Some(context.into()),
                BlogError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

#[cfg(feature = "server")]
impl From<sqlx::Error> for BlogError {
    #[inline]
    fn from(source: sqlx::Error) -> Self {
        Self::Database { source, context: None }
    }
}

#[cfg(feature = "server")]
impl<T> BlogErrorExt<T> for Result<T, sqlx::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, BlogError> {
        self.map_err(|source| BlogError::Database { source, context: Some(context.into()) })
    }
}

impl From<&'static str> for BlogError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for BlogError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

#[allow(dead_code)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
