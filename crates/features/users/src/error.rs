use std::borrow::Cow;

/// A specialized [`UsersError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum UsersError {
    /// Database failures while reading or writing user rows.
    #[cfg(feature = "server")]
    #[error("Users database error{}: {source}", format_context(.context))]
    Database {
        #[source]
        source: sqlx::Error,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal users error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait UsersErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, UsersError>;
}

impl<T> UsersErrorExt<T> for Result<T, UsersError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                #[cfg(feature = "server")]
                UsersError::Database { context: c, .. } => *c = Some(context.into()),
                UsersError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

#[cfg(feature = "server")]
impl From<sqlx::Error> for UsersError {
    #[inline]
    fn from(source: sqlx::Error) -> Self {
        Self::Database { source, context: None }
    }
}

#[cfg(feature = "server")]
impl<T> UsersErrorExt<T> for Result<T, sqlx::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, UsersError> {
        self.map_err(|source| UsersError::Database { source, context: Some(context.into()) })
    }
}

impl From<&'static str> for UsersError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for UsersError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

#[allow(dead_code)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
