use std::borrow::Cow;

/// A specialized [`GlobalsError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum GlobalsError {
    /// Database failures while seeding or reading settings.
    #[cfg(feature = "server")]
    #[error("Globals database error{}: {source}", format_context(.context))]
    Database {
        #[source]
        source: sqlx::Error,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal globals error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait GlobalsErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, GlobalsError>;
}

impl<T> GlobalsErrorExt<T> for Result<T, GlobalsError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                #[cfg(feature = "server")]
                GlobalsError::Database { context: c, .. } => *c = Some(context.into()),
                GlobalsError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

#[cfg(feature = "server")]
impl From<sqlx::Error> for GlobalsError {
    #[inline]
    fn from(source: sqlx::Error) -> Self {
        Self::Database { source, context: None }
    }
}

#[cfg(feature = "server")]
impl<T> GlobalsErrorExt<T> for Result<T, sqlx::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, GlobalsError> {
        self.map_err(|source| GlobalsError::Database { source, context: Some(context.into()) })
    }
}

impl From<&'static str> for GlobalsError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for GlobalsError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

#[allow(dead_code)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
