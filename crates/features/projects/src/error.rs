use std::borrow::Cow;

/// A specialized [`ProjectsError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum ProjectsError {
    /// Database failures while seeding or reading projects.
    #[cfg(feature = "server")]
    #[error("Projects database error{}: {source}", format_context(.context))]
    Database {
        #[source]
        source: sqlx::Error,
        context: Option<Cow<'static, str>>,
    },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal projects error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait ProjectsErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ProjectsError>;
}

impl<T> ProjectsErrorExt<T> for Result<T, ProjectsError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                #[cfg(feature = "server")]
                ProjectsError::Database { context: c, .. } => *c = Some(context.into()),
                ProjectsError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

#[cfg(feature = "server")]
impl From<sqlx::Error> for ProjectsError {
    #[inline]
    fn from(source: sqlx::Error) -> Self {
        Self::Database { source, context: None }
    }
}

#[cfg(feature = "server")]
impl<T> ProjectsErrorExt<T> for Result<T, sqlx::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ProjectsError> {
        self.map_err(|source| ProjectsError::Database { source, context: Some(context.into()) })
    }
}

impl From<&'static str> for ProjectsError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for ProjectsError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

#[allow(dead_code)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
