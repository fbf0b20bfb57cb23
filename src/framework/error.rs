//! # Framework Errors
//!
//! Errors produced by the actor plumbing rather than by an entity.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns the original error untouched when it is not an `EntityError`
    /// or when the boxed error is of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(boxed) => boxed
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("boom {0}")]
    struct Boom(u32);

    #[test]
    fn test_into_entity_error_recovers_concrete_type() {
        let err = FrameworkError::EntityError(Box::new(Boom(7)));
        assert_eq!(err.into_entity_error::<Boom>().unwrap(), Boom(7));
    }

    #[test]
    fn test_into_entity_error_keeps_other_variants() {
        let err = FrameworkError::ActorClosed;
        assert!(matches!(
            err.into_entity_error::<Boom>(),
            Err(FrameworkError::ActorClosed)
        ));

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("io")));
        assert!(matches!(
            foreign.into_entity_error::<Boom>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
