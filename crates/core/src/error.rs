use crate::types::ItemKind;

/// Domain-level failures of administration operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The named entity is absent on the server.
    #[error("{kind} '{name}' does not exist")]
    NotFound {
        /// Which entity kind was queried.
        kind: ItemKind,
        /// The name that was queried.
        name: String,
    },

    /// Creation was attempted against a name that is already taken.
    #[error("{kind} '{name}' already exists")]
    AlreadyExists {
        /// Which entity kind was being created.
        kind: ItemKind,
        /// The conflicting name.
        name: String,
    },

    /// The entity could not be observed after its creation request.
    #[error("{kind} '{name}' was not created")]
    CreationFailed {
        /// Which entity kind was being created.
        kind: ItemKind,
        /// The name that failed to appear.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = CoreError::NotFound {
            kind: ItemKind::View,
            name: "qa".to_string(),
        };
        assert_eq!(err.to_string(), "View 'qa' does not exist");
    }

    #[test]
    fn display_already_exists() {
        let err = CoreError::AlreadyExists {
            kind: ItemKind::Job,
            name: "deploy".to_string(),
        };
        assert_eq!(err.to_string(), "Job 'deploy' already exists");
    }

    #[test]
    fn display_creation_failed() {
        let err = CoreError::CreationFailed {
            kind: ItemKind::Job,
            name: "deploy".to_string(),
        };
        assert_eq!(err.to_string(), "Job 'deploy' was not created");
    }
}
