//! Error types for skill registration

use thiserror::Error;

/// Skill registration errors
#[derive(Debug, Error)]
pub enum SkillError {
    /// Configuration rejected before any side effect occurred
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the configuration
        reason: String,
    },

    /// A declaration of this concrete type already registered
    #[error("Skill type '{type_name}' registered twice")]
    AlreadyRegistered {
        /// Concrete declaration type name
        type_name: &'static str,
    },

    /// Lookup for a declaration type that never registered
    #[error("Skill type '{type_name}' is not registered")]
    NotRegistered {
        /// Concrete declaration type name
        type_name: &'static str,
    },

    /// The host could not resolve an asset reference
    #[error("Asset not found: {reference}")]
    AssetNotFound {
        /// The reference that failed to resolve
        reference: String,
    },

    /// A handle referred to an entity the host does not know
    #[error("Unknown entity handle")]
    UnknownEntity,

    /// A handle referred to a capability component the host does not know
    #[error("Unknown component handle")]
    UnknownComponent,

    /// A handle referred to a family the host does not know
    #[error("Unknown family handle")]
    UnknownFamily,

    /// The entity has no implicit passive default to capture
    #[error("Entity '{entity}' has no implicit passive default")]
    NoImplicitPassive {
        /// Entity display name
        entity: String,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SkillError>;
