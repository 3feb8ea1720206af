//! Opaque handles and asset references
//!
//! Handles identify live host objects (entities, capability components,
//! skill families) and are minted by the host; nothing in this workspace
//! ever inspects their contents. References are string addresses into the
//! host's asset space, resolved through the host when needed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Live handle to an entity the host has loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityHandle(Uuid);

/// Live handle to a capability component attached to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentHandle(Uuid);

/// Live handle to a skill family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyHandle(Uuid);

impl EntityHandle {
    /// Mint a fresh handle (host side only)
    #[must_use]
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl ComponentHandle {
    /// Mint a fresh handle (host side only)
    #[must_use]
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FamilyHandle {
    /// Mint a fresh handle (host side only)
    #[must_use]
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Opaque address of an entity asset (e.g. `"entities/Drifter"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRef(String);

/// Opaque reference to an icon asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

/// Opaque reference to an unlock gate tracked by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnlockRef(String);

impl EntityRef {
    /// Wrap an asset address
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The raw address string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl IconRef {
    /// Wrap an asset address
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The raw address string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl UnlockRef {
    /// Wrap an unlock identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
