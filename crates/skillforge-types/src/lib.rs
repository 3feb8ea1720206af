//! Skillforge Types - Core vocabulary for skill registration
//!
//! This crate defines the data types shared by every other crate in the
//! workspace: opaque handles and asset references minted by the host, the
//! author-facing configuration surface, the immutable skill definition
//! produced from it, and the error taxonomy.

pub mod config;
pub mod def;
pub mod error;
pub mod handles;
pub mod slot;

pub use config::{ActivationDescriptor, SkillConfig};
pub use def::{DisplayNode, ImplicitPassive, SkillDef, Variant};
pub use error::{Result, SkillError};
pub use handles::{ComponentHandle, EntityHandle, EntityRef, FamilyHandle, IconRef, UnlockRef};
pub use slot::{AttachmentTarget, SkillSlot};
