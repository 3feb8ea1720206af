//! Skillforge Registration Engine
//!
//! Registers pluggable skill declarations into a host's entity data graph
//! during the single-threaded startup phase.
//!
//! ## Features
//!
//! - Once-only registration per concrete declaration type, enforced before
//!   any host-visible side effect
//! - Family resolution for explicit slots and the passive category
//! - Copy-on-grow family composition: append to an existing family, or
//!   synthesize a wrapper family that migrates an implicit default
//! - A linear, fail-fast registration pipeline with a post-creation hook
//!
//! ## Architecture
//!
//! [`RegistrationPipeline`] drives each declaration through build,
//! singleton claim, resolution, composition, publication, localization,
//! and the hook, in that order. Declarations implement [`SkillDecl`] and
//! never touch the host directly outside their hook.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod composer;
pub mod pipeline;
pub mod resolver;
pub mod singleton;

pub use pipeline::{RegistrationPipeline, SkillDecl};
pub use resolver::{resolve_family, FamilyLookup};
pub use singleton::SkillRegistry;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{RegistrationPipeline, SkillDecl, SkillRegistry};
}
