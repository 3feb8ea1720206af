//! Skillforge Host Contracts
//!
//! The registration engine never talks to an engine directly; it consumes
//! the narrow [`Host`] trait defined here. [`MemoryHost`] is a complete
//! in-memory implementation of that trait, used by the loader binary's
//! demo fixture and by the integration tests.

pub mod host;
pub mod memory;

pub use host::Host;
pub use memory::MemoryHost;
