//! The narrow contracts consumed from the host application
//!
//! Rendering, localization storage, unlock tracking, and entity/component
//! storage all belong to the host; registration only ever reaches them
//! through this trait.

use std::sync::Arc;

use skillforge_types::{
    ComponentHandle, EntityHandle, EntityRef, FamilyHandle, ImplicitPassive, Result, SkillDef,
    SkillSlot, Variant,
};

/// The host's entity and skill-family data graph.
///
/// Reads borrow immutably; composition mutates through `&mut self`.
/// Registration is a single-threaded startup activity by contract, so no
/// locking discipline is imposed here. Variant snapshots are still
/// immutable (`Arc<[Variant]>`), so a reader holding one can never observe
/// a family mid-growth.
pub trait Host {
    /// Resolve an opaque entity reference to a live handle.
    ///
    /// Fails with [`skillforge_types::SkillError::AssetNotFound`] when the
    /// reference points at nothing.
    fn load_entity(&self, reference: &EntityRef) -> Result<EntityHandle>;

    /// Entity display name (also used to name synthesized wrappers)
    fn entity_name(&self, entity: EntityHandle) -> Result<String>;

    /// The entity's default family bound to an explicit slot, if any
    fn slot_family(&self, entity: EntityHandle, slot: SkillSlot)
        -> Result<Option<FamilyHandle>>;

    /// Attached capability components, in stable host-defined order
    fn capability_components(&self, entity: EntityHandle) -> Result<Vec<ComponentHandle>>;

    /// Family a component currently holds, if one is bound
    fn family_of(&self, component: ComponentHandle) -> Result<Option<FamilyHandle>>;

    /// Component display name
    fn component_name(&self, component: ComponentHandle) -> Result<String>;

    /// Family display name
    fn family_name(&self, family: FamilyHandle) -> Result<String>;

    /// Snapshot of a family's variant sequence.
    ///
    /// Later growth replaces the sequence wholesale; a snapshot taken here
    /// is never mutated.
    fn family_variants(&self, family: FamilyHandle) -> Result<Arc<[Variant]>>;

    /// Replace a family's variant sequence in one swap
    fn swap_family_variants(
        &mut self,
        family: FamilyHandle,
        variants: Arc<[Variant]>,
    ) -> Result<()>;

    /// Attach a fresh capability component, hidden from every
    /// player-facing selection surface
    fn add_hidden_component(
        &mut self,
        entity: EntityHandle,
        name: &str,
    ) -> Result<ComponentHandle>;

    /// Create a new, empty family owned by the host
    fn create_family(&mut self, name: &str) -> Result<FamilyHandle>;

    /// Bind a family to a capability component
    fn bind_family(&mut self, component: ComponentHandle, family: FamilyHandle) -> Result<()>;

    /// The entity's implicit always-on default, if the host models one
    fn implicit_passive(&self, entity: EntityHandle) -> Result<ImplicitPassive>;

    /// Disable the implicit default so it no longer activates through the
    /// old path
    fn disable_implicit_passive(&mut self, entity: EntityHandle) -> Result<()>;

    /// Insert a definition into the process-wide definition table.
    ///
    /// Keyed by the definition's name token. Publishing the same token
    /// twice is the caller's bug; the singleton registry makes it
    /// unreachable through the registration pipeline.
    fn publish_def(&mut self, def: &SkillDef) -> Result<()>;

    /// Register display text for a localization token (append-only)
    fn localize(&mut self, token: &str, text: &str) -> Result<()>;
}
