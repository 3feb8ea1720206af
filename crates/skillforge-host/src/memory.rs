//! In-memory host implementation
//!
//! [`MemoryHost`] implements the full [`Host`] contract over hash maps,
//! with no engine behind it. The loader binary builds its demo fixture on
//! top of it and the integration tests use it as the world under test.
//! Families store their variants as `Arc<[Variant]>` and replace the whole
//! sequence on swap, so snapshots handed out earlier stay untouched.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use skillforge_types::{
    ComponentHandle, EntityHandle, EntityRef, FamilyHandle, ImplicitPassive, Result, SkillDef,
    SkillError, SkillSlot, Variant,
};

use crate::host::Host;

struct EntityRecord {
    name: String,
    slots: HashMap<SkillSlot, FamilyHandle>,
    components: Vec<ComponentHandle>,
    implicit_passive: Option<ImplicitPassive>,
    implicit_passive_enabled: bool,
}

struct ComponentRecord {
    name: String,
    family: Option<FamilyHandle>,
    hidden: bool,
}

struct FamilyRecord {
    name: String,
    variants: Arc<[Variant]>,
}

/// Complete in-memory [`Host`]
#[derive(Default)]
pub struct MemoryHost {
    entities: HashMap<EntityHandle, EntityRecord>,
    addresses: HashMap<EntityRef, EntityHandle>,
    components: HashMap<ComponentHandle, ComponentRecord>,
    families: HashMap<FamilyHandle, FamilyRecord>,
    defs: HashMap<String, SkillDef>,
    strings: HashMap<String, String>,
}

impl MemoryHost {
    /// Create an empty host with no entities
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity reachable at `reference`
    pub fn add_entity(&mut self, reference: EntityRef, name: impl Into<String>) -> EntityHandle {
        let handle = EntityHandle::mint();
        self.entities.insert(
            handle,
            EntityRecord {
                name: name.into(),
                slots: HashMap::new(),
                components: Vec::new(),
                implicit_passive: None,
                implicit_passive_enabled: false,
            },
        );
        self.addresses.insert(reference, handle);
        handle
    }

    /// Create a family pre-seeded with `variants`
    pub fn add_family(&mut self, name: impl Into<String>, variants: Vec<Variant>) -> FamilyHandle {
        let handle = FamilyHandle::mint();
        self.families.insert(
            handle,
            FamilyRecord {
                name: name.into(),
                variants: variants.into(),
            },
        );
        handle
    }

    /// Attach a visible capability component, optionally already holding a
    /// family
    pub fn attach_component(
        &mut self,
        entity: EntityHandle,
        name: impl Into<String>,
        family: Option<FamilyHandle>,
    ) -> Result<ComponentHandle> {
        let handle = ComponentHandle::mint();
        self.components.insert(
            handle,
            ComponentRecord {
                name: name.into(),
                family,
                hidden: false,
            },
        );
        self.entity_mut(entity)?.components.push(handle);
        Ok(handle)
    }

    /// Bind a family as the entity's default for an explicit slot
    pub fn bind_slot(
        &mut self,
        entity: EntityHandle,
        slot: SkillSlot,
        family: FamilyHandle,
    ) -> Result<()> {
        self.entity_mut(entity)?.slots.insert(slot, family);
        Ok(())
    }

    /// Give the entity an implicit always-on default (enabled)
    pub fn set_implicit_passive(
        &mut self,
        entity: EntityHandle,
        passive: ImplicitPassive,
    ) -> Result<()> {
        let record = self.entity_mut(entity)?;
        record.implicit_passive = Some(passive);
        record.implicit_passive_enabled = true;
        Ok(())
    }

    /// Published definition for a name token, if any
    #[must_use]
    pub fn def(&self, name_token: &str) -> Option<&SkillDef> {
        self.defs.get(name_token)
    }

    /// All published definitions, in no particular order
    pub fn defs(&self) -> impl Iterator<Item = &SkillDef> {
        self.defs.values()
    }

    /// Number of published definitions
    #[must_use]
    pub fn def_count(&self) -> usize {
        self.defs.len()
    }

    /// Localized text registered for a token, if any
    #[must_use]
    pub fn localized(&self, token: &str) -> Option<&str> {
        self.strings.get(token).map(String::as_str)
    }

    /// Whether a component is hidden from selection surfaces
    pub fn component_hidden(&self, component: ComponentHandle) -> Result<bool> {
        Ok(self.component(component)?.hidden)
    }

    /// Whether the entity's implicit default still activates
    pub fn implicit_passive_enabled(&self, entity: EntityHandle) -> Result<bool> {
        Ok(self.entity(entity)?.implicit_passive_enabled)
    }

    fn entity(&self, handle: EntityHandle) -> Result<&EntityRecord> {
        self.entities.get(&handle).ok_or(SkillError::UnknownEntity)
    }

    fn entity_mut(&mut self, handle: EntityHandle) -> Result<&mut EntityRecord> {
        self.entities
            .get_mut(&handle)
            .ok_or(SkillError::UnknownEntity)
    }

    fn component(&self, handle: ComponentHandle) -> Result<&ComponentRecord> {
        self.components
            .get(&handle)
            .ok_or(SkillError::UnknownComponent)
    }

    fn family(&self, handle: FamilyHandle) -> Result<&FamilyRecord> {
        self.families.get(&handle).ok_or(SkillError::UnknownFamily)
    }
}

impl Host for MemoryHost {
    fn load_entity(&self, reference: &EntityRef) -> Result<EntityHandle> {
        self.addresses
            .get(reference)
            .copied()
            .ok_or_else(|| SkillError::AssetNotFound {
                reference: reference.to_string(),
            })
    }

    fn entity_name(&self, entity: EntityHandle) -> Result<String> {
        Ok(self.entity(entity)?.name.clone())
    }

    fn slot_family(
        &self,
        entity: EntityHandle,
        slot: SkillSlot,
    ) -> Result<Option<FamilyHandle>> {
        Ok(self.entity(entity)?.slots.get(&slot).copied())
    }

    fn capability_components(&self, entity: EntityHandle) -> Result<Vec<ComponentHandle>> {
        Ok(self.entity(entity)?.components.clone())
    }

    fn family_of(&self, component: ComponentHandle) -> Result<Option<FamilyHandle>> {
        Ok(self.component(component)?.family)
    }

    fn component_name(&self, component: ComponentHandle) -> Result<String> {
        Ok(self.component(component)?.name.clone())
    }

    fn family_name(&self, family: FamilyHandle) -> Result<String> {
        Ok(self.family(family)?.name.clone())
    }

    fn family_variants(&self, family: FamilyHandle) -> Result<Arc<[Variant]>> {
        Ok(Arc::clone(&self.family(family)?.variants))
    }

    fn swap_family_variants(
        &mut self,
        family: FamilyHandle,
        variants: Arc<[Variant]>,
    ) -> Result<()> {
        let record = self
            .families
            .get_mut(&family)
            .ok_or(SkillError::UnknownFamily)?;
        debug!(
            family = %record.name,
            len = variants.len(),
            "Swapped family variant sequence"
        );
        record.variants = variants;
        Ok(())
    }

    fn add_hidden_component(
        &mut self,
        entity: EntityHandle,
        name: &str,
    ) -> Result<ComponentHandle> {
        let handle = ComponentHandle::mint();
        self.components.insert(
            handle,
            ComponentRecord {
                name: name.to_string(),
                family: None,
                hidden: true,
            },
        );
        self.entity_mut(entity)?.components.push(handle);
        Ok(handle)
    }

    fn create_family(&mut self, name: &str) -> Result<FamilyHandle> {
        let handle = FamilyHandle::mint();
        self.families.insert(
            handle,
            FamilyRecord {
                name: name.to_string(),
                variants: Vec::new().into(),
            },
        );
        Ok(handle)
    }

    fn bind_family(&mut self, component: ComponentHandle, family: FamilyHandle) -> Result<()> {
        if !self.families.contains_key(&family) {
            return Err(SkillError::UnknownFamily);
        }
        let record = self
            .components
            .get_mut(&component)
            .ok_or(SkillError::UnknownComponent)?;
        record.family = Some(family);
        Ok(())
    }

    fn implicit_passive(&self, entity: EntityHandle) -> Result<ImplicitPassive> {
        let record = self.entity(entity)?;
        record
            .implicit_passive
            .clone()
            .ok_or_else(|| SkillError::NoImplicitPassive {
                entity: record.name.clone(),
            })
    }

    fn disable_implicit_passive(&mut self, entity: EntityHandle) -> Result<()> {
        let record = self.entity_mut(entity)?;
        record.implicit_passive_enabled = false;
        Ok(())
    }

    fn publish_def(&mut self, def: &SkillDef) -> Result<()> {
        if self.defs.contains_key(&def.name_token) {
            warn!(token = %def.name_token, "Definition table overwrite");
        }
        self.defs.insert(def.name_token.clone(), def.clone());
        Ok(())
    }

    fn localize(&mut self, token: &str, text: &str) -> Result<()> {
        if self.strings.contains_key(token) {
            warn!(token, "Localization token already registered; keeping first");
            return Ok(());
        }
        self.strings.insert(token.to_string(), text.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use skillforge_types::{ActivationDescriptor, IconRef, SkillConfig};
    use std::collections::BTreeSet;

    fn def(token: &str) -> SkillDef {
        SkillDef::build(&SkillConfig {
            lang_token: token.to_string(),
            name: "Fixture".to_string(),
            description: "Fixture skill.".to_string(),
            activation: ActivationDescriptor::new("States.Fixture"),
            machine_name: "Body".to_string(),
            cooldown_seconds: 1.0,
            charge_capacity: 1,
            stock_cost: 1,
            icon: IconRef::new("icons/fixture"),
            target_entity: None,
            attachment: skillforge_types::AttachmentTarget::None,
            unlock_gate: None,
            keywords: BTreeSet::new(),
            auto_apply: true,
            must_key_press: false,
            passive: false,
            agile: false,
            delay_cooldown: false,
            is_combat: true,
        })
        .unwrap()
    }

    #[test]
    fn test_load_entity_round_trip() {
        let mut host = MemoryHost::new();
        let handle = host.add_entity(EntityRef::new("entities/Test"), "Test");
        assert_eq!(host.load_entity(&EntityRef::new("entities/Test")).unwrap(), handle);

        let missing = host.load_entity(&EntityRef::new("entities/Nope"));
        assert!(matches!(missing, Err(SkillError::AssetNotFound { .. })));
    }

    #[test]
    fn test_snapshot_survives_swap() {
        let mut host = MemoryHost::new();
        let family = host.add_family("TestFamily", vec![Variant::gateless(def("FIRST"))]);

        let before = host.family_variants(family).unwrap();
        assert_eq!(before.len(), 1);

        let mut grown: Vec<Variant> = before.to_vec();
        grown.push(Variant::gateless(def("SECOND")));
        host.swap_family_variants(family, grown.into()).unwrap();

        // the earlier snapshot is untouched
        assert_eq!(before.len(), 1);
        assert_eq!(host.family_variants(family).unwrap().len(), 2);
    }

    #[test]
    fn test_localize_keeps_first() {
        let mut host = MemoryHost::new();
        host.localize("TOKEN", "first").unwrap();
        host.localize("TOKEN", "second").unwrap();
        assert_eq!(host.localized("TOKEN"), Some("first"));
    }

    #[test]
    fn test_unknown_handles_rejected() {
        let mut host = MemoryHost::new();
        let stray = FamilyHandle::mint();
        assert!(matches!(
            host.family_variants(stray),
            Err(SkillError::UnknownFamily)
        ));
        assert!(matches!(
            host.swap_family_variants(stray, Vec::new().into()),
            Err(SkillError::UnknownFamily)
        ));
        assert!(matches!(
            host.entity_name(EntityHandle::mint()),
            Err(SkillError::UnknownEntity)
        ));
    }
}
