//! Locates the family a new definition should join

use skillforge_host::Host;
use skillforge_types::{AttachmentTarget, EntityHandle, FamilyHandle, Result};
use tracing::{debug, warn};

/// Marker matched case-insensitively against component and family names
/// when hunting for the passive attachment point
const PASSIVE_MARKER: &str = "passive";

/// Outcome of family resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyLookup {
    /// Compose into this existing family
    Found(FamilyHandle),
    /// Publish the definition without composing it anywhere
    NotApplicable,
    /// Passive requested but no passive family exists; wrapper synthesis
    /// is required
    NoPassiveFound,
}

/// Find the family `target` refers to on `entity`.
///
/// Explicit slots read the entity's slot binding; an unbound slot is
/// [`FamilyLookup::NotApplicable`], as is [`AttachmentTarget::None`] and
/// any resolution with `auto_apply` off. The passive hunt is a name
/// heuristic inherited from the host's weak typing of skill categories:
/// the first component whose own name or whose family's name contains
/// "passive" in any case wins, so a component named
/// "PassiveAggressiveTaunt" matches too. The host guarantees at most one
/// semantically passive default per entity, which is why first-found is
/// enough.
pub fn resolve_family<H: Host + ?Sized>(
    host: &H,
    entity: EntityHandle,
    target: AttachmentTarget,
    auto_apply: bool,
) -> Result<FamilyLookup> {
    if !auto_apply {
        return Ok(FamilyLookup::NotApplicable);
    }

    match target {
        AttachmentTarget::None => Ok(FamilyLookup::NotApplicable),
        AttachmentTarget::Slot(slot) => match host.slot_family(entity, slot)? {
            Some(family) => {
                debug!(?slot, "Resolved slot family");
                Ok(FamilyLookup::Found(family))
            }
            None => {
                debug!(?slot, "No family bound to slot");
                Ok(FamilyLookup::NotApplicable)
            }
        },
        AttachmentTarget::Passive => {
            for component in host.capability_components(entity)? {
                let component_name = host.component_name(component)?;
                let family = host.family_of(component)?;

                let family_matches = match family {
                    Some(f) => host
                        .family_name(f)?
                        .to_lowercase()
                        .contains(PASSIVE_MARKER),
                    None => false,
                };

                if component_name.to_lowercase().contains(PASSIVE_MARKER) || family_matches {
                    match family {
                        Some(f) => {
                            debug!(component = %component_name, "Passive family matched");
                            return Ok(FamilyLookup::Found(f));
                        }
                        None => {
                            debug!(
                                component = %component_name,
                                "Passive-named component holds no family; skipping"
                            );
                        }
                    }
                }
            }

            warn!("No passive family on entity; wrapper synthesis required");
            Ok(FamilyLookup::NoPassiveFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillforge_host::MemoryHost;
    use skillforge_types::{EntityRef, SkillSlot};

    fn entity(host: &mut MemoryHost) -> EntityHandle {
        host.add_entity(EntityRef::new("entities/Test"), "Test")
    }

    #[test]
    fn test_auto_apply_off_is_not_applicable() {
        let mut host = MemoryHost::new();
        let e = entity(&mut host);
        let family = host.add_family("TestPassiveFamily", Vec::new());
        host.attach_component(e, "TestPassive", Some(family)).unwrap();

        let lookup = resolve_family(&host, e, AttachmentTarget::Passive, false).unwrap();
        assert_eq!(lookup, FamilyLookup::NotApplicable);
    }

    #[test]
    fn test_none_target_is_not_applicable() {
        let mut host = MemoryHost::new();
        let e = entity(&mut host);
        let lookup = resolve_family(&host, e, AttachmentTarget::None, true).unwrap();
        assert_eq!(lookup, FamilyLookup::NotApplicable);
    }

    #[test]
    fn test_bound_slot_resolves() {
        let mut host = MemoryHost::new();
        let e = entity(&mut host);
        let family = host.add_family("TestUtilityFamily", Vec::new());
        host.bind_slot(e, SkillSlot::Utility, family).unwrap();

        let lookup =
            resolve_family(&host, e, AttachmentTarget::Slot(SkillSlot::Utility), true).unwrap();
        assert_eq!(lookup, FamilyLookup::Found(family));
    }

    #[test]
    fn test_unbound_slot_is_not_applicable() {
        let mut host = MemoryHost::new();
        let e = entity(&mut host);
        let lookup =
            resolve_family(&host, e, AttachmentTarget::Slot(SkillSlot::Special), true).unwrap();
        assert_eq!(lookup, FamilyLookup::NotApplicable);
    }

    #[test]
    fn test_passive_matches_component_name_any_case() {
        let mut host = MemoryHost::new();
        let e = entity(&mut host);
        let family = host.add_family("TestDefaults", Vec::new());
        host.attach_component(e, "TestPASSIVE", Some(family)).unwrap();

        let lookup = resolve_family(&host, e, AttachmentTarget::Passive, true).unwrap();
        assert_eq!(lookup, FamilyLookup::Found(family));
    }

    #[test]
    fn test_passive_matches_family_name() {
        let mut host = MemoryHost::new();
        let e = entity(&mut host);
        let family = host.add_family("TestPassiveFamily", Vec::new());
        host.attach_component(e, "AuxSkill", Some(family)).unwrap();

        let lookup = resolve_family(&host, e, AttachmentTarget::Passive, true).unwrap();
        assert_eq!(lookup, FamilyLookup::Found(family));
    }

    #[test]
    fn test_passive_substring_false_positive_is_preserved() {
        // Inherited heuristic: any name containing "passive" matches, even
        // when the component is semantically unrelated.
        let mut host = MemoryHost::new();
        let e = entity(&mut host);
        let family = host.add_family("TauntFamily", Vec::new());
        host.attach_component(e, "PassiveAggressiveTaunt", Some(family))
            .unwrap();

        let lookup = resolve_family(&host, e, AttachmentTarget::Passive, true).unwrap();
        assert_eq!(lookup, FamilyLookup::Found(family));
    }

    #[test]
    fn test_first_match_wins_in_host_order() {
        let mut host = MemoryHost::new();
        let e = entity(&mut host);
        let first = host.add_family("FirstPassive", Vec::new());
        let second = host.add_family("SecondPassive", Vec::new());
        host.attach_component(e, "SkillA", Some(first)).unwrap();
        host.attach_component(e, "SkillB", Some(second)).unwrap();

        let lookup = resolve_family(&host, e, AttachmentTarget::Passive, true).unwrap();
        assert_eq!(lookup, FamilyLookup::Found(first));
    }

    #[test]
    fn test_no_passive_found() {
        let mut host = MemoryHost::new();
        let e = entity(&mut host);
        let family = host.add_family("TestPrimaryFamily", Vec::new());
        host.attach_component(e, "TestPrimary", Some(family)).unwrap();

        let lookup = resolve_family(&host, e, AttachmentTarget::Passive, true).unwrap();
        assert_eq!(lookup, FamilyLookup::NoPassiveFound);
    }
}
