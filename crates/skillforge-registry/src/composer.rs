//! Grows an existing family or synthesizes the passive wrapper

use std::sync::Arc;

use skillforge_host::Host;
use skillforge_types::{EntityHandle, FamilyHandle, Result, SkillDef, Variant};
use tracing::{debug, info};

/// Append `variant` as the last member of `family`.
///
/// The variant sequence is replaced in a single swap: a reader holding a
/// prior snapshot keeps it unchanged, and no reader can ever observe
/// partial growth. Existing variant order is untouched and the new variant
/// is always last. Appending the same definition twice yields two
/// variants; the singleton registry is what keeps that from happening
/// through the pipeline, not this function.
pub fn append_variant<H: Host + ?Sized>(
    host: &mut H,
    family: FamilyHandle,
    variant: Variant,
) -> Result<()> {
    let current = host.family_variants(family)?;
    let mut grown = Vec::with_capacity(current.len() + 1);
    grown.extend_from_slice(&current);
    grown.push(variant);
    host.swap_family_variants(family, grown.into())?;

    debug!(
        family = %host.family_name(family)?,
        len = current.len() + 1,
        "Appended family variant"
    );
    Ok(())
}

/// Wrap an entity's implicit passive default into an explicit family and
/// seat `def` beside it.
///
/// Hosts model "this entity has no passive skill" as "no dedicated
/// attachment point, but the entity always idly does X". Introducing the
/// first real passive must not drop that idle behavior, so the default is
/// captured as an inert definition in slot 0, its old activation path is
/// disabled, and `def` takes slot 1 behind its unlock gate (if any). The
/// wrapper component exists only to hold these two variants and stays
/// hidden from selection surfaces.
pub fn synthesize_passive_family<H: Host + ?Sized>(
    host: &mut H,
    entity: EntityHandle,
    def: &SkillDef,
) -> Result<FamilyHandle> {
    let entity_name = host.entity_name(entity)?;
    let wrapper_name = format!("{entity_name}Passive");

    let component = host.add_hidden_component(entity, &wrapper_name)?;
    let family = host.create_family(&wrapper_name)?;

    let source = host.implicit_passive(entity)?;
    let captured = SkillDef::capture_implicit(&source);
    host.publish_def(&captured)?;
    host.disable_implicit_passive(entity)?;

    let variants: Arc<[Variant]> = vec![
        Variant::gateless(captured),
        Variant::for_def(def.clone()),
    ]
    .into();
    host.swap_family_variants(family, variants)?;
    host.bind_family(component, family)?;

    info!(
        entity = %entity_name,
        family = %wrapper_name,
        "Synthesized passive wrapper family"
    );
    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillforge_host::MemoryHost;
    use skillforge_types::{
        ActivationDescriptor, AttachmentTarget, EntityRef, IconRef, ImplicitPassive, SkillConfig,
    };
    use std::collections::BTreeSet;

    fn def(token: &str) -> SkillDef {
        SkillDef::build(&SkillConfig {
            lang_token: token.to_string(),
            name: "Composer Fixture".to_string(),
            description: "Composer fixture skill.".to_string(),
            activation: ActivationDescriptor::new("States.Fixture"),
            machine_name: "Body".to_string(),
            cooldown_seconds: 2.0,
            charge_capacity: 1,
            stock_cost: 1,
            icon: IconRef::new("icons/fixture"),
            target_entity: None,
            attachment: AttachmentTarget::None,
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
    fn test_append_preserves_order() {
        let mut host = MemoryHost::new();
        let family = host.add_family(
            "OrderFamily",
            vec![Variant::gateless(def("A")), Variant::gateless(def("B"))],
        );

        append_variant(&mut host, family, Variant::gateless(def("C"))).unwrap();

        let variants = host.family_variants(family).unwrap();
        let tokens: Vec<&str> = variants.iter().map(|v| v.def.skill_name.as_str()).collect();
        assert_eq!(tokens, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_append_is_not_idempotent() {
        let mut host = MemoryHost::new();
        let family = host.add_family("DupFamily", Vec::new());
        let d = def("DUP");

        append_variant(&mut host, family, Variant::gateless(d.clone())).unwrap();
        append_variant(&mut host, family, Variant::gateless(d)).unwrap();

        assert_eq!(host.family_variants(family).unwrap().len(), 2);
    }

    #[test]
    fn test_synthesize_builds_two_slot_wrapper() {
        let mut host = MemoryHost::new();
        let entity = host.add_entity(EntityRef::new("entities/Test"), "Test");
        host.set_implicit_passive(
            entity,
            ImplicitPassive {
                name_token: "TEST_PASSIVE_NAME".to_string(),
                desc_token: "TEST_PASSIVE_DESC".to_string(),
                icon: IconRef::new("icons/test_passive"),
            },
        )
        .unwrap();

        let new_def = def("REAL_PASSIVE");
        let family = synthesize_passive_family(&mut host, entity, &new_def).unwrap();

        let variants = host.family_variants(family).unwrap();
        assert_eq!(variants.len(), 2);
        assert!(variants[0].unlock_gate.is_none());
        assert_eq!(variants[0].def.name_token, "TEST_PASSIVE_NAME");
        assert_eq!(variants[1].def.name_token, new_def.name_token);

        // the captured default is now a first-class table entry
        assert!(host.def("TEST_PASSIVE_NAME").is_some());
        // and the old activation path is off
        assert!(!host.implicit_passive_enabled(entity).unwrap());
    }

    #[test]
    fn test_synthesize_without_implicit_default_fails() {
        let mut host = MemoryHost::new();
        let entity = host.add_entity(EntityRef::new("entities/Bare"), "Bare");

        let err = synthesize_passive_family(&mut host, entity, &def("HOPEFUL")).unwrap_err();
        assert!(matches!(
            err,
            skillforge_types::SkillError::NoImplicitPassive { .. }
        ));
    }
}
