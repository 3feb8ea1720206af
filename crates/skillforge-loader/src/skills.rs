//! Bundled skill declarations for the demo entity
//!
//! Each declaration is one concrete type, so the singleton registry can
//! hold it to exactly one instance per process.

use skillforge_host::Host;
use skillforge_registry::SkillDecl;
use skillforge_types::{
    ActivationDescriptor, AttachmentTarget, EntityRef, IconRef, SkillConfig, SkillSlot, UnlockRef,
};

/// The entity every bundled declaration targets
pub const DEMO_ENTITY: &str = "entities/Drifter";

fn drifter_config(lang_token: &str) -> SkillConfig {
    SkillConfig {
        lang_token: lang_token.to_string(),
        name: String::new(),
        description: String::new(),
        activation: ActivationDescriptor::new("States.Idle"),
        machine_name: "Body".to_string(),
        cooldown_seconds: 0.0,
        charge_capacity: 1,
        stock_cost: 1,
        icon: IconRef::new("icons/placeholder"),
        target_entity: Some(EntityRef::new(DEMO_ENTITY)),
        attachment: AttachmentTarget::None,
        unlock_gate: None,
        keywords: Default::default(),
        auto_apply: true,
        must_key_press: false,
        passive: false,
        agile: false,
        delay_cooldown: false,
        is_combat: true,
    }
}

/// Primary-slot replacement round that ignites targets
pub struct EmberRounds;

impl SkillDecl for EmberRounds {
    fn config(&self) -> SkillConfig {
        let mut config = drifter_config("EMBER_ROUNDS");
        config.name = "Ember Rounds".to_string();
        config.description = "Fire a round that ignites for 150% damage.".to_string();
        config.activation = ActivationDescriptor::new("Drifter.FireEmber");
        config.machine_name = "Weapon".to_string();
        config.cooldown_seconds = 0.0;
        config.icon = IconRef::new("icons/ember_rounds");
        config.attachment = AttachmentTarget::Slot(SkillSlot::Primary);
        config.keywords.insert("Ignite".to_string());
        config
    }

    fn post_creation(&self, host: &mut dyn Host) -> anyhow::Result<()> {
        host.localize("KEYWORD_IGNITE", "Ignite: deal burn damage over time.")?;
        Ok(())
    }
}

/// Sprint-friendly utility dash
pub struct DriftDash;

impl SkillDecl for DriftDash {
    fn config(&self) -> SkillConfig {
        let mut config = drifter_config("DRIFT_DASH");
        config.name = "Drift Dash".to_string();
        config.description = "Dash forward, stunning enemies you pass through.".to_string();
        config.activation = ActivationDescriptor::new("Drifter.Dash");
        config.machine_name = "Body".to_string();
        config.cooldown_seconds = 6.0;
        config.charge_capacity = 2;
        config.icon = IconRef::new("icons/drift_dash");
        config.attachment = AttachmentTarget::Slot(SkillSlot::Utility);
        config.agile = true;
        config.keywords.insert("Stun".to_string());
        config
    }
}

/// First real passive for the demo entity; triggers wrapper synthesis
/// because the entity only has an implicit default.
pub struct StaticVeil;

impl SkillDecl for StaticVeil {
    fn config(&self) -> SkillConfig {
        let mut config = drifter_config("STATIC_VEIL");
        config.name = "Static Veil".to_string();
        config.description = "Shock nearby enemies while standing still.".to_string();
        config.activation = ActivationDescriptor::new("Drifter.VeilAura");
        config.machine_name = "Aura".to_string();
        config.icon = IconRef::new("icons/static_veil");
        config.attachment = AttachmentTarget::Passive;
        config.passive = true;
        config.unlock_gate = Some(UnlockRef::new("unlocks/static_veil"));
        config
    }
}

/// Published for manual wiring only; never composed automatically
pub struct ForbiddenRite;

impl SkillDecl for ForbiddenRite {
    fn config(&self) -> SkillConfig {
        let mut config = drifter_config("FORBIDDEN_RITE");
        config.name = "Forbidden Rite".to_string();
        config.description = "Sacrifice health to detonate every ignite.".to_string();
        config.activation = ActivationDescriptor::new("Drifter.Rite");
        config.machine_name = "Weapon".to_string();
        config.cooldown_seconds = 18.0;
        config.icon = IconRef::new("icons/forbidden_rite");
        config.attachment = AttachmentTarget::Slot(SkillSlot::Special);
        config.auto_apply = false;
        config.must_key_press = true;
        config
    }
}
