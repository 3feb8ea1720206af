use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use skillforge_host::MemoryHost;
use skillforge_registry::RegistrationPipeline;
use skillforge_types::{
    ActivationDescriptor, EntityRef, IconRef, ImplicitPassive, SkillConfig, SkillDef, SkillSlot,
    Variant,
};

use crate::config::Config;
use crate::skills::{DriftDash, EmberRounds, ForbiddenRite, StaticVeil, DEMO_ENTITY};

/// Loader service - runs the startup registration phase
pub struct LoaderService {
    config: Config,
}

#[derive(Serialize)]
struct DefSummary<'a> {
    token: &'a str,
    name: &'a str,
    machine: &'a str,
    cooldown: f32,
    charges: u32,
    passive: bool,
    keywords: Vec<&'a str>,
}

impl LoaderService {
    /// Create a new loader service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the registration phase against the demo host
    pub fn run(self) -> Result<()> {
        // Initialize logging
        skillforge_logging::init_logging(&self.config.logging.level)?;
        info!("Starting skillforge loader");

        let host = demo_host()?;
        let mut pipeline = RegistrationPipeline::new(host);

        // Registration is sequential by contract: one declaration at a time
        pipeline.register(Arc::new(EmberRounds))?;
        pipeline.register(Arc::new(DriftDash))?;
        pipeline.register(Arc::new(StaticVeil))?;
        pipeline.register(Arc::new(ForbiddenRite))?;

        info!(
            "Registered {} skill declaration types, {} definitions published",
            pipeline.registry().len(),
            pipeline.host().def_count()
        );

        if self.config.catalog.report {
            self.report(pipeline.host())?;
        }

        info!("Loader finished");
        Ok(())
    }

    /// Print the published catalog as JSON
    fn report(&self, host: &MemoryHost) -> Result<()> {
        let mut summaries: Vec<DefSummary> = host
            .defs()
            .map(|def| DefSummary {
                token: &def.name_token,
                name: &def.name,
                machine: &def.machine_name,
                cooldown: def.cooldown,
                charges: def.charge_capacity,
                passive: def.passive,
                keywords: def.keywords.iter().map(String::as_str).collect(),
            })
            .collect();
        summaries.sort_by(|a, b| a.token.cmp(b.token));

        println!("{}", serde_json::to_string_pretty(&summaries)?);
        Ok(())
    }
}

/// Build the demo entity fixture: one entity with primary and utility
/// families already bound, and an implicit passive default that the first
/// real passive will wrap.
fn demo_host() -> Result<MemoryHost> {
    let mut host = MemoryHost::new();
    let entity = host.add_entity(EntityRef::new(DEMO_ENTITY), "Drifter");

    let primary = host.add_family(
        "DrifterPrimaryFamily",
        vec![Variant::gateless(stock_def(
            "DRIFTER_SCRAP_SHOT",
            "Scrap Shot",
            "Fire a quick scrap round.",
            "Weapon",
        )?)],
    );
    host.bind_slot(entity, SkillSlot::Primary, primary)?;
    host.attach_component(entity, "DrifterPrimary", Some(primary))?;

    let utility = host.add_family(
        "DrifterUtilityFamily",
        vec![Variant::gateless(stock_def(
            "DRIFTER_SIDESTEP",
            "Sidestep",
            "Hop sideways.",
            "Body",
        )?)],
    );
    host.bind_slot(entity, SkillSlot::Utility, utility)?;
    host.attach_component(entity, "DrifterUtility", Some(utility))?;

    host.set_implicit_passive(
        entity,
        ImplicitPassive {
            name_token: "DRIFTER_SCAVENGE_NAME".to_string(),
            desc_token: "DRIFTER_SCAVENGE_DESC".to_string(),
            icon: IconRef::new("icons/drifter_scavenge"),
        },
    )?;

    Ok(host)
}

/// A stock definition for fixture families the demo entity ships with
fn stock_def(token: &str, name: &str, description: &str, machine: &str) -> Result<SkillDef> {
    let def = SkillDef::build(&SkillConfig {
        lang_token: token.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        activation: ActivationDescriptor::new(format!("Drifter.{name}").replace(' ', "")),
        machine_name: machine.to_string(),
        cooldown_seconds: 0.0,
        charge_capacity: 1,
        stock_cost: 1,
        icon: IconRef::new("icons/stock"),
        target_entity: None,
        attachment: Default::default(),
        unlock_gate: None,
        keywords: Default::default(),
        auto_apply: false,
        must_key_press: false,
        passive: false,
        agile: false,
        delay_cooldown: false,
        is_combat: true,
    })?;
    Ok(def)
}
