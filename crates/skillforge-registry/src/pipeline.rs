//! Linear registration pipeline and the author-facing declaration trait

use std::sync::Arc;

use skillforge_host::Host;
use skillforge_types::{SkillConfig, SkillDef, Variant};
use tracing::{debug, info};

use crate::composer;
use crate::resolver::{self, FamilyLookup};
use crate::singleton::SkillRegistry;

/// One pluggable skill declaration.
///
/// Implementors describe themselves through [`SkillConfig`] and may run
/// definition-specific follow-up once their definition is published.
/// Exactly one instance per concrete type ever registers, enforced by
/// [`SkillRegistry`].
pub trait SkillDecl: Send + Sync + 'static {
    /// The full configuration for this declaration
    fn config(&self) -> SkillConfig;

    /// Extension hook invoked once after successful publication.
    ///
    /// Failures here are the declaration's own business: the pipeline does
    /// not catch them, they propagate to whoever drove the registration.
    fn post_creation(&self, _host: &mut dyn Host) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Drives declarations through build, singleton claim, family resolution,
/// composition, publication, localization, and the post-creation hook, in
/// that order.
///
/// Validation and singleton failures halt the run before anything
/// host-visible happened; there is nothing to roll back because nothing
/// was mutated yet. Registration is a startup-phase, single-threaded
/// activity: callers must not run registrations concurrently.
pub struct RegistrationPipeline<H: Host> {
    host: H,
    registry: SkillRegistry,
}

impl<H: Host> RegistrationPipeline<H> {
    /// Pipeline over `host` with an empty singleton registry
    pub fn new(host: H) -> Self {
        Self {
            host,
            registry: SkillRegistry::new(),
        }
    }

    /// Register one declaration, returning the published definition.
    pub fn register<D: SkillDecl>(&mut self, decl: Arc<D>) -> anyhow::Result<SkillDef> {
        let config = decl.config();
        let def = SkillDef::build(&config)?;
        self.registry.register(Arc::clone(&decl))?;
        debug!(skill = %def.skill_name, "Declaration built and claimed its singleton slot");

        let composed = match (&config.target_entity, config.auto_apply) {
            (Some(reference), true) => {
                let entity = self.host.load_entity(reference)?;
                match resolver::resolve_family(&self.host, entity, config.attachment, true)? {
                    FamilyLookup::Found(family) => {
                        composer::append_variant(
                            &mut self.host,
                            family,
                            Variant::for_def(def.clone()),
                        )?;
                        true
                    }
                    FamilyLookup::NoPassiveFound => {
                        composer::synthesize_passive_family(&mut self.host, entity, &def)?;
                        true
                    }
                    FamilyLookup::NotApplicable => false,
                }
            }
            _ => false,
        };

        self.host.publish_def(&def)?;
        self.host.localize(&def.name_token, &def.name)?;
        self.host.localize(&def.desc_token, &def.description)?;
        info!(skill = %def.skill_name, composed, "Published skill definition");

        decl.post_creation(&mut self.host)?;
        Ok(def)
    }

    /// The singleton registry backing this pipeline
    pub fn registry(&self) -> &SkillRegistry {
        &self.registry
    }

    /// The host this pipeline composes into
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host (fixture adjustments between runs)
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
