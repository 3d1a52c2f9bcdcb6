//! Lifecycle operations on the configuration documents.

use std::marker::PhantomData;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::config::{merge_mappings, prefilter};
use crate::domain::{AppError, ConfigDocument, MergePolicy, NginxStageConfig, OodPortalConfig};
use crate::ports::{HookFilesystem, SnapEnvironment};

/// Options for `ConfigModel::update_config`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Translate hyphenated option names before building the record.
    pub prefilter: bool,
    pub policy: MergePolicy,
}

/// Result of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Merged record matched the document on disk; nothing was written.
    Unchanged,
    /// Document was rewritten. Lists the active services that must be
    /// restarted to pick up the change.
    Updated { restart_required: Vec<String> },
}

impl UpdateOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// One configuration document bound to the hook context.
pub struct ConfigModel<'a, C, S: SnapEnvironment, F: HookFilesystem> {
    ctx: &'a AppContext<S, F>,
    document: PhantomData<fn() -> C>,
}

/// Open OnDemand portal (`ood_portal.yaml`).
pub type OodPortal<'a, S, F> = ConfigModel<'a, OodPortalConfig, S, F>;

/// `nginx_stage` utility (`nginx_stage.yaml`).
pub type NginxStage<'a, S, F> = ConfigModel<'a, NginxStageConfig, S, F>;

impl<'a, C, S, F> ConfigModel<'a, C, S, F>
where
    C: ConfigDocument,
    S: SnapEnvironment,
    F: HookFilesystem,
{
    pub fn new(ctx: &'a AppContext<S, F>) -> Self {
        Self { ctx, document: PhantomData }
    }

    pub fn path(&self) -> PathBuf {
        C::path(self.ctx.paths().common())
    }

    /// Read the current record from disk.
    pub fn load(&self) -> Result<C, AppError> {
        let content = self.ctx.filesystem().read_file(&self.path())?;
        C::from_yaml(&content)
    }

    fn save(&self, config: &C) -> Result<(), AppError> {
        let yaml = config.to_yaml()?;
        self.ctx.filesystem().write_file(&self.path(), &yaml, C::MODE)
    }

    /// Write the default document, replacing whatever is on disk.
    pub fn generate_config(&self) -> Result<(), AppError> {
        let config = C::snap_defaults(self.ctx.paths());
        self.save(&config)?;
        info!(path = %self.path().display(), "Generated default {} configuration.", C::KEY);
        Ok(())
    }

    /// Merge `partial` into the document on disk.
    ///
    /// Only keys present in `partial` take part in the merge. With the
    /// default policy a key already set on disk keeps its value.
    pub fn update_config(
        &self,
        partial: &Value,
        options: UpdateOptions,
    ) -> Result<UpdateOutcome, AppError> {
        let partial = if options.prefilter { prefilter(partial) } else { partial.clone() };
        let partial = match partial {
            Value::Object(mapping) => mapping,
            other => {
                return Err(AppError::InvalidConfig {
                    component: C::KEY.to_string(),
                    details: format!("expected a mapping, found {}", other),
                });
            }
        };

        let candidate = C::from_mapping(partial.clone())?;
        let incoming = candidate
            .to_mapping()?
            .into_iter()
            .filter(|(key, _)| partial.contains_key(key))
            .collect();

        let current = self.load()?;
        let merged =
            C::from_mapping(merge_mappings(&current.to_mapping()?, &incoming, options.policy))?;

        if merged == current {
            debug!("{} configuration unchanged; skipping write.", C::KEY);
            return Ok(UpdateOutcome::Unchanged);
        }

        self.save(&merged)?;
        info!(path = %self.path().display(), "Updated {} configuration.", C::KEY);

        // The document is already written; a failed status query only loses the notice.
        let mut restart_required = Vec::new();
        for service in C::DEPENDENT_SERVICES {
            match self.ctx.snap().service_is_active(service) {
                Ok(true) => {
                    info!(
                        "Service `{}` must be restarted to apply the new {} configuration.",
                        service,
                        C::KEY
                    );
                    restart_required.push(service.to_string());
                }
                Ok(false) => {}
                Err(e) => warn!("Could not query status of service `{}`: {}", service, e),
            }
        }

        Ok(UpdateOutcome::Updated { restart_required })
    }
}
