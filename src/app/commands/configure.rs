use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::models::{NginxStage, OodPortal, UpdateOptions, UpdateOutcome};
use crate::domain::{AppError, ConfigDocument, NginxStageConfig, OodPortalConfig};
use crate::ports::{HookFilesystem, SnapEnvironment};

/// Component keys routed by the dispatcher, in processing order.
pub const COMPONENT_KEYS: [&str; 2] = [OodPortalConfig::KEY, NginxStageConfig::KEY];

/// Outcome for one dispatched component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentUpdate {
    pub key: String,
    pub outcome: UpdateOutcome,
}

/// Execute the configure hook over raw `component key -> JSON` options.
///
/// Unrecognized keys are ignored. Decoding and schema errors are returned
/// as-is; components processed before the failure keep their update.
pub fn execute<S, F>(
    ctx: &AppContext<S, F>,
    raw: &BTreeMap<String, String>,
    options: UpdateOptions,
) -> Result<Vec<ComponentUpdate>, AppError>
where
    S: SnapEnvironment,
    F: HookFilesystem,
{
    info!("Executing snap `configure` hook.");
    for key in raw.keys().filter(|key| !COMPONENT_KEYS.contains(&key.as_str())) {
        debug!("Ignoring unrecognized configuration key `{}`.", key);
    }

    let mut updates = Vec::new();
    for key in COMPONENT_KEYS {
        let Some(blob) = raw.get(key) else {
            continue;
        };
        let partial = decode(key, blob)?;
        let outcome = if key == OodPortalConfig::KEY {
            OodPortal::new(ctx).update_config(&partial, options)?
        } else {
            NginxStage::new(ctx).update_config(&partial, options)?
        };
        updates.push(ComponentUpdate { key: key.to_string(), outcome });
    }
    Ok(updates)
}

/// Ask the snap runtime for every recognized component key.
pub fn collect_options<S: SnapEnvironment>(
    snap: &S,
) -> Result<BTreeMap<String, String>, AppError> {
    let mut raw = BTreeMap::new();
    for key in COMPONENT_KEYS {
        if let Some(value) = snap.get_option(key)? {
            raw.insert(key.to_string(), value);
        }
    }
    Ok(raw)
}

fn decode(key: &str, blob: &str) -> Result<Value, AppError> {
    serde_json::from_str(blob).map_err(|e| AppError::ParseError {
        what: format!("`{}` option", key),
        details: e.to_string(),
    })
}
