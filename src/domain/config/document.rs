//! Shared contract for the YAML configuration documents owned by the hooks.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::yaml_compat::quote_ambiguous_scalars;
use crate::domain::{AppError, SnapPaths};

/// A configuration record persisted as one YAML document.
///
/// Records are flat at the top level: `to_mapping` yields one entry per set
/// field and `from_mapping` fills every absent field with its schema default,
/// so `from_mapping(to_mapping(cfg)) == cfg` holds for any record.
pub trait ConfigDocument:
    Serialize + DeserializeOwned + Default + PartialEq + fmt::Debug
{
    /// Component key, as used by the raw dispatcher and in diagnostics.
    const KEY: &'static str;

    /// Permission bits applied every time the document is written.
    const MODE: u32;

    /// Snap services that read this document.
    const DEPENDENT_SERVICES: &'static [&'static str];

    /// Location of the document under `$SNAP_COMMON`.
    fn path(common: &Path) -> PathBuf;

    /// Record written at install time.
    fn snap_defaults(paths: &SnapPaths) -> Self;

    fn from_mapping(mapping: Map<String, Value>) -> Result<Self, AppError> {
        serde_json::from_value(Value::Object(mapping)).map_err(|e| AppError::InvalidConfig {
            component: Self::KEY.to_string(),
            details: e.to_string(),
        })
    }

    fn to_mapping(&self) -> Result<Map<String, Value>, AppError> {
        let value = serde_json::to_value(self).map_err(|e| AppError::InvalidConfig {
            component: Self::KEY.to_string(),
            details: e.to_string(),
        })?;
        match value {
            Value::Object(mapping) => Ok(mapping),
            other => Err(AppError::InvalidConfig {
                component: Self::KEY.to_string(),
                details: format!("expected a mapping, found {}", other),
            }),
        }
    }

    fn from_yaml(content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::ParseError {
            what: format!("{} configuration", Self::KEY),
            details: e.to_string(),
        })
    }

    /// Serialize for consumers that read YAML 1.1.
    fn to_yaml(&self) -> Result<String, AppError> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ParseError {
            what: format!("{} configuration", Self::KEY),
            details: e.to_string(),
        })?;
        Ok(quote_ambiguous_scalars(&yaml))
    }
}
