//! Configuration types for angular-smith
//!
//! Defines:
//! - `Settings` - Per-project settings
//! - Related sub-sections

use serde::{Deserialize, Serialize};

/// Per-project settings loaded from `.ngsmith/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub naming: NamingSettings,
    pub patch: PatchSettings,
    pub table: TableSettings,
}

/// Identifier derivation
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Suffix appended to the class name derived from a component name
    pub component_suffix: String,

    /// Directory segment used in default component import paths
    pub components_dir: String,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            component_suffix: "Component".to_string(),
            components_dir: "components".to_string(),
        }
    }
}

/// Source patching
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PatchSettings {
    /// The well-known import whose member list is extended in place;
    /// imports for any other module are prepended as fresh lines
    pub core_import: String,
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            core_import: "@angular/core".to_string(),
        }
    }
}

/// Table snippet layout
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TableSettings {
    /// Title of the trailing operations column
    pub actions_title: String,

    /// Width of the trailing operations column
    pub actions_width: u32,

    /// Width of the left-pinned first column
    pub first_column_width: u32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            actions_title: "Actions".to_string(),
            actions_width: 200,
            first_column_width: 100,
        }
    }
}

impl TableSettings {
    /// Convert to the core builder's options
    pub fn to_options(&self) -> ngsmith_core::TableOptions {
        ngsmith_core::TableOptions {
            actions_title: self.actions_title.clone(),
            actions_width: self.actions_width,
            first_column_width: self.first_column_width,
        }
    }
}
