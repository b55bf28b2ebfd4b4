//! Settings loader for .ngsmith/config.toml

use std::path::Path;

use ngsmith_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const NGSMITH_DIR: &str = ".ngsmith";

/// Load settings from .ngsmith/config.toml
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(NGSMITH_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config file in the .ngsmith/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let ngsmith_dir = project_path.join(NGSMITH_DIR);

    if !ngsmith_dir.exists() {
        std::fs::create_dir_all(&ngsmith_dir)
            .map_err(|e| Error::config(format!("Failed to create .ngsmith dir: {}", e)))?;
    }

    let config_path = ngsmith_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# angular-smith configuration

[naming]
component_suffix = "Component"
components_dir = "components"       # segment used in default import paths

[patch]
core_import = "@angular/core"       # the import whose member list is extended in place

[table]
actions_title = "Actions"
actions_width = 200
first_column_width = 100
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}
