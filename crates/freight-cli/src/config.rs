use std::path::{Path, PathBuf};

use freight_core::export::DEFAULT_EXPORT_NAME;
use serde::{Deserialize, Serialize};

const DATA_DIR_NAME: &str = "dados_transporte_rural";
const EXPORT_DIR_NAME: &str = "Downloads";

/// On-disk shape of `config.toml`. Every section and key is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub export: ExportSection,
    #[serde(default)]
    pub edit: EditSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    pub data_dir: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExportSection {
    pub dir: Option<String>,
    pub default_filename: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EditSection {
    #[serde(default)]
    pub zero_keeps_previous: bool,
}

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub export_default_name: String,
    pub zero_keeps_previous: bool,
}

impl AppConfig {
    /// Defaults under `home`, overridden by whatever `file` sets.
    pub fn resolve(file: FileConfig, home: &Path) -> Self {
        let data_dir = file
            .storage
            .data_dir
            .map(|dir| expand_home(&dir, home))
            .unwrap_or_else(|| home.join(DATA_DIR_NAME));
        let export_dir = file
            .export
            .dir
            .map(|dir| expand_home(&dir, home))
            .unwrap_or_else(|| home.join(EXPORT_DIR_NAME));
        let export_default_name = file
            .export
            .default_filename
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_EXPORT_NAME.to_string());

        Self {
            data_dir,
            export_dir,
            export_default_name,
            zero_keeps_previous: file.edit.zero_keeps_previous,
        }
    }
}

/// Load the configuration.
///
/// An explicit `--config` path must exist; the default path is optional.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let home = home_dir()?;
    let file = match explicit {
        Some(path) => read_config(path)?,
        None => {
            let path = default_config_path(&home);
            if path.exists() {
                read_config(&path)?
            } else {
                FileConfig::default()
            }
        }
    };
    Ok(AppConfig::resolve(file, &home))
}

pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(".config")
        .join("transporte-rural")
        .join("config.toml")
}

pub fn read_config(path: &Path) -> anyhow::Result<FileConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        anyhow::anyhow!(
            "Falha ao ler configuração {}: {}",
            path.display(),
            e
        )
    })?;
    toml::from_str(&contents).map_err(|e| {
        anyhow::anyhow!(
            "Falha ao interpretar configuração {}: {}",
            path.display(),
            e
        )
    })
}

fn expand_home(value: &str, home: &Path) -> PathBuf {
    match value.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None if value == "~" => home.to_path_buf(),
        None => PathBuf::from(value),
    }
}

fn home_dir() -> anyhow::Result<PathBuf> {
    ["HOME", "USERPROFILE"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            anyhow::anyhow!("HOME não definido; não é possível resolver os diretórios padrão")
        })
}
