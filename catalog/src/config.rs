use crate::error::CatalogError;
use anyhow::Result;
use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the preference directory
pub const CONFIGURATION_FILE_NAME: &str = "config.toml";

/// Seconds between each refresh of the product table, unless configured otherwise
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

/// Default file name of the spreadsheet export
pub const DEFAULT_EXPORT_FILE_NAME: &str = "products.xlsx";

/// Application configuration struct
/// Holds the location of the local product database, the default export target and the
/// settings of the interactive user interface.
///
/// Every section may be omitted from the Toml file, in which case the defaults are used.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct AppConfiguration {
    #[serde(default)]
    pub application_data: ApplicationData,

    #[serde(default)]
    pub export: ExportConfiguration,

    #[serde(default)]
    pub ui: UiConfiguration,
}

/// Holds the configuration for the `application_data` section of the Toml file
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct ApplicationData {
    /// The path to the Sqlite file holding the products
    pub database: String,
}

impl Default for ApplicationData {
    fn default() -> Self {
        ApplicationData {
            database: database_file().to_string_lossy().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct ExportConfiguration {
    /// Suggested target of the spreadsheet export
    pub default_path: String,
}

impl Default for ExportConfiguration {
    fn default() -> Self {
        ExportConfiguration {
            default_path: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct UiConfiguration {
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for UiConfiguration {
    fn default() -> Self {
        UiConfiguration {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

/// Filename holding the application configuration parameters
#[must_use]
pub fn configuration_file() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(CONFIGURATION_FILE_NAME),
        |dirs| dirs.preference_dir().join(CONFIGURATION_FILE_NAME),
    )
}

/// Filename of the Sqlite DBMS holding the products
#[must_use]
pub fn database_file() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from("products.db"),
        |dirs| dirs.data_dir().join("products.db"),
    )
}

/// Loads the configuration file, falling back to the defaults if there is none.
///
/// # Errors
/// Returns an error if the file exists but could not be read or parsed.
pub fn load() -> Result<AppConfiguration, CatalogError> {
    let config_path = configuration_file();
    if config_path.try_exists()? {
        read(&config_path)
    } else {
        info!(
            "No configuration file {}, using defaults",
            config_path.to_string_lossy()
        );
        Ok(AppConfiguration::default())
    }
}

#[allow(clippy::missing_errors_doc)]
pub fn save(cfg: &AppConfiguration) -> Result<()> {
    create_configuration_file(cfg, &configuration_file())
}

#[allow(clippy::missing_errors_doc)]
pub fn remove() -> io::Result<()> {
    fs::remove_file(configuration_file().as_path())
}

#[allow(clippy::missing_errors_doc)]
pub fn application_config_to_string(cfg: &AppConfiguration) -> Result<String, CatalogError> {
    Ok(toml::to_string::<AppConfiguration>(cfg)?)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "norn", "product-catalog")
}

/// Reads the `Application` configuration struct from the supplied TOML file
fn read(path: &Path) -> Result<AppConfiguration, CatalogError> {
    let mut file = File::open(path).map_err(|source| CatalogError::ApplicationConfig {
        path: path.into(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| CatalogError::ApplicationConfig {
            path: path.into(),
            source,
        })?;
    toml::from_str::<AppConfiguration>(&contents).map_err(|source| CatalogError::TomlParse {
        path: path.into(),
        source,
    })
}

fn create_configuration_file(cfg: &AppConfiguration, path: &Path) -> Result<()> {
    if let Some(directory) = path.parent() {
        if !directory.as_os_str().is_empty() && !directory.try_exists()? {
            fs::create_dir_all(directory)?;
        }
    }

    debug!("Writing configuration to {}", path.to_string_lossy());
    let mut file = File::create(path).map_err(|_src_err| CatalogError::ConfigFileCreation {
        path: path.to_path_buf(),
    })?;
    let toml = application_config_to_string(cfg)?;
    file.write_all(toml.as_bytes())?;

    Ok(())
}
