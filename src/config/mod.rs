use anyhow::{Context, Result};
use lunchkompis_core::util::sort::SortOrder;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "lunchkompis.toml";

const ENV_NAME_CATALOG_FILE: &str = "LUNCHKOMPIS_CATALOG";

pub struct Config {
    pub catalog: Catalog,
    pub search: Search,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config: raw::Config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!(
                    "{} not found => load default configuration.",
                    file_path.display()
                );
                raw::Config::default()
            }
            Err(err) => return Err(err.into()),
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(file) = env::var(ENV_NAME_CATALOG_FILE) {
            log::debug!("Use catalog file from {ENV_NAME_CATALOG_FILE}");
            cfg.catalog.file = Some(file.into());
        }
        Ok(cfg)
    }
}

pub struct Catalog {
    /// JSON file with cities and restaurants.
    /// The embedded catalog is used if missing.
    pub file: Option<PathBuf>,
}

pub struct Search {
    pub default_sort: SortOrder,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { catalog, search } = from;

        let raw::Catalog { file } = catalog.unwrap_or_default();
        let catalog = Catalog { file };

        let raw::Search { default_sort } = search.unwrap_or_default();
        let search = Search {
            default_sort: default_sort
                .parse::<SortOrder>()
                .context("Invalid default sort order")?,
        };

        Ok(Self { catalog, search })
    }
}
