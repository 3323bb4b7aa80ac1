//! Configuration file support for the generator.
//!
//! Loads optional `landing.toml` from the working directory.
//!
//! ```toml
//! out_dir = "public"
//! sites = ["propertypro"]
//! copyright_year = 2025
//! ```

use std::path::{Path, PathBuf};

use landing_pages::Site;
use serde::Deserialize;

use crate::SitegenError;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SitegenConfig {
    /// Where pages are written (default: `dist`)
    pub out_dir: Option<PathBuf>,
    /// Sites to build by default; empty means all of them
    pub sites: Vec<String>,
    /// Pin the footer year instead of using the current one
    pub copyright_year: Option<i32>,
}

impl SitegenConfig {
    /// File name looked up in the working directory.
    pub const FILE_NAME: &'static str = "landing.toml";

    /// Load `landing.toml` from `root`. A missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self, SitegenError> {
        let path = root.join(Self::FILE_NAME);
        if !path.exists() {
            tracing::debug!("no {} in {}, using defaults", Self::FILE_NAME, root.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self, SitegenError> {
        let content = std::fs::read_to_string(path).map_err(|e| SitegenError::io(path, e))?;
        let config = toml::from_str(&content).map_err(|source| SitegenError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Configured sites in order without duplicates, or every site when none are listed.
    pub fn resolve_sites(&self) -> Result<Vec<Site>, SitegenError> {
        if self.sites.is_empty() {
            return Ok(Site::ALL.to_vec());
        }
        let sites = self
            .sites
            .iter()
            .map(|name| name.parse::<Site>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dedup_sites(sites))
    }
}

/// Drop repeated sites, keeping the first occurrence of each.
pub fn dedup_sites(sites: Vec<Site>) -> Vec<Site> {
    let mut unique = Vec::with_capacity(sites.len());
    for site in sites {
        if !unique.contains(&site) {
            unique.push(site);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SitegenConfig::default();
        assert!(config.out_dir.is_none());
        assert!(config.sites.is_empty());
        assert!(config.copyright_year.is_none());
        assert_eq!(config.resolve_sites().expect("sites"), Site::ALL.to_vec());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SitegenConfig::load(temp.path()).expect("defaults");
        assert_eq!(config, SitegenConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = SitegenConfig::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SitegenError::Io { .. }));
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file =
            std::fs::File::create(temp.path().join(SitegenConfig::FILE_NAME)).expect("create config");
        writeln!(
            file,
            r#"
out_dir = "public"
sites = ["dietitianlab", "DietitianLab", "propertypro"]
copyright_year = 2024
"#
        )
        .expect("write config");

        let config = SitegenConfig::load(temp.path()).expect("config");
        assert_eq!(config.out_dir, Some(PathBuf::from("public")));
        assert_eq!(config.copyright_year, Some(2024));
        assert_eq!(
            config.resolve_sites().expect("sites"),
            vec![Site::DietitianLab, Site::PropertyPro]
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(SitegenConfig::FILE_NAME), "copyright_year = 2030\n")
            .expect("write config");

        let config = SitegenConfig::load(temp.path()).expect("config");
        assert_eq!(config.copyright_year, Some(2030));
        assert!(config.out_dir.is_none());
        assert!(config.sites.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(SitegenConfig::FILE_NAME), "sites = [unterminated")
            .expect("write config");

        let err = SitegenConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, SitegenError::Config { .. }));
    }

    #[test]
    fn test_unknown_site_in_config() {
        let config = SitegenConfig {
            sites: vec!["bakery".into()],
            ..Default::default()
        };
        let err = config.resolve_sites().unwrap_err();
        assert!(err.to_string().contains("bakery"));
    }

    #[test]
    fn test_dedup_sites_keeps_first_occurrence() {
        let sites = dedup_sites(vec![
            Site::DietitianLab,
            Site::PropertyPro,
            Site::DietitianLab,
            Site::PropertyPro,
        ]);
        assert_eq!(sites, vec![Site::DietitianLab, Site::PropertyPro]);
    }
}
