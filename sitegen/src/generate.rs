//! Render sites and write them to disk.
//!
//! Every site is the `/` route of its own deployment, so each one gets its
//! own directory: `<out_dir>/<slug>/index.html`.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use landing_pages::{RenderOptions, Site, render_site};
use tracing::{debug, info};

use crate::SitegenError;

/// Output directory used when neither the CLI nor the config name one.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// What to build and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub out_dir: PathBuf,
    pub sites: Vec<Site>,
    pub year: i32,
}

/// A page written by [`build_sites`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPage {
    pub site: Site,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Where `site` lands inside `out_dir`.
pub fn page_path(out_dir: &Path, site: Site) -> PathBuf {
    out_dir.join(site.slug()).join("index.html")
}

/// Year in the local timezone, used for the footer copyright.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render every site in the plan, sequentially, overwriting existing pages.
pub fn build_sites(plan: &BuildPlan) -> Result<Vec<BuiltPage>, SitegenError> {
    info!(
        "building {} site(s) into {} (year {})",
        plan.sites.len(),
        plan.out_dir.display(),
        plan.year
    );

    let options = RenderOptions { year: plan.year };
    let mut pages = Vec::with_capacity(plan.sites.len());

    for &site in &plan.sites {
        let path = page_path(&plan.out_dir, site);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| SitegenError::io(dir, e))?;
        }

        let html = render_site(site, &options);
        std::fs::write(&path, &html).map_err(|e| SitegenError::io(&path, e))?;
        debug!("{site}: {} bytes -> {}", html.len(), path.display());

        pages.push(BuiltPage {
            site,
            path,
            bytes: html.len(),
        });
    }

    Ok(pages)
}

/// The literal content of `site` as JSON.
pub fn site_json(site: Site, pretty: bool) -> Result<String, SitegenError> {
    let content = site.content();
    let json = if pretty {
        serde_json::to_string_pretty(content)?
    } else {
        serde_json::to_string(content)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_one_index_per_site() {
        let temp = TempDir::new().expect("temp dir");
        let plan = BuildPlan {
            out_dir: temp.path().join("out"),
            sites: Site::ALL.to_vec(),
            year: 2025,
        };

        let pages = build_sites(&plan).expect("build");
        assert_eq!(pages.len(), 2);
        for page in &pages {
            assert_eq!(page.path, page_path(&plan.out_dir, page.site));
            let html = std::fs::read_to_string(&page.path).expect("read page");
            assert_eq!(html.len(), page.bytes);
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains(page.site.content().brand));
            assert!(html.contains("2025"));
        }
    }

    #[test]
    fn builds_only_requested_sites() {
        let temp = TempDir::new().expect("temp dir");
        let plan = BuildPlan {
            out_dir: temp.path().to_path_buf(),
            sites: vec![Site::DietitianLab],
            year: 2025,
        };

        build_sites(&plan).expect("build");
        assert!(page_path(temp.path(), Site::DietitianLab).exists());
        assert!(!page_path(temp.path(), Site::PropertyPro).exists());
    }

    #[test]
    fn reports_unwritable_output() {
        let temp = TempDir::new().expect("temp dir");
        // A file where the output directory should be
        let blocker = temp.path().join("blocked");
        std::fs::write(&blocker, "").expect("write blocker");

        let plan = BuildPlan {
            out_dir: blocker,
            sites: vec![Site::PropertyPro],
            year: 2025,
        };
        let err = build_sites(&plan).unwrap_err();
        assert!(matches!(err, SitegenError::Io { .. }));
    }

    #[test]
    fn page_path_layout() {
        assert_eq!(
            page_path(Path::new("dist"), Site::PropertyPro),
            PathBuf::from("dist/propertypro/index.html")
        );
    }

    #[test]
    fn json_dump_contains_literals() {
        let json = site_json(Site::PropertyPro, false).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["brand"], "PropertyPro");
        assert_eq!(value["plan_groups"][1]["audience"]["signup_role"], "agent");
        assert_eq!(value["plan_groups"][0]["plans"][0]["price"], "Free");
        assert_eq!(value["feature_groups"][0]["features"][0]["icon"], "home");

        let pretty = site_json(Site::DietitianLab, true).expect("json");
        assert!(pretty.contains("\n  \"brand\": \"DietitianLab\""));
    }
}
