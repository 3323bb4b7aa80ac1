//! # landing-sitegen
//!
//! Static site generator for the landing pages in [`landing_pages`].
//!
//! Renders each selected site to `<out_dir>/<slug>/index.html`. Settings
//! come from CLI flags, then the optional `landing.toml`, then defaults.
//!
//! ```rust,no_run
//! use landing_sitegen::{BuildPlan, build_sites, current_year};
//! use landing_pages::Site;
//!
//! let plan = BuildPlan {
//!     out_dir: "dist".into(),
//!     sites: Site::ALL.to_vec(),
//!     year: current_year(),
//! };
//! for page in build_sites(&plan)? {
//!     println!("{}", page.path.display());
//! }
//! # Ok::<(), landing_sitegen::SitegenError>(())
//! ```

pub mod config;
mod error;
pub mod generate;

pub use config::{SitegenConfig, dedup_sites};
pub use error::SitegenError;
pub use generate::{BuildPlan, BuiltPage, DEFAULT_OUT_DIR, build_sites, current_year, page_path, site_json};
