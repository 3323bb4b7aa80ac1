//! Literal site content.
//!
//! Each landing page is one [`SiteContent`] constant. [`Site`] names them and
//! is what the CLI and the client-side router accept.

mod dietitian;
mod property;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::types::SiteContent;

pub use dietitian::DIETITIAN_LAB;
pub use property::PROPERTY_PRO;

/// A landing page shipped by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    /// Property management platform
    PropertyPro,
    /// Dietitian training platform
    DietitianLab,
}

/// Returned when a site name matches none of [`Site::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown site '{0}' (expected one of: propertypro, dietitianlab)")]
pub struct UnknownSite(pub String);

impl Site {
    /// Every site, in build order.
    pub const ALL: [Site; 2] = [Site::PropertyPro, Site::DietitianLab];

    /// Directory name and CLI identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Site::PropertyPro => "propertypro",
            Site::DietitianLab => "dietitianlab",
        }
    }

    pub fn content(self) -> &'static SiteContent {
        match self {
            Site::PropertyPro => &PROPERTY_PRO,
            Site::DietitianLab => &DIETITIAN_LAB,
        }
    }

    /// Route the page is served under within its own deployment.
    pub fn route(self) -> &'static str {
        "/"
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Site {
    type Err = UnknownSite;

    /// Accepts the slug or the brand name, ignoring case, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Site::ALL
            .into_iter()
            .find(|site| site.slug() == normalized)
            .ok_or_else(|| UnknownSite(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_slugs_and_brand_names() {
        for site in Site::ALL {
            assert_eq!(site.slug().parse::<Site>(), Ok(site));
            assert_eq!(site.content().brand.parse::<Site>(), Ok(site));
        }
        assert_eq!("Property-Pro".parse::<Site>(), Ok(Site::PropertyPro));
        assert_eq!(" dietitian_lab ".parse::<Site>(), Ok(Site::DietitianLab));
    }

    #[test]
    fn rejects_unknown_sites() {
        let err = "bakery".parse::<Site>().unwrap_err();
        assert_eq!(err, UnknownSite("bakery".into()));
        assert!(err.to_string().contains("propertypro"));
        assert!("".parse::<Site>().is_err());
    }

    #[test]
    fn every_site_is_served_at_root() {
        for site in Site::ALL {
            assert_eq!(site.route(), "/");
        }
    }

    #[test]
    fn hrefs_are_relative_or_known_schemes() {
        for site in Site::ALL {
            for href in site.content().hrefs() {
                assert!(
                    href.starts_with('/')
                        || href.starts_with("mailto:")
                        || href.starts_with("tel:")
                        || href.starts_with("https://"),
                    "{site}: unexpected href {href}"
                );
            }
        }
    }

    #[test]
    fn plans_are_well_formed() {
        for site in Site::ALL {
            let content = site.content();
            for group in content.plan_groups {
                assert!(!group.plans.is_empty(), "{site}: empty plan group");
                let popular = group.plans.iter().filter(|p| p.popular).count();
                assert!(popular <= 1, "{site}: {popular} popular plans in one group");
                for plan in group.plans {
                    assert!(!plan.features.is_empty(), "{site}: {} has no features", plan.title);
                    assert_eq!(plan.audience, group.audience);
                }
            }
        }
    }

    #[test]
    fn feature_groups_match_their_audience_count() {
        for site in Site::ALL {
            let content = site.content();
            assert_eq!(content.feature_groups.len(), content.plan_groups.len());
            assert!(content.feature_count() > 0);
        }
    }

    #[test]
    fn property_pro_links_match_documented_paths() {
        let hrefs = PROPERTY_PRO.hrefs();
        for expected in [
            "/signup",
            "/signup?role=agent",
            "/login",
            "/about",
            "/features",
            "/pricing",
            "/blog",
            "/contact",
            "/help",
            "/faq",
            "/terms",
            "/privacy",
            "/cookies",
            "mailto:info@propertypro.com",
            "tel:+1-555-123-4567",
        ] {
            assert!(hrefs.iter().any(|h| h == expected), "missing {expected}");
        }
    }
}
