//! Content types for the landing pages.
//!
//! Every record is a `'static` literal: sites are described by constants in
//! [`crate::content`] and handed to the components by reference. The types
//! are:
//!
//! - **Serializable** - `landing-sitegen content <site>` dumps them as JSON
//! - **Copy-friendly** - components take them by value without borrowing issues
//!
//! # Example
//!
//! ```rust
//! use landing_pages::types::{Accent, Audience, PricingPlan, PlanFeature};
//!
//! const STUDENTS: Audience = Audience {
//!     key: "student",
//!     label: "Students",
//!     accent: Accent::Blue,
//!     signup_role: None,
//! };
//!
//! let plan = PricingPlan {
//!     title: "Trial",
//!     price: "Free",
//!     description: "Try a session",
//!     features: &[PlanFeature { text: "1 session", included: true }],
//!     popular: false,
//!     audience: STUDENTS,
//! };
//!
//! assert!(plan.is_free());
//! assert_eq!(plan.signup_href(), "/signup");
//! ```

use serde::Serialize;

/// Signup page every call to action points at.
pub const SIGNUP_PATH: &str = "/signup";

/// Colour family used to tint cards, borders and buttons for an audience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Blue family (tenants, students)
    Blue,
    /// Teal family (property managers, educators)
    Teal,
}

impl Accent {
    /// CSS modifier class carrying the accent colours.
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Teal => "accent-teal",
        }
    }
}

/// A user group a feature, testimonial or plan is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Audience {
    /// Stable identifier ("tenant", "agent", ...)
    pub key: &'static str,
    /// Plural label used in "For <label>" headings
    pub label: &'static str,
    pub accent: Accent,
    /// Value of the `role` query parameter on the signup link, if any
    pub signup_role: Option<&'static str>,
}

impl Audience {
    /// Signup URL for this audience: `/signup` or `/signup?role=<role>`.
    pub fn signup_href(&self) -> String {
        match self.signup_role {
            Some(role) => format!("{SIGNUP_PATH}?role={role}"),
            None => SIGNUP_PATH.to_string(),
        }
    }
}

/// Icon identifiers. Rendered as inline SVG by [`crate::components::Icon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Home,
    Calendar,
    Invoice,
    Tools,
    Chat,
    ChartLine,
    UserPatient,
    ClipboardCheck,
    Book,
    Users,
    Coins,
    Quote,
    Check,
    Cross,
    Envelope,
    Phone,
    MapPin,
    Facebook,
    Twitter,
    Instagram,
    #[serde(rename = "linkedin")]
    LinkedIn,
}

/// A plain hyperlink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Hero banner content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Solid call to action (sign up)
    pub primary: Link,
    /// Outline call to action (log in)
    pub secondary: Link,
    pub image_src: &'static str,
    pub image_alt: &'static str,
    /// Text shown on the gradient panel behind the image
    pub placeholder_title: &'static str,
    pub placeholder_caption: &'static str,
}

/// Heading and lead paragraph on top of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    pub title: &'static str,
    pub description: &'static str,
}

/// One feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// Features aimed at one audience, rendered as one grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureGroup {
    pub audience: Audience,
    pub features: &'static [Feature],
}

/// One testimonial card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar_url: &'static str,
    pub audience: Audience,
}

/// A line in a plan's feature list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
}

/// One pricing tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    pub title: &'static str,
    /// Display price, e.g. "$9.99" or "Free"
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [PlanFeature],
    /// Highlighted with a "Most Popular" badge
    pub popular: bool,
    pub audience: Audience,
}

impl PricingPlan {
    /// Free plans are shown without the "/month" suffix.
    pub fn is_free(&self) -> bool {
        self.price == "Free"
    }

    pub fn signup_href(&self) -> String {
        self.audience.signup_href()
    }
}

/// Pricing tiers aimed at one audience, rendered as one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlanGroup {
    pub audience: Audience,
    pub plans: &'static [PricingPlan],
}

/// A titled list of footer links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [Link],
}

/// Social network shown in the footer icon row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: &'static str,
}

/// Postal, phone and email contact block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub address_lines: &'static [&'static str],
    /// Human readable phone number
    pub phone_label: &'static str,
    /// `tel:` URL
    pub phone_href: &'static str,
    pub email: &'static str,
}

impl ContactInfo {
    /// `mailto:` URL for the contact address.
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything one landing page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    /// Product name shown in the title and footer
    pub brand: &'static str,
    /// One-liner under the brand in the footer and in `<title>`
    pub tagline: &'static str,
    pub hero: Hero,
    pub features_header: SectionHeader,
    pub feature_groups: &'static [FeatureGroup],
    pub testimonials_header: SectionHeader,
    pub testimonials: &'static [Testimonial],
    pub pricing_header: SectionHeader,
    pub plan_groups: &'static [PlanGroup],
    pub footer_columns: &'static [FooterColumn],
    pub contact: ContactInfo,
    pub socials: &'static [SocialLink],
    pub legal_links: &'static [Link],
}

impl SiteContent {
    /// Total number of feature cards across all audiences.
    pub fn feature_count(&self) -> usize {
        self.feature_groups.iter().map(|g| g.features.len()).sum()
    }

    /// Total number of pricing cards across all audiences.
    pub fn plan_count(&self) -> usize {
        self.plan_groups.iter().map(|g| g.plans.len()).sum()
    }

    /// Every hyperlink target the page contains, in document order.
    pub fn hrefs(&self) -> Vec<String> {
        let mut hrefs = vec![
            self.hero.primary.href.to_string(),
            self.hero.secondary.href.to_string(),
        ];
        hrefs.extend(
            self.plan_groups
                .iter()
                .flat_map(|g| g.plans.iter())
                .map(PricingPlan::signup_href),
        );
        hrefs.extend(self.socials.iter().map(|s| s.href.to_string()));
        hrefs.extend(
            self.footer_columns
                .iter()
                .flat_map(|c| c.links.iter())
                .map(|l| l.href.to_string()),
        );
        hrefs.push(self.contact.phone_href.to_string());
        hrefs.push(self.contact.email_href());
        hrefs.extend(self.legal_links.iter().map(|l| l.href.to_string()));
        hrefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGENTS: Audience = Audience {
        key: "agent",
        label: "Property Managers",
        accent: Accent::Teal,
        signup_role: Some("agent"),
    };

    #[test]
    fn signup_href_carries_role() {
        assert_eq!(AGENTS.signup_href(), "/signup?role=agent");
        let tenants = Audience {
            signup_role: None,
            ..AGENTS
        };
        assert_eq!(tenants.signup_href(), "/signup");
    }

    #[test]
    fn free_detection_is_exact() {
        let plan = PricingPlan {
            title: "Basic",
            price: "Free",
            description: "",
            features: &[],
            popular: false,
            audience: AGENTS,
        };
        assert!(plan.is_free());
        let paid = PricingPlan {
            price: "$0 Free trial",
            ..plan
        };
        assert!(!paid.is_free());
    }

    #[test]
    fn accent_classes() {
        assert_eq!(Accent::Blue.css_class(), "accent-blue");
        assert_eq!(Accent::Teal.css_class(), "accent-teal");
    }

    #[test]
    fn accent_serializes_lowercase() {
        let json = serde_json::to_string(&Accent::Teal).expect("serialize");
        assert_eq!(json, "\"teal\"");
    }

    #[test]
    fn icon_names_serialize_as_single_words() {
        let json = serde_json::to_string(&[IconKind::LinkedIn, IconKind::ChartLine]).expect("serialize");
        assert_eq!(json, "[\"linkedin\",\"chart_line\"]");
    }
}
