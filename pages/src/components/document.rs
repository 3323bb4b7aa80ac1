//! Root document component - the complete HTML page

use super::LandingPage;
use crate::content::Site;
use crate::styles::LANDING_CSS;
use leptos::prelude::*;

/// The complete HTML document for one site.
#[component]
pub fn SiteDocument(site: Site, year: i32) -> impl IntoView {
    let content = site.content();
    let title = format!("{} | {}", content.brand, content.tagline);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=content.hero.subtitle />
                <title>{title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body class=format!("site-{}", site.slug())>
                <LandingPage content=content year=year />
            </body>
        </html>
    }
}
