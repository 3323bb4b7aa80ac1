// Landing pages - client-side build (Leptos 0.8 CSR)
//
// `/` serves the site picked at build time (LANDING_SITE, default
// propertypro); `/:site` serves any site by slug.

use landing_pages::components::LandingPage;
use landing_pages::styles::LANDING_CSS;
use landing_pages::Site;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Site served at `/`.
fn default_site() -> Site {
    match option_env!("LANDING_SITE").map(str::parse::<Site>) {
        Some(Ok(site)) => site,
        Some(Err(err)) => {
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
            Site::PropertyPro
        }
        None => Site::PropertyPro,
    }
}

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{LANDING_CSS}</style>
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <SitePage site=default_site() /> } />
                <Route path=path!("/:site") view=NamedSite />
            </Routes>
        </Router>
    }
}

#[component]
fn NamedSite() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params.read().get("site").unwrap_or_default();
        match slug.parse::<Site>() {
            Ok(site) => view! { <SitePage site=site /> }.into_any(),
            Err(err) => {
                web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
                view! { <NotFound /> }.into_any()
            }
        }
    }
}

#[component]
fn SitePage(site: Site) -> impl IntoView {
    let content = site.content();

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} | {}", content.brand, content.tagline));
        if let Some(body) = document.body() {
            body.set_class_name(&format!("site-{}", site.slug()));
        }
    }

    view! { <LandingPage content=content year=current_year() /> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"Page not found"</h1>
            <p>
                "Try "
                <a href="/propertypro">"PropertyPro"</a>
                " or "
                <a href="/dietitianlab">"DietitianLab"</a>
                "."
            </p>
        </main>
    }
}
