//! Render one landing page to a file.
//!
//! Run with: `cargo run --example render_site -- dietitianlab`

use landing_pages::{RenderOptions, Site, render_site};

fn main() {
    let site: Site = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("propertypro")
        .parse()
        .expect("Unknown site");

    let html = render_site(site, &RenderOptions { year: 2025 });

    let output_path = format!("{}.html", site.slug());
    std::fs::write(&output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
