//! Site chrome: header, footer and the theme switch

mod footer;
mod navbar;
mod theme_toggle;

pub use footer::Footer;
pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;

use leptos::prelude::*;

/// Navbar, page content, footer
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background">
            <Navbar />
            <main>{children()}</main>
            <Footer />
        </div>
    }
}
