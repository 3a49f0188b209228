//! Not found page component
//!
//! Shown for every path without a route. The server answers it with 404.

use leptos::prelude::*;
use leptos_router::components::A;

use super::PageMeta;
use crate::core::routes::Page;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <PageMeta page=Page::NotFound />
        <div class="min-h-screen bg-muted flex items-center justify-center p-4">
            <div class="text-center">
                <h1 class="mb-4 text-4xl font-bold font-serif text-primary">"404"</h1>
                <p class="mb-4 text-xl text-muted-foreground">{Page::NotFound.heading()}</p>
                <A href="/" attr:class="inline-flex items-center gap-2 text-primary underline hover:text-primary/90">
                    <Icon name=icons::HOME class="w-4 h-4" />
                    "Return to Home"
                </A>
            </div>
        </div>
    }
}
