use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::routes::Page;

const DESCRIPTION: &str = "Nyaya AI transforms complex Indian legal language into clear, actionable insights. From the Constitution to Supreme Court judgments, accessible to everyone.";

/// Document title for `page`, plus the shared description tags
#[component]
pub fn PageMeta(page: Page) -> impl IntoView {
    view! {
        <Title text=page.title() />
        <Meta name="description" content=DESCRIPTION />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=page.title() />
        <Meta property="og:description" content=DESCRIPTION />
    }
}
