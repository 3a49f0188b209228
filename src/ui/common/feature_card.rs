use leptos::prelude::*;

use super::icon_box::{Accent, IconBox};
use crate::core::content::InfoCard;

/// Card with an icon, a serif title and a short description
#[component]
pub fn FeatureCard(
    card: InfoCard,
    #[prop(optional)] icon_variant: Accent,
    /// Icon beside the text instead of above it
    #[prop(optional)]
    horizontal: bool,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let layout = if horizontal { "flex gap-4" } else { "" };

    view! {
        <div class=format!(
            "p-6 bg-card rounded-lg border border-border shadow-page hover:shadow-book transition-all group {layout} {class}",
        )>
            <IconBox
                icon=card.icon
                variant=icon_variant
                class="group-hover:scale-105 transition-transform"
            />
            <div class=if horizontal { "" } else { "mt-4" }>
                <h3 class="font-serif text-lg font-semibold text-foreground mb-2">{card.title}</h3>
                <p class="text-sm text-muted-foreground leading-relaxed">{card.description}</p>
            </div>
        </div>
    }
}

/// Row of small bordered labels
#[component]
pub fn TagList(
    items: &'static [&'static str],
    #[prop(optional)] variant: Accent,
) -> impl IntoView {
    let colors = variant.class();

    view! {
        <div class="flex flex-wrap gap-2">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <span class=format!("text-xs font-medium px-3 py-1.5 rounded border {colors}")>
                            {*item}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
