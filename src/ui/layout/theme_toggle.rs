use leptos::prelude::*;

use crate::ui::common::{Tooltip, TooltipPosition};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

/// Sun/moon switch with a sliding thumb
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <Tooltip
            text=Signal::derive(move || theme.theme().toggle_label().to_string())
            position=TooltipPosition::Bottom
        >
            <button
                class="relative w-16 h-8 rounded-full bg-secondary border border-border p-1 transition-colors duration-300 hover:bg-muted focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2 focus:ring-offset-background"
                aria-label=move || theme.theme().toggle_label()
                on:click=move |_| theme.toggle()
            >
                <div class="absolute inset-0 flex items-center justify-between px-2 pointer-events-none">
                    <Icon name=icons::SUN class="w-4 h-4 text-gold" />
                    <Icon name=icons::MOON class="w-4 h-4 text-primary" />
                </div>
                <div
                    class="relative z-10 w-6 h-6 rounded-full bg-primary shadow-lg flex items-center justify-center transition-transform duration-300"
                    style=move || if theme.is_dark() { "transform: translateX(32px);" } else { "transform: translateX(0);" }
                >
                    <Show
                        when=move || theme.is_dark()
                        fallback=|| view! { <Icon name=icons::SUN class="w-3.5 h-3.5 text-primary-foreground" /> }
                    >
                        <Icon name=icons::MOON class="w-3.5 h-3.5 text-primary-foreground" />
                    </Show>
                </div>
            </button>
        </Tooltip>
    }
}
