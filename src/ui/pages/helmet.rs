//! Cursor-reveal scene
//!
//! Two copies of the same animated scene are stacked. The top one is drawn in
//! blueprint style and only shows inside a circle that follows the pointer.

use leptos::prelude::*;
use leptos_router::components::A;

use super::PageMeta;
use crate::core::animation::FrameClock;
use crate::core::animation::helmet::{
    self, HelmetFrame, POINTER_REST, REVEAL_RADIUS, RING_COUNT, reveal_mask, ring_size,
};
use crate::core::content::HELMET_LEGEND;
use crate::core::routes::Page;
use crate::ui::animation::use_animation_loop;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn HelmetPage() -> impl IntoView {
    let animation = use_animation_loop();
    let clock = animation.clock();
    let pointer = RwSignal::new(POINTER_REST);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::animation::helmet::normalize_pointer;
        use leptos::ev::pointermove;

        let handle = window_event_listener(pointermove, move |ev| {
            let Some(window) = leptos::web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
            pointer.set(normalize_pointer(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                width,
                height,
            ));
        });
        on_cleanup(move || handle.remove());
    }

    let mask = move || {
        let (nx, ny) = pointer.get();
        let mask = reveal_mask(nx, ny, REVEAL_RADIUS);
        format!("mask-image: {mask}; -webkit-mask-image: {mask};")
    };

    view! {
        <PageMeta page=Page::HelmetReveal />
        <div class="relative h-screen w-full bg-parchment overflow-hidden">
            <div class="absolute inset-0">
                <HelmetScene clock=clock blueprint=false />
            </div>
            <div class="absolute inset-0 pointer-events-none" style=mask aria-hidden="true">
                <HelmetScene clock=clock blueprint=true />
            </div>

            <div class="absolute top-6 left-6 z-10">
                <A
                    href="/"
                    attr:class="flex items-center gap-3 px-4 py-2 rounded-lg bg-card/80 backdrop-blur-sm border border-border shadow-book text-foreground hover:bg-card transition-colors"
                >
                    <Icon name=icons::ARROW_LEFT />
                    <span class="font-serif font-medium">"Back"</span>
                </A>
            </div>

            <div class="absolute left-6 md:left-10 bottom-6 md:bottom-10 max-w-lg bg-card/90 backdrop-blur-md p-6 rounded-xl border border-border shadow-elevated z-10">
                <div class="flex items-center gap-3 mb-3">
                    <div class="w-10 h-10 rounded-full bg-accent/20 flex items-center justify-center">
                        <Icon name=icons::SCALE class="w-5 h-5 text-accent" />
                    </div>
                    <h1 class="text-3xl font-serif font-semibold text-foreground">{Page::HelmetReveal.heading()}</h1>
                </div>
                <p class="text-muted-foreground leading-relaxed">
                    "An AI-powered legal assistant that analyzes statutes, case law, and precedents, instantly and accurately."
                </p>
                <div class="mt-4 pt-4 border-t border-border">
                    <p class="text-sm text-accent italic font-serif">"\"Where law meets intelligence.\""</p>
                </div>
            </div>

            <div class="absolute right-6 md:right-10 top-1/2 -translate-y-1/2 max-w-xs hidden md:block z-10">
                <div class="space-y-4">
                    {HELMET_LEGEND
                        .iter()
                        .map(|(dot, title, caption)| view! {
                            <div class="bg-card/70 backdrop-blur-sm p-4 rounded-lg border border-border">
                                <div class="flex items-center gap-2 mb-2">
                                    <div class=format!("w-2 h-2 rounded-full {dot}") />
                                    <span class="text-sm font-medium text-foreground">{*title}</span>
                                </div>
                                <p class="text-xs text-muted-foreground">{*caption}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="absolute top-4 right-4 w-16 h-16 border-t-2 border-r-2 border-accent/30 rounded-tr-lg pointer-events-none" />
            <div class="absolute bottom-4 right-4 w-16 h-16 border-b-2 border-r-2 border-accent/30 rounded-br-lg pointer-events-none" />
        </div>
    }
}

/// The core, its rings and the scales, posed for the current frame
#[component]
fn HelmetScene(clock: ReadSignal<FrameClock>, blueprint: bool) -> impl IntoView {
    let frame = Memo::new(move |_| helmet::frame(clock.get().time()));
    let layer = if blueprint { "helmet-scene helmet-blueprint" } else { "helmet-scene" };

    view! {
        <div class=layer>
            <div
                class="helmet-stage"
                style=move || format!("transform: {};", frame.get().scene_transform().to_css())
            >
                {(0..RING_COUNT)
                    .map(|index| {
                        let size = ring_size(index);
                        view! {
                            <div
                                class="helmet-ring"
                                style=move || format!(
                                    "width: {size:.0}px; height: {size:.0}px; transform: {};",
                                    frame.get().ring_css(index),
                                )
                            />
                        }
                    })
                    .collect_view()}
                <div
                    class="helmet-core"
                    style=move || core_style(&frame.get())
                />
                <ScalesOfJustice />
            </div>
        </div>
    }
}

fn core_style(frame: &HelmetFrame) -> String {
    format!("transform: translate(-50%, -50%) {};", frame.core_transform().to_css())
}

#[component]
fn ScalesOfJustice() -> impl IntoView {
    view! {
        <svg class="helmet-scales" viewBox="0 0 260 220" fill="currentColor" aria-hidden="true">
            <rect x="124" y="40" width="12" height="160" rx="5" />
            <rect x="70" y="196" width="120" height="12" rx="4" />
            <rect x="10" y="36" width="240" height="8" rx="4" />
            <rect x="29" y="44" width="3" height="70" />
            <rect x="228" y="44" width="3" height="70" />
            <ellipse cx="30" cy="118" rx="40" ry="8" />
            <ellipse cx="230" cy="118" rx="40" ry="8" />
            <circle cx="130" cy="34" r="10" />
        </svg>
    }
}
