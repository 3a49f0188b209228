use leptos::prelude::*;

use super::PageMeta;
use crate::core::animation::showcase::{CARD_SHADOW, card_filter, hover_transform};
use crate::core::content::{SHOWCASE_CARDS, ShowcaseCard};
use crate::core::routes::Page;
use crate::ui::layout::{Footer, Navbar};

#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <PageMeta page=Page::CardShowcase />
        <div class="min-h-screen bg-background">
            <Navbar />
            <main class="pt-32 pb-20">
                <div class="container mx-auto px-6">
                    <div class="text-center mb-16">
                        <h1 class="font-serif text-4xl md:text-5xl font-bold text-foreground mb-4">
                            {Page::CardShowcase.heading()}
                        </h1>
                        <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                            "Interactive 3D cards with hover animations and customizable styles"
                        </p>
                    </div>

                    <div class="flex flex-row flex-wrap justify-center items-center gap-6 md:gap-12">
                        {SHOWCASE_CARDS.iter().map(|card| view! { <ShowcaseTile card=*card /> }).collect_view()}
                    </div>
                </div>
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn ShowcaseTile(card: ShowcaseCard) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let swatch = RwSignal::new(None::<usize>);

    let style = move || {
        format!(
            "background: {}; box-shadow: {CARD_SHADOW}; transform: {};",
            card.bg_color,
            hover_transform(hovered.get()).to_css()
        )
    };
    let image_style = move || swatch.get().map(|index| format!("filter: {};", card_filter(index)));

    view! {
        <div
            class=format!(
                "{} relative w-[clamp(200px,22vw,300px)] h-[364px] min-w-[200px] rounded-lg cursor-pointer transition-all duration-300 ease-out flex-col justify-end items-center",
                card.visibility,
            )
            style=style
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="absolute inset-0 overflow-hidden rounded-lg">
                <img
                    src=card.image
                    alt=card.title
                    class="w-full h-full object-cover transition-all duration-400"
                    style=image_style
                />
            </div>

            <div
                class="absolute bottom-0 left-0 w-full h-4/5 rounded-b-lg pointer-events-none"
                style=format!("background: linear-gradient(transparent, {} 80%);", card.bg_color)
            />

            <div class="gradient-blur absolute z-10 h-full inset-x-0 bottom-0 pointer-events-none">
                {(1..=6).map(|layer| view! { <div class=format!("blur-layer-{layer}") /> }).collect_view()}
            </div>

            <div class="relative z-20 p-4 pb-6 w-full">
                <h2 class="text-xl font-bold mb-2" style=format!("color: {};", card.text_color)>{card.title}</h2>
                <p class="text-sm font-medium mb-4 leading-tight" style=format!("color: {}; opacity: 0.9;", card.text_color)>
                    {card.description}
                </p>
                <div class="absolute bottom-2 right-3 flex gap-1">
                    {card
                        .colors
                        .iter()
                        .enumerate()
                        .map(|(index, color)| view! {
                            <button
                                type="button"
                                class="w-6 h-4 rounded cursor-pointer border border-border/50 hover:border-foreground/50 transition-colors"
                                style=format!("background: {color};")
                                aria-label=format!("{} style {}", card.title, index + 1)
                                on:click=move |_| swatch.set(Some(index))
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
