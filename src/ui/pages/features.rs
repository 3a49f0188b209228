use leptos::prelude::*;
use leptos_router::components::A;

use super::PageMeta;
use crate::core::content::{FEATURE_HIGHLIGHTS, UPCOMING_FEATURES, highlight_row_class};
use crate::core::routes::Page;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::SiteLayout;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <PageMeta page=Page::Features />
        <SiteLayout>
            <div class="pt-20">
                <section class="py-24 parchment-texture">
                    <div class="container mx-auto px-6">
                        <div class="max-w-3xl mx-auto text-center">
                            <span class="inline-block text-xs font-semibold uppercase tracking-[0.2em] text-gold mb-4">
                                "Features"
                            </span>
                            <h1 class="font-serif text-4xl sm:text-5xl md:text-6xl font-semibold text-primary mb-6">
                                {Page::Features.heading()}
                            </h1>
                            <p class="text-lg text-muted-foreground leading-relaxed mb-8">
                                "Powerful capabilities designed specifically for the Indian legal system: accurate, explainable, and ethical."
                            </p>
                            <A href="/chat" attr:class="btn btn-primary btn-lg font-sans shadow-book">
                                "Try Nyaya AI"
                                <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2" />
                            </A>
                        </div>
                    </div>
                </section>

                <section class="py-24 bg-secondary/30">
                    <div class="container mx-auto px-6">
                        <div class="space-y-16 max-w-5xl mx-auto">
                            {FEATURE_HIGHLIGHTS
                                .iter()
                                .enumerate()
                                .map(|(index, feature)| view! {
                                    <div class=highlight_row_class(index)>
                                        <div class="lg:w-1/3 flex justify-center lg:justify-start">
                                            <div class="w-24 h-24 rounded-2xl bg-primary/5 border border-primary/10 flex items-center justify-center shadow-book">
                                                <Icon name=feature.icon class="w-12 h-12 text-primary" />
                                            </div>
                                        </div>
                                        <div class="lg:w-2/3">
                                            <h3 class="font-serif text-2xl md:text-3xl font-semibold text-foreground mb-4">
                                                {feature.title}
                                            </h3>
                                            <p class="text-muted-foreground leading-relaxed mb-6">{feature.description}</p>
                                            <ul class="space-y-2">
                                                {feature
                                                    .details
                                                    .iter()
                                                    .map(|detail| view! {
                                                        <li class="flex items-center gap-3 text-sm">
                                                            <span class="w-1.5 h-1.5 rounded-full bg-gold" />
                                                            <span class="text-foreground">{*detail}</span>
                                                        </li>
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                <section class="py-24 parchment-texture">
                    <div class="container mx-auto px-6">
                        <div class="text-center mb-16">
                            <span class="inline-block text-xs font-semibold uppercase tracking-[0.2em] text-gold mb-4">
                                "Coming Soon"
                            </span>
                            <h2 class="font-serif text-3xl sm:text-4xl font-semibold text-primary mb-6">"What's Next"</h2>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-4xl mx-auto">
                            {UPCOMING_FEATURES
                                .iter()
                                .map(|feature| view! {
                                    <div class="p-6 bg-card rounded-lg border border-border shadow-page text-center">
                                        <div class="w-14 h-14 rounded-xl bg-gold/10 flex items-center justify-center mx-auto mb-4">
                                            <Icon name=feature.icon class="w-7 h-7 text-gold" />
                                        </div>
                                        <h3 class="font-serif text-lg font-semibold text-foreground mb-2">{feature.title}</h3>
                                        <p class="text-sm text-muted-foreground">{feature.description}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                <section class="py-24 bg-primary text-primary-foreground">
                    <div class="container mx-auto px-6 text-center">
                        <h2 class="font-serif text-3xl sm:text-4xl font-semibold mb-6">"Ready to Explore Indian Law?"</h2>
                        <p class="text-primary-foreground/80 mb-8 max-w-xl mx-auto">
                            "Ask your first legal question and experience the difference of domain-specific legal AI."
                        </p>
                        <A href="/chat" attr:class="btn btn-secondary btn-lg font-sans shadow-book">
                            <Icon name=icons::MESSAGE_SQUARE class="w-5 h-5 mr-2" />
                            "Start Asking Questions"
                        </A>
                    </div>
                </section>
            </div>
        </SiteLayout>
    }
}
