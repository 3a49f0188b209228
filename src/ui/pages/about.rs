use leptos::prelude::*;

use super::PageMeta;
use crate::core::content::{ETHICS, ROADMAP, TECH_STACK};
use crate::core::routes::Page;
use crate::ui::common::{
    Accent, FeatureCard, IconBox, IconBoxSize, Section, SectionHeader, SectionVariant,
};
use crate::ui::layout::SiteLayout;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageMeta page=Page::About />
        <SiteLayout>
            <div class="pt-20">
                <Section>
                    <div class="max-w-3xl mx-auto text-center">
                        <span class="inline-block text-xs font-semibold uppercase tracking-[0.2em] text-gold mb-4">
                            "About Nyaya AI"
                        </span>
                        <h1 class="font-serif text-4xl sm:text-5xl font-semibold text-primary mb-6">
                            {Page::About.heading()}
                        </h1>
                        <p class="text-lg text-muted-foreground">
                            "Building India's first foundational legal intelligence system, rooted in Indian values and realities."
                        </p>
                    </div>
                </Section>

                <Section variant=SectionVariant::Muted>
                    <SectionHeader
                        badge="Our Principles"
                        title="Ethics & Responsibility"
                        description="Law is high-impact. Trust is more important than cleverness."
                    />
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-4xl mx-auto">
                        {ETHICS
                            .iter()
                            .map(|card| view! { <FeatureCard card=*card horizontal=true /> })
                            .collect_view()}
                    </div>
                </Section>

                <Section>
                    <SectionHeader badge="Technology" title="Built for Scale & Accuracy" />
                    <div class="flex flex-wrap justify-center gap-4 max-w-3xl mx-auto">
                        {TECH_STACK
                            .iter()
                            .map(|tech| view! {
                                <div class="flex items-center gap-3 px-5 py-3 bg-card rounded-lg border border-border shadow-page">
                                    <IconBox icon=tech.icon variant=Accent::Gold size=IconBoxSize::Small />
                                    <div>
                                        <p class="text-sm font-semibold text-foreground">{tech.label}</p>
                                        <p class="text-xs text-muted-foreground">{tech.desc}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </Section>

                <Section variant=SectionVariant::Muted>
                    <SectionHeader badge="Roadmap" title="Our Journey Ahead" />
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                        {ROADMAP
                            .iter()
                            .map(|phase| view! {
                                <div class=phase.card_class()>
                                    <div class="flex items-center gap-2 mb-4">
                                        <h3 class="font-serif text-xl font-semibold text-foreground">{phase.phase}</h3>
                                        <span class=phase.badge_class()>{phase.status.to_string()}</span>
                                    </div>
                                    <ul class="space-y-2">
                                        {phase
                                            .items
                                            .iter()
                                            .map(|item| view! {
                                                <li class="flex items-start gap-2 text-sm text-muted-foreground">
                                                    <span class="text-gold">"•"</span>
                                                    {*item}
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </Section>
            </div>
        </SiteLayout>
    }
}
