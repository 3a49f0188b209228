use leptos::prelude::*;

use crate::core::content::PRINCIPLES;
use crate::ui::common::{Section, SectionHeader};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn SolutionSection() -> impl IntoView {
    view! {
        <Section>
            <SectionHeader
                badge="Our Approach"
                title="Domain-Specific Legal AI"
                description="Nyaya AI is trained and engineered specifically for the Indian legal system. We don't replace lawyers; we augment legal understanding and democratize access."
            />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                {PRINCIPLES
                    .iter()
                    .map(|principle| {
                        view! {
                            <div class="flex gap-4 p-6 bg-card/50 rounded-lg border border-border hover:border-gold/30 transition-colors group">
                                <div class="w-12 h-12 rounded-lg bg-gold/10 flex items-center justify-center flex-shrink-0 group-hover:bg-gold/20 transition-colors">
                                    <Icon name=principle.icon class="w-6 h-6 text-gold" />
                                </div>
                                <div>
                                    <h3 class="font-serif text-lg font-semibold text-foreground mb-2">{principle.title}</h3>
                                    <p class="text-sm text-muted-foreground leading-relaxed">{principle.description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="ornament-divider my-16">
                <div class="w-2 h-2 rotate-45 bg-gold/60" />
            </div>

            <div class="max-w-3xl mx-auto text-center">
                <div class="inline-flex items-center gap-2 mb-6">
                    <Icon name=icons::CHECK_CIRCLE class="w-5 h-5 text-gold" />
                    <span class="font-serif text-lg font-semibold text-primary">"Built for India"</span>
                </div>
                <p class="text-lg text-muted-foreground leading-relaxed">
                    "Nyaya AI is built using Indian legal sources: the Constitution, Central and State statutes, Supreme Court and High Court judgments, and government notifications. This ensures responses are "
                    <span class="text-foreground font-medium">"contextually Indian"</span>
                    ", not generic global legal guesses."
                </p>
            </div>
        </Section>
    }
}
