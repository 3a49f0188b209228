use leptos::prelude::*;

use crate::core::content::{AUDIENCES, BOUNDARIES};
use crate::ui::common::{Section, SectionHeader};
use crate::ui::icon::Icon;

#[component]
pub fn AudienceSection() -> impl IntoView {
    view! {
        <Section>
            <SectionHeader
                badge="For Everyone"
                title="Who Is Nyaya AI For?"
                description="From citizens seeking to understand their rights to legal professionals needing research support, Nyaya AI serves all."
            />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 max-w-4xl mx-auto">
                {AUDIENCES
                    .iter()
                    .map(|audience| {
                        let (color, tile) = audience.tone.classes();
                        view! {
                            <div class="group p-6 bg-card rounded-lg border border-border shadow-page hover:shadow-book transition-all duration-300">
                                <div class="flex gap-4">
                                    <div class=format!("w-14 h-14 rounded-lg {tile} flex items-center justify-center flex-shrink-0")>
                                        <Icon name=audience.icon class=color />
                                    </div>
                                    <div>
                                        <h3 class="font-serif text-xl font-semibold text-foreground mb-2">{audience.title}</h3>
                                        <p class="text-sm text-muted-foreground leading-relaxed">{audience.description}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="ornament-divider my-16">
                <div class="w-2 h-2 rotate-45 bg-gold/60" />
            </div>

            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-8">
                    <h3 class="font-serif text-2xl font-semibold text-primary">"What Nyaya AI Is NOT"</h3>
                    <p class="text-sm text-muted-foreground mt-2">"We're explicit about our boundaries"</p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    {BOUNDARIES
                        .iter()
                        .map(|item| view! {
                            <div class="flex items-center gap-3 p-4 bg-destructive/5 rounded-lg border border-destructive/10">
                                <span class="text-destructive text-lg font-bold">"✕"</span>
                                <span class="text-sm text-foreground">{*item}</span>
                            </div>
                        })
                        .collect_view()}
                </div>

                <p class="text-center text-muted-foreground mt-8 text-sm">
                    "Nyaya AI " <span class="text-foreground font-medium">"assists understanding"</span>
                    ", not decision-making without human oversight."
                </p>
            </div>
        </Section>
    }
}
