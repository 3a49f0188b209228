use leptos::prelude::*;

use crate::core::content::{CAPABILITIES, Capability, CapabilityDetail};
use crate::ui::common::{Accent, Section, SectionHeader, SectionVariant, TagList};
use crate::ui::icon::Icon;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <Section variant=SectionVariant::Muted>
            <SectionHeader
                badge="Capabilities"
                title="What Nyaya AI Does"
                description="Powerful features designed to make Indian law accessible, understandable, and actionable for everyone."
            />
            <div class="space-y-8 max-w-5xl mx-auto">
                {CAPABILITIES
                    .iter()
                    .map(|capability| view! { <CapabilityRow capability=*capability /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn CapabilityRow(capability: Capability) -> impl IntoView {
    let detail = match capability.detail {
        CapabilityDetail::Example { question, points } => Some(
            view! {
                <div class="p-4 bg-secondary/50 rounded-lg border border-border">
                    <p class="text-sm text-foreground mb-3 italic">{format!("\"{question}\"")}</p>
                    <div class="flex flex-wrap gap-2">
                        {points
                            .iter()
                            .map(|point| view! {
                                <span class="text-xs font-medium text-gold bg-gold/10 px-2 py-1 rounded">{*point}</span>
                            })
                            .collect_view()}
                    </div>
                </div>
            }
            .into_any(),
        ),
        CapabilityDetail::Tags(items) => Some(view! { <TagList items=items variant=Accent::Primary /> }.into_any()),
        CapabilityDetail::ComingSoon => None,
    };

    view! {
        <div class="group p-8 bg-card rounded-lg border border-border shadow-page hover:shadow-book transition-all duration-300">
            <div class="flex flex-col lg:flex-row gap-6">
                <div class="lg:w-1/3">
                    <div class="flex items-start gap-4">
                        <div class="w-12 h-12 rounded-lg bg-primary/5 border border-primary/10 flex items-center justify-center flex-shrink-0 group-hover:bg-primary/10 transition-colors">
                            <Icon name=capability.icon class="w-6 h-6 text-primary" />
                        </div>
                        <div>
                            <h3 class="font-serif text-xl font-semibold text-foreground mb-1">{capability.title}</h3>
                            <Show when=move || capability.is_planned()>
                                <span class="inline-block text-xs font-medium uppercase tracking-wider text-gold bg-gold/10 px-2 py-0.5 rounded">
                                    "Coming Soon"
                                </span>
                            </Show>
                        </div>
                    </div>
                </div>
                <div class="lg:w-2/3">
                    <p class="text-muted-foreground leading-relaxed mb-4">{capability.description}</p>
                    {detail}
                </div>
            </div>
        </div>
    }
}
