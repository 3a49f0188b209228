use leptos::prelude::*;

use crate::core::content::PROBLEMS;
use crate::ui::common::{Section, SectionHeader, SectionVariant};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ProblemSection() -> impl IntoView {
    view! {
        <Section variant=SectionVariant::Muted>
            <SectionHeader
                badge="The Challenge"
                title="Why Legal Access Matters"
                description="India has one of the world's most complex legal ecosystems, yet access to reliable legal understanding remains limited, expensive, and intimidating."
            />

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {PROBLEMS
                    .iter()
                    .map(|problem| {
                        view! {
                            <div class="group p-6 bg-card rounded-lg border border-border shadow-page hover:shadow-book transition-all duration-300">
                                <div class="w-12 h-12 rounded-lg bg-primary/5 border border-primary/10 flex items-center justify-center mb-4 group-hover:bg-primary/10 transition-colors">
                                    <Icon name=problem.icon class="w-6 h-6 text-primary" />
                                </div>
                                <h3 class="font-serif text-xl font-semibold text-foreground mb-2">{problem.title}</h3>
                                <p class="text-sm text-muted-foreground leading-relaxed">{problem.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="mt-16 p-8 bg-card rounded-lg border border-border shadow-book">
                <div class="flex flex-col md:flex-row items-start md:items-center gap-6">
                    <div class="w-16 h-16 rounded-lg bg-destructive/10 flex items-center justify-center flex-shrink-0">
                        <Icon name=icons::ALERT_TRIANGLE class="w-8 h-8 text-destructive" />
                    </div>
                    <div>
                        <h3 class="font-serif text-xl font-semibold text-foreground mb-2">
                            "Why Existing AI Tools Fall Short"
                        </h3>
                        <p class="text-muted-foreground leading-relaxed">
                            "Most AI tools are trained on Western datasets, poorly aligned with Indian legal structure, operate as black-box systems prone to hallucination, and lack the transparency required for sensitive legal matters."
                        </p>
                    </div>
                </div>
            </div>
        </Section>
    }
}
