use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::common::Section;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <Section>
            <div class="max-w-3xl mx-auto text-center">
                <span class="inline-block text-xs font-semibold uppercase tracking-[0.2em] text-gold mb-4">
                    "Get Started"
                </span>
                <h2 class="font-serif text-3xl sm:text-4xl md:text-5xl font-semibold text-primary mb-6">
                    "Experience Legal AI, Done Right"
                </h2>
                <p class="text-lg text-muted-foreground mb-10 leading-relaxed">
                    "Because when it comes to law, getting it right matters more than getting it fast. Ask your first legal question today."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/chat" attr:class="btn btn-primary btn-lg font-sans text-base px-8 group shadow-book">
                        <Icon name=icons::MESSAGE_SQUARE class="w-5 h-5 mr-2" />
                        "Ask Nyaya AI"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2 group-hover:translate-x-1 transition-transform" />
                    </A>
                    <A href="/about" attr:class="btn btn-outline btn-lg font-sans text-base px-8">
                        "Learn About Our Approach"
                    </A>
                </div>

                <p class="text-xs text-muted-foreground mt-10 max-w-lg mx-auto">
                    "Nyaya AI is not just a product. It is an attempt to rethink how law meets technology in India. We are building slowly, responsibly, and with intent."
                </p>
            </div>
        </Section>
    }
}
