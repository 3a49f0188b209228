use leptos::prelude::*;

use crate::core::content::{MISSION_STATEMENT, VISION_POINTS};
use crate::ui::icon::Icon;

const CROSS_PATTERN: &str = "background-image: url(\"data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E%3Cg fill='%23ffffff' fill-opacity='1'%3E%3Cpath d='M36 34v-4h-2v4h-4v2h4v4h2v-4h4v-2h-4zm0-30V0h-2v4h-4v2h4v4h2V6h4V4h-4zM6 34v-4H4v4H0v2h4v4h2v-4h4v-2H6zM6 4V0H4v4H0v2h4v4h2V6h4V4H6z'/%3E%3C/g%3E%3C/g%3E%3C/svg%3E\");";

#[component]
pub fn VisionSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-primary text-primary-foreground relative overflow-hidden">
            <div class="absolute inset-0 opacity-5">
                <div class="absolute inset-0" style=CROSS_PATTERN />
            </div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <span class="inline-block text-xs font-semibold uppercase tracking-[0.2em] text-gold mb-4">
                        "Our Vision"
                    </span>
                    <h2 class="font-serif text-3xl sm:text-4xl md:text-5xl font-semibold mb-8">
                        "Building India's Legal Future"
                    </h2>
                    <p class="text-lg text-primary-foreground/80 mb-12 leading-relaxed">
                        "Nyaya AI envisions a future where access to legal knowledge is a right, not a privilege."
                    </p>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mb-12">
                        {VISION_POINTS
                            .iter()
                            .map(|point| view! {
                                <div class="flex items-center gap-4 p-4 bg-primary-foreground/5 rounded-lg border border-primary-foreground/10">
                                    <div class="w-10 h-10 rounded-lg bg-gold/20 flex items-center justify-center flex-shrink-0">
                                        <Icon name=point.icon class="w-5 h-5 text-gold" />
                                    </div>
                                    <span class="text-left text-primary-foreground/90">{point.text}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div class="p-8 bg-primary-foreground/5 rounded-lg border border-primary-foreground/10">
                        <p class="font-serif text-xl md:text-2xl italic text-primary-foreground/90 leading-relaxed">
                            {format!("\"{MISSION_STATEMENT}\"")}
                        </p>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-1 bg-gradient-to-r from-transparent via-gold to-transparent opacity-60" />
        </section>
    }
}
