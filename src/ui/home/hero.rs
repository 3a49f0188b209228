use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::TRUST_INDICATORS;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center pt-20 overflow-hidden parchment-texture">
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute inset-0 bg-gradient-to-b from-background via-background to-secondary/30" />
                // Book spines
                <div class="absolute left-0 top-0 bottom-0 w-4 bg-gradient-to-r from-primary/5 to-transparent hidden lg:block" />
                <div class="absolute right-0 top-0 bottom-0 w-4 bg-gradient-to-l from-primary/5 to-transparent hidden lg:block" />
                <div class="absolute top-24 left-8 w-24 h-24 border-l-2 border-t-2 border-border/30 rounded-tl-lg hidden lg:block" />
                <div class="absolute top-24 right-8 w-24 h-24 border-r-2 border-t-2 border-border/30 rounded-tr-lg hidden lg:block" />
                <div class="absolute bottom-8 left-8 w-24 h-24 border-l-2 border-b-2 border-border/30 rounded-bl-lg hidden lg:block" />
                <div class="absolute bottom-8 right-8 w-24 h-24 border-r-2 border-b-2 border-border/30 rounded-br-lg hidden lg:block" />
            </div>

            <div class="container mx-auto px-6 py-20 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-secondary border border-border mb-8 animate-fade-in">
                        <Icon name=icons::SCALE class="w-4 h-4 text-gold" />
                        <span class="text-sm font-medium text-foreground">"India's First Legal AI Platform"</span>
                    </div>

                    <h1 class="font-serif text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-semibold text-primary leading-tight mb-6 animate-fade-in-up opacity-0 stagger-1">
                        "Justice, " <span class="gold-emboss">"Explained"</span> "."
                        <br />
                        "Law, " <span class="gold-emboss">"Simplified"</span> "."
                    </h1>

                    <p class="text-lg sm:text-xl text-muted-foreground max-w-2xl mx-auto mb-4 animate-fade-in-up opacity-0 stagger-2">
                        "Intelligence, Indian."
                    </p>

                    <p class="text-base sm:text-lg text-muted-foreground max-w-2xl mx-auto mb-10 animate-fade-in-up opacity-0 stagger-3 leading-relaxed">
                        "Nyaya AI transforms complex Indian legal language into clear, actionable insights. From the Constitution to Supreme Court judgments, accessible to everyone."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-16 animate-fade-in-up opacity-0 stagger-4">
                        <A href="/chat" attr:class="btn btn-primary btn-lg font-sans text-base px-8 group shadow-book">
                            "Ask a Legal Question"
                            <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2 group-hover:translate-x-1 transition-transform" />
                        </A>
                        <A href="/about" attr:class="btn btn-outline btn-lg font-sans text-base px-8">
                            "Learn More"
                        </A>
                    </div>

                    <div class="flex flex-wrap items-center justify-center gap-8 pt-8 border-t border-border animate-fade-in-up opacity-0 stagger-5">
                        {TRUST_INDICATORS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="flex items-center gap-3">
                                        <div class="w-10 h-10 rounded-lg bg-secondary flex items-center justify-center">
                                            <Icon name=item.icon class="w-5 h-5 text-gold" />
                                        </div>
                                        <div class="text-left">
                                            <p class="text-sm font-semibold text-foreground">{item.title}</p>
                                            <p class="text-xs text-muted-foreground">{item.description}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 right-0">
                <div class="h-px bg-gradient-to-r from-transparent via-border to-transparent" />
            </div>
        </section>
    }
}
