use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{CONTACT_EMAIL, CONTACT_LOCATION, FOOTER_COLUMNS};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-primary text-primary-foreground">
            <div class="h-1 bg-gradient-to-r from-transparent via-gold to-transparent opacity-60" />
            <div class="container mx-auto px-6 py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-6 gap-12 lg:gap-8">
                    <div class="lg:col-span-2">
                        <A href="/" attr:class="flex items-center gap-3 mb-6">
                            <div class="w-10 h-10 rounded-lg bg-primary-foreground/10 border border-primary-foreground/20 flex items-center justify-center">
                                <Icon name=icons::SCALE class="w-5 h-5 text-gold" />
                            </div>
                            <div>
                                <span class="font-serif text-xl font-semibold">"Nyaya AI"</span>
                                <p class="text-[10px] uppercase tracking-[0.2em] text-primary-foreground/60">
                                    "Legal Intelligence"
                                </p>
                            </div>
                        </A>
                        <p class="text-primary-foreground/70 text-sm leading-relaxed mb-6 max-w-sm">
                            "Justice, Explained. Law, Simplified. Making legal knowledge accessible to every citizen of India."
                        </p>
                        <div class="space-y-2 text-sm text-primary-foreground/60">
                            <div class="flex items-center gap-3">
                                <Icon name=icons::MAIL class="w-4 h-4 text-gold" />
                                <span>{CONTACT_EMAIL}</span>
                            </div>
                            <div class="flex items-center gap-3">
                                <Icon name=icons::MAP_PIN class="w-4 h-4 text-gold" />
                                <span>{CONTACT_LOCATION}</span>
                            </div>
                        </div>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="font-serif text-lg font-semibold mb-4 text-gold-light">{column.title}</h4>
                                    <ul class="space-y-3">
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <A
                                                            href=link.href
                                                            attr:class="text-sm text-primary-foreground/60 hover:text-primary-foreground transition-colors"
                                                        >
                                                            {link.label}
                                                        </A>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-16 pt-8 border-t border-primary-foreground/10 flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-sm text-primary-foreground/50">{format!("© {year} Nyaya AI. All rights reserved.")}</p>
                    <p class="text-xs text-primary-foreground/40 text-center md:text-right max-w-md">
                        "Nyaya AI provides legal information, not legal advice. Always consult a qualified professional."
                    </p>
                </div>
            </div>
        </footer>
    }
}
