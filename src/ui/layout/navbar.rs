use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::ThemeToggle;
use crate::core::content::NAV_LINKS;
use crate::core::nav::{MenuState, is_active, link_class, mobile_link_class};
use crate::ui::icon::{Icon, icons};

/// Fixed site header with the desktop links and the collapsible mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let location = use_location();
    let active = move |href: &str| location.pathname.with(|path| is_active(path, href));

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-background/95 backdrop-blur-md border-b border-border">
            <nav class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <Logo />

                    <div class="hidden md:flex items-center gap-1">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                let href = link.href;
                                view! {
                                    <A href=href attr:class=move || link_class(active(href))>
                                        {link.label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="hidden md:flex items-center gap-3">
                        <ThemeToggle />
                        <A href="/auth" attr:class="btn btn-outline btn-sm font-sans">
                            "Sign In"
                        </A>
                        <A href="/auth" attr:class="btn btn-primary btn-sm font-sans group">
                            "Get Started"
                            <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4 ml-1 group-hover:translate-x-0.5 transition-transform" />
                        </A>
                    </div>

                    <div class="flex md:hidden items-center gap-2">
                        <ThemeToggle />
                        <button
                            class="p-2 text-foreground"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                            on:click=move |_| menu.update(|state| *state = state.toggle())
                        >
                            <Show
                                when=move || menu.get().is_open()
                                fallback=|| view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            >
                                <Icon name=icons::X class="w-6 h-6" />
                            </Show>
                        </button>
                    </div>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div class="md:hidden mt-4 pb-4 border-t border-border pt-4 animate-fade-in">
                        <div class="flex flex-col gap-2">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    let href = link.href;
                                    view! {
                                        <A
                                            href=href
                                            attr:class=move || mobile_link_class(active(href))
                                            on:click=move |_| menu.update(|state| *state = state.close())
                                        >
                                            {link.label}
                                        </A>
                                    }
                                })
                                .collect_view()}
                            <div class="flex flex-col gap-2 mt-4 pt-4 border-t border-border">
                                <A
                                    href="/auth"
                                    attr:class="btn btn-outline w-full font-sans"
                                    on:click=move |_| menu.update(|state| *state = state.close())
                                >
                                    "Sign In"
                                </A>
                                <A
                                    href="/auth"
                                    attr:class="btn btn-primary w-full font-sans"
                                    on:click=move |_| menu.update(|state| *state = state.close())
                                >
                                    "Get Started"
                                </A>
                            </div>
                        </div>
                    </div>
                </Show>
            </nav>
        </header>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <A href="/" attr:class="flex items-center gap-3 group">
            <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center shadow-emboss">
                <Icon name=icons::SCALE class="w-5 h-5 text-primary-foreground" />
            </div>
            <div class="flex flex-col">
                <span class="font-serif text-xl font-semibold text-primary tracking-wide">"Nyaya AI"</span>
                <span class="text-[10px] uppercase tracking-[0.2em] text-muted-foreground -mt-0.5 font-sans">
                    "Legal Intelligence"
                </span>
            </div>
        </A>
    }
}
