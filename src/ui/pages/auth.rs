//! Sign-in / sign-up demo page
//!
//! A branding panel slides across the card when the mode changes. Submitting
//! either form only raises an informational toast.

use leptos::prelude::*;
use leptos_router::components::A;

use super::PageMeta;
use crate::core::auth::{AuthMode, FormField, PANEL_STATS, demo_submit_notice};
use crate::core::routes::Page;
use crate::ui::common::Tooltip;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

const GOOGLE_LOGO: &str = r#"<path fill="currentColor" d="M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z"/><path fill="currentColor" d="M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z"/><path fill="currentColor" d="M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z"/><path fill="currentColor" d="M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z"/>"#;

#[component]
pub fn AuthPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::default());
    let password_visible = RwSignal::new(false);
    let switch_mode = move |_: leptos::ev::MouseEvent| mode.update(|mode| *mode = mode.toggled());

    view! {
        <PageMeta page=Page::Auth />
        <div class="min-h-screen bg-background flex items-center justify-center p-4 md:p-8">
            <div class="w-full max-w-5xl">
                <div class="lg:hidden flex items-center justify-center gap-3 mb-8">
                    <A href="/" attr:class="flex items-center gap-3">
                        <div class="w-12 h-12 rounded-lg bg-primary flex items-center justify-center shadow-emboss">
                            <Icon name=icons::SCALE class="w-6 h-6 text-primary-foreground" />
                        </div>
                        <span class="font-serif text-2xl font-semibold text-primary">"Nyaya AI"</span>
                    </A>
                </div>

                <div class="relative bg-card border border-border rounded-3xl shadow-elevated overflow-hidden">
                    <div class="flex flex-col lg:flex-row min-h-[600px] lg:min-h-[650px]">
                        <BrandingPanel mode=mode on_switch=switch_mode />

                        <div class=move || {
                            if mode.get().is_sign_up() {
                                "w-full lg:w-1/2 lg:mr-auto flex items-center justify-center p-8 lg:p-12"
                            } else {
                                "w-full lg:w-1/2 lg:ml-auto flex items-center justify-center p-8 lg:p-12"
                            }
                        }>
                            {move || {
                                let current = mode.get();
                                view! {
                                    <AuthForm mode=current password_visible=password_visible />
                                    <p class="lg:hidden text-center text-sm text-muted-foreground mt-6 font-sans">
                                        {current.switch_prompt()} " "
                                        <button type="button" class="text-primary hover:underline font-medium" on:click=switch_mode>
                                            {current.switch_label()}
                                        </button>
                                    </p>
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn BrandingPanel(
    mode: RwSignal<AuthMode>,
    on_switch: impl Fn(leptos::ev::MouseEvent) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                if mode.get().is_sign_up() {
                    "auth-panel auth-panel-right hidden lg:flex lg:w-1/2 bg-primary flex-col justify-center px-12 xl:px-16"
                } else {
                    "auth-panel hidden lg:flex lg:w-1/2 bg-primary flex-col justify-center px-12 xl:px-16"
                }
            }
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-10 left-10 w-32 h-32 border border-primary-foreground/20 rounded-full" />
                <div class="absolute bottom-10 right-10 w-48 h-48 border border-primary-foreground/10 rounded-full" />
                <div class="absolute top-1/2 left-1/2 w-64 h-64 border-2 border-dashed border-primary-foreground/10 rounded-full animate-slow-spin" />
            </div>

            {move || {
                let current = mode.get();
                view! {
                    <div class="relative z-10 text-primary-foreground animate-fade-in-up">
                        <A href="/" attr:class="flex items-center gap-3 mb-10">
                            <div class="w-12 h-12 rounded-xl bg-primary-foreground/20 flex items-center justify-center backdrop-blur-sm border border-primary-foreground/20">
                                <Icon name=icons::SCALE class="w-6 h-6 text-primary-foreground" />
                            </div>
                            <div>
                                <span class="font-serif text-2xl font-semibold tracking-wide">"Nyaya AI"</span>
                                <p class="text-xs uppercase tracking-[0.2em] text-primary-foreground/70">"Legal Intelligence"</p>
                            </div>
                        </A>

                        <h2 class="font-serif text-3xl xl:text-4xl font-semibold leading-tight mb-4">
                            {current
                                .panel_headline()
                                .iter()
                                .map(|(text, highlighted)| {
                                    if *highlighted {
                                        view! { <span class="text-gold">{*text}</span> }.into_any()
                                    } else {
                                        (*text).into_any()
                                    }
                                })
                                .collect_view()}
                        </h2>

                        <p class="text-primary-foreground/80 leading-relaxed mb-8 font-sans">{current.panel_body()}</p>

                        <div class="flex items-center gap-6">
                            {PANEL_STATS
                                .iter()
                                .enumerate()
                                .map(|(index, (value, label))| view! {
                                    {(index != 0).then(|| view! { <div class="w-px h-10 bg-primary-foreground/20" /> })}
                                    <div class="flex flex-col">
                                        <span class="font-serif text-2xl font-bold">{*value}</span>
                                        <span class="text-xs text-primary-foreground/70 font-sans">{*label}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-10 pt-6 border-t border-primary-foreground/20">
                            <p class="text-sm text-primary-foreground/70 mb-3 font-sans">{current.switch_prompt()}</p>
                            <button
                                type="button"
                                class="btn btn-sm border border-primary-foreground/30 text-primary-foreground bg-transparent hover:bg-primary-foreground/10 font-sans"
                                on:click=on_switch
                            >
                                {current.switch_label()}
                                <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2" />
                            </button>
                        </div>
                    </div>
                }
            }}
        </div>
    }
}

#[component]
fn AuthForm(mode: AuthMode, password_visible: RwSignal<bool>) -> impl IntoView {
    let notifications = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notifications.info(mode.submit_label(), demo_submit_notice(mode));
    };

    view! {
        <div class="w-full max-w-md animate-fade-in">
            <h2 class="font-serif text-2xl lg:text-3xl font-semibold text-foreground mb-2">{mode.heading()}</h2>
            <p class="text-muted-foreground text-sm mb-8 font-sans">{mode.subheading()}</p>

            <form class="space-y-5" on:submit=on_submit>
                {mode
                    .fields()
                    .iter()
                    .map(|field| view! { <AuthField field=*field mode=mode password_visible=password_visible /> })
                    .collect_view()}

                {match mode {
                    AuthMode::SignIn => view! {
                        <div class="flex items-center justify-between text-sm">
                            <label class="flex items-center gap-2 cursor-pointer">
                                <input type="checkbox" class="w-4 h-4 rounded border-border" />
                                <span class="text-muted-foreground font-sans">"Remember me"</span>
                            </label>
                            <a href="#" class="text-primary hover:underline font-sans">"Forgot password?"</a>
                        </div>
                    }
                    .into_any(),
                    AuthMode::SignUp => view! {
                        <div class="flex items-start gap-2">
                            <input type="checkbox" class="w-4 h-4 mt-0.5 rounded border-border" />
                            <span class="text-sm text-muted-foreground font-sans">
                                "I agree to the "
                                <a href="#" class="text-primary hover:underline">"Terms of Service"</a>
                                " and "
                                <a href="#" class="text-primary hover:underline">"Privacy Policy"</a>
                            </span>
                        </div>
                    }
                    .into_any(),
                }}

                <button type="submit" class="btn btn-primary btn-lg w-full h-12 font-sans group">
                    {mode.submit_label()}
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2 group-hover:translate-x-1 transition-transform" />
                </button>
            </form>

            <div class="relative my-6">
                <div class="absolute inset-0 flex items-center">
                    <div class="w-full border-t border-border" />
                </div>
                <div class="relative flex justify-center text-xs uppercase">
                    <span class="bg-card px-3 text-muted-foreground font-sans">"Or continue with"</span>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-3">
                <button type="button" class="btn btn-outline h-11 font-sans">
                    <svg class="w-5 h-5 mr-2" viewBox="0 0 24 24" inner_html=GOOGLE_LOGO></svg>
                    "Google"
                </button>
                <button type="button" class="btn btn-outline h-11 font-sans">
                    <Icon name=icons::GITHUB class="w-5 h-5 mr-2" />
                    "GitHub"
                </button>
            </div>
        </div>
    }
}

#[component]
fn AuthField(field: FormField, mode: AuthMode, password_visible: RwSignal<bool>) -> impl IntoView {
    let id = format!("{mode}-{}", field.icon());
    let is_password = field == FormField::Password;
    let input_class = if is_password {
        "input pl-10 pr-10 h-12 font-sans"
    } else {
        "input pl-10 h-12 font-sans"
    };

    view! {
        <div class="space-y-2">
            <label for=id.clone() class="text-sm font-medium text-foreground font-sans">{field.label()}</label>
            <div class="relative">
                <Icon name=field.icon() class="absolute left-3 top-1/2 -translate-y-1/2 w-5 h-5 text-muted-foreground" />
                <input
                    id=id
                    type=move || field.input_type(password_visible.get())
                    placeholder=field.placeholder()
                    autocomplete=field.autocomplete(mode)
                    class=input_class
                />
                {is_password.then(|| {
                    let label = move || if password_visible.get() { "Hide password" } else { "Show password" };
                    view! {
                        <Tooltip
                            text=Signal::derive(move || label().to_string())
                            wrapper_class="absolute right-3 top-1/2 -translate-y-1/2"
                        >
                            <button
                                type="button"
                                class="text-muted-foreground hover:text-foreground"
                                aria-label=label
                                on:click=move |_| password_visible.update(|visible| *visible = !*visible)
                            >
                                {move || {
                                    let icon = if password_visible.get() { icons::EYE_OFF } else { icons::EYE };
                                    view! { <Icon name=icon /> }
                                }}
                            </button>
                        </Tooltip>
                    }
                })}
            </div>
        </div>
    }
}
