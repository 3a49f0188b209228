use leptos::prelude::*;

/// Background treatment of a page section
#[derive(Clone, Copy, PartialEq, Default)]
pub enum SectionVariant {
    #[default]
    Default,
    Muted,
    Primary,
}

impl SectionVariant {
    fn class(&self) -> &'static str {
        match self {
            SectionVariant::Default => "parchment-texture",
            SectionVariant::Muted => "bg-secondary/30",
            SectionVariant::Primary => "bg-primary text-primary-foreground",
        }
    }
}

/// Full-width page section with hairline rules top and bottom
#[component]
pub fn Section(
    children: Children,
    #[prop(optional)] variant: SectionVariant,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <section id=id class=format!("py-24 relative {} {class}", variant.class())>
            <div class="absolute top-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-border to-transparent" />
            <div class="container mx-auto px-6">{children()}</div>
            <div class="absolute bottom-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-border to-transparent" />
        </section>
    }
}

/// Centered badge, title and description above a section's content
#[component]
pub fn SectionHeader(
    title: &'static str,
    #[prop(optional)] badge: Option<&'static str>,
    #[prop(optional)] description: Option<&'static str>,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("text-center mb-16 {class}")>
            {badge.map(|badge| view! {
                <span class="inline-block text-xs font-semibold uppercase tracking-[0.2em] text-gold mb-4">
                    {badge}
                </span>
            })}
            <h2 class="font-serif text-3xl sm:text-4xl md:text-5xl font-semibold text-primary mb-6">
                {title}
            </h2>
            {description.map(|description| view! {
                <p class="text-muted-foreground max-w-2xl mx-auto leading-relaxed">{description}</p>
            })}
        </div>
    }
}
