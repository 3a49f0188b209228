use leptos::prelude::*;

use crate::ui::icon::Icon;

/// Box size options
#[derive(Clone, Copy, PartialEq, Default)]
pub enum IconBoxSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl IconBoxSize {
    /// (box classes, icon classes)
    fn classes(&self) -> (&'static str, &'static str) {
        match self {
            IconBoxSize::Small => ("w-10 h-10", "w-5 h-5"),
            IconBoxSize::Medium => ("w-12 h-12", "w-6 h-6"),
            IconBoxSize::Large => ("w-14 h-14", "w-7 h-7"),
        }
    }
}

/// Colour treatment of an icon box or tag
#[derive(Clone, Copy, PartialEq, Default)]
pub enum Accent {
    #[default]
    Primary,
    Gold,
    Muted,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Primary => "bg-primary/5 border-primary/10 text-primary",
            Accent::Gold => "bg-gold/10 border-gold/20 text-gold",
            Accent::Muted => "bg-secondary border-border text-foreground",
        }
    }
}

/// Bordered square holding a single icon
#[component]
pub fn IconBox(
    icon: &'static str,
    #[prop(optional)] size: IconBoxSize,
    #[prop(optional)] variant: Accent,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let (box_class, icon_class) = size.classes();

    view! {
        <div class=format!(
            "rounded-lg border flex items-center justify-center flex-shrink-0 {box_class} {} {class}",
            variant.class(),
        )>
            <Icon name=icon class=icon_class />
        </div>
    }
}
