use leptos::prelude::*;

use super::PageMeta;
use crate::core::content::{TEAM, TeamMember};
use crate::core::routes::Page;
use crate::ui::layout::{Footer, Navbar};

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <PageMeta page=Page::Team />
        <div class="min-h-screen bg-background">
            <Navbar />
            {TEAM.iter().map(|member| view! { <MemberSection member=*member /> }).collect_view()}
            <Footer />
        </div>
    }
}

/// Where a portrait sits in the layout
#[derive(Clone, Copy, PartialEq)]
enum Slot {
    Mobile,
    Center,
    Left,
    Right,
}

impl Slot {
    /// (image classes, placeholder classes, placeholder letter classes)
    fn classes(self, offset_down: bool) -> (&'static str, &'static str, &'static str) {
        match self {
            Slot::Mobile => (
                "h-[45vh] object-cover z-[3]",
                "h-[45vh] w-[180px] bg-muted flex items-center justify-center z-[3] rounded-t-xl",
                "text-[60px] font-extrabold text-muted-foreground/50",
            ),
            Slot::Center if offset_down => (
                "absolute left-1/2 -translate-x-1/2 h-[70vh] lg:h-[82vh] object-cover z-[3] bottom-[-8vh]",
                "absolute bottom-0 left-1/2 -translate-x-1/2 h-[70vh] lg:h-[82vh] w-[350px] lg:w-[400px] bg-muted flex items-center justify-center z-[3] rounded-t-xl",
                "text-[120px] font-extrabold text-muted-foreground/50",
            ),
            Slot::Center => (
                "absolute left-1/2 -translate-x-1/2 h-[70vh] lg:h-[82vh] object-cover z-[3] bottom-0",
                "absolute bottom-0 left-1/2 -translate-x-1/2 h-[70vh] lg:h-[82vh] w-[350px] lg:w-[400px] bg-muted flex items-center justify-center z-[3] rounded-t-xl",
                "text-[120px] font-extrabold text-muted-foreground/50",
            ),
            Slot::Left => (
                "absolute bottom-0 -left-8 lg:-left-10 h-[50vh] lg:h-[60vh] object-cover grayscale z-[2]",
                "absolute bottom-0 -left-8 lg:-left-10 h-[50vh] lg:h-[60vh] w-[180px] lg:w-[250px] bg-muted/50 flex items-center justify-center z-[2] rounded-t-xl",
                "text-[60px] lg:text-[80px] font-extrabold text-muted-foreground/30",
            ),
            Slot::Right => (
                "absolute bottom-0 -right-8 lg:-right-10 h-[50vh] lg:h-[60vh] object-cover grayscale z-[2]",
                "absolute bottom-0 -right-8 lg:-right-10 h-[50vh] lg:h-[60vh] w-[180px] lg:w-[250px] bg-muted/50 flex items-center justify-center z-[2] rounded-t-xl",
                "text-[60px] lg:text-[80px] font-extrabold text-muted-foreground/30",
            ),
        }
    }

    fn alt(self, name: &str) -> String {
        match self {
            Slot::Left => format!("{name} left"),
            Slot::Right => format!("{name} right"),
            Slot::Mobile | Slot::Center => name.to_string(),
        }
    }
}

/// Photo of a member, or a lettered placeholder when there is none or it fails to load
#[component]
fn Portrait(member: TeamMember, slot: Slot) -> impl IntoView {
    let (image_class, placeholder_class, letter_class) = slot.classes(member.offset_down);
    let failed = RwSignal::new(false);
    let image = NodeRef::<leptos::html::Img>::new();

    // The error event can fire before hydration attaches the listener
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if let Some(img) = image.get() {
            if img.complete() && img.natural_width() == 0 {
                failed.set(true);
            }
        }
    });

    let placeholder = move || {
        view! {
            <div class=placeholder_class>
                <span class=letter_class>{member.initial().to_string()}</span>
            </div>
        }
    };

    match member.image {
        Some(src) => view! {
            <Show when=move || !failed.get() fallback=placeholder>
                <img
                    node_ref=image
                    src=src
                    alt=slot.alt(member.name)
                    class=image_class
                    on:error=move |_| failed.set(true)
                />
            </Show>
        }
        .into_any(),
        None => placeholder().into_any(),
    }
}

#[component]
fn MemberSection(member: TeamMember) -> impl IntoView {
    view! {
        <section class="relative w-full bg-background">
            <div class="flex flex-col md:hidden min-h-screen">
                <div class="pt-20 pb-4 text-center z-[5]">
                    <h1 class="text-[24px] sm:text-[36px] font-extrabold tracking-[-1px] text-foreground leading-none">
                        {member.display_name}
                    </h1>
                </div>
                <div class="flex-1 flex items-end justify-center relative">
                    <Portrait member=member slot=Slot::Mobile />
                </div>
                <div class="px-6 py-6 bg-background z-[6]">
                    <h2 class="text-xs tracking-[1px] mb-2 font-semibold text-foreground text-center">{member.role}</h2>
                    <p class="text-xs leading-relaxed text-muted-foreground text-center max-w-sm mx-auto">
                        {member.description}
                    </p>
                </div>
            </div>

            <div class="hidden md:block relative min-h-screen overflow-hidden">
                <div class="absolute top-8 left-1/2 -translate-x-1/2 z-[5] pointer-events-none text-center">
                    <h1 class="text-[60px] lg:text-[90px] xl:text-[110px] font-extrabold tracking-[-3px] lg:tracking-[-5px] text-foreground leading-none whitespace-nowrap">
                        {member.display_name}
                    </h1>
                </div>
                <Portrait member=member slot=Slot::Center />
                <Portrait member=member slot=Slot::Left />
                <Portrait member=member slot=Slot::Right />
                <div class="absolute right-12 lg:right-36 top-1/2 -translate-y-1/2 w-56 lg:w-72 z-[6]">
                    <h2 class="text-sm tracking-[1.4px] mb-3 font-semibold text-foreground">{member.role}</h2>
                    <p class="text-[13px] leading-relaxed text-muted-foreground">{member.description}</p>
                </div>
            </div>
        </section>
    }
}
