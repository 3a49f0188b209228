//! Walking castle scene
//!
//! The sprites are created in the browser after mount so every `load` and
//! `error` event reaches the loading gate. The rig starts moving once the
//! gate opens.

use leptos::prelude::*;
use leptos_router::components::A;

use super::PageMeta;
use crate::core::animation::castle::{
    self, BACKGROUND, CASTLE, CLOUD_SHADOWS, CLOUDS, CastlePart, Cloud, DragState, FOREGROUND,
    LoadProgress, Sprite, asset_url, castle_transform, cloud_left,
};
use crate::core::animation::{FrameClock, Transform};
use crate::core::routes::Page;
use crate::ui::animation::use_animation_loop;
use crate::ui::icon::{Icon, icons};

/// Scene state shared by every sprite
#[derive(Clone, Copy)]
struct Scene {
    clock: ReadSignal<FrameClock>,
    /// Clock frame at which loading finished
    started_at: RwSignal<Option<u64>>,
    progress: RwSignal<LoadProgress>,
    pose: Memo<Vec<(CastlePart, Transform)>>,
}

impl Scene {
    fn frame(&self) -> u64 {
        elapsed_frames(self.clock, self.started_at)
    }

    fn transform_of(&self, part: CastlePart) -> Transform {
        self.pose.with(|pose| {
            pose.iter()
                .find_map(|(moving, transform)| (*moving == part).then_some(*transform))
                .unwrap_or_default()
        })
    }

    fn settle(&self) {
        self.progress.update(LoadProgress::record);
    }
}

/// Frames since the scene started moving; zero while loading
fn elapsed_frames(clock: ReadSignal<FrameClock>, started_at: RwSignal<Option<u64>>) -> u64 {
    match started_at.get() {
        Some(start) => clock.get().frame().saturating_sub(start),
        None => 0,
    }
}

#[component]
pub fn GhibliPage() -> impl IntoView {
    let animation = use_animation_loop();
    let clock = animation.clock();
    let started_at = RwSignal::new(None::<u64>);
    let scene = Scene {
        clock,
        started_at,
        progress: RwSignal::new(LoadProgress::for_scene()),
        pose: Memo::new(move |_| castle::pose(FrameClock::at(elapsed_frames(clock, started_at)).time())),
    };
    let mouse_control = RwSignal::new(false);
    let drag = RwSignal::new(DragState::default());
    let mounted = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| mounted.set(true));

    Effect::new(move |_| {
        if scene.progress.get().is_complete() && scene.started_at.get_untracked().is_none() {
            scene.started_at.set(Some(scene.clock.get_untracked().frame()));
        }
    });

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{pointermove, pointerup};

        let on_move = window_event_listener(pointermove, move |ev| {
            if mouse_control.get_untracked() {
                drag.update(|drag| drag.move_to(f64::from(ev.page_x())));
            }
        });
        let on_up = window_event_listener(pointerup, move |_| drag.update(DragState::release));
        on_cleanup(move || {
            on_move.remove();
            on_up.remove();
        });
    }

    let toggle_control = move |_| {
        mouse_control.update(|enabled| *enabled = !*enabled);
        drag.update(DragState::release);
    };

    view! {
        <PageMeta page=Page::GhibliCastle />
        <div class="relative w-full h-screen overflow-hidden" style="background: #2294b3;">
            <A href="/" attr:class="absolute top-4 left-4 z-50 btn btn-outline btn-sm bg-white/90 hover:bg-white">
                <Icon name=icons::ARROW_LEFT class="w-4 h-4 mr-2" />
                "Back"
            </A>

            <button
                type="button"
                class="absolute top-4 right-4 z-50 px-4 py-2 bg-white rounded text-xs uppercase tracking-wider cursor-pointer opacity-70 hover:opacity-100 transition-opacity"
                on:click=toggle_control
            >
                {move || if mouse_control.get() { "Disable mouse controls" } else { "Enable mouse controls" }}
            </button>

            <h1 class="sr-only">{Page::GhibliCastle.heading()}</h1>

            <Show when=move || !scene.progress.get().is_complete()>
                <div class="absolute inset-0 bg-white flex items-center justify-center z-40">
                    <span class="text-xs uppercase tracking-widest">
                        {move || format!("Loading... {}%", scene.progress.get().percent())}
                    </span>
                </div>
            </Show>

            <div
                class="castle-scene absolute w-full bottom-0 left-0"
                class:active=move || drag.get().is_dragging()
                style="padding-top: 62.5%;"
                on:pointerdown=move |ev| {
                    if mouse_control.get_untracked() {
                        drag.update(|drag| drag.press(f64::from(ev.page_x())));
                    }
                }
            >
                <Show when=move || mounted.get()>
                    {CLOUDS
                        .iter()
                        .enumerate()
                        .map(|(index, cloud)| view! { <CloudSprite cloud=*cloud index=index scene=scene /> })
                        .collect_view()}
                    {CLOUD_SHADOWS
                        .iter()
                        .enumerate()
                        .map(|(index, cloud)| view! { <CloudSprite cloud=*cloud index=index scene=scene /> })
                        .collect_view()}
                    <img
                        class="background absolute"
                        style=BACKGROUND.1
                        src=asset_url(BACKGROUND.0)
                        alt=""
                        on:load=move |_| scene.settle()
                        on:error=move |_| scene.settle()
                    />
                    <div class="castle-container absolute">
                        <div
                            class="castle absolute"
                            style=move || format!("transform: {};", castle_transform(drag.get().angle()))
                        >
                            {CASTLE.iter().map(|sprite| rig_node(*sprite, scene)).collect_view()}
                        </div>
                    </div>
                    <img
                        class="foreground absolute"
                        style=FOREGROUND.1
                        src=asset_url(FOREGROUND.0)
                        alt=""
                        on:load=move |_| scene.settle()
                        on:error=move |_| scene.settle()
                    />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn CloudSprite(cloud: Cloud, index: usize, scene: Scene) -> impl IntoView {
    let style = move || {
        let left = cloud_left(index, cloud.start, scene.frame());
        format!("{} left: {left:.3}%;", cloud.style)
    };

    view! {
        <img
            class=format!("{} absolute", cloud.class)
            style=style
            src=asset_url(cloud.file)
            alt=""
            on:load=move |_| scene.settle()
            on:error=move |_| scene.settle()
        />
    }
}

/// Inline style of a rig node, with its swing when it is a moving part
fn sprite_style(base: &'static str, part: Option<CastlePart>, scene: Scene) -> impl Fn() -> String + Send + Sync + 'static {
    move || match part {
        Some(part) => format!("{base} transform: {};", scene.transform_of(part).to_css()),
        None => format!("{base} transform: {};", Transform::default().to_css()),
    }
}

fn rig_node(sprite: Sprite, scene: Scene) -> AnyView {
    match sprite {
        Sprite::Image { class, file, style, part } => view! {
            <img
                class=format!("{class} absolute")
                style=sprite_style(style, part, scene)
                src=asset_url(file)
                alt=""
                on:load=move |_| scene.settle()
                on:error=move |_| scene.settle()
            />
        }
        .into_any(),
        Sprite::Group { class, style, part, children } => view! {
            <div class=format!("{class} absolute rig-group") style=sprite_style(style, part, scene)>
                {children.iter().map(|child| rig_node(*child, scene)).collect_view()}
            </div>
        }
        .into_any(),
    }
}
