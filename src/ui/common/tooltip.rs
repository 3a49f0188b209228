use leptos::prelude::*;

/// Delay used when no tooltip context is mounted
pub const DEFAULT_TOOLTIP_DELAY_MS: u32 = 200;

/// Tooltip position relative to the target element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPosition {
    pub fn class(&self) -> &'static str {
        match self {
            TooltipPosition::Top => "tooltip-top",
            TooltipPosition::Bottom => "tooltip-bottom",
            TooltipPosition::Left => "tooltip-left",
            TooltipPosition::Right => "tooltip-right",
        }
    }
}

/// Tooltip trigger behavior
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipTrigger {
    /// Show on hover
    Hover,
    /// Show on click
    Click,
    /// Show on hover or keyboard focus
    HoverFocus,
}

impl TooltipTrigger {
    pub fn on_hover(&self) -> bool {
        matches!(self, TooltipTrigger::Hover | TooltipTrigger::HoverFocus)
    }

    pub fn on_focus(&self) -> bool {
        matches!(self, TooltipTrigger::HoverFocus)
    }

    pub fn on_click(&self) -> bool {
        matches!(self, TooltipTrigger::Click)
    }
}

/// Site-wide tooltip settings, mounted once by the app shell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipContext {
    pub delay_ms: u32,
}

pub fn provide_tooltip_context(delay_ms: u32) -> TooltipContext {
    let ctx = TooltipContext { delay_ms };
    provide_context(ctx);
    ctx
}

fn bubble_class(position: TooltipPosition, extra: &str) -> String {
    if extra.is_empty() {
        format!("tooltip {}", position.class())
    } else {
        format!("tooltip {} {extra}", position.class())
    }
}

/// Tooltip component that shows helpful text on hover
#[component]
pub fn Tooltip(
    /// The content to show in the tooltip
    #[prop(into)]
    text: Signal<String>,
    /// The element that triggers the tooltip
    children: Children,
    /// Position of the tooltip relative to the trigger
    #[prop(default = TooltipPosition::Top)]
    position: TooltipPosition,
    /// Trigger behavior
    #[prop(default = TooltipTrigger::HoverFocus)]
    trigger: TooltipTrigger,
    /// Delay before showing (ms); the context delay when unset
    #[prop(optional)]
    delay: Option<u32>,
    /// Extra classes for the bubble
    #[prop(optional)]
    class: &'static str,
    /// Extra classes for the wrapper around the trigger
    #[prop(optional)]
    wrapper_class: &'static str,
) -> impl IntoView {
    let delay = delay
        .or_else(|| use_context::<TooltipContext>().map(|ctx| ctx.delay_ms))
        .unwrap_or(DEFAULT_TOOLTIP_DELAY_MS);
    let (is_visible, set_is_visible) = signal(false);
    let (should_show, set_should_show) = signal(false);

    // Show after the delay, unless the pointer left in the meantime
    Effect::new(move |_| {
        if should_show.get() {
            set_timeout(
                move || {
                    if should_show.try_get_untracked().unwrap_or(false) {
                        let _ = set_is_visible.try_set(true);
                    }
                },
                std::time::Duration::from_millis(u64::from(delay)),
            );
        } else {
            set_is_visible.set(false);
        }
    });

    let wrapper = format!("tooltip-container {wrapper_class}");
    let bubble = bubble_class(position, class);

    view! {
        <div
            class=wrapper
            on:mouseenter=move |_| {
                if trigger.on_hover() {
                    set_should_show.set(true);
                }
            }
            on:mouseleave=move |_| {
                if trigger.on_hover() {
                    set_should_show.set(false);
                }
            }
            on:focusin=move |_| {
                if trigger.on_focus() {
                    set_should_show.set(true);
                }
            }
            on:focusout=move |_| {
                if trigger.on_focus() {
                    set_should_show.set(false);
                }
            }
            on:click=move |_| {
                if trigger.on_click() {
                    set_should_show.update(|shown| *shown = !*shown);
                }
            }
        >
            {children()}
            <Show when=move || is_visible.get()>
                <div class=bubble.clone() role="tooltip">
                    {move || text.get()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_class() {
        assert_eq!(bubble_class(TooltipPosition::Top, ""), "tooltip tooltip-top");
        assert_eq!(
            bubble_class(TooltipPosition::Left, "max-w-xs"),
            "tooltip tooltip-left max-w-xs"
        );
    }

    #[test]
    fn test_trigger_behavior() {
        assert!(TooltipTrigger::Hover.on_hover());
        assert!(!TooltipTrigger::Hover.on_focus());
        assert!(TooltipTrigger::HoverFocus.on_hover());
        assert!(TooltipTrigger::HoverFocus.on_focus());
        assert!(TooltipTrigger::Click.on_click());
        assert!(!TooltipTrigger::Click.on_hover());
    }

    #[test]
    fn test_context_delay_is_picked_up() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_context::<TooltipContext>(), None);
            provide_tooltip_context(400);
            assert_eq!(use_context::<TooltipContext>().map(|ctx| ctx.delay_ms), Some(400));
        });
    }
}
