//! `requestAnimationFrame` driver for the effect pages
//!
//! The loop only advances a [`FrameClock`] signal. Components derive their
//! styles from the clock through the pure functions in `core::animation`.

use leptos::leptos_dom::helpers::AnimationFrameRequestHandle;
use leptos::prelude::*;

use crate::core::animation::FrameClock;

#[derive(Clone, Copy)]
pub struct AnimationLoop {
    clock: RwSignal<FrameClock>,
    running: StoredValue<bool>,
    pending: StoredValue<Option<AnimationFrameRequestHandle>>,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self {
            clock: RwSignal::new(FrameClock::new()),
            running: StoredValue::new(false),
            pending: StoredValue::new(None),
        }
    }

    /// The clock advanced once per frame
    pub fn clock(&self) -> ReadSignal<FrameClock> {
        self.clock.read_only()
    }

    /// Begin requesting frames. Does nothing on the server.
    pub fn start(&self) {
        if self.running.try_get_value().unwrap_or(true) {
            return;
        }
        self.running.set_value(true);
        self.schedule();
    }

    /// Cancel the pending frame; no callback runs after this returns
    pub fn stop(&self) {
        let _ = self.running.try_set_value(false);
        if let Some(Some(handle)) = self.pending.try_update_value(Option::take) {
            handle.cancel();
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn schedule(&self) {
        use leptos::leptos_dom::helpers::request_animation_frame_with_handle;

        let this = *self;
        match request_animation_frame_with_handle(move || this.on_frame()) {
            Ok(handle) => {
                let _ = self.pending.try_set_value(Some(handle));
            }
            Err(err) => {
                leptos::logging::warn!("animation frame request failed: {err:?}");
                let _ = self.running.try_set_value(false);
            }
        }
    }

    #[cfg(feature = "ssr")]
    fn schedule(&self) {
        let _ = self.running.try_set_value(false);
    }

    #[cfg(not(feature = "ssr"))]
    fn on_frame(&self) {
        let _ = self.pending.try_set_value(None);
        if !self.running.try_get_value().unwrap_or(false) {
            return;
        }
        if self.clock.try_update(|clock| clock.tick()).is_none() {
            return;
        }
        self.schedule();
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a loop tied to the current component; it stops on unmount
pub fn use_animation_loop() -> AnimationLoop {
    let animation = AnimationLoop::new();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| animation.start());

    on_cleanup(move || animation.stop());
    animation
}
