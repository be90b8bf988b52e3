//! Animation hooks for the dashboard.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use imc_data::countup::CountUp;

/// Frame interval for the count-up loop, ms (~60fps).
const FRAME_MS: u32 = 16;

/// Animate a displayed value toward `target` with an ease-out-cubic curve.
///
/// On first render the animation starts from 0; afterwards it starts from
/// whatever is currently displayed, so a mid-flight target change eases
/// from the visible value instead of jumping. Each target change cancels
/// the in-flight task before spawning the next one, keeping a single
/// writer on the returned signal; unmounting the owning component drops
/// the scope and with it the task.
pub fn use_count_up(target: ReadOnlySignal<f64>, duration_ms: u32) -> Signal<f64> {
    let mut displayed = use_signal(|| 0.0);
    let mut running: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let target = target();
        if let Some(previous) = running.take() {
            previous.cancel();
        }

        let start = *displayed.peek();
        let animation = CountUp::new(start, target, duration_ms as f64);
        if animation.is_done(0.0) {
            displayed.set(target);
            return;
        }

        let task = spawn(async move {
            let began = js_sys::Date::now();
            loop {
                TimeoutFuture::new(FRAME_MS).await;
                let elapsed = js_sys::Date::now() - began;
                displayed.set(animation.sample(elapsed));
                if animation.is_done(elapsed) {
                    break;
                }
            }
        });
        running.set(Some(task));
    });

    displayed
}
