//! Ease-out numeric counter driven by a visibility flag.

use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys;
use yew::prelude::*;

/// Delay before a run begins, so entry transitions start first.
pub const START_DELAY_MS: u32 = 200;
/// Sampling cadence for the per-frame update.
const FRAME_MS: u32 = 16;

/// What happens when a counting unit scrolls back out of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Reset to zero and replay the full animation on the next entry.
    Replay,
    /// Keep the reached value; the animation runs at most once.
    Latch,
}

/// Pure sampling model: 0 to `target` over `duration_ms` with a cubic
/// ease-out curve. Monotone non-decreasing in elapsed time and exact at
/// both endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Counter {
    target: u32,
    duration_ms: u32,
}

impl Counter {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.duration_ms == 0 {
            return self.target;
        }
        let progress = (elapsed_ms / f64::from(self.duration_ms)).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - progress).powi(3);
        (f64::from(self.target) * eased).round() as u32
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.duration_ms)
    }
}

#[derive(Default)]
struct CounterTimers {
    start_delay: Option<Timeout>,
    frames: Option<Interval>,
    frame_stop: Option<Timeout>,
}

impl CounterTimers {
    fn clear(&mut self) {
        self.start_delay = None;
        self.frames = None;
        self.frame_stop = None;
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(2000)]
    pub duration_ms: u32,
    /// Externally driven, normally by the reveal engine.
    pub visible: bool,
    #[prop_or(ResetPolicy::Replay)]
    pub reset_policy: ResetPolicy,
}

/// Renders an integer that counts up from 0 to `target` once `visible`
/// turns true. The run starts after a short delay, a redundant visibility
/// event never restarts a run in progress, and all timers stop on
/// unmount or when visibility is lost.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let value = use_state_eq(|| 0u32);
    let started = use_mut_ref(|| false);
    let timers = use_mut_ref(CounterTimers::default);

    {
        let value = value.clone();
        let started = started.clone();
        let timers = timers.clone();
        let counter = Counter::new(props.target, props.duration_ms);
        let visible = props.visible;
        let reset_policy = props.reset_policy;
        use_effect_with_deps(
            move |_| {
                if !visible {
                    timers.borrow_mut().clear();
                    if reset_policy == ResetPolicy::Replay {
                        *started.borrow_mut() = false;
                        value.set(0);
                    }
                } else if !*started.borrow() {
                    // Idempotent start: one run per visibility session.
                    *started.borrow_mut() = true;
                    let timers_run = timers.clone();
                    let delay = Timeout::new(START_DELAY_MS, move || {
                        let begun = js_sys::Date::now();
                        let value = value.clone();
                        let timers_done = timers_run.clone();
                        let frames = Interval::new(FRAME_MS, move || {
                            let elapsed = js_sys::Date::now() - begun;
                            value.set(counter.value_at(elapsed));
                            if counter.is_done(elapsed) {
                                // An Interval cannot drop itself from its own
                                // callback; hand the drop to a zero-delay task
                                // whose handle is owned next to the interval.
                                let stop_target = timers_done.clone();
                                let stop = Timeout::new(0, move || {
                                    stop_target.borrow_mut().frames = None;
                                });
                                timers_done.borrow_mut().frame_stop = Some(stop);
                            }
                        });
                        timers_run.borrow_mut().frames = Some(frames);
                    });
                    timers.borrow_mut().start_delay = Some(delay);
                }
                let timers = timers.clone();
                move || {
                    timers.borrow_mut().clear();
                }
            },
            (props.visible, props.target, props.duration_ms),
        );
    }

    html! {
        <span>{ *value }{ props.suffix.clone() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_at_endpoints() {
        let counter = Counter::new(100, 2000);
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(2000.0), 100);
        assert_eq!(counter.value_at(5000.0), 100);
    }

    #[test]
    fn non_decreasing_across_the_run() {
        let counter = Counter::new(5012, 2000);
        let mut last = 0;
        for step in 0..=200 {
            let value = counter.value_at(f64::from(step) * 10.0);
            assert!(value >= last, "value regressed at step {step}");
            last = value;
        }
        assert_eq!(last, 5012);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        // Cubic ease-out covers well over half the distance by the halfway
        // point.
        let counter = Counter::new(1000, 1000);
        assert!(counter.value_at(500.0) > 800);
        assert!(counter.value_at(500.0) < 1000);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let counter = Counter::new(42, 0);
        assert_eq!(counter.value_at(0.0), 42);
    }

    #[test]
    fn zero_target_stays_zero() {
        let counter = Counter::new(0, 2000);
        assert_eq!(counter.value_at(1000.0), 0);
        assert_eq!(counter.value_at(2000.0), 0);
    }

    #[test]
    fn done_only_after_duration() {
        let counter = Counter::new(100, 2000);
        assert!(!counter.is_done(1999.0));
        assert!(counter.is_done(2000.0));
    }
}
