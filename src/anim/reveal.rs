//! Visibility-driven animation engine.
//!
//! Converts the viewport-intersection signal into discrete reveal state
//! that the render layer maps onto CSS classes. The state machines are
//! plain data so they can be tested off-browser; the hooks below wire
//! them to `IntersectionObserver` and own every observer and timer
//! handle, releasing them when the component unmounts.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

/// Presentation tag for one unit. The render surface decides what each
/// tag looks like; the engine never composes style strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet in view, or scrolled back out of view.
    Hidden,
    /// In view, but the unit's stagger delay has not elapsed yet.
    Entering,
    /// Fully revealed.
    Revealed,
}

impl RevealPhase {
    pub fn css_class(self) -> &'static str {
        match self {
            RevealPhase::Hidden | RevealPhase::Entering => "reveal-hidden",
            RevealPhase::Revealed => "reveal-visible",
        }
    }
}

/// Observation parameters, mirroring the platform observer's options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the unit's area that must intersect to count as visible.
    pub threshold: f64,
    /// Inset/outset applied to the viewport rectangle, CSS margin syntax.
    pub root_margin: &'static str,
    /// Latch on first satisfaction and stop observing.
    pub once: bool,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "0px",
            once: false,
        }
    }
}

/// Visibility flags for a single unit.
///
/// `visible` tracks the live intersection state and may oscillate as the
/// unit scrolls in and out. `ever_visible` latches permanently once the
/// unit has been seen. With `once` set, a unit that has latched ignores
/// all further signals, so `visible` stays true as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealState {
    pub visible: bool,
    pub ever_visible: bool,
    once: bool,
}

impl RevealState {
    pub fn new(once: bool) -> Self {
        Self {
            visible: false,
            ever_visible: false,
            once,
        }
    }

    /// Feed one intersection sample. Returns true when the discrete state
    /// changed, so callers re-render once per crossing rather than once
    /// per callback.
    pub fn set_intersecting(&mut self, intersecting: bool) -> bool {
        if self.once && self.ever_visible {
            return false;
        }
        if intersecting {
            let changed = !self.visible;
            self.visible = true;
            self.ever_visible = true;
            changed
        } else {
            let changed = self.visible;
            self.visible = false;
            changed
        }
    }

    pub fn phase(&self) -> RevealPhase {
        if self.visible {
            RevealPhase::Revealed
        } else {
            RevealPhase::Hidden
        }
    }
}

/// A group of units revealed as a cascade: unit `i` may not start its
/// transition before `i * step_ms` has elapsed after it became visible.
///
/// The arena owns every unit record and mutates it in place; unit ids are
/// plain indices, stable for the lifetime of the group.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealArena {
    units: Vec<RevealPhase>,
    latched: Vec<bool>,
    step_ms: u32,
    once: bool,
}

impl RevealArena {
    pub fn new(len: usize, step_ms: u32, once: bool) -> Self {
        Self {
            units: vec![RevealPhase::Hidden; len],
            latched: vec![false; len],
            step_ms,
            once,
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Stagger offset for unit `i`.
    pub fn delay_ms(&self, i: usize) -> u32 {
        i as u32 * self.step_ms
    }

    pub fn phase(&self, i: usize) -> RevealPhase {
        self.units[i]
    }

    pub fn phases(&self) -> Vec<RevealPhase> {
        self.units.clone()
    }

    pub fn ever_visible(&self, i: usize) -> bool {
        self.latched[i]
    }

    /// Intersection sample for unit `i`. Returns true on a state change.
    pub fn set_intersecting(&mut self, i: usize, intersecting: bool) -> bool {
        if self.once && self.latched[i] {
            return false;
        }
        if intersecting {
            self.latched[i] = true;
            if self.units[i] == RevealPhase::Hidden {
                self.units[i] = RevealPhase::Entering;
                return true;
            }
            false
        } else if self.units[i] != RevealPhase::Hidden {
            self.units[i] = RevealPhase::Hidden;
            true
        } else {
            false
        }
    }

    /// The stagger delay for unit `i` has elapsed; begin its transition.
    /// A unit that scrolled back out before its delay fired stays hidden.
    pub fn start_transition(&mut self, i: usize) -> bool {
        if self.units[i] == RevealPhase::Entering {
            self.units[i] = RevealPhase::Revealed;
            true
        } else {
            false
        }
    }
}

/// Live handle returned by [`use_reveal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealHandle {
    pub visible: bool,
    pub ever_visible: bool,
}

impl RevealHandle {
    pub fn phase(&self) -> RevealPhase {
        if self.visible {
            RevealPhase::Revealed
        } else {
            RevealPhase::Hidden
        }
    }

    pub fn css_class(&self) -> &'static str {
        self.phase().css_class()
    }
}

fn make_observer(
    config: &ObserverConfig,
    closure: &Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>,
) -> Option<IntersectionObserver> {
    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(config.threshold));
    init.root_margin(config.root_margin);
    IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init).ok()
}

/// Observe a single renderable unit. Attach the returned [`NodeRef`] to
/// the element; the handle's flags update as the element crosses the
/// configured threshold. An element already intersecting when observation
/// begins still receives its initial callback, so there is no missed
/// first state. The observer is disconnected on unmount.
#[hook]
pub fn use_reveal(config: ObserverConfig) -> (NodeRef, RevealHandle) {
    let node = use_node_ref();
    let model = use_mut_ref(|| RevealState::new(config.once));
    let snapshot = use_state(|| RevealHandle {
        visible: false,
        ever_visible: false,
    });

    {
        let node = node.clone();
        let model = model.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                let mut callback = None;
                if let Some(element) = node.cast::<Element>() {
                    let model_cb = model.clone();
                    let closure = Closure::wrap(Box::new(
                        move |entries: Vec<IntersectionObserverEntry>,
                              obs: IntersectionObserver| {
                            if let Some(entry) = entries.into_iter().next() {
                                let mut state = model_cb.borrow_mut();
                                if state.set_intersecting(entry.is_intersecting()) {
                                    snapshot.set(RevealHandle {
                                        visible: state.visible,
                                        ever_visible: state.ever_visible,
                                    });
                                }
                                if config.once && state.ever_visible {
                                    // Latched for good; no further callbacks wanted.
                                    obs.disconnect();
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);
                    if let Some(obs) = make_observer(&config, &closure) {
                        obs.observe(&element);
                        observer = Some(obs);
                    }
                    callback = Some(closure);
                }
                move || {
                    if let Some(obs) = observer {
                        obs.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    (node, *snapshot)
}

struct StaggerResources {
    observers: Vec<IntersectionObserver>,
    callbacks: Vec<Closure<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>>,
    pending: Vec<Option<Timeout>>,
}

/// Observe a group of `len` units revealed as a cascade with `step_ms`
/// spacing, Each unit latches and stops being observed once revealed when
/// `config.once` is set. Returns one [`NodeRef`] per unit plus the live
/// phase tags.
#[hook]
pub fn use_staggered_reveal(
    len: usize,
    step_ms: u32,
    config: ObserverConfig,
) -> (Rc<Vec<NodeRef>>, Vec<RevealPhase>) {
    let nodes = use_memo(
        |_| (0..len).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        len,
    );
    let arena = use_mut_ref(|| RevealArena::new(len, step_ms, config.once));
    let snapshot = use_state(|| vec![RevealPhase::Hidden; len]);

    {
        let nodes = nodes.clone();
        let arena = arena.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let resources = Rc::new(RefCell::new(StaggerResources {
                    observers: Vec::new(),
                    callbacks: Vec::new(),
                    pending: (0..len).map(|_| None).collect(),
                }));
                for (index, node) in nodes.iter().enumerate() {
                    let element = match node.cast::<Element>() {
                        Some(element) => element,
                        None => continue,
                    };
                    let arena_cb = arena.clone();
                    let snapshot_cb = snapshot.clone();
                    let resources_cb = resources.clone();
                    let closure = Closure::wrap(Box::new(
                        move |entries: Vec<IntersectionObserverEntry>,
                              obs: IntersectionObserver| {
                            let entry = match entries.into_iter().next() {
                                Some(entry) => entry,
                                None => return,
                            };
                            let intersecting = entry.is_intersecting();
                            let mut changed =
                                arena_cb.borrow_mut().set_intersecting(index, intersecting);
                            if intersecting {
                                let delay = arena_cb.borrow().delay_ms(index);
                                let arena_t = arena_cb.clone();
                                let snapshot_t = snapshot_cb.clone();
                                let timer = Timeout::new(delay, move || {
                                    if arena_t.borrow_mut().start_transition(index) {
                                        snapshot_t.set(arena_t.borrow().phases());
                                    }
                                });
                                resources_cb.borrow_mut().pending[index] = Some(timer);
                                if config.once {
                                    obs.disconnect();
                                }
                            } else {
                                // Cancel a stagger delay that has not fired yet.
                                changed |=
                                    resources_cb.borrow_mut().pending[index].take().is_some();
                            }
                            if changed {
                                snapshot_cb.set(arena_cb.borrow().phases());
                            }
                        },
                    )
                        as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);
                    if let Some(obs) = make_observer(&config, &closure) {
                        obs.observe(&element);
                        resources.borrow_mut().observers.push(obs);
                    }
                    resources.borrow_mut().callbacks.push(closure);
                }
                move || {
                    let mut held = resources.borrow_mut();
                    for obs in held.observers.drain(..) {
                        obs.disconnect();
                    }
                    held.pending.clear();
                    held.callbacks.clear();
                }
            },
            (),
        );
    }

    (nodes, (*snapshot).clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let state = RevealState::new(false);
        assert!(!state.visible);
        assert!(!state.ever_visible);
        assert_eq!(state.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn crossing_reports_change_once() {
        let mut state = RevealState::new(false);
        assert!(state.set_intersecting(true));
        // Redundant callbacks on the same side of the threshold are quiet.
        assert!(!state.set_intersecting(true));
        assert!(state.set_intersecting(false));
        assert!(!state.set_intersecting(false));
    }

    #[test]
    fn ever_visible_is_monotonic() {
        let mut state = RevealState::new(false);
        state.set_intersecting(true);
        assert!(state.ever_visible);
        state.set_intersecting(false);
        state.set_intersecting(true);
        state.set_intersecting(false);
        assert!(state.ever_visible);
        assert!(!state.visible);
    }

    #[test]
    fn once_latches_visible_permanently() {
        let mut state = RevealState::new(true);
        state.set_intersecting(true);
        assert!(!state.set_intersecting(false));
        assert!(state.visible);
        assert!(state.ever_visible);
        assert_eq!(state.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn never_intersecting_stays_hidden() {
        let mut state = RevealState::new(false);
        for _ in 0..10 {
            assert!(!state.set_intersecting(false));
        }
        assert!(!state.visible);
        assert!(!state.ever_visible);
    }

    #[test]
    fn arena_assigns_sequential_delays() {
        let arena = RevealArena::new(4, 150, true);
        for i in 0..4 {
            assert_eq!(arena.delay_ms(i), i as u32 * 150);
        }
        // Unit i starts at least one step after unit i-1 when both become
        // visible simultaneously.
        for i in 1..4 {
            assert!(arena.delay_ms(i) >= arena.delay_ms(i - 1) + 150);
        }
    }

    #[test]
    fn arena_unit_goes_through_entering() {
        let mut arena = RevealArena::new(2, 100, false);
        assert!(arena.set_intersecting(0, true));
        assert_eq!(arena.phase(0), RevealPhase::Entering);
        assert!(arena.start_transition(0));
        assert_eq!(arena.phase(0), RevealPhase::Revealed);
        assert_eq!(arena.phase(1), RevealPhase::Hidden);
    }

    #[test]
    fn arena_exit_before_delay_cancels_entry() {
        let mut arena = RevealArena::new(1, 100, false);
        arena.set_intersecting(0, true);
        arena.set_intersecting(0, false);
        // The stagger timer fires after the unit already left the viewport.
        assert!(!arena.start_transition(0));
        assert_eq!(arena.phase(0), RevealPhase::Hidden);
    }

    #[test]
    fn arena_once_ignores_exit() {
        let mut arena = RevealArena::new(1, 100, true);
        arena.set_intersecting(0, true);
        arena.start_transition(0);
        assert!(!arena.set_intersecting(0, false));
        assert_eq!(arena.phase(0), RevealPhase::Revealed);
        assert!(arena.ever_visible(0));
    }

    #[test]
    fn arena_replay_resets_without_clearing_latch() {
        let mut arena = RevealArena::new(1, 100, false);
        arena.set_intersecting(0, true);
        arena.start_transition(0);
        assert!(arena.set_intersecting(0, false));
        assert_eq!(arena.phase(0), RevealPhase::Hidden);
        assert!(arena.ever_visible(0));
    }

    #[test]
    fn phase_maps_to_two_visual_states() {
        assert_eq!(RevealPhase::Hidden.css_class(), "reveal-hidden");
        assert_eq!(RevealPhase::Entering.css_class(), "reveal-hidden");
        assert_eq!(RevealPhase::Revealed.css_class(), "reveal-visible");
    }
}
