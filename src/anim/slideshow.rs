//! Slide rotation state machine for the hero carousel.
//!
//! The model is pure so wraparound and suspension rules are testable on
//! the host; the hero component owns the tick interval and the cooldown
//! timer and maps [`SlideAction`]s onto this reducer.

use std::rc::Rc;
use yew::functional::Reducible;

/// Auto-advance cadence.
pub const AUTO_ADVANCE_MS: u32 = 6_000;
/// How long a manual navigation suspends auto-advance.
pub const COOLDOWN_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    index: usize,
    auto_advancing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideAction {
    /// Timer fire; ignored while auto-advance is suspended.
    Tick,
    Next,
    Prev,
    /// Caller supplies a valid index.
    Goto(usize),
    /// Cooldown expired; resume auto-advance.
    Resume,
}

impl Slideshow {
    /// `len` must be at least 1; the slide deck is fixed at configuration
    /// time and never empty.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            len,
            index: 0,
            auto_advancing: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn auto_advancing(&self) -> bool {
        self.auto_advancing
    }

    pub fn tick(&mut self) {
        if self.auto_advancing {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.auto_advancing = false;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.auto_advancing = false;
    }

    pub fn goto(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.index = index;
        self.auto_advancing = false;
    }

    pub fn resume(&mut self) {
        self.auto_advancing = true;
    }

    pub fn apply(&mut self, action: SlideAction) {
        match action {
            SlideAction::Tick => self.tick(),
            SlideAction::Next => self.next(),
            SlideAction::Prev => self.prev(),
            SlideAction::Goto(index) => self.goto(index),
            SlideAction::Resume => self.resume(),
        }
    }
}

impl Reducible for Slideshow {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_auto_advancing() {
        let show = Slideshow::new(3);
        assert_eq!(show.index(), 0);
        assert!(show.auto_advancing());
    }

    #[test]
    fn next_wraps_forward() {
        let mut show = Slideshow::new(3);
        show.goto(2);
        show.next();
        assert_eq!(show.index(), 0);
    }

    #[test]
    fn prev_wraps_backward() {
        let mut show = Slideshow::new(3);
        show.prev();
        assert_eq!(show.index(), 2);
    }

    #[test]
    fn tick_advances_modulo_len() {
        let mut show = Slideshow::new(3);
        for expected in [1, 2, 0, 1] {
            show.tick();
            assert_eq!(show.index(), expected);
        }
    }

    #[test]
    fn manual_action_suspends_auto_advance() {
        let mut show = Slideshow::new(3);
        show.next();
        assert!(!show.auto_advancing());
        assert_eq!(show.index(), 1);

        // Timer fires during the cooldown window: no movement.
        show.tick();
        show.tick();
        assert_eq!(show.index(), 1);

        show.resume();
        assert!(show.auto_advancing());
        show.tick();
        assert_eq!(show.index(), 2);
    }

    #[test]
    fn goto_selects_and_suspends() {
        let mut show = Slideshow::new(5);
        show.goto(3);
        assert_eq!(show.index(), 3);
        assert!(!show.auto_advancing());
    }

    #[test]
    fn reducer_applies_actions() {
        let show = Rc::new(Slideshow::new(3));
        let show = show.reduce(SlideAction::Next);
        assert_eq!(show.index(), 1);
        let show = show.reduce(SlideAction::Tick);
        assert_eq!(show.index(), 1);
        let show = show.reduce(SlideAction::Resume);
        let show = show.reduce(SlideAction::Tick);
        assert_eq!(show.index(), 2);
    }
}
