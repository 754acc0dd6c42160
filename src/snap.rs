//! Snap-scroll controller.
//!
//! Turns wheel, touch, keyboard and anchor input into discrete moves between
//! sections. The controller never touches the page itself: every handler
//! returns the [`Command`]s the page has to carry out, and the page reports
//! back through [`SnapScroll::finish_transition`] and
//! [`SnapScroll::wheel_decay_elapsed`].
//!
//! A move is a transition: from the request until the page calls
//! `finish_transition`, further section requests are dropped, not queued.

use log::{debug, trace};

use crate::config::ScrollConfig;
use crate::layout::SectionLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning { target: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Legacy `keyCode` values: 38 is up, 40 is down.
    pub fn from_code(code: u32) -> Option<Key> {
        match code {
            38 => Some(Key::Up),
            40 => Some(Key::Down),
            _ => None,
        }
    }

    /// `KeyboardEvent.key` names.
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Animate the section wrapper's vertical translation to `y`, then call
    /// `finish_transition`.
    Scroll {
        target: usize,
        y: f64,
        duration_ms: f64,
    },
    /// Animate the header to `0` when visible, or up by its own height.
    Header { visible: bool, duration_ms: f64 },
    /// Replace `h-screen-minus-header` with `h-screen` on the main container.
    SwapMainHeight,
    /// Cancel the pending wheel decay timer and arm a new one that reports
    /// `token` back after `delay_ms`.
    ArmWheelDecay { token: u64, delay_ms: u32 },
    /// Toggle the `active` class of a section.
    MarkActive { section: usize, active: bool },
}

/// `"#3"` → `Some(3)`. Anything that is not `#` followed by a non-negative
/// integer is rejected.
pub fn parse_anchor(href: &str) -> Option<usize> {
    let fragment = href.rsplit_once('#').map(|(_, f)| f)?;
    fragment.trim().parse().ok()
}

/// Re-armable one-shot timer state. Only the most recently armed token can
/// fire.
#[derive(Debug, Default)]
struct DecayTimer {
    token: u64,
    armed: bool,
}

impl DecayTimer {
    fn rearm(&mut self) -> u64 {
        self.token = self.token.wrapping_add(1);
        self.armed = true;
        self.token
    }

    fn fire(&mut self, token: u64) -> bool {
        if self.armed && token == self.token {
            self.armed = false;
            true
        } else {
            false
        }
    }

    fn cancel(&mut self) {
        self.armed = false;
    }
}

pub struct SnapScroll {
    config: ScrollConfig,
    section_count: usize,
    current: usize,
    phase: Phase,
    wheel_accumulator: f64,
    touch_start_y: f64,
    touch_end_y: f64,
    header_visible: bool,
    decay: DecayTimer,
}

impl SnapScroll {
    pub fn new(config: ScrollConfig, section_count: usize) -> Self {
        Self {
            config,
            section_count,
            current: 0,
            phase: Phase::Idle,
            wheel_accumulator: 0.0,
            touch_start_y: 0.0,
            touch_end_y: 0.0,
            header_visible: true,
            decay: DecayTimer::default(),
        }
    }

    pub fn current_section(&self) -> usize {
        self.current
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn pending_target(&self) -> Option<usize> {
        match self.phase {
            Phase::Transitioning { target } => Some(target),
            Phase::Idle => None,
        }
    }

    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    pub fn wheel_accumulator(&self) -> f64 {
        self.wheel_accumulator
    }

    pub fn wheel_decay_armed(&self) -> bool {
        self.decay.armed
    }

    fn next(&self) -> usize {
        (self.current + 1) % self.section_count.max(1)
    }

    fn previous(&self) -> usize {
        let n = self.section_count.max(1);
        (self.current + n - 1) % n
    }

    /// Recompute which sections straddle the activation line. The last one
    /// that does becomes the current section; if none does, the current
    /// section is kept.
    pub fn sync_active<L: SectionLayout + ?Sized>(&mut self, layout: &L) -> Vec<Command> {
        let line = layout.viewport_height() * self.config.active_line;
        let mut out = Vec::with_capacity(self.section_count);
        for section in 0..self.section_count {
            let rect = layout.rect(section);
            let active = rect.top <= line && rect.bottom >= line;
            if active {
                self.current = section;
            }
            out.push(Command::MarkActive { section, active });
        }
        out
    }

    pub fn on_wheel<L: SectionLayout + ?Sized>(&mut self, delta_y: f64, layout: &L) -> Vec<Command> {
        if self.is_transitioning() {
            trace!("wheel {delta_y} dropped during transition");
            return Vec::new();
        }

        let mut out = Vec::new();
        self.wheel_accumulator += delta_y;

        // Anything but a downward delta, including a purely horizontal
        // wheel, shows the header.
        self.request_header(delta_y > 0.0, &mut out);

        let token = self.decay.rearm();

        let threshold = self.config.wheel_threshold;
        if self.wheel_accumulator > threshold {
            self.request(self.next(), layout, &mut out);
            self.wheel_accumulator = 0.0;
        } else if self.wheel_accumulator < -threshold {
            self.request(self.previous(), layout, &mut out);
            self.wheel_accumulator = 0.0;
        }

        out.push(Command::ArmWheelDecay {
            token,
            delay_ms: self.config.wheel_decay_ms,
        });
        out
    }

    /// The decay timer armed with `token` ran out. Stale tokens are ignored.
    pub fn wheel_decay_elapsed(&mut self, token: u64) {
        if self.decay.fire(token) {
            trace!("wheel accumulator {} decayed", self.wheel_accumulator);
            self.wheel_accumulator = 0.0;
        }
    }

    /// Forget the pending decay timer. The page clears its own timer.
    pub fn cancel_wheel_decay(&mut self) {
        self.decay.cancel();
    }

    pub fn on_key<L: SectionLayout + ?Sized>(&mut self, key: Key, layout: &L) -> Vec<Command> {
        let mut out = Vec::new();
        let target = match key {
            Key::Up => self.previous(),
            Key::Down => self.next(),
        };
        self.request(target, layout, &mut out);
        out
    }

    /// A new gesture also resets the end point, so a tap without movement
    /// reads as a zero-length swipe.
    pub fn on_touch_start(&mut self, y: f64) {
        self.touch_start_y = y;
        self.touch_end_y = y;
    }

    /// Finger moving up hides the header, moving down shows it.
    pub fn on_touch_move(&mut self, y: f64) -> Vec<Command> {
        self.touch_end_y = y;
        let mut out = Vec::new();
        let delta = self.touch_end_y - self.touch_start_y;
        if delta > 0.0 {
            self.request_header(false, &mut out);
        } else if delta < 0.0 {
            self.request_header(true, &mut out);
        }
        out
    }

    pub fn on_touch_end<L: SectionLayout + ?Sized>(&mut self, layout: &L) -> Vec<Command> {
        let mut out = Vec::new();
        let delta = self.touch_end_y - self.touch_start_y;
        let threshold = self.config.swipe_threshold;
        if delta > threshold {
            self.request(self.previous(), layout, &mut out);
        } else if delta < -threshold {
            self.request(self.next(), layout, &mut out);
        }
        out
    }

    /// Jump straight to the section named by an `#<index>` link.
    pub fn on_anchor<L: SectionLayout + ?Sized>(&mut self, href: &str, layout: &L) -> Vec<Command> {
        let mut out = Vec::new();
        match parse_anchor(href) {
            Some(target) if target < self.section_count => {
                self.request(target, layout, &mut out);
            }
            _ => trace!("anchor {href:?} ignored"),
        }
        out
    }

    /// Re-snap to the current section after the viewport changed size.
    pub fn on_resize<L: SectionLayout + ?Sized>(&mut self, layout: &L) -> Vec<Command> {
        let mut out = Vec::new();
        self.request(self.current, layout, &mut out);
        out
    }

    /// Start a transition to `target` unless one is in flight. Returns whether
    /// the request was accepted.
    pub fn request<L: SectionLayout + ?Sized>(&mut self, target: usize, layout: &L, out: &mut Vec<Command>) -> bool {
        if target >= self.section_count {
            return false;
        }
        if let Phase::Transitioning { target: pending } = self.phase {
            trace!("transition to {target} dropped, {pending} in flight");
            return false;
        }

        self.phase = Phase::Transitioning { target };
        let offset = layout.offset_top(target);
        debug!("section {} -> {target} (offset {offset})", self.current);
        out.push(Command::Scroll {
            target,
            y: -offset,
            duration_ms: self.config.transition_ms,
        });
        true
    }

    /// The wrapper animation finished: release the lock and read the current
    /// section back from the live geometry.
    pub fn finish_transition<L: SectionLayout + ?Sized>(&mut self, layout: &L) -> Vec<Command> {
        if !self.is_transitioning() {
            return Vec::new();
        }
        self.phase = Phase::Idle;
        self.sync_active(layout)
    }

    /// Collapse (`true`) or expand (`false`) the header. Asking for the state
    /// the header is already in does nothing.
    fn request_header(&mut self, collapse: bool, out: &mut Vec<Command>) {
        if self.header_visible != collapse {
            return;
        }
        self.header_visible = !self.header_visible;
        debug!("header visible: {}", self.header_visible);

        // Expanding keeps the full-height class.
        if !self.header_visible {
            out.push(Command::SwapMainHeight);
        }
        out.push(Command::Header {
            visible: self.header_visible,
            duration_ms: self.config.header_ms,
        });
    }
}
