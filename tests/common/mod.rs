#![allow(dead_code)]

use snapdeck::color::Color;
use snapdeck::layout::{Rect, SectionLayout};
use snapdeck::snap::{Command, SnapScroll};
use snapdeck::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Rect { x: f64, y: f64, w: f64, h: f64, color: Color },
    Text { text: String, x: f64, y: f64, font: String },
    Circle { x: f64, y: f64, radius: f64 },
    Line { from: (f64, f64), to: (f64, f64), alpha: f64 },
}

/// Surface that remembers every draw call.
pub struct Recorder {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<&Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for Recorder {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &Color) {
        self.ops.push(Op::Rect { x, y, w, h, color: *color });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, _color: &Color) {
        self.ops.push(Op::Text {
            text: text.to_owned(),
            x,
            y,
            font: font.to_owned(),
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, _color: &Color) {
        self.ops.push(Op::Circle { x, y, radius });
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), _line_width: f64, color: &Color) {
        self.ops.push(Op::Line {
            from,
            to,
            alpha: color.alpha(),
        });
    }
}

/// Equal-height sections stacked under a wrapper translated by `translate_y`.
pub struct Stacked {
    pub count: usize,
    pub viewport_height: f64,
    pub section_height: f64,
    pub width: f64,
    pub translate_y: f64,
}

impl Stacked {
    pub fn new(count: usize, viewport_height: f64) -> Self {
        Self {
            count,
            viewport_height,
            section_height: viewport_height,
            width: 1280.0,
            translate_y: 0.0,
        }
    }
}

impl SectionLayout for Stacked {
    fn section_count(&self) -> usize {
        self.count
    }

    fn offset_top(&self, index: usize) -> f64 {
        index as f64 * self.section_height
    }

    fn rect(&self, index: usize) -> Rect {
        Rect::new(0.0, self.offset_top(index) + self.translate_y, self.width, self.section_height)
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

/// Play the page's part: move the wrapper to where a `Scroll` command asked
/// and report the transition finished.
pub fn settle(snap: &mut SnapScroll, layout: &mut Stacked, commands: &[Command]) -> Vec<Command> {
    let y = commands
        .iter()
        .find_map(|c| match c {
            Command::Scroll { y, .. } => Some(*y),
            _ => None,
        })
        .expect("no scroll command to settle");
    layout.translate_y = y;
    snap.finish_transition(&*layout)
}

pub fn scroll_target(commands: &[Command]) -> Option<usize> {
    commands.iter().find_map(|c| match c {
        Command::Scroll { target, .. } => Some(*target),
        _ => None,
    })
}

pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}
