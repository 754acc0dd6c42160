//! Which animation runs behind which section, and where each section's canvas
//! sits.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::circle_field::CircleField;
use crate::color::Color;
use crate::config::Config;
use crate::glyph_rain::GlyphRain;
use crate::layout::{Rect, SectionLayout};
use crate::particle_web::ParticleWeb;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    GlyphRain,
    CircleField,
    ParticleWeb,
}

pub const ANIMATIONS: [AnimationKind; 3] = [
    AnimationKind::GlyphRain,
    AnimationKind::CircleField,
    AnimationKind::ParticleWeb,
];

/// Flat colors painted on each canvas before its first frame.
pub const WASH: [Color; 3] = [
    Color::Rgba(255, 0, 0, 1.0),
    Color::Rgba(0, 255, 0, 1.0),
    Color::Rgba(0, 0, 255, 1.0),
];

pub fn kind_for_section(index: usize) -> AnimationKind {
    ANIMATIONS[index % ANIMATIONS.len()]
}

pub fn wash_for_section(index: usize) -> Color {
    WASH[index % WASH.len()]
}

/// How a scene wants to be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Once per display refresh.
    EveryFrame,
    /// On a fixed timer.
    EveryMs(u32),
}

/// Backing size and vertical offset for a section canvas. Canvas `i` is moved
/// down by `i` viewport heights so translating the shared wrapper shows one
/// canvas at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPlacement {
    pub width: u32,
    pub height: u32,
    pub offset_y: f64,
}

pub fn canvas_placement(index: usize, rect: &Rect, viewport_height: f64) -> CanvasPlacement {
    CanvasPlacement {
        width: rect.width.max(0.0) as u32,
        height: rect.height.max(0.0) as u32,
        offset_y: index as f64 * viewport_height,
    }
}

/// Placements for every section, from live geometry. Idempotent; run it
/// after every viewport resize.
pub fn canvas_placements<L: SectionLayout + ?Sized>(layout: &L) -> Vec<CanvasPlacement> {
    let viewport_height = layout.viewport_height();
    (0..layout.section_count())
        .map(|index| canvas_placement(index, &layout.rect(index), viewport_height))
        .collect()
}

/// The animation owned by one section.
pub enum SectionScene {
    GlyphRain(GlyphRain),
    CircleField(CircleField),
    ParticleWeb(ParticleWeb),
}

impl SectionScene {
    pub fn new(kind: AnimationKind, config: &Config, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        match kind {
            AnimationKind::GlyphRain => {
                SectionScene::GlyphRain(GlyphRain::new(&config.glyph_rain, width, height, rng))
            }
            AnimationKind::CircleField => {
                SectionScene::CircleField(CircleField::new(&config.circles, width, height, &mut rng))
            }
            AnimationKind::ParticleWeb => {
                SectionScene::ParticleWeb(ParticleWeb::new(&config.web, width, height, &mut rng))
            }
        }
    }

    pub fn kind(&self) -> AnimationKind {
        match self {
            SectionScene::GlyphRain(_) => AnimationKind::GlyphRain,
            SectionScene::CircleField(_) => AnimationKind::CircleField,
            SectionScene::ParticleWeb(_) => AnimationKind::ParticleWeb,
        }
    }

    pub fn cadence(&self, config: &Config) -> Cadence {
        match self {
            SectionScene::GlyphRain(_) => Cadence::EveryMs(config.glyph_rain.interval_ms),
            _ => Cadence::EveryFrame,
        }
    }

    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        match self {
            SectionScene::GlyphRain(scene) => scene.tick(surface),
            SectionScene::CircleField(scene) => scene.frame(surface),
            SectionScene::ParticleWeb(scene) => scene.frame(surface),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        match self {
            SectionScene::GlyphRain(scene) => scene.resize(width, height),
            SectionScene::CircleField(scene) => scene.resize(width, height),
            SectionScene::ParticleWeb(scene) => scene.resize(width, height),
        }
    }
}

/// Per-section seeds derived from one base seed (splitmix64 step).
pub fn section_seed(base: u64, index: usize) -> u64 {
    let mut z = base.wrapping_add((index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
