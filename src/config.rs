//! Tunables for the page, all with the stock values as defaults.
//!
//! The browser entry point accepts a partial JS object; missing fields keep
//! their defaults (`#[serde(default)]` on every level).

use serde::Deserialize;

use crate::color::Color;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub scroll: ScrollConfig,
    pub glyph_rain: GlyphRainConfig,
    pub circles: CircleFieldConfig,
    pub web: ParticleWebConfig,
    pub selectors: Selectors,
    /// Fixed RNG seed; `None` seeds from the host.
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scroll;
        unit("scroll.activeLine", s.active_line)?;
        positive("scroll.wheelThreshold", s.wheel_threshold)?;
        positive("scroll.swipeThreshold", s.swipe_threshold)?;
        positive("scroll.wheelDecayMs", s.wheel_decay_ms as f64)?;
        positive("scroll.transitionMs", s.transition_ms)?;
        positive("scroll.headerMs", s.header_ms)?;

        let g = &self.glyph_rain;
        positive("glyphRain.fontSize", g.font_size)?;
        positive("glyphRain.intervalMs", g.interval_ms as f64)?;
        unit("glyphRain.respawnProbability", g.respawn_probability)?;
        unit("glyphRain.trailAlpha", g.trail_alpha)?;
        hex("glyphRain.glyphColor", &g.glyph_color)?;
        if g.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let c = &self.circles;
        positive("circles.cellSize", c.cell_size)?;
        range("circles.radius", c.radius_min, c.radius_max)?;
        range("circles.speed", c.speed_min, c.speed_max)?;
        unit("circles.trailAlpha", c.trail_alpha)?;

        let w = &self.web;
        positive("web.cellSize", w.cell_size)?;
        positive("web.particleRadius", w.particle_radius)?;
        positive("web.linkDistance", w.link_distance)?;
        hex("web.color", &w.color)?;
        if w.repel_distance > w.link_distance {
            return Err(ConfigError::RepelBeyondLink {
                repel: w.repel_distance,
                link: w.link_distance,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

fn hex(field: &'static str, value: &str) -> Result<(), ConfigError> {
    match Color::from_hex(value) {
        Some(_) => Ok(()),
        None => Err(ConfigError::BadColor {
            field,
            value: value.to_owned(),
        }),
    }
}

fn range(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    positive(field, min)?;
    if min < max {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange { field, min, max })
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Fraction of the viewport height a section must straddle to be active.
    pub active_line: f64,
    pub wheel_threshold: f64,
    pub swipe_threshold: f64,
    pub wheel_decay_ms: u32,
    pub transition_ms: f64,
    pub header_ms: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            active_line: 0.3,
            wheel_threshold: 100.0,
            swipe_threshold: 100.0,
            wheel_decay_ms: 500,
            transition_ms: 800.0,
            header_ms: 800.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GlyphRainConfig {
    pub font_size: f64,
    pub font_family: String,
    pub interval_ms: u32,
    pub respawn_probability: f64,
    pub trail_alpha: f64,
    pub glyph_color: String,
    pub alphabet: String,
}

impl Default for GlyphRainConfig {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            font_family: "arial".into(),
            interval_ms: 33,
            respawn_probability: 0.025,
            trail_alpha: 0.1,
            glyph_color: "#0f0".into(),
            alphabet: "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CircleFieldConfig {
    pub cell_size: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Extra gap added to the radii sum before two circles push apart.
    pub margin: f64,
    pub force: f64,
    pub trail_alpha: f64,
}

impl Default for CircleFieldConfig {
    fn default() -> Self {
        Self {
            cell_size: 250.0,
            radius_min: 30.0,
            radius_max: 60.0,
            speed_min: 0.3,
            speed_max: 1.0,
            margin: 5.0,
            force: 0.1,
            trail_alpha: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleWebConfig {
    pub cell_size: f64,
    pub particle_radius: f64,
    pub speed: f64,
    pub link_distance: f64,
    pub repel_distance: f64,
    pub force: f64,
    pub color: String,
}

impl Default for ParticleWebConfig {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            particle_radius: 2.0,
            speed: 1.0,
            link_distance: 120.0,
            repel_distance: 80.0,
            force: 0.2,
            color: "#fff".into(),
        }
    }
}

/// CSS selectors used to find the page structure.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub header: String,
    pub main: String,
    pub wrapper: String,
    pub section: String,
    /// Looked up inside each section.
    pub canvas: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: "header".into(),
            main: "main".into(),
            wrapper: ".section-wrapper".into(),
            section: ".section".into(),
            canvas: "canvas".into(),
        }
    }
}
