//! Falling-glyph rain.
//!
//! One drop counter per text column. Every tick fades the previous frame with
//! a translucent cover, prints one random glyph per column at the drop's row,
//! and lets drops that fell past the bottom respawn at random.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::color::Color;
use crate::config::GlyphRainConfig;
use crate::surface::Surface;

pub struct GlyphRain {
    font_size: f64,
    font: String,
    glyph_color: Color,
    trail: Color,
    respawn_probability: f64,
    alphabet: Vec<char>,
    drops: Vec<u32>,
    width: f64,
    height: f64,
    rng: SmallRng,
}

/// Number of whole text columns that fit in `width`.
pub fn column_count(width: f64, font_size: f64) -> usize {
    if width <= 0.0 || font_size <= 0.0 {
        return 0;
    }
    (width / font_size).floor() as usize
}

impl GlyphRain {
    pub fn new(config: &GlyphRainConfig, width: f64, height: f64, rng: SmallRng) -> Self {
        let columns = column_count(width, config.font_size);
        Self {
            font_size: config.font_size,
            font: format!("{}px {}", config.font_size, config.font_family),
            glyph_color: Color::from_hex(&config.glyph_color).unwrap_or(Color::Rgba(0, 255, 0, 1.0)),
            trail: Color::black(config.trail_alpha),
            respawn_probability: config.respawn_probability,
            alphabet: config.alphabet.chars().collect(),
            drops: vec![1; columns],
            width,
            height,
            rng,
        }
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    /// Follow a surface resize. Surviving columns keep their drop; new ones start at 1.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.drops.resize(column_count(width, self.font_size), 1);
    }

    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.fill_rect(0.0, 0.0, self.width, self.height, &self.trail);

        let mut buf = [0u8; 4];
        for (column, drop) in self.drops.iter_mut().enumerate() {
            if let Some(&glyph) = self.alphabet.get(self.rng.random_range(0..self.alphabet.len().max(1))) {
                let text = glyph.encode_utf8(&mut buf);
                surface.fill_text(
                    text,
                    column as f64 * self.font_size,
                    *drop as f64 * self.font_size,
                    &self.font,
                    &self.glyph_color,
                );
            }

            if *drop as f64 * self.font_size > self.height
                && self.rng.random::<f64>() < self.respawn_probability
            {
                *drop = 0;
            }
            *drop = drop.saturating_add(1);
        }
    }
}
