//! Drifting particles joined by fading lines, with short-range repulsion.

use std::f64::consts::TAU;

use rand::Rng;

use crate::color::Color;
use crate::config::ParticleWebConfig;
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub color: Color,
    /// Set after the first update, which only draws.
    pub drawn: bool,
}

impl Particle {
    pub fn new(x: f64, y: f64, dx: f64, dy: f64, color: Color) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            color,
            drawn: false,
        }
    }
}

pub struct ParticleWeb {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    radius: f64,
    link_distance: f64,
    repel_distance: f64,
    force: f64,
}

impl ParticleWeb {
    /// Lay particles out on a `cell_size` grid, row by row, each heading in a
    /// random direction at `speed`.
    pub fn new<R: Rng>(config: &ParticleWebConfig, width: f64, height: f64, rng: &mut R) -> Self {
        let color = Color::from_hex(&config.color).unwrap_or(Color::WHITE);
        let mut particles = Vec::new();
        let mut y = 0.0;
        while y < height {
            let mut x = 0.0;
            while x < width {
                let angle = rng.random::<f64>() * TAU;
                particles.push(Particle::new(
                    x,
                    y,
                    angle.cos() * config.speed,
                    angle.sin() * config.speed,
                    color,
                ));
                x += config.cell_size;
            }
            y += config.cell_size;
        }
        Self::from_particles(config, width, height, particles)
    }

    pub fn from_particles(config: &ParticleWebConfig, width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            width,
            height,
            radius: config.particle_radius,
            link_distance: config.link_distance,
            repel_distance: config.repel_distance,
            force: config.force,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.fill_rect(0.0, 0.0, self.width, self.height, &Color::BLACK);

        for particle in &mut self.particles {
            if particle.drawn {
                drift(particle, self.width, self.height);
            } else {
                particle.drawn = true;
            }
            surface.fill_circle(particle.x, particle.y, self.radius, &particle.color);
        }

        self.connect(surface);
    }

    /// Draw a line between every pair closer than the link distance and push
    /// apart the pairs closer than the repel distance.
    fn connect<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for i in 0..self.particles.len() {
            let (head, tail) = self.particles.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                let distance = (b.x - a.x).hypot(b.y - a.y);
                let Some(opacity) = link_opacity(distance, self.link_distance) else {
                    continue;
                };
                surface.stroke_line((a.x, a.y), (b.x, b.y), 1.0, &Color::white(opacity));

                if distance < self.repel_distance {
                    push_apart(a, b, distance, self.force);
                }
            }
        }
    }
}

/// Line opacity for two particles `distance` apart: 1 when touching, falling
/// linearly to 0 at `link_distance`. `None` means no line.
pub fn link_opacity(distance: f64, link_distance: f64) -> Option<f64> {
    if distance < link_distance {
        Some(1.0 - distance / link_distance)
    } else {
        None
    }
}

/// Move by one step; leaving through an edge re-enters at the opposite one.
pub fn drift(particle: &mut Particle, width: f64, height: f64) {
    particle.x += particle.dx;
    particle.y += particle.dy;
    particle.x = wrap(particle.x, width);
    particle.y = wrap(particle.y, height);
}

fn wrap(pos: f64, extent: f64) -> f64 {
    if pos < 0.0 {
        extent
    } else if pos > extent {
        0.0
    } else {
        pos
    }
}

/// Impulse of `force / distance` along the line from `a` to `b`, `a` pushed
/// back and `b` pushed forward. Coincident particles have no line to push
/// along and are left alone.
pub fn push_apart(a: &mut Particle, b: &mut Particle, distance: f64, force: f64) {
    if distance <= f64::EPSILON {
        return;
    }
    let angle = (b.y - a.y).atan2(b.x - a.x);
    let fx = angle.cos() * force / distance;
    let fy = angle.sin() * force / distance;
    a.dx -= fx;
    a.dy -= fy;
    b.dx += fx;
    b.dy += fy;
}
