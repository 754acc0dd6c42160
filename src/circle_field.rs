//! Bouncing circles that softly push each other away.

use rand::Rng;

use crate::color::Color;
use crate::config::CircleFieldConfig;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    /// Equal to `radius`. Kept for a mass-weighted collision response, which
    /// the repulsion pass does not use.
    pub mass: f64,
    pub velocity: Velocity,
}

impl Circle {
    pub fn new(id: u32, x: f64, y: f64, radius: f64, color: Color, velocity: Velocity) -> Self {
        Self {
            id,
            x,
            y,
            radius,
            color,
            mass: radius,
            velocity,
        }
    }
}

pub struct CircleField {
    circles: Vec<Circle>,
    width: f64,
    height: f64,
    margin: f64,
    force: f64,
    trail: Color,
}

impl CircleField {
    /// Lay circles out on a `cell_size` grid, column by column.
    pub fn new<R: Rng>(config: &CircleFieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
        let mut circles = Vec::new();
        let mut id = 0;
        let mut x = 0.0;
        while x < width {
            let mut y = 0.0;
            while y < height {
                let radius = rng.random_range(config.radius_min..config.radius_max);
                let color = Color::Hsl(rng.random::<f64>() * 360.0, 50.0, 50.0);
                let velocity = Velocity {
                    x: random_sign(rng) * rng.random_range(config.speed_min..config.speed_max),
                    y: random_sign(rng) * rng.random_range(config.speed_min..config.speed_max),
                };
                circles.push(Circle::new(id, x, y, radius, color, velocity));
                id += 1;
                y += config.cell_size;
            }
            x += config.cell_size;
        }
        Self::from_circles(config, width, height, circles)
    }

    pub fn from_circles(config: &CircleFieldConfig, width: f64, height: f64, circles: Vec<Circle>) -> Self {
        Self {
            circles,
            width,
            height,
            margin: config.margin,
            force: config.force,
            trail: Color::black(config.trail_alpha),
        }
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Hard clear, draw-and-advance every circle, translucent overlay, then
    /// the pairwise repulsion pass.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.fill_rect(0.0, 0.0, self.width, self.height, &Color::BLACK);

        for circle in &mut self.circles {
            surface.fill_circle(circle.x, circle.y, circle.radius, &circle.color);
            advance(circle, self.width, self.height);
        }

        surface.fill_rect(0.0, 0.0, self.width, self.height, &self.trail);

        repel(&mut self.circles, self.margin, self.force);
    }
}

fn random_sign<R: Rng>(rng: &mut R) -> f64 {
    if rng.random::<bool>() {
        1.0
    } else {
        -1.0
    }
}

/// Move by one velocity step and bounce off the walls.
pub fn advance(circle: &mut Circle, width: f64, height: f64) {
    circle.x += circle.velocity.x;
    circle.y += circle.velocity.y;

    let r = circle.radius;
    (circle.x, circle.velocity.x) = bounce(circle.x, circle.velocity.x, r, width - r);
    (circle.y, circle.velocity.y) = bounce(circle.y, circle.velocity.y, r, height - r);
}

/// Bring `pos` back inside `[min, max]` and flip `vel` when it left the range.
///
/// Past `max` the position is pulled back by the overshoot, landing on the
/// wall; below `min` the overshoot is mirrored back inside.
pub fn bounce(pos: f64, vel: f64, min: f64, max: f64) -> (f64, f64) {
    if pos > max {
        let overshoot = pos - max;
        (pos - overshoot, -vel)
    } else if pos < min {
        let overshoot = min - pos;
        (min + overshoot, -vel)
    } else {
        (pos, vel)
    }
}

/// Push apart every pair whose centres are within the radii sum plus
/// `margin`. Each circle of a pair gets `force` along the line between the
/// centres, in opposite directions. Returns the number of pairs pushed.
pub fn repel(circles: &mut [Circle], margin: f64, force: f64) -> usize {
    let mut pushed = 0;
    for i in 0..circles.len() {
        let (head, tail) = circles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            let distance = dx.hypot(dy);
            if distance > a.radius + b.radius + margin {
                continue;
            }

            let angle = dy.atan2(dx);
            let fx = angle.cos() * force;
            let fy = angle.sin() * force;
            a.velocity.x += fx;
            a.velocity.y += fy;
            b.velocity.x -= fx;
            b.velocity.y -= fy;
            pushed += 1;
        }
    }
    pushed
}
