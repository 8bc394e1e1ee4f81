//! Animated "slashed zero" particle field
//!
//! Points sit on a ring plus a diagonal slash, stored in polar form. Every
//! tick advances a shared rotation and recomputes each point's small radial
//! and angular wobble. Projection onto a character grid is a pure function.

use rand::Rng;
use std::f64::consts::PI;

const RING_POINTS: usize = 120;
const RING_RADIUS: f64 = 12.0;
const SLASH_POINTS: usize = 40;
const SLASH_HALF_SPAN: f64 = 8.0;
const ROTATION_STEP: f64 = 0.008;
const SPEED_MIN: f64 = 0.02;
const SPEED_SPREAD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub base_angle: f64,
    pub base_radius: f64,
    pub speed: f64,
    pub offset_radius: f64,
    pub offset_angle: f64,
}

impl Particle {
    fn new(base_angle: f64, base_radius: f64, speed: f64) -> Self {
        Self {
            base_angle,
            base_radius,
            speed,
            offset_radius: 0.0,
            offset_angle: 0.0,
        }
    }
}

/// Character grid a field is projected onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
}

impl Grid {
    /// Splash screen canvas
    pub const FULL: Grid = Grid {
        width: 80,
        height: 16,
        origin_x: 40.0,
        origin_y: 8.0,
        scale: 1.0,
    };

    /// Header logo above the prompts
    pub const LOGO: Grid = Grid {
        width: 80,
        height: 6,
        origin_x: 40.0,
        origin_y: 2.5,
        scale: 0.3,
    };
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rotation: f64,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Build the ring and slash, drawing each speed from `rng`
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut particles = Vec::with_capacity(RING_POINTS + SLASH_POINTS);

        for i in 0..RING_POINTS {
            let angle = 2.0 * PI * i as f64 / RING_POINTS as f64;
            particles.push(Particle::new(angle, RING_RADIUS, random_speed(rng)));
        }

        for i in 0..SLASH_POINTS {
            let t = i as f64 / (SLASH_POINTS - 1) as f64;
            let x = -SLASH_HALF_SPAN + 2.0 * SLASH_HALF_SPAN * t;
            let y = SLASH_HALF_SPAN - 2.0 * SLASH_HALF_SPAN * t;
            particles.push(Particle::new(
                y.atan2(x),
                (x * x + y * y).sqrt(),
                random_speed(rng),
            ));
        }

        Self {
            particles,
            rotation: 0.0,
        }
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Advance the animation by one frame
    pub fn tick(&mut self) {
        self.rotation += ROTATION_STEP;
        let rotation = self.rotation;
        for p in &mut self.particles {
            p.offset_radius = (rotation * p.speed).sin() * 0.5;
            p.offset_angle = (rotation * p.speed * 1.5).cos() * 0.1;
        }
    }

    /// Grid cells covered by at least one particle, in particle order
    ///
    /// Coordinates truncate toward zero; anything landing outside the grid
    /// is dropped. The same cell may appear more than once.
    pub fn project(&self, grid: &Grid) -> Vec<(u16, u16)> {
        self.particles
            .iter()
            .filter_map(|p| {
                let angle = p.base_angle + self.rotation + p.offset_angle;
                let radius = (p.base_radius + p.offset_radius) * grid.scale;
                let x = (grid.origin_x + radius * angle.cos()) as i64;
                let y = (grid.origin_y + radius * angle.sin()) as i64;

                let in_bounds =
                    (0..grid.width as i64).contains(&x) && (0..grid.height as i64).contains(&y);
                in_bounds.then_some((x as u16, y as u16))
            })
            .collect()
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

fn random_speed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    SPEED_MIN + rng.gen::<f64>() * SPEED_SPREAD
}
