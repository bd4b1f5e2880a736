//! Falling precipitation: rain streaks and snowflakes

use rand::Rng;

use crate::condition::{uniform, Condition, Precipitation};
use crate::constants::*;
use crate::error::BackdropError;
use crate::painter::Painter;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_y: f64,
}

impl Particle {
    fn spawn(kind: Precipitation, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let (min_size, max_size) = kind.size_range();
        let (min_speed, max_speed) = kind.speed_range();
        Self {
            x: uniform(rng, 0.0, width),
            y: uniform(rng, 0.0, height),
            size: uniform(rng, min_size, max_size),
            speed_y: uniform(rng, min_speed, max_speed),
        }
    }

    /// Moves one frame down and wraps around the surface edges.
    pub fn advance(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        self.y += self.speed_y;

        if self.y > height {
            self.y = PARTICLE_RESPAWN_Y;
            self.x = uniform(rng, 0.0, width);
        }

        if self.x > width {
            self.x = 0.0;
        } else if self.x < 0.0 {
            self.x = width;
        }
    }

    fn draw<P: Painter + ?Sized>(
        &self,
        kind: Precipitation,
        painter: &mut P,
    ) -> Result<(), BackdropError> {
        match kind {
            Precipitation::Rain => painter.stroke_line(
                (self.x, self.y),
                (self.x, self.y + self.size * RAIN_STREAK_LENGTH),
                self.size / 2.0,
                RAIN_COLOR,
            ),
            Precipitation::Snow => painter.fill_circle(self.x, self.y, self.size, SNOW_COLOR),
        }
    }
}

/// The precipitation population for one condition. Never resized in place;
/// a new condition means a new field.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    kind: Option<Precipitation>,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate(condition: Condition, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let kind = condition.precipitation();
        let particles = match kind {
            Some(kind) => (0..kind.count())
                .map(|_| Particle::spawn(kind, width, height, rng))
                .collect(),
            None => Vec::new(),
        };
        Self { kind, particles }
    }

    pub fn kind(&self) -> Option<Precipitation> {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Draws every particle at its current position, then steps it.
    pub fn draw_and_advance<P: Painter + ?Sized>(
        &mut self,
        painter: &mut P,
        width: f64,
        height: f64,
        rng: &mut impl Rng,
    ) -> Result<(), BackdropError> {
        let Some(kind) = self.kind else {
            return Ok(());
        };

        for particle in &mut self.particles {
            particle.draw(kind, painter)?;
            particle.advance(width, height, rng);
        }
        Ok(())
    }
}
