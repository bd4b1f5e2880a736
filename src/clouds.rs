//! Drifting cloud ellipses

use rand::Rng;

use crate::condition::{uniform, Condition};
use crate::constants::*;
use crate::error::BackdropError;
use crate::painter::Painter;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
}

impl Cloud {
    fn spawn(width: f64, height: f64, rng: &mut impl Rng) -> Self {
        Self {
            x: uniform(rng, 0.0, width),
            y: upper_half(rng, height),
            width: uniform(rng, CLOUD_WIDTH.0, CLOUD_WIDTH.1),
            height: uniform(rng, CLOUD_HEIGHT.0, CLOUD_HEIGHT.1),
            speed: uniform(rng, CLOUD_SPEED.0, CLOUD_SPEED.1),
        }
    }

    /// Drifts right; once the trailing edge leaves the surface the cloud
    /// re-enters from the left at a new height.
    pub fn advance(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        self.x += self.speed;
        if self.x - self.width > width {
            self.x = -self.width;
            self.y = upper_half(rng, height);
        }
    }
}

fn upper_half(rng: &mut impl Rng, height: f64) -> f64 {
    uniform(rng, 0.0, height / 2.0)
}

#[derive(Clone, Debug, Default)]
pub struct CloudLayer {
    clouds: Vec<Cloud>,
}

impl CloudLayer {
    pub fn generate(condition: Condition, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        if !condition.has_clouds() {
            return Self::default();
        }
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud::spawn(width, height, rng))
            .collect();
        Self { clouds }
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn draw_and_advance<P: Painter + ?Sized>(
        &mut self,
        painter: &mut P,
        width: f64,
        height: f64,
        rng: &mut impl Rng,
    ) -> Result<(), BackdropError> {
        for cloud in &mut self.clouds {
            painter.fill_ellipse(
                cloud.x,
                cloud.y,
                cloud.width / 2.0,
                cloud.height / 2.0,
                CLOUD_COLOR,
            )?;
            cloud.advance(width, height, rng);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn five_clouds_unless_clear() {
        let mut rng = StdRng::seed_from_u64(1);
        for condition in Condition::ALL {
            let layer = CloudLayer::generate(condition, 1280.0, 720.0, &mut rng);
            let expected = if condition == Condition::Clear { 0 } else { 5 };
            assert_eq!(layer.len(), expected, "{condition}");
        }
    }

    #[test]
    fn clouds_within_ranges() {
        let layer = CloudLayer::generate(Condition::Clouds, 1280.0, 720.0, &mut StdRng::seed_from_u64(2));
        for c in layer.clouds() {
            assert!((0.0..1280.0).contains(&c.x));
            assert!((0.0..360.0).contains(&c.y));
            assert!((100.0..300.0).contains(&c.width));
            assert!((40.0..100.0).contains(&c.height));
            assert!((0.1..0.6).contains(&c.speed));
        }
    }

    #[test]
    fn regeneration_is_idempotent_in_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = CloudLayer::generate(Condition::Snow, 1280.0, 720.0, &mut rng);
        let b = CloudLayer::generate(Condition::Snow, 1280.0, 720.0, &mut rng);
        assert_eq!(a.len(), b.len());
        assert_ne!(a.clouds(), b.clouds());
    }

    #[test]
    fn respawns_left_after_leaving_right_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cloud = Cloud { x: 1000.0, y: 50.0, width: 200.0, height: 60.0, speed: 0.5 };
        cloud.advance(800.0, 600.0, &mut rng);
        assert_eq!(cloud.x, -200.0);
        assert!((0.0..300.0).contains(&cloud.y));
    }

    #[test]
    fn keeps_drifting_while_partly_visible() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut cloud = Cloud { x: 900.0, y: 50.0, width: 200.0, height: 60.0, speed: 0.5 };
        cloud.advance(800.0, 600.0, &mut rng);
        assert_eq!(cloud.x, 900.5);
        assert_eq!(cloud.y, 50.0);
    }
}
