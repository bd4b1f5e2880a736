//! Per-frame composition of sky, clouds and precipitation

use rand::Rng;

use crate::clouds::CloudLayer;
use crate::condition::Condition;
use crate::error::BackdropError;
use crate::painter::Painter;
use crate::particles::ParticleField;

/// Everything drawn on the surface. Populations are owned here and replaced
/// wholesale whenever the condition label changes.
#[derive(Clone, Debug)]
pub struct Scene {
    label: String,
    condition: Condition,
    width: f64,
    height: f64,
    particles: ParticleField,
    clouds: CloudLayer,
}

impl Scene {
    /// A missing label is the same as `"clear"`.
    pub fn new(label: Option<&str>, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let label = label_or_clear(label);
        let mut scene = Self {
            condition: Condition::from_label(Some(&label)),
            label,
            width,
            height,
            particles: ParticleField::default(),
            clouds: CloudLayer::default(),
        };
        scene.regenerate(rng);
        scene
    }

    /// Rebuilds both populations from scratch for the current condition.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        self.particles = ParticleField::generate(self.condition, self.width, self.height, rng);
        self.clouds = CloudLayer::generate(self.condition, self.width, self.height, rng);
        log::debug!(
            "scene regenerated for {}: {} particles, {} clouds",
            self.condition,
            self.particles.len(),
            self.clouds.len()
        );
    }

    /// Any change to the raw label, even case-only, rebuilds both
    /// populations. Returns whether that happened.
    pub fn set_label(&mut self, label: Option<&str>, rng: &mut impl Rng) -> bool {
        let label = label_or_clear(label);
        if label == self.label {
            return false;
        }
        let condition = Condition::from_label(Some(&label));
        log::info!(
            "weather condition {:?} ({}) -> {:?} ({})",
            self.label,
            self.condition,
            label,
            condition
        );
        self.label = label;
        self.condition = condition;
        self.regenerate(rng);
        true
    }

    /// Tracks new surface dimensions. Existing entities keep their positions
    /// and wrap against the new bounds on their next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn render_frame<P: Painter + ?Sized>(
        &mut self,
        painter: &mut P,
        rng: &mut impl Rng,
    ) -> Result<(), BackdropError> {
        let (width, height) = (self.width, self.height);
        let gradient = self.condition.gradient();

        painter.clear(width, height)?;
        painter.fill_vertical_gradient(width, height, gradient.top, gradient.bottom)?;
        self.clouds.draw_and_advance(painter, width, height, rng)?;
        self.particles.draw_and_advance(painter, width, height, rng)
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn clouds(&self) -> &CloudLayer {
        &self.clouds
    }
}

fn label_or_clear(label: Option<&str>) -> String {
    label.unwrap_or(Condition::Clear.as_str()).to_owned()
}
