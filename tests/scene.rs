use rand::rngs::StdRng;
use rand::SeedableRng;
use skyfall::{BackdropError, Condition, Painter, Scene};

#[derive(Debug, PartialEq)]
enum Op {
    Clear,
    Gradient(String, String),
    Ellipse { rx: f64, ry: f64 },
    Circle { r: f64 },
    Line { length: f64, width: f64 },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Painter for Recorder {
    fn clear(&mut self, _: f64, _: f64) -> Result<(), BackdropError> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn fill_vertical_gradient(&mut self, _: f64, _: f64, top: &str, bottom: &str) -> Result<(), BackdropError> {
        self.ops.push(Op::Gradient(top.into(), bottom.into()));
        Ok(())
    }

    fn fill_ellipse(&mut self, _: f64, _: f64, rx: f64, ry: f64, _: &str) -> Result<(), BackdropError> {
        self.ops.push(Op::Ellipse { rx, ry });
        Ok(())
    }

    fn fill_circle(&mut self, _: f64, _: f64, r: f64, _: &str) -> Result<(), BackdropError> {
        self.ops.push(Op::Circle { r });
        Ok(())
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, _: &str) -> Result<(), BackdropError> {
        assert_eq!(from.0, to.0, "rain streaks are vertical");
        self.ops.push(Op::Line { length: to.1 - from.1, width });
        Ok(())
    }
}

fn scene_for(label: Option<&str>) -> (Scene, StdRng) {
    let mut rng = StdRng::seed_from_u64(42);
    let scene = Scene::new(label, 1280.0, 720.0, &mut rng);
    (scene, rng)
}

fn one_frame(scene: &mut Scene, rng: &mut StdRng) -> Vec<Op> {
    let mut recorder = Recorder::default();
    scene.render_frame(&mut recorder, rng).unwrap();
    recorder.ops
}

#[test]
fn clear_sky_draws_only_the_gradient() {
    let (mut scene, mut rng) = scene_for(Some("Clear"));
    assert_eq!(scene.particles().len(), 0);
    assert_eq!(scene.clouds().len(), 0);
    assert_eq!(
        one_frame(&mut scene, &mut rng),
        vec![Op::Clear, Op::Gradient("#4A90E2".into(), "#87CEEB".into())]
    );
}

#[test]
fn missing_condition_matches_clear() {
    let (mut unset, mut rng_a) = scene_for(None);
    let (mut clear, mut rng_b) = scene_for(Some("Clear"));
    assert_eq!(unset.condition(), Condition::Clear);
    assert_eq!(one_frame(&mut unset, &mut rng_a), one_frame(&mut clear, &mut rng_b));
}

#[test]
fn snow_scene() {
    let (mut scene, mut rng) = scene_for(Some("Snow"));
    assert_eq!(scene.particles().len(), 100);
    assert_eq!(scene.clouds().len(), 5);
    assert!(scene.particles().particles().iter().all(|p| (1.0..6.0).contains(&p.size)));

    let ops = one_frame(&mut scene, &mut rng);
    assert_eq!(ops[0], Op::Clear);
    assert_eq!(ops[1], Op::Gradient("#BDC3C7".into(), "#ECF0F1".into()));
    assert!(ops[2..7].iter().all(|op| matches!(op, Op::Ellipse { .. })));
    assert_eq!(ops[7..].len(), 100);
    assert!(ops[7..].iter().all(|op| matches!(op, Op::Circle { .. })));
}

#[test]
fn thunderstorm_has_clouds_and_no_rain() {
    let (mut scene, mut rng) = scene_for(Some("Thunderstorm"));
    assert_eq!(scene.particles().len(), 0);
    assert_eq!(scene.clouds().len(), 5);

    let ops = one_frame(&mut scene, &mut rng);
    assert_eq!(ops[1], Op::Gradient("#1C2833".into(), "#34495E".into()));
    assert_eq!(ops.len(), 2 + 5);
}

#[test]
fn rain_streaks_scale_with_size() {
    let (mut scene, mut rng) = scene_for(Some("rain"));
    let sizes: Vec<f64> = scene.particles().particles().iter().map(|p| p.size).collect();

    let ops = one_frame(&mut scene, &mut rng);
    let lines: Vec<_> = ops
        .iter()
        .filter_map(|op| match op {
            Op::Line { length, width } => Some((*length, *width)),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 200);
    for ((length, width), size) in lines.into_iter().zip(sizes) {
        assert!((length - size * 3.0).abs() < 1e-9);
        assert!((width - size / 2.0).abs() < 1e-9);
    }
}

#[test]
fn cloud_ellipses_use_half_extents() {
    let (mut scene, mut rng) = scene_for(Some("clouds"));
    let extents: Vec<_> = scene.clouds().clouds().iter().map(|c| (c.width / 2.0, c.height / 2.0)).collect();
    let ops = one_frame(&mut scene, &mut rng);
    let drawn: Vec<_> = ops
        .iter()
        .filter_map(|op| match op {
            Op::Ellipse { rx, ry } => Some((*rx, *ry)),
            _ => None,
        })
        .collect();
    assert_eq!(drawn, extents);
}

#[test]
fn particles_fall_between_frames() {
    let (mut scene, mut rng) = scene_for(Some("snow"));
    let before: Vec<_> = scene.particles().particles().to_vec();
    one_frame(&mut scene, &mut rng);
    for (old, new) in before.iter().zip(scene.particles().particles()) {
        if new.y != -10.0 {
            assert!((new.y - (old.y + old.speed_y)).abs() < 1e-9);
        }
    }
}

#[test]
fn many_frames_keep_entities_in_bounds() {
    let (mut scene, mut rng) = scene_for(Some("Drizzle"));
    for _ in 0..500 {
        one_frame(&mut scene, &mut rng);
    }
    let (width, height) = scene.size();
    for p in scene.particles().particles() {
        assert!(p.y >= -10.0 && p.y <= height + 12.0);
        assert!(p.x >= 0.0 && p.x <= width);
    }
    for c in scene.clouds().clouds() {
        assert!(c.x >= -c.width && c.x - c.width <= width + 1.0);
    }
}
