// Host-side tests for the particle field: pools, frame order, connections,
// containment and resize.

use glam::Vec2;
use portfolio_backdrop::core::constants::*;
use portfolio_backdrop::core::{
    connections, Bounds, Color, ConnectionStyle, DisplayList, DrawCmd, FieldConfig, Ornament,
    Paint, Particle, ParticleField,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bounds() -> Bounds {
    Bounds::new(800.0, 600.0)
}

fn make_field(seed: u64) -> ParticleField {
    ParticleField::new(&FieldConfig::default().with_seed(seed), bounds(), 0).unwrap()
}

fn particle_at(x: f32, y: f32, hue: f32) -> Particle {
    Particle::new(Vec2::new(x, y), 500.0, Vec2::ZERO, 0.5, hue)
}

fn within_particle_margin(p: &Particle, b: Bounds) -> bool {
    let m = PARTICLE_MARGIN;
    p.position.x >= -m && p.position.x <= b.width + m && p.position.y >= -m && p.position.y <= b.height + m
}

#[test]
fn pools_are_allocated_once_with_fixed_sizes() {
    let mut field = make_field(1);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    assert_eq!(field.ornaments().len(), ORNAMENT_COUNT);
    let mut list = DisplayList::new();
    for _ in 0..300 {
        field.frame(&mut list);
        list.clear();
    }
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    assert_eq!(field.ornaments().len(), ORNAMENT_COUNT);
}

#[test]
fn same_seed_gives_same_layout() {
    let a = make_field(42);
    let b = make_field(42);
    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.ornaments(), b.ornaments());
    let c = make_field(43);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn fallback_seed_used_when_config_has_none() {
    let a = ParticleField::new(&FieldConfig::default(), bounds(), 5).unwrap();
    let b = ParticleField::new(&FieldConfig::default().with_seed(5), bounds(), 99).unwrap();
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn invalid_config_is_rejected() {
    let config = FieldConfig {
        particle_count: MAX_PARTICLES + 1,
        ..FieldConfig::default()
    };
    assert!(ParticleField::new(&config, bounds(), 0).is_err());
}

#[test]
fn pointer_starts_centered_and_inactive() {
    let field = make_field(1);
    let pointer = field.pointer();
    assert!(!pointer.active);
    assert_eq!(pointer.position, Vec2::new(400.0, 300.0));
}

#[test]
fn single_particle_drifts_by_its_speed() {
    let particle = Particle::new(Vec2::new(100.0, 100.0), 500.0, Vec2::new(0.0, 0.3), 0.5, 230.0);
    let mut field =
        ParticleField::from_parts(bounds(), vec![particle], Vec::new(), StdRng::seed_from_u64(1));
    field.update();
    let p = &field.particles()[0];
    assert_eq!(p.position.x, 100.0);
    assert!((p.position.y - 100.3).abs() < 1e-4);
}

#[test]
fn two_close_particles_get_one_faded_line() {
    let field = ParticleField::from_parts(
        bounds(),
        vec![particle_at(0.0, 0.0, 220.0), particle_at(100.0, 0.0, 250.0)],
        Vec::new(),
        StdRng::seed_from_u64(1),
    );
    let lines: Vec<_> = field.connections().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!((lines[0].a, lines[0].b), (0, 1));
    let expected = (1.0 - 100.0 / 150.0) * 0.25;
    assert!((lines[0].opacity - expected).abs() < 1e-6);
    assert!((lines[0].opacity - 0.0833).abs() < 1e-4);

    let mut list = DisplayList::new();
    field.draw(&mut list);
    let drawn: Vec<_> = list.gradient_lines().collect();
    assert_eq!(drawn.len(), 1);
    match drawn[0] {
        DrawCmd::StrokeLine {
            from,
            to,
            paint: Paint::Linear { from: c0, to: c1 },
            width,
        } => {
            assert_eq!(*from, Vec2::ZERO);
            assert_eq!(*to, Vec2::new(100.0, 0.0));
            assert_eq!(*c0, Color::hsla(220.0, 80.0, 70.0, lines[0].opacity));
            assert_eq!(*c1, Color::hsla(250.0, 80.0, 70.0, lines[0].opacity));
            assert_eq!(*width, CONNECTION_LINE_WIDTH);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn distant_particles_are_not_connected() {
    let particles = vec![
        particle_at(0.0, 0.0, 230.0),
        particle_at(150.0, 0.0, 230.0),
        particle_at(0.0, 400.0, 230.0),
    ];
    let style = ConnectionStyle::default();
    assert_eq!(connections(&particles, &style).count(), 0);
}

#[test]
fn connection_pass_visits_each_unordered_pair_once() {
    let particles: Vec<_> = (0..5).map(|i| particle_at(i as f32 * 10.0, 0.0, 230.0)).collect();
    let style = ConnectionStyle::default();
    let pairs: Vec<_> = connections(&particles, &style).map(|c| (c.a, c.b)).collect();
    assert_eq!(pairs.len(), 10);
    assert!(pairs.iter().all(|(a, b)| a < b));
}

#[test]
fn connection_opacity_strictly_decreases_to_threshold() {
    let style = ConnectionStyle::default();
    let mut last = f32::INFINITY;
    let mut d = 0.0_f32;
    while d < CONNECTION_THRESHOLD {
        let o = style.opacity(d).expect("inside threshold");
        assert!(o < last, "not decreasing at d={d}");
        assert!(o > 0.0);
        last = o;
        d += 0.5;
    }
    assert_eq!(style.opacity(0.0), Some(CONNECTION_MAX_OPACITY));
    assert_eq!(style.opacity(CONNECTION_THRESHOLD), None);
    assert_eq!(style.opacity(CONNECTION_THRESHOLD + 10.0), None);
}

#[test]
fn particles_stay_contained_under_pointer_pressure() {
    let mut field = make_field(11);
    let b = field.bounds();
    let mut list = DisplayList::new();
    for step in 0..2000 {
        // Sweep the pointer around, including above the top edge
        let t = step as f32 * 0.05;
        field.pointer_moved(400.0 + 380.0 * t.cos(), 280.0 + 320.0 * t.sin());
        if step % 300 == 299 {
            field.pointer_left();
        }
        field.frame(&mut list);
        list.clear();
        for p in field.particles() {
            assert!(within_particle_margin(p, b), "escaped at step {step}: {:?}", p.position);
        }
    }
}

#[test]
fn ornaments_stay_within_size_margin() {
    let mut field = make_field(12);
    let b = field.bounds();
    for _ in 0..5000 {
        field.update();
        for o in field.ornaments() {
            let m = o.size * 2.0;
            assert!(o.position.x >= -m && o.position.x <= b.width + m);
            assert!(o.position.y >= -m && o.position.y <= b.height + m);
        }
    }
}

#[test]
fn ornament_wraps_to_opposite_side_and_spins() {
    let mut o = Ornament {
        position: Vec2::new(-101.0, 300.0),
        velocity: Vec2::new(-0.05, 0.0),
        size: 50.0,
        rotation: 0.0,
        rotation_speed: 0.001,
        opacity: 0.05,
    };
    o.step(bounds());
    assert_eq!(o.position.x, 850.0);
    assert_eq!(o.rotation, 0.001);

    o.position.y = 701.0;
    o.wrap(bounds());
    assert_eq!(o.position.y, -50.0);
}

#[test]
fn ornament_draws_closed_hexagon_with_its_opacity() {
    let o = Ornament {
        position: Vec2::new(100.0, 100.0),
        velocity: Vec2::ZERO,
        size: 40.0,
        rotation: 0.0,
        rotation_speed: 0.0,
        opacity: 0.07,
    };
    let vertices = o.vertices();
    assert_eq!(vertices.len(), ORNAMENT_SIDES);
    assert!((vertices[0] - Vec2::new(140.0, 100.0)).length() < 1e-4);
    for v in vertices {
        assert!((v.distance(o.position) - 40.0).abs() < 1e-3);
    }
    let mut list = DisplayList::new();
    o.draw(&mut list);
    match &list.commands[0] {
        DrawCmd::StrokePolygon {
            points,
            alpha,
            width,
            ..
        } => {
            assert_eq!(points.len(), 6);
            assert_eq!(*alpha, 0.07);
            assert_eq!(*width, ORNAMENT_LINE_WIDTH);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn frame_draws_back_to_front() {
    let mut field = ParticleField::from_parts(
        Bounds::new(130.0, 61.0),
        vec![particle_at(20.0, 20.0, 230.0)],
        vec![Ornament {
            position: Vec2::new(60.0, 30.0),
            velocity: Vec2::ZERO,
            size: 30.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            opacity: 0.05,
        }],
        StdRng::seed_from_u64(1),
    );
    let mut list = DisplayList::new();
    field.frame(&mut list);

    // background, 3 + 2 grid lines, hexagon, 3 particle circles
    assert_eq!(list.len(), 1 + 5 + 1 + 3);
    match &list.commands[0] {
        DrawCmd::FillRect { origin, size, color } => {
            assert_eq!(*origin, Vec2::ZERO);
            assert_eq!(*size, Vec2::new(130.0, 61.0));
            assert_eq!(color.css(), "rgb(12, 20, 36)");
        }
        other => panic!("unexpected {:?}", other),
    }
    let grid_x: Vec<f32> = list.commands[1..4]
        .iter()
        .map(|c| match c {
            DrawCmd::StrokeLine { from, .. } => from.x,
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    assert_eq!(grid_x, vec![0.0, 60.0, 120.0]);
    assert!(matches!(list.commands[6], DrawCmd::StrokePolygon { .. }));
    assert!(list.commands[7..]
        .iter()
        .all(|c| matches!(c, DrawCmd::FillCircle { .. })));
}

#[test]
fn disabled_grid_draws_no_lines() {
    let config = FieldConfig {
        particle_count: 0,
        ornament_count: 0,
        grid_spacing: 0.0,
        ..FieldConfig::default()
    };
    let field = ParticleField::new(&config, bounds(), 1).unwrap();
    let mut list = DisplayList::new();
    field.draw(&mut list);
    assert_eq!(list.len(), 1);
}

#[test]
fn resize_keeps_particles_and_pools() {
    let mut field = make_field(7);
    let before = field.particles().to_vec();
    field.resize(1024.0, 768.0);
    assert_eq!(field.bounds(), Bounds::new(1024.0, 768.0));
    assert_eq!(field.particles(), &before[..]);
    assert_eq!(field.ornaments().len(), ORNAMENT_COUNT);
}

#[test]
fn shrinking_pulls_particles_back_in_on_next_step() {
    let mut field = make_field(8);
    field.resize(200.0, 150.0);
    field.update();
    let b = field.bounds();
    for p in field.particles() {
        assert!(within_particle_margin(p, b), "{:?}", p.position);
    }
}

#[test]
fn zero_sized_surface_does_not_panic() {
    let mut field = ParticleField::new(&FieldConfig::default().with_seed(1), Bounds::new(0.0, 0.0), 0)
        .unwrap();
    let mut list = DisplayList::new();
    for _ in 0..10 {
        field.frame(&mut list);
    }
    assert!(field.particles().iter().all(|p| p.position.x.is_finite()));
}

#[test]
fn nan_repulsion_strength_never_reaches_the_field() {
    let config = FieldConfig {
        repulsion_strength: f32::NAN,
        ..FieldConfig::default()
    };
    assert!(ParticleField::new(&config, bounds(), 0).is_err());
}

#[test]
fn smallest_allowed_grid_spacing_keeps_draw_bounded() {
    let config = FieldConfig {
        particle_count: 0,
        ornament_count: 0,
        grid_spacing: MIN_GRID_SPACING,
        ..FieldConfig::default()
    };
    let field = ParticleField::new(&config, bounds(), 1).unwrap();
    let mut list = DisplayList::new();
    field.draw(&mut list);
    // background + 800/4 vertical + 600/4 horizontal lines
    assert_eq!(list.len(), 1 + 200 + 150);
}
