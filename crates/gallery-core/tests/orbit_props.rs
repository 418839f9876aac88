use gallery_core::{
    Camera, OrbitCamera, OrbitConfig, OrbitController, Spherical, MAX_DISTANCE, MAX_POLAR_ANGLE,
    MIN_POLAR_ANGLE,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn explore_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 12.0),
        ..Camera::default()
    }
}

#[test]
fn large_zoom_out_clamps_and_converges_to_max_distance() {
    let mut cam = explore_camera();
    let mut orbit = OrbitController::attach(OrbitConfig::default(), &cam).unwrap();
    orbit.wheel(2000.0);
    assert_eq!(orbit.target_distance(), MAX_DISTANCE);
    for _ in 0..2000 {
        orbit.tick(&mut cam);
    }
    let d = cam.position().length();
    assert!((d - MAX_DISTANCE).abs() < 1e-3, "distance {d}");
}

#[test]
fn commanded_polar_angle_never_leaves_its_band() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut cam = explore_camera();
    let mut orbit = OrbitController::default();
    let mut x = 0.0;
    let mut y = 0.0;
    orbit.pointer_down(x, y);
    for frame in 0..3000 {
        x += rng.gen_range(-80.0_f32..80.0);
        y += rng.gen_range(-80.0_f32..80.0);
        orbit.pointer_move(x, y);
        if frame % 97 == 0 {
            orbit.pointer_up();
            orbit.pointer_down(x, y);
        }
        orbit.tick(&mut cam);
        let phi = orbit.orbit().unwrap().phi;
        assert!((MIN_POLAR_ANGLE..=MAX_POLAR_ANGLE).contains(&phi), "phi {phi}");
    }
}

#[test]
fn vertical_drags_keep_camera_inside_polar_band() {
    let mut cam = explore_camera();
    let mut orbit = OrbitController::default();
    orbit.pointer_down(0.0, 0.0);
    orbit.pointer_move(0.0, -5000.0);
    orbit.pointer_up();
    for _ in 0..300 {
        orbit.tick(&mut cam);
        let phi = Spherical::from_vec3(cam.position()).phi;
        assert!(phi >= MIN_POLAR_ANGLE - 1e-4 && phi <= MAX_POLAR_ANGLE + 1e-4);
    }
    let phi = Spherical::from_vec3(cam.position()).phi;
    assert!((phi - MIN_POLAR_ANGLE).abs() < 1e-3, "phi {phi}");
}

#[test]
fn released_velocity_decays_geometrically() {
    let mut cam = explore_camera();
    let mut orbit = OrbitController::default();
    orbit.pointer_down(0.0, 0.0);
    orbit.pointer_move(30.0, 12.0);
    orbit.pointer_up();

    let mut prev = orbit.pointer().velocity;
    for _ in 0..200 {
        orbit.tick(&mut cam);
        let v = orbit.pointer().velocity;
        assert!((v.azimuth - prev.azimuth * 0.95).abs() <= prev.azimuth.abs() * 1e-5);
        assert!((v.polar - prev.polar * 0.95).abs() <= prev.polar.abs() * 1e-5);
        assert!(v.magnitude() < prev.magnitude());
        prev = v;
    }
}

#[test]
fn camera_always_looks_at_origin_and_stays_finite() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut cam = explore_camera();
    let mut orbit = OrbitController::default();
    orbit.pointer_down(0.0, 0.0);
    for _ in 0..500 {
        orbit.pointer_move(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
        orbit.wheel(rng.gen_range(-300.0..300.0));
        orbit.tick(&mut cam);
        assert!(cam.position().is_finite());
        assert_eq!(cam.target, Vec3::ZERO);
    }
}

#[test]
fn tick_leaves_a_camera_at_the_origin_alone() {
    let mut cam = Camera {
        eye: Vec3::ZERO,
        ..Camera::default()
    };
    let mut orbit = OrbitController::default();
    orbit.tick(&mut cam);
    assert_eq!(cam.position(), Vec3::ZERO);
    assert!(orbit.orbit().is_none());
}
