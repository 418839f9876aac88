// End-to-end walk through the explore sequence without a browser.

use gallery_core::{
    Camera, CameraDirector, SceneParams, SphericalCloud, CAMERA_EXPLORE, COLLAPSED_SCALE,
};
use glam::Vec3;

fn seeded_cloud() -> SphericalCloud {
    let params = SceneParams {
        seed: Some(2024),
        ..SceneParams::default()
    };
    let mut rng = params.rng();
    SphericalCloud::new(params, &mut rng).unwrap()
}

#[test]
fn default_scene_has_twenty_four_objects_on_radius_eight() {
    let cloud = seeded_cloud();
    assert_eq!(cloud.len(), 24);
    for obj in cloud.objects() {
        assert!((obj.home.length() - 8.0).abs() < 0.1);
        assert_eq!(obj.scale(), Vec3::splat(COLLAPSED_SCALE));
    }
}

#[test]
fn explore_flies_camera_in_and_grows_objects() {
    let mut cam = Camera::default();
    let mut director = CameraDirector::default();
    let mut cloud = seeded_cloud();

    let mut t = 0.0_f32;
    let dt = 1.0 / 60.0;
    for _ in 0..30 {
        t += dt;
        cloud.update(t);
        director.tick(&mut cam);
    }
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 15.0));

    assert!(director.explore(&cam).unwrap());
    assert!(cloud.activate(t));
    for _ in 0..600 {
        t += dt;
        cloud.update(t);
        director.tick(&mut cam);
    }
    assert!(director.flight().is_finished());
    let d = cam.eye.length();
    assert!((d - CAMERA_EXPLORE[2]).abs() < 0.05, "distance {d}");
    for obj in cloud.objects() {
        assert!((obj.scale() - obj.base_scale()).length() < 1e-4);
    }
}

#[test]
fn clicked_object_label_sits_above_it() {
    let mut cloud = seeded_cloud();
    cloud.activate(0.0);
    cloud.update(8.0);
    assert_eq!(cloud.toggle_click(3, 8.0), Some(true));
    let anchor = cloud.label_anchor(3).unwrap();
    let home_world = cloud.group_transform().transform_point3(cloud.objects()[3].home);
    assert!((anchor - home_world - Vec3::Y * 1.2).length() < 1e-4);
    assert_eq!(cloud.clicked().collect::<Vec<_>>(), vec![3]);
}
