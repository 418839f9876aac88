//! The spherical cloud of floating objects and its per-frame animation.
//!
//! Two nested rotations apply to every object: the scene turns by a fixed
//! step per frame from the first frame on, and the cloud group turns with
//! wall-clock time once the cloud is active. Objects animate in local group
//! space; [`SphericalCloud::world_position`] and [`SphericalCloud::instances`]
//! apply both rotations.

use crate::anim::FloatParams;
use crate::constants::*;
use crate::error::GalleryError;
use crate::layout::{LayoutCache, LayoutSpec};
use crate::mesh::{self, MeshData};
use crate::tween::{Ease, Tween};
use glam::{Mat3, Mat4, Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Plane = 0,
    Cube = 1,
    Sphere = 2,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Plane, Shape::Cube, Shape::Sphere];

    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn base_scale(self) -> Vec3 {
        match self {
            Shape::Plane => Vec3::new(1.5, 1.0, 0.05),
            Shape::Cube => Vec3::splat(0.8),
            Shape::Sphere => Vec3::splat(0.7),
        }
    }

    pub fn mesh(self) -> MeshData {
        match self {
            Shape::Plane => mesh::plane(),
            Shape::Cube => mesh::cube(),
            Shape::Sphere => mesh::uv_sphere(32, 32),
        }
    }

    /// Radius of a sphere enclosing the unit mesh after scaling by `scale`.
    pub fn bound_radius(self, scale: Vec3) -> f32 {
        let scale = scale.abs();
        match self {
            Shape::Plane => (Vec3::new(0.5, 0.5, 0.0) * scale).length(),
            Shape::Cube => (Vec3::splat(0.5) * scale).length(),
            Shape::Sphere => scale.max_element(),
        }
    }
}

/// Surface looks, drawn as flat tints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Wood,
    Grass,
    Asphalt,
    Sand,
    Sky,
}

impl Material {
    pub const ALL: [Material; 5] = [
        Material::Wood,
        Material::Grass,
        Material::Asphalt,
        Material::Sand,
        Material::Sky,
    ];

    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn tint(self) -> Vec3 {
        match self {
            Material::Wood => Vec3::new(0.62, 0.45, 0.30),
            Material::Grass => Vec3::new(0.42, 0.62, 0.30),
            Material::Asphalt => Vec3::new(0.36, 0.36, 0.39),
            Material::Sand => Vec3::new(0.86, 0.76, 0.55),
            Material::Sky => Vec3::new(0.52, 0.72, 0.95),
        }
    }
}

/// Per-instance data consumed by the scene shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 3],
    pub color: [f32; 4],
}

impl InstanceRaw {
    fn new(model: Mat4, color: Vec3) -> Self {
        let linear = Mat3::from_mat4(model);
        let normal = if linear.determinant().abs() > 1e-12 {
            linear.inverse().transpose()
        } else {
            Mat3::IDENTITY
        };
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                normal.x_axis.extend(0.0).to_array(),
                normal.y_axis.extend(0.0).to_array(),
                normal.z_axis.extend(0.0).to_array(),
            ],
            color: color.extend(1.0).to_array(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FloatingObject {
    pub index: usize,
    pub shape: Shape,
    pub material: Material,
    pub home: Vec3,
    pub params: FloatParams,
    hovered: bool,
    clicked: bool,
    position_tween: Tween,
    scale_tween: Tween,
    position: Vec3,
    scale: Vec3,
    rotation: Quat,
}

impl FloatingObject {
    fn new(index: usize, home: Vec3, params: FloatParams) -> Self {
        let collapsed = Vec3::splat(COLLAPSED_SCALE);
        Self {
            index,
            shape: Shape::for_index(index),
            material: Material::for_index(index),
            home,
            params,
            hovered: false,
            clicked: false,
            position_tween: Tween::hold(home),
            scale_tween: Tween::hold(collapsed),
            position: home,
            scale: collapsed,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn base_scale(&self) -> Vec3 {
        self.shape.base_scale()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    /// Position in cloud-group space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    pub fn color(&self) -> Vec3 {
        let base = if self.hovered { HOVER_COLOR } else { IDLE_COLOR };
        Vec3::from_array(base) * self.material.tint()
    }

    fn start_intro(&mut self, now: f32) {
        let start = now + self.index as f32 * INTRO_STAGGER_SEC;
        self.position_tween = Tween::new(
            self.home * INTRO_SPREAD,
            self.home,
            start,
            INTRO_MOVE_SEC,
            Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.8,
            },
        );
        self.scale_tween = Tween::new(
            Vec3::splat(COLLAPSED_SCALE),
            self.base_scale(),
            start,
            INTRO_GROW_SEC,
            Ease::BackOut(2.0),
        );
        self.position = self.position_tween.sample(now);
        self.scale = self.scale_tween.sample(now);
    }

    fn update(&mut self, t: f32) {
        let p = self.position_tween.sample(t);
        self.position = Vec3::new(p.x, p.y + self.params.hover_offset(t), p.z);
        self.rotation = self.params.rotation(t);
        self.scale = if self.hovered && !self.clicked {
            self.base_scale() * (1.0 + (t * HOVER_PULSE_RATE).sin() * HOVER_PULSE_DEPTH)
        } else {
            self.scale_tween.sample(t)
        };
    }

    fn toggle_click(&mut self, now: f32) -> bool {
        let target = if self.clicked {
            self.base_scale()
        } else {
            self.base_scale() * CLICK_GROW
        };
        self.clicked = !self.clicked;
        self.scale_tween = Tween::new(
            self.scale,
            target,
            now,
            CLICK_TWEEN_SEC,
            Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.5,
            },
        );
        self.clicked
    }
}

/// Construction parameters for [`SphericalCloud`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    pub count: usize,
    pub radius: f32,
    /// Cloud group spin in radians per second while active.
    pub cloud_spin: f32,
    /// Scene spin in radians per frame.
    pub scene_spin: f32,
    pub seed: Option<u64>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            count: OBJECT_COUNT,
            radius: CLOUD_RADIUS,
            cloud_spin: CLOUD_SPIN_PER_SEC,
            scene_spin: SCENE_SPIN_PER_FRAME,
            seed: None,
        }
    }
}

impl SceneParams {
    /// Seeded generator when `seed` is set, otherwise one seeded from entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub struct SphericalCloud {
    params: SceneParams,
    layout: LayoutCache,
    objects: Vec<FloatingObject>,
    active: bool,
    group_angle: f32,
    scene_angle: f32,
    hovered: Option<usize>,
}

impl SphericalCloud {
    pub fn new<R: Rng>(params: SceneParams, rng: &mut R) -> Result<Self, GalleryError> {
        let spec = LayoutSpec::new(params.count, params.radius)?;
        let mut layout = LayoutCache::default();
        let homes = layout.positions(spec, rng).to_vec();
        let objects = homes
            .into_iter()
            .enumerate()
            .map(|(i, home)| FloatingObject::new(i, home, FloatParams::random(rng)))
            .collect();
        Ok(Self {
            params,
            layout,
            objects,
            active: false,
            group_angle: 0.0,
            scene_angle: 0.0,
            hovered: None,
        })
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn objects(&self) -> &[FloatingObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start the staggered intro. Returns `false` if already active.
    pub fn activate(&mut self, now: f32) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        for obj in &mut self.objects {
            obj.start_intro(now);
        }
        log::debug!("[cloud] activated {} objects at t={now:.2}", self.objects.len());
        true
    }

    /// Advance one frame; `elapsed` is seconds since the clock started.
    pub fn update(&mut self, elapsed: f32) {
        self.scene_angle += self.params.scene_spin;
        if !self.active {
            return;
        }
        self.group_angle = elapsed * self.params.cloud_spin;
        for obj in &mut self.objects {
            obj.update(elapsed);
        }
    }

    pub fn scene_angle(&self) -> f32 {
        self.scene_angle
    }

    pub fn group_angle(&self) -> f32 {
        self.group_angle
    }

    /// Scene rotation, applied to the lights as well as the cloud.
    pub fn scene_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.scene_angle)
    }

    /// Group-space to world-space transform.
    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_quat(self.scene_rotation() * Quat::from_rotation_y(self.group_angle))
    }

    pub fn world_position(&self, index: usize) -> Option<Vec3> {
        let obj = self.objects.get(index)?;
        Some(self.group_transform().transform_point3(obj.position))
    }

    pub fn pick_radius(&self, index: usize) -> Option<f32> {
        let obj = self.objects.get(index)?;
        Some(obj.shape.bound_radius(obj.scale))
    }

    /// World-space anchor for the label of object `index`.
    pub fn label_anchor(&self, index: usize) -> Option<Vec3> {
        let obj = self.objects.get(index)?;
        let local = obj.home + Vec3::Y * LABEL_LIFT;
        Some(self.group_transform().transform_point3(local))
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Mark `index` as the hovered object. Returns whether the hover changed.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|&i| i < self.objects.len());
        if index == self.hovered {
            return false;
        }
        if let Some(prev) = self.hovered.and_then(|i| self.objects.get_mut(i)) {
            prev.hovered = false;
        }
        if let Some(next) = index.and_then(|i| self.objects.get_mut(i)) {
            next.hovered = true;
        }
        self.hovered = index;
        true
    }

    /// Flip the clicked state of `index`. Returns the new state, or `None`
    /// for an unknown index.
    pub fn toggle_click(&mut self, index: usize, now: f32) -> Option<bool> {
        let obj = self.objects.get_mut(index)?;
        Some(obj.toggle_click(now))
    }

    pub fn clicked(&self) -> impl Iterator<Item = usize> + '_ {
        self.objects
            .iter()
            .filter(|o| o.clicked)
            .map(|o| o.index)
    }

    /// World-space instance data, one batch per entry of [`Shape::ALL`].
    pub fn instances(&self) -> [Vec<InstanceRaw>; 3] {
        let group = self.group_transform();
        let mut batches: [Vec<InstanceRaw>; 3] = Default::default();
        for obj in &self.objects {
            let model = group * obj.local_matrix();
            batches[obj.shape as usize].push(InstanceRaw::new(model, obj.color()));
        }
        batches
    }

    /// Move the objects to a new layout. Per-object float parameters are
    /// only redrawn when the object count changes.
    pub fn relayout<R: Rng>(&mut self, spec: LayoutSpec, rng: &mut R) {
        let homes = self.layout.positions(spec, rng).to_vec();
        self.params.count = spec.count();
        self.params.radius = spec.radius();
        if homes.len() != self.objects.len() {
            self.objects = homes
                .into_iter()
                .enumerate()
                .map(|(i, home)| FloatingObject::new(i, home, FloatParams::random(rng)))
                .collect();
            self.hovered = None;
            if self.active {
                for obj in &mut self.objects {
                    obj.scale_tween = Tween::hold(obj.base_scale());
                    obj.scale = obj.base_scale();
                }
            }
            return;
        }
        for (obj, home) in self.objects.iter_mut().zip(homes) {
            obj.home = home;
            obj.position_tween = Tween::hold(home);
            obj.position = home;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud(count: usize) -> SphericalCloud {
        let params = SceneParams {
            count,
            seed: Some(42),
            ..SceneParams::default()
        };
        let mut rng = params.rng();
        SphericalCloud::new(params, &mut rng).unwrap()
    }

    #[test]
    fn shapes_and_materials_cycle_by_index() {
        let c = cloud(6);
        let shapes: Vec<_> = c.objects().iter().map(|o| o.shape).collect();
        assert_eq!(
            shapes,
            [
                Shape::Plane,
                Shape::Cube,
                Shape::Sphere,
                Shape::Plane,
                Shape::Cube,
                Shape::Sphere
            ]
        );
        assert_eq!(c.objects()[5].material, Material::Wood);
        assert_eq!(c.objects()[4].material, Material::Sky);
    }

    #[test]
    fn inactive_cloud_stays_collapsed_at_home() {
        let mut c = cloud(4);
        c.update(3.0);
        for obj in c.objects() {
            assert_eq!(obj.position(), obj.home);
            assert_eq!(obj.scale(), Vec3::splat(COLLAPSED_SCALE));
        }
        assert_eq!(c.group_angle(), 0.0);
        assert!((c.scene_angle() - SCENE_SPIN_PER_FRAME).abs() < 1e-7);
    }

    #[test]
    fn intro_is_staggered_by_index() {
        let mut c = cloud(3);
        assert!(c.activate(1.0));
        assert!(!c.activate(1.0));
        c.update(1.05);
        let objs = c.objects();
        // Object 2 has not started yet: it sits at three times its home.
        let spread = objs[2].home * INTRO_SPREAD;
        let p = objs[2].position();
        assert!((Vec3::new(p.x, 0.0, p.z) - Vec3::new(spread.x, 0.0, spread.z)).length() < 1e-4);
        assert_eq!(objs[2].scale(), Vec3::splat(COLLAPSED_SCALE));
        assert!(objs[0].scale().x > COLLAPSED_SCALE);
    }

    #[test]
    fn objects_settle_at_base_scale_after_intro() {
        let mut c = cloud(3);
        c.activate(0.0);
        c.update(10.0);
        for obj in c.objects() {
            assert!((obj.scale() - obj.base_scale()).length() < 1e-5);
            let p = obj.position();
            assert!((Vec3::new(p.x, obj.home.y, p.z) - obj.home).length() < 1e-4);
            assert!((p.y - obj.home.y).abs() <= obj.params.hover_amplitude + 1e-4);
        }
    }

    #[test]
    fn click_grows_then_restores() {
        let mut c = cloud(3);
        c.activate(0.0);
        c.update(5.0);
        assert_eq!(c.toggle_click(1, 5.0), Some(true));
        c.update(6.0);
        assert!((c.objects()[1].scale() - Vec3::splat(0.8 * CLICK_GROW)).length() < 1e-4);
        assert_eq!(c.clicked().collect::<Vec<_>>(), vec![1]);

        assert_eq!(c.toggle_click(1, 6.0), Some(false));
        c.update(7.0);
        assert!((c.objects()[1].scale() - Vec3::splat(0.8)).length() < 1e-4);
        assert_eq!(c.toggle_click(99, 7.0), None);
    }

    #[test]
    fn hover_pulse_stays_within_three_percent() {
        let mut c = cloud(3);
        c.activate(0.0);
        assert!(c.set_hovered(Some(2)));
        assert!(!c.set_hovered(Some(2)));
        for i in 0..50 {
            c.update(5.0 + i as f32 * 0.07);
            let ratio = c.objects()[2].scale().x / 0.7;
            assert!((ratio - 1.0).abs() <= HOVER_PULSE_DEPTH + 1e-5);
        }
        assert!(c.objects()[2].is_hovered());
        assert_eq!(c.objects()[2].color(), Vec3::ONE * Material::Asphalt.tint());
    }

    #[test]
    fn hovering_moves_between_objects() {
        let mut c = cloud(3);
        c.set_hovered(Some(0));
        c.set_hovered(Some(1));
        assert!(!c.objects()[0].is_hovered());
        assert!(c.objects()[1].is_hovered());
        assert!(c.set_hovered(Some(7)));
        assert_eq!(c.hovered(), None);
    }

    #[test]
    fn instances_are_batched_by_shape() {
        let c = cloud(7);
        let [planes, cubes, spheres] = c.instances();
        assert_eq!((planes.len(), cubes.len(), spheres.len()), (3, 2, 2));
    }

    #[test]
    fn world_position_follows_group_rotation() {
        let mut c = cloud(2);
        c.activate(0.0);
        c.update(10.0);
        let local = c.objects()[0].position();
        let world = c.world_position(0).unwrap();
        let angle = c.scene_angle() + c.group_angle();
        let expected = Quat::from_rotation_y(angle) * local;
        assert!((world - expected).length() < 1e-4);
        assert!(c.world_position(5).is_none());
    }

    #[test]
    fn relayout_keeps_params_when_count_is_unchanged() {
        let mut c = cloud(5);
        let before: Vec<_> = c.objects().iter().map(|o| o.params).collect();
        let mut rng = StdRng::seed_from_u64(9);
        c.relayout(LayoutSpec::new(5, 4.0).unwrap(), &mut rng);
        let after: Vec<_> = c.objects().iter().map(|o| o.params).collect();
        assert_eq!(before, after);
        assert!((c.objects()[0].home.length() - 4.0).abs() < 0.1);

        c.relayout(LayoutSpec::new(8, 4.0).unwrap(), &mut rng);
        assert_eq!(c.len(), 8);
    }

    #[test]
    fn sphere_pick_radius_tracks_scale() {
        let mut c = cloud(3);
        assert!(c.pick_radius(2).unwrap() < 0.01);
        c.activate(0.0);
        c.update(10.0);
        assert!((c.pick_radius(2).unwrap() - 0.7).abs() < 1e-4);
    }
}
