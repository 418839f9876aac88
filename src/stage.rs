use crate::input;
use gallery_core::{
    Camera, CameraDirector, GalleryError, OrbitController, SceneParams, SphericalCloud,
};
use glam::Vec3;
use instant::Instant;

/// Everything the frame loop and the event handlers share: the camera, who
/// drives it, and the cloud it looks at.
pub struct Stage {
    pub camera: Camera,
    pub director: CameraDirector,
    pub cloud: SphericalCloud,
    started: Instant,
}

impl Stage {
    pub fn new(params: SceneParams) -> Result<Self, GalleryError> {
        let mut rng = params.rng();
        let cloud = SphericalCloud::new(params, &mut rng)?;
        log::info!(
            "[stage] {} objects on radius {:.1}",
            cloud.len(),
            params.radius
        );
        Ok(Self {
            camera: Camera::default(),
            director: CameraDirector::default(),
            cloud,
            started: Instant::now(),
        })
    }

    /// Seconds since the stage was created.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    pub fn is_exploring(&self) -> bool {
        self.director.is_exploring()
    }

    /// Start the camera flight and the object intro. `Ok(false)` when
    /// already exploring.
    pub fn explore(&mut self) -> Result<bool, GalleryError> {
        let started = self.director.explore(&self.camera)?;
        if started {
            let now = self.elapsed();
            self.cloud.activate(now);
        }
        Ok(started)
    }

    pub fn orbit_mut(&mut self) -> Option<&mut OrbitController> {
        self.director.orbit_mut()
    }

    /// One frame: cloud first, then the camera.
    pub fn advance(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
        let t = self.elapsed();
        self.cloud.update(t);
        self.director.tick(&mut self.camera);
    }

    /// Nearest object hit by a world-space ray.
    pub fn pick(&self, ro: Vec3, rd: Vec3) -> Option<usize> {
        let cloud = &self.cloud;
        input::pick_nearest(
            ro,
            rd,
            (0..cloud.len()).filter_map(|i| {
                Some((i, cloud.world_position(i)?, cloud.pick_radius(i)?))
            }),
        )
    }
}
