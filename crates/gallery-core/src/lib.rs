pub mod anim;
pub mod camera;
pub mod cloud;
pub mod constants;
pub mod error;
pub mod intro;
pub mod layout;
pub mod mesh;
pub mod orbit;
pub mod subscriptions;
pub mod tween;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use anim::FloatParams;
pub use camera::{Camera, OrbitCamera, Spherical};
pub use cloud::{FloatingObject, InstanceRaw, Material, SceneParams, Shape, SphericalCloud};
pub use constants::*;
pub use error::GalleryError;
pub use intro::{CameraDirector, IntroFlight};
pub use layout::{fibonacci_point, fibonacci_sphere, golden_angle, LayoutCache, LayoutSpec};
pub use mesh::{MeshData, Vertex};
pub use orbit::{AngularVelocity, OrbitConfig, OrbitController, PointerState};
pub use subscriptions::Subscriptions;
pub use tween::{Ease, Tween};
