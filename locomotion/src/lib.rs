pub mod binding;
pub mod capsule;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod gate;
pub mod gravity;
pub mod layers;
pub mod math;
pub mod motion;
pub mod physics;
pub mod rotation;
pub mod scene;

#[cfg(test)]
mod testing;

pub use binding::{AxisBinding, InputBindings, LocomotionMode};
pub use capsule::{CapsuleShape, follow_head};
pub use config::LocomotionConfig;
pub use controller::{ContinuousMovement, SampleOutcome};
pub use error::{ConfigError, ConfigResult};
pub use layers::{CollisionLayer, LayerFlag, LayerMask};
pub use math::{HeadPose, InputSample, Point3, Vec3, rotate_by_yaw, yaw_from_forward};
pub use physics::{ColliderShapeDef, StaticColliderDef, StaticWorld};
pub use scene::{CharacterBody, DependencySet, GroundQuery, LocomotionScene, XrRig};
