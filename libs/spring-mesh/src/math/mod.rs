//! # Math
//!
//! Vector helpers and rigid transforms on top of `glam`.
//!
//! `DVec3` doubles as Point3 and Vector3; the distinction lives in how a
//! value is used (`transform_point` vs. `transform_vector`).

pub mod transform;
pub mod vec3;

pub use transform::{compose_transform, RigidTransform, TransformChain};
pub use vec3::{angle_between, any_orthogonal, cross, dot, normalize, normalize_or};
