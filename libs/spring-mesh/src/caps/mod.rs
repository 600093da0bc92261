//! # Cap Primitives
//!
//! Small closed solids stamped along a sweep in place of the tube ring,
//! also usable on their own.

pub mod cone;
pub mod cube;
pub mod sphere;

pub use cone::create_cone;
pub use cube::create_cube;
pub use sphere::{create_sphere, sphere_vertex_count};
