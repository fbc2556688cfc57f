mod aabb;
mod lerp;

pub use aabb::AABB;
pub use lerp::{lerp, lerp_vec3, progress};
