pub mod light;
pub mod material;
pub mod presets;
pub mod primitive;
pub mod scene;

pub use light::{Light, DEFAULT_AMBIENT, DEFAULT_BACKGROUND, DEFAULT_LIGHTS};
pub use material::Material;
pub use primitive::{Primitive, Shape};
pub use scene::{Scene, DEFAULT_BLEND_RADIUS};
