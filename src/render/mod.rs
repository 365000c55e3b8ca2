pub mod settings;
pub mod validation;
pub mod view;

pub use settings::{MarchSettings, RenderSettings};
pub use validation::validate_scene;
pub use view::{Camera, Projection};
