//! Sphere-tracing renderer for implicit surfaces.
//!
//! Primitives are folded with a smooth-minimum blend that carries their
//! materials along, so overlapping shapes melt into each other in both shape
//! and colour. Each pixel averages four sub-pixel rays before gamma
//! correction.

pub mod config;
pub mod cpu;
pub mod domain;
pub mod error;
pub mod frame;
pub mod march;
pub mod math;
pub mod render;
pub mod sdf;
pub mod shading;

pub use cpu::{render_frame, render_frame_with, render_pixel, trace, SAMPLE_OFFSETS};
pub use domain::{Light, Material, Primitive, Scene, Shape};
pub use error::{ConfigError, SceneError};
pub use frame::Frame;
pub use render::{Camera, MarchSettings, Projection, RenderSettings};
