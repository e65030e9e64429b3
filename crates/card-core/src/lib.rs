pub mod animation;
pub mod camera;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod fragment;
pub mod layout;
pub mod texture;
pub mod uniforms;

#[cfg(feature = "gpu")]
pub mod gpu;

pub use animation::*;
pub use camera::*;
pub use compositor::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use fragment::*;
pub use layout::*;
pub use texture::*;
pub use uniforms::*;

// Shader bundled as a string constant
pub static MASK_WGSL: &str = include_str!("../shaders/mask.wgsl");
