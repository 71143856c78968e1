//! Glint Core - scene description and image I/O.
//!
//! This crate provides the renderer-agnostic pieces of glint:
//!
//! - **Scene description**: `SceneDescription`, `Material`, `Albedo`, `LightSource`
//!   with JSON loading and a built-in demo scene
//! - **Textures**: `Texture`, a linear RGB pixel grid used for environment maps
//! - **Codec**: decoding images into textures and encoding rendered frames
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{codec, SceneDescription};
//!
//! let scene = SceneDescription::load_json("scene.json")?;
//! let env = codec::decode("envmap.jpg")?;
//! println!("{} spheres, {} lights, env {}x{}",
//!     scene.spheres.len(), scene.lights.len(), env.width, env.height);
//! ```

pub mod codec;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use codec::{decode, encode, CodecError, CodecResult};
pub use scene::{
    Albedo, LightSource, Material, MaterialRef, SceneDescription, SceneError, SceneResult,
    SphereDesc,
};
pub use texture::Texture;
