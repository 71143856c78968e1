//! Simple ray tracer example.
//!
//! Renders the four-sphere demo scene against a uniform gray
//! environment and saves it as PNG.

use glint_core::SceneDescription;
use glint_renderer::{render, Color, RenderConfig, Texture, World};

fn main() {
    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    // Build the scene
    let start = std::time::Instant::now();
    let world = World::from_description(&SceneDescription::demo()).expect("Demo scene is valid");
    println!("Scene built in {:?}", start.elapsed());

    let environment = Texture::filled(64, 32, Color::splat(0.5));

    let config = RenderConfig {
        width: 800,
        height: 450,
        ..RenderConfig::default()
    };

    println!(
        "Rendering {}x{} @ depth {}...",
        config.width, config.height, config.max_depth
    );

    let start = std::time::Instant::now();
    let image = render(&world, Some(&environment), &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    image.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}
