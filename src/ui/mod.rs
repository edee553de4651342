//! Terminal front end for Dino Run.

pub mod scene;

pub use scene::render_scene;
