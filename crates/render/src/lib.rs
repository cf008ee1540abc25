//! Viewport composition and the renderer-agnostic drawing interface.
//!
//! # Invariants
//! - Composition is a pure read of rig state; the renderer never mutates
//!   pose truth.
//! - Every composed chain ends in the target viewport's view matrix on the
//!   left.
//! - The core does no projection math: viewport rectangles and perspective
//!   parameters pass through to the backend untouched.
//!
//! # Workaround
//! Ships a trait-based renderer interface with a debug text renderer as a
//! stand-in for a GPU backend. The trait is stable; swap in a wgpu
//! implementation without changing consumers.

pub mod geometry;
mod renderer;
pub mod viewport;

pub use renderer::{DebugTextRenderer, Projection, Renderer, ViewportDesc, ViewportRect};
pub use viewport::{DrawItem, Drawable, Viewport, compose};

pub fn crate_info() -> &'static str {
    "twinview-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
