/// Renderer module - render contract implemented by the host engine

// Module declarations
pub mod renderer;
pub mod render_target;
pub mod composite_pass;

#[cfg(test)]
pub(crate) mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use render_target::*;
pub use composite_pass::*;
