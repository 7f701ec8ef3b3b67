//! Form rendering module
//!
//! - `field_renderer`: shared field rendering utilities
//! - `section`: walks and draws the active section's controls

mod field_renderer;
mod section;

pub use section::draw_section;
