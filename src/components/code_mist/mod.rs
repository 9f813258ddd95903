//! Code mist: an animated background of drifting code glyphs.
//!
//! Renders a fixed, full-viewport canvas with:
//! - A fixed pool of glyph particles drifting down the page
//! - Sideways drift that follows the page scroll progress
//! - Attraction towards a spring-smoothed pointer, with a soft glow around it
//! - Fading by remaining lifetime and depth, with in-place recycling
//! - Pausing while the canvas is scrolled out of view
//!
//! # Example
//!
//! ```ignore
//! view! {
//!     <CodeMistBackground />
//!     <main>...</main>
//! }
//! ```

mod component;
pub mod particles;
mod render;
pub mod state;
pub mod theme;

pub use component::CodeMistBackground;
pub use particles::{FrameInput, Particle, ParticleField};
pub use state::{FrameGate, MistState, SmoothedPointer};
pub use theme::{Color, MistTheme, ParticleStyle};
