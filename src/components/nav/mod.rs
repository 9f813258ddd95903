//! Site navigation: section links, scroll progress and the typewriter brand.

mod component;
pub mod sections;
pub mod typing;

pub use component::{NavBar, TypingText};
pub use sections::{Section, SectionBounds, active_section};
pub use typing::{Typewriter, TypingSpeed};
