//! A learning scratchpad: small functions that each show one language
//! feature, plus a code point string reverser.

pub mod basics;
pub mod config;
pub mod error;
pub mod lessons;
pub mod reverse;

pub use config::ScratchpadConfig;
pub use error::{Result, ScratchpadError};
pub use lessons::{Lesson, LessonContext};
pub use reverse::{reverse, reverse_graphemes, reverse_in_place};
