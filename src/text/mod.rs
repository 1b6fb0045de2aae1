// src/text/mod.rs
pub mod slugify;
pub mod transliterate;

pub use slugify::{is_safe_separator, slugify};
pub use transliterate::transliterate;
