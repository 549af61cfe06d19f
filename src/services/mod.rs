pub mod enhancer;
pub mod language;

pub use enhancer::Enhancer;
pub use language::is_non_english;
