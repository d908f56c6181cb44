//! Flag reaction translation: which language a flag stands for, and the
//! translation service itself.

pub mod flag;
pub mod languages;
mod translator;

pub use languages::CountryLanguages;
pub use translator::{Translation, Translator};
