pub mod dictionary;
pub mod loader;

pub use dictionary::{CompressedDefinition, CompressedEntry, CompressedExample, DutchDictionary};
pub use loader::DictionaryLoader;
