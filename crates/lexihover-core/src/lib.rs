pub mod boundary;
pub mod chain;
pub mod dictionary;
pub mod gateway;
pub mod host;
pub mod hover;
pub mod lookup;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use chain::{PopupChain, PopupNode};
pub use dictionary::{Definition, Dictionary, DictionaryEntry, Example, LoadError};
pub use gateway::InputGateway;
pub use host::{Page, PopupRenderer, SelectionError, TextHit};
pub use lookup::{LookupAdapter, LookupMatch};
pub use session::{QueryOutcome, Session};
