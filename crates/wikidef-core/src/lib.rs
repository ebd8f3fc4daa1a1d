pub mod dictionary;
pub mod error;
pub mod normalize;
pub mod sanitize;

pub use dictionary::{DefinitionEntry, DefinitionRecord, PartOfSpeechGroup, RawApiPayload};
pub use error::NormalizeError;
pub use normalize::{normalize, select_locale};
pub use sanitize::sanitize;
