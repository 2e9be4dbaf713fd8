pub mod document;
pub mod parser;

pub use document::{
    decode_event_document, format_number, EventDocument, EventInfo, Ingredient, Scalar, Station,
};
pub use parser::{EventParser, ItemSource};
