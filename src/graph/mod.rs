pub mod document;
pub mod element;
pub mod properties;

pub use document::*;
pub use element::*;
pub use properties::*;
