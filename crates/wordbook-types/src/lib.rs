mod types;

pub use types::{Entry, RenderedRow, SenseSegment, SourceRecord};
