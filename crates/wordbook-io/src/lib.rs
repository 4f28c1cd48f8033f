pub mod output;
pub mod source;

pub use output::{OutputError, read_document, write_document};
pub use source::{SourceError, SourceReader, XmlWordbookReader, parse_wordbook};
