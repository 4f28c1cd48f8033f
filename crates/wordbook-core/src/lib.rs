pub mod error;
pub mod marker;
pub mod normalize;
pub mod patch;
pub mod phonetics;
pub mod pipeline;
pub mod render;
pub mod row;
pub mod segment;

pub use error::PhoneticError;
pub use normalize::{DefaultNormalizer, Normalizer};
pub use patch::{PatchReport, patch};
pub use phonetics::{PhoneticSource, PhoneticTable};
pub use pipeline::{Conversion, Pipeline};
pub use render::{TableLayout, TableRenderer, render};
pub use segment::{MarkerStyle, Strategy, format_gloss, segment};
