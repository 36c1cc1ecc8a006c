pub mod bands;
pub mod composite;
pub mod growth;
pub mod loader;
pub mod norm;

pub use bands::{AgeBand, AgeBands, BAND_NAMES};
pub use composite::{CompositeKey, CompositeRow, CompositeTable};
pub use growth::{GrowthRow, GrowthTable};
pub use loader::RefLibrary;
pub use norm::{NormRow, NormTable};
