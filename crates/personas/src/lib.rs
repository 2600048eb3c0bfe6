//! Persona ingestion and audience recommendation: parses arbitrary tabular
//! persona sources, normalizes them onto canonical records, and ranks them
//! against a campaign's industry and goal.

pub mod normalize;
pub mod scorer;
pub mod shopper;
pub mod table;

pub use normalize::{normalize, sample_personas, PersonaRecord};
pub use scorer::{recommend, Recommendation};
pub use shopper::{analyze_shopper_list, ShopperInsight};
pub use table::PersonaTable;
