//! Card system: definitions and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card definition (id, name, cost, description, type)
//! - `CardType`: Attack, Defense, Context, Dependent
//! - `CardCatalog`: Ordered, id-indexed card lookup

pub mod catalog;
pub mod definition;

pub use catalog::{get_all_cards, get_card, CardCatalog};
pub use definition::{Card, CardType};
