//! Card effects: validation, execution, and the registry joining them to card ids.
//!
//! ## Key Types
//!
//! - `CardEffect`: validate + execute pair for one card
//! - `ComposedEffect`: a `Validation` and a list of `EffectStep`s
//! - `Validation`: energy check plus context/shield/custom requirements
//! - `EffectRegistry`: card id to effect mapping

pub mod builtin;
pub mod effect;
pub mod registry;
pub mod resolver;
pub mod validation;

pub use builtin::{contexts, register_builtin_effects, DODGE_ANNOUNCEMENT};
pub use effect::{CardEffect, ComposedEffect, EffectStep};
pub use registry::{get_all_effects, EffectRegistry};
pub use resolver::resolve_step;
pub use validation::{
    validate_context, validate_contexts, validate_energy, validate_shield, Requirement, RequirementCheck, Validation,
    SHIELD_REQUIREMENT,
};
