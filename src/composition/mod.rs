//! Composition data model and creation-side DSL.
//!
//! A [`CompositionRecord`](model::CompositionRecord) is the serializable unit:
//! built transiently by the creation surface, encoded into a share token, and
//! reconstructed transiently on the viewing side. Nothing here owns long-lived
//! state.

/// Selection tray and validating record builder.
pub mod dsl;
/// The serializable composition record.
pub mod model;
