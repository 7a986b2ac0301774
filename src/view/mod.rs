//! The viewing-side pipeline.
//!
//! Everything the viewing surface needs is derived from the token alone:
//! decode, resolve identifiers against the catalog, arrange the resolved
//! items. The surface then renders whatever comes back.

/// Token-to-view presentation pipeline.
pub mod present;
