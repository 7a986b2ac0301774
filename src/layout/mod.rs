//! Placement computation for the viewing surface.

/// Radial "bouquet" arrangement.
pub mod radial;
