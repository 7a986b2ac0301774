//! Share-token serialization.
//!
//! The token is the only durable artifact in the system: it rides in a URL
//! query value and must survive copy/paste through chat apps and address
//! bars unchanged.

/// Record-to-token codec.
pub mod codec;
