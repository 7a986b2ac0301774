//! Posy composes shareable digital gift bouquets.
//!
//! A sender picks items and writes a message; the whole composition is
//! encoded into a compact URL-safe token carried in a link; the recipient's
//! viewer rebuilds an equivalent layout purely from that token. No server,
//! no database, no account state; the token is the only durable artifact.
//!
//! # Pipeline overview
//!
//! Creation side:
//!
//! 1. **Pick**: accumulate item identifiers in a [`Selection`]
//! 2. **Compose**: `Selection + recipient/message/sender ->`
//!    [`CompositionRecord`] via [`CompositionBuilder`] (validated)
//! 3. **Encode**: [`encode_token`] produces the URL-safe share token
//!
//! Viewing side:
//!
//! 1. **Decode**: [`decode_token`] (or [`present_token`], which falls back to
//!    a default record on malformed input)
//! 2. **Resolve**: item identifiers -> catalog [`Item`]s; unknown identifiers
//!    are dropped, not fatal
//! 3. **Arrange**: [`arrange_bouquet`] places the resolved items on a ring in
//!    a normalized 100x100 space
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure, synchronous core**: every operation is a finite in-memory
//!   computation with no IO; nothing blocks or yields.
//! - **Deterministic positions, cosmetic jitter**: ring positions are a pure
//!   function of the item count; only the per-item tilt is randomized, and
//!   the RNG is injectable for tests.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composition;
mod foundation;
mod layout;
mod token;
mod view;

/// The static, read-only item catalog.
pub mod catalog;

pub use catalog::{ITEM_CATALOG, Item, item_by_id, resolve_items};
pub use composition::dsl::{CompositionBuilder, Selection};
pub use composition::model::CompositionRecord;
pub use foundation::error::{PosyError, PosyResult};
pub use layout::radial::{MAX_TILT_DEG, Placement, arrange_bouquet, arrange_bouquet_with_rng};
pub use token::codec::{decode_token, encode_token};
pub use view::present::{BouquetView, present_record, present_record_with_rng, present_token};
