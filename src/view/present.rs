use rand::Rng;

use crate::{
    catalog::{self, Item},
    composition::model::CompositionRecord,
    layout::radial::{self, Placement},
    token::codec,
};

#[derive(Clone, Debug)]
/// Everything the viewing surface needs to render one composition.
///
/// `items` and `placements` are index-aligned and always the same length:
/// layout runs on the resolved item count, so identifiers dropped during
/// resolution never leave a hole in the arrangement.
pub struct BouquetView {
    /// The decoded (or substituted) composition record.
    pub record: CompositionRecord,
    /// Catalog entries for every resolved item identifier, in record order.
    pub items: Vec<&'static Item>,
    /// One placement per resolved item.
    pub placements: Vec<Placement>,
    /// `true` when the default record was substituted for a missing or
    /// malformed token.
    pub fallback: bool,
}

/// Present the token extracted from a viewing link.
///
/// `None` (no token in the link) and malformed tokens both substitute the
/// default presentation record; a bad link shows a bouquet, never an error.
#[tracing::instrument]
pub fn present_token(token: Option<&str>) -> BouquetView {
    let (record, fallback) = match token {
        Some(token) => match codec::decode_token(token) {
            Ok(record) => (record, false),
            Err(err) => {
                tracing::debug!(%err, "substituting fallback record");
                (CompositionRecord::fallback(), true)
            }
        },
        None => (CompositionRecord::fallback(), true),
    };
    let mut view = present_record(record);
    view.fallback = fallback;
    view
}

/// Resolve and arrange an already-decoded record.
#[tracing::instrument(skip(record))]
pub fn present_record(record: CompositionRecord) -> BouquetView {
    present_record_with_rng(record, &mut rand::thread_rng())
}

/// [`present_record`] with an injected tilt source, for deterministic tests.
pub fn present_record_with_rng<R: Rng + ?Sized>(
    record: CompositionRecord,
    rng: &mut R,
) -> BouquetView {
    let items = catalog::resolve_items(&record.items);
    let placements = radial::arrange_bouquet_with_rng(items.len(), rng);
    BouquetView {
        record,
        items,
        placements,
        fallback: false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/present.rs"]
mod tests;
