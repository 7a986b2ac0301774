//! The static, read-only item catalog.
//!
//! Tokens carry item identifiers, not item data; both surfaces resolve
//! identifiers against this table. It is defined once and never mutated, so
//! no synchronization is involved.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A selectable decorative item.
pub struct Item {
    /// Stable identifier carried inside share tokens.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Rendered glyph.
    pub glyph: &'static str,
    /// Display color, CSS hex.
    pub color: &'static str,
}

/// Every selectable item, in display order.
pub const ITEM_CATALOG: &[Item] = &[
    Item {
        id: "rose",
        label: "Rose",
        glyph: "\u{1F339}",
        color: "#E8A5A5",
    },
    Item {
        id: "tulip",
        label: "Tulip",
        glyph: "\u{1F337}",
        color: "#F4C2D9",
    },
    Item {
        id: "sunflower",
        label: "Sunflower",
        glyph: "\u{1F33B}",
        color: "#F5C4A5",
    },
    Item {
        id: "blossom",
        label: "Blossom",
        glyph: "\u{1F338}",
        color: "#F5D5E0",
    },
    Item {
        id: "hibiscus",
        label: "Hibiscus",
        glyph: "\u{1F33A}",
        color: "#F5A5B8",
    },
    Item {
        id: "daisy",
        label: "Daisy",
        glyph: "\u{1F33C}",
        color: "#F5F1E8",
    },
    Item {
        id: "lotus",
        label: "Lotus",
        glyph: "\u{1FAB7}",
        color: "#D4B5E8",
    },
    Item {
        id: "bouquet",
        label: "Bouquet",
        glyph: "\u{1F490}",
        color: "#B8A5D9",
    },
];

/// Look up a catalog entry by identifier.
pub fn item_by_id(id: &str) -> Option<&'static Item> {
    ITEM_CATALOG.iter().find(|item| item.id == id)
}

/// Resolve a sequence of identifiers against the catalog.
///
/// Unresolved identifiers are dropped from the result rather than failing:
/// a token referencing an unknown or future item degrades gracefully. Each
/// drop is reported at debug level.
pub fn resolve_items(ids: &[String]) -> Vec<&'static Item> {
    ids.iter()
        .filter_map(|id| {
            let item = item_by_id(id);
            if item.is_none() {
                tracing::debug!(%id, "dropping unresolved item identifier");
            }
            item
        })
        .collect()
}
