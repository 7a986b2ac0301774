use crate::foundation::error::{PosyError, PosyResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The serializable gift composition.
///
/// A record is a pure data model: built by the creation surface (see
/// [`crate::CompositionBuilder`]), serialized into a share token via
/// [`crate::encode_token`], and reconstructed from one via
/// [`crate::decode_token`].
///
/// Field order is the canonical serialization order. The text fields default
/// to empty on deserialization so that decoded/legacy records stay readable;
/// creation-side invariants are enforced by [`CompositionRecord::validate`],
/// never by the codec.
pub struct CompositionRecord {
    /// Ordered picked item identifiers. Repeats allowed; insertion order is
    /// meaningful for per-item counts only, not for layout.
    #[serde(alias = "flowers")]
    pub items: Vec<String>,
    /// Who the composition is addressed to.
    #[serde(default, alias = "to")]
    pub recipient: String,
    /// Free-form message text; any Unicode content.
    #[serde(default)]
    pub message: String,
    /// Who the composition is from.
    #[serde(default, alias = "from")]
    pub sender: String,
}

impl CompositionRecord {
    /// Validate creation-side invariants.
    ///
    /// Decoded records are exempt: a legacy token may carry empty text fields
    /// and still present fine.
    pub fn validate(&self) -> PosyResult<()> {
        if self.items.is_empty() {
            return Err(PosyError::validation(
                "a composition needs at least one item",
            ));
        }
        for (name, value) in [
            ("recipient", &self.recipient),
            ("message", &self.message),
            ("sender", &self.sender),
        ] {
            if value.trim().is_empty() {
                return Err(PosyError::validation(format!(
                    "composition {name} must not be blank"
                )));
            }
        }
        Ok(())
    }

    /// The presentation record substituted when a viewing link carries no
    /// token or a malformed one.
    pub fn fallback() -> Self {
        Self {
            items: ["rose", "tulip", "blossom", "hibiscus", "daisy"]
                .into_iter()
                .map(String::from)
                .collect(),
            recipient: "Love".to_string(),
            message: "A beautiful bouquet just for you!".to_string(),
            sender: "Someone Special".to_string(),
        }
    }
}
