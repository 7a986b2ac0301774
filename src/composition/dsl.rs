use crate::{
    composition::model::CompositionRecord,
    foundation::error::PosyResult,
    token::codec,
};

#[derive(Clone, Debug, Default)]
/// A caller-owned tray of picked item identifiers.
///
/// The creation surface holds one of these and threads it through its event
/// handlers; there is no module-level selection state anywhere in the crate.
pub struct Selection {
    picked: Vec<String>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one pick. Repeats are allowed and preserved in order.
    pub fn pick(&mut self, id: impl Into<String>) {
        self.picked.push(id.into());
    }

    /// Total number of picks, repeats included.
    pub fn len(&self) -> usize {
        self.picked.len()
    }

    /// `true` when nothing has been picked yet.
    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    /// How many times `id` has been picked (the per-item count badge).
    pub fn count_of(&self, id: &str) -> usize {
        self.picked.iter().filter(|picked| *picked == id).count()
    }

    /// Drop every pick.
    pub fn clear(&mut self) {
        self.picked.clear();
    }

    /// Picked identifiers in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.picked
    }
}

#[derive(Clone, Debug, Default)]
/// Builder for a validated [`CompositionRecord`].
pub struct CompositionBuilder {
    items: Vec<String>,
    recipient: String,
    message: String,
    sender: String,
}

impl CompositionBuilder {
    /// Create a builder for a new composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipient name.
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Set the message text.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the sender name.
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    /// Append a single item identifier.
    pub fn item(mut self, id: impl Into<String>) -> Self {
        self.items.push(id.into());
        self
    }

    /// Append every pick from a [`Selection`], in tray order.
    pub fn selection(mut self, selection: &Selection) -> Self {
        self.items.extend(selection.ids().iter().cloned());
        self
    }

    /// Build and validate the final [`CompositionRecord`].
    pub fn build(self) -> PosyResult<CompositionRecord> {
        let record = CompositionRecord {
            items: self.items,
            recipient: self.recipient,
            message: self.message,
            sender: self.sender,
        };
        record.validate()?;
        Ok(record)
    }

    /// Build, validate, and encode into a share token in one step.
    pub fn build_token(self) -> PosyResult<String> {
        codec::encode_token(&self.build()?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
