//! Digital business card domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Url,
    MultilineText,
}

/// One labeled, typed, orderable piece of information on a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardField {
    /// Unique within the owning field set, never reused.
    pub id: String,
    pub kind: FieldKind,
    pub label: String,
    pub value: String,
    pub visible: bool,
    pub required: bool,
    /// Display position. Kept dense and contiguous starting at 1
    /// after every structural change to the field set.
    pub order: u32,
}

/// A single-field update. `None` means "leave unchanged".
///
/// Deliberately has no `order` member: position changes only through
/// the editor's structural operations, never through a field edit.
#[derive(Debug, Clone, Default)]
pub struct FieldUpdate {
    pub kind: Option<FieldKind>,
    pub label: Option<String>,
    pub value: Option<String>,
    pub visible: Option<bool>,
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardLayout {
    Modern,
    Classic,
    Minimal,
    Creative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardStyle {
    /// CSS background value (solid color or gradient).
    pub background: String,
    pub text_color: String,
    pub accent_color: String,
    pub layout: CardLayout,
}

/// A named preset of visual style plus a default field set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub style: CardStyle,
    pub fields: Vec<CardField>,
}
