//! Working-copy editor for one card's field list.
//!
//! Every operation is a synchronous, immediately consistent mutation
//! of an in-memory ordered collection. Structural changes (add,
//! delete, move) re-establish the dense 1..N order invariant before
//! returning; field edits never touch order.

use identia_core::models::card::{CardField, CardStyle, CardTemplate, FieldKind, FieldUpdate};
use tracing::info;
use uuid::Uuid;

/// Editable working copy of a [`CardTemplate`].
///
/// Owns a deep copy of the selected preset's style and fields, so the
/// catalog is never touched by edits. Saving is an external
/// collaborator call over [`CardEditor::snapshot`].
#[derive(Debug, Clone)]
pub struct CardEditor {
    template_id: String,
    name: String,
    description: String,
    style: CardStyle,
    fields: Vec<CardField>,
}

impl CardEditor {
    pub fn from_template(template: &CardTemplate) -> Self {
        Self {
            template_id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            style: template.style.clone(),
            fields: template.fields.clone(),
        }
    }

    /// Replace the whole working set with a deep copy of `template`.
    ///
    /// Last write wins: unsaved edits to the previous working set are
    /// discarded without confirmation. The replacement is logged so a
    /// UI layer can choose to warn about the data loss.
    pub fn select_template(&mut self, template: &CardTemplate) {
        if !self.fields.is_empty() {
            info!(
                from = %self.template_id,
                to = %template.id,
                "replacing working set, unsaved edits discarded"
            );
        }
        self.template_id = template.id.clone();
        self.name = template.name.clone();
        self.description = template.description.clone();
        self.style = template.style.clone();
        self.fields = template.fields.clone();
    }

    /// Apply `update` to the field with `field_id`. Unknown ids are a
    /// silent no-op.
    pub fn update_field(&mut self, field_id: &str, update: FieldUpdate) {
        let Some(field) = self.fields.iter_mut().find(|f| f.id == field_id) else {
            return;
        };
        if let Some(kind) = update.kind {
            field.kind = kind;
        }
        if let Some(label) = update.label {
            field.label = label;
        }
        if let Some(value) = update.value {
            field.value = value;
        }
        if let Some(visible) = update.visible {
            field.visible = visible;
        }
        if let Some(required) = update.required {
            field.required = required;
        }
    }

    /// Append a fresh text field and return it. Its order is strictly
    /// greater than every existing order at insertion time.
    pub fn add_field(&mut self) -> &CardField {
        let field = CardField {
            id: Uuid::new_v4().to_string(),
            kind: FieldKind::Text,
            label: "New field".into(),
            value: String::new(),
            visible: true,
            required: false,
            order: self.fields.len() as u32 + 1,
        };
        let index = self.fields.len();
        self.fields.push(field);
        &self.fields[index]
    }

    /// Remove the field with `field_id` and renumber the remainder.
    /// Unknown ids are a silent no-op.
    pub fn delete_field(&mut self, field_id: &str) {
        let before = self.fields.len();
        self.fields.retain(|f| f.id != field_id);
        if self.fields.len() != before {
            self.renumber();
        }
    }

    /// Move the dragged field to the target field's pre-removal slot,
    /// then renumber. No-op when either id is missing or the ids are
    /// equal.
    ///
    /// Dragging onto an earlier field lands immediately before it;
    /// dragging onto a later field lands immediately after it (an
    /// adjacent pair swaps). Repeating the drag with the ids reversed
    /// restores the order of an adjacent pair in either direction.
    pub fn move_field(&mut self, dragged_id: &str, target_id: &str) {
        if dragged_id == target_id {
            return;
        }
        let Some(dragged_index) = self.fields.iter().position(|f| f.id == dragged_id) else {
            return;
        };
        let Some(target_index) = self.fields.iter().position(|f| f.id == target_id) else {
            return;
        };

        let dragged = self.fields.remove(dragged_index);
        self.fields.insert(target_index, dragged);
        self.renumber();
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// All fields in display order.
    pub fn fields(&self) -> &[CardField] {
        &self.fields
    }

    pub fn field(&self, field_id: &str) -> Option<&CardField> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Fields the rendered card shows, in display order.
    pub fn visible_fields(&self) -> impl Iterator<Item = &CardField> {
        self.fields.iter().filter(|f| f.visible)
    }

    /// Materialize the working set for the save collaborator.
    pub fn snapshot(&self) -> CardTemplate {
        CardTemplate {
            id: self.template_id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            style: self.style.clone(),
            fields: self.fields.clone(),
        }
    }

    /// Re-establish the dense 1..N order invariant.
    fn renumber(&mut self) {
        for (index, field) in self.fields.iter_mut().enumerate() {
            field.order = index as u32 + 1;
        }
    }
}
