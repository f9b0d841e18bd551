//! Built-in card template presets.
//!
//! Read-only collaborator of the editor: `select_template` copies a
//! preset into the working set, the catalog itself is never mutated.

use identia_core::models::card::{CardField, CardLayout, CardStyle, CardTemplate, FieldKind};

/// The fixed set of template presets shipped with the product.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<CardTemplate>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a preset by id.
    pub fn get(&self, id: &str) -> Option<&CardTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn preset_field(id: &str, kind: FieldKind, label: &str, required: bool, order: u32) -> CardField {
    CardField {
        id: id.to_owned(),
        kind,
        label: label.to_owned(),
        value: String::new(),
        visible: true,
        required,
        order,
    }
}

fn builtin_templates() -> Vec<CardTemplate> {
    vec![
        CardTemplate {
            id: "modern-pro".into(),
            name: "Modern Professional".into(),
            description: "Clean, modern design for professionals".into(),
            style: CardStyle {
                background: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)".into(),
                text_color: "#ffffff".into(),
                accent_color: "#ffd700".into(),
                layout: CardLayout::Modern,
            },
            fields: vec![
                preset_field("1", FieldKind::Text, "Full name", true, 1),
                preset_field("2", FieldKind::Text, "Job title", false, 2),
                preset_field("3", FieldKind::Text, "Company", false, 3),
                preset_field("4", FieldKind::Email, "Email", true, 4),
                preset_field("5", FieldKind::Phone, "Phone", false, 5),
                preset_field("6", FieldKind::Url, "Website", false, 6),
            ],
        },
        CardTemplate {
            id: "classic-elegant".into(),
            name: "Classic Elegant".into(),
            description: "Traditional, elegant styling".into(),
            style: CardStyle {
                background: "linear-gradient(135deg, #2c3e50 0%, #34495e 100%)".into(),
                text_color: "#ecf0f1".into(),
                accent_color: "#e74c3c".into(),
                layout: CardLayout::Classic,
            },
            fields: vec![
                preset_field("1", FieldKind::Text, "Full name", true, 1),
                preset_field("2", FieldKind::Text, "Professional title", false, 2),
                preset_field("3", FieldKind::Email, "Corporate email", true, 3),
                preset_field("4", FieldKind::Phone, "Direct phone", false, 4),
            ],
        },
        CardTemplate {
            id: "minimal-clean".into(),
            name: "Minimal".into(),
            description: "Clean, minimal design".into(),
            style: CardStyle {
                background: "#ffffff".into(),
                text_color: "#2d3748".into(),
                accent_color: "#4299e1".into(),
                layout: CardLayout::Minimal,
            },
            fields: vec![
                preset_field("1", FieldKind::Text, "Name", true, 1),
                preset_field("2", FieldKind::Email, "Email", true, 2),
                preset_field("3", FieldKind::Url, "Portfolio", false, 3),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ships_three_presets() {
        let catalog = TemplateCatalog::new();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("modern-pro").is_some());
        assert!(catalog.get("classic-elegant").is_some());
        assert!(catalog.get("minimal-clean").is_some());
        assert!(catalog.get("no-such-template").is_none());
    }

    #[test]
    fn preset_fields_are_densely_ordered() {
        let catalog = TemplateCatalog::new();
        for template in catalog.iter() {
            let orders: Vec<u32> = template.fields.iter().map(|f| f.order).collect();
            let expected: Vec<u32> = (1..=template.fields.len() as u32).collect();
            assert_eq!(orders, expected, "template {}", template.id);
        }
    }
}
