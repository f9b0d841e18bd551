//! Integration tests for the card editor's field-list model.

use identia_card::{CardEditor, TemplateCatalog};
use identia_core::models::card::{
    CardField, CardLayout, CardStyle, CardTemplate, FieldKind, FieldUpdate,
};

fn field(id: &str, label: &str, order: u32) -> CardField {
    CardField {
        id: id.to_owned(),
        kind: FieldKind::Text,
        label: label.to_owned(),
        value: String::new(),
        visible: true,
        required: false,
        order,
    }
}

/// Editor seeded with [Name(1), Title(2), Email(3)].
fn setup() -> CardEditor {
    let template = CardTemplate {
        id: "test".into(),
        name: "Test".into(),
        description: String::new(),
        style: CardStyle {
            background: "#ffffff".into(),
            text_color: "#000000".into(),
            accent_color: "#4299e1".into(),
            layout: CardLayout::Minimal,
        },
        fields: vec![
            field("name", "Name", 1),
            field("title", "Title", 2),
            field("email", "Email", 3),
        ],
    };
    CardEditor::from_template(&template)
}

fn labels(editor: &CardEditor) -> Vec<&str> {
    editor.fields().iter().map(|f| f.label.as_str()).collect()
}

fn orders(editor: &CardEditor) -> Vec<u32> {
    editor.fields().iter().map(|f| f.order).collect()
}

#[test]
fn delete_then_add_keeps_order_dense() {
    let mut editor = setup();

    editor.delete_field("title");
    assert_eq!(labels(&editor), vec!["Name", "Email"]);
    assert_eq!(orders(&editor), vec![1, 2]);

    let new_id = editor.add_field().id.clone();
    assert_eq!(labels(&editor), vec!["Name", "Email", "New field"]);
    assert_eq!(orders(&editor), vec![1, 2, 3]);

    let added = editor.field(&new_id).unwrap();
    assert_eq!(added.kind, FieldKind::Text);
    assert!(added.value.is_empty());
    assert!(added.visible);
    assert!(!added.required);
}

#[test]
fn added_field_order_exceeds_all_existing_orders() {
    let mut editor = setup();
    let max_before = editor.fields().iter().map(|f| f.order).max().unwrap();
    let added_order = editor.add_field().order;
    assert!(added_order > max_before);
}

#[test]
fn delete_unknown_id_is_a_no_op() {
    let mut editor = setup();
    editor.delete_field("already-gone");
    assert_eq!(labels(&editor), vec!["Name", "Title", "Email"]);
    assert_eq!(orders(&editor), vec![1, 2, 3]);
}

#[test]
fn update_field_changes_one_attribute_and_never_order() {
    let mut editor = setup();

    editor.update_field(
        "title",
        FieldUpdate {
            value: Some("Staff Engineer".into()),
            ..Default::default()
        },
    );
    let title = editor.field("title").unwrap();
    assert_eq!(title.value, "Staff Engineer");
    assert_eq!(title.label, "Title");
    assert_eq!(title.order, 2);

    editor.update_field(
        "title",
        FieldUpdate {
            visible: Some(false),
            required: Some(true),
            ..Default::default()
        },
    );
    let title = editor.field("title").unwrap();
    assert!(!title.visible);
    assert!(title.required);
    assert_eq!(orders(&editor), vec![1, 2, 3]);
}

#[test]
fn update_unknown_field_is_a_no_op() {
    let mut editor = setup();
    editor.update_field(
        "ghost",
        FieldUpdate {
            label: Some("Boo".into()),
            ..Default::default()
        },
    );
    assert_eq!(labels(&editor), vec!["Name", "Title", "Email"]);
}

#[test]
fn move_field_onto_an_earlier_field_lands_before_it() {
    let mut editor = setup();

    editor.move_field("email", "name");
    assert_eq!(labels(&editor), vec!["Email", "Name", "Title"]);
    assert_eq!(orders(&editor), vec![1, 2, 3]);
}

#[test]
fn move_field_onto_the_next_field_swaps_the_pair() {
    let mut editor = setup();

    editor.move_field("name", "title");
    assert_eq!(labels(&editor), vec!["Title", "Name", "Email"]);
    assert_eq!(orders(&editor), vec![1, 2, 3]);
}

#[test]
fn move_field_to_itself_or_with_stale_ids_is_a_no_op() {
    let mut editor = setup();

    editor.move_field("name", "name");
    editor.move_field("name", "deleted-long-ago");
    editor.move_field("deleted-long-ago", "name");
    assert_eq!(labels(&editor), vec!["Name", "Title", "Email"]);
    assert_eq!(orders(&editor), vec![1, 2, 3]);
}

#[test]
fn adjacent_move_round_trip_restores_order_in_both_directions() {
    // Dragged field starts after the target.
    let mut editor = setup();
    editor.move_field("title", "name");
    assert_eq!(labels(&editor), vec!["Title", "Name", "Email"]);
    editor.move_field("name", "title");
    assert_eq!(labels(&editor), vec!["Name", "Title", "Email"]);

    // Dragged field starts before the target.
    let mut editor = setup();
    editor.move_field("name", "title");
    assert_eq!(labels(&editor), vec!["Title", "Name", "Email"]);
    editor.move_field("title", "name");
    assert_eq!(labels(&editor), vec!["Name", "Title", "Email"]);
}

#[test]
fn non_adjacent_move_round_trip_is_not_identity() {
    // Known edge case: the A,B / B,A round trip is asymmetric when
    // the fields are not adjacent.
    let mut editor = setup();

    editor.move_field("email", "name");
    editor.move_field("name", "email");
    assert_eq!(labels(&editor), vec!["Name", "Email", "Title"]);
    assert_eq!(orders(&editor), vec![1, 2, 3]);
}

#[test]
fn order_stays_dense_and_ids_unique_across_mixed_edits() {
    let mut editor = setup();

    let a = editor.add_field().id.clone();
    editor.delete_field("name");
    let b = editor.add_field().id.clone();
    editor.move_field(&b, "title");
    editor.move_field("email", &a);
    editor.delete_field("title");

    let expected: Vec<u32> = (1..=editor.fields().len() as u32).collect();
    assert_eq!(orders(&editor), expected);

    let mut ids: Vec<&str> = editor.fields().iter().map(|f| f.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), editor.fields().len());
}

#[test]
fn select_template_discards_the_working_set() {
    let catalog = TemplateCatalog::new();
    let mut editor = CardEditor::from_template(catalog.get("modern-pro").unwrap());

    editor.update_field(
        "1",
        FieldUpdate {
            value: Some("Juan Pérez".into()),
            ..Default::default()
        },
    );
    editor.add_field();

    editor.select_template(catalog.get("minimal-clean").unwrap());
    assert_eq!(editor.template_id(), "minimal-clean");
    assert_eq!(editor.fields().len(), 3);
    assert!(editor.field("1").unwrap().value.is_empty());
}

#[test]
fn editing_the_working_copy_never_touches_the_catalog() {
    let catalog = TemplateCatalog::new();
    let mut editor = CardEditor::from_template(catalog.get("minimal-clean").unwrap());

    editor.delete_field("1");
    editor.update_field(
        "2",
        FieldUpdate {
            label: Some("Hacked".into()),
            ..Default::default()
        },
    );

    let pristine = catalog.get("minimal-clean").unwrap();
    assert_eq!(pristine.fields.len(), 3);
    assert_eq!(pristine.fields[1].label, "Email");
}

#[test]
fn visible_fields_respects_the_visibility_flag() {
    let mut editor = setup();
    editor.update_field(
        "title",
        FieldUpdate {
            visible: Some(false),
            ..Default::default()
        },
    );

    let shown: Vec<&str> = editor.visible_fields().map(|f| f.label.as_str()).collect();
    assert_eq!(shown, vec!["Name", "Email"]);
}

#[test]
fn snapshot_reflects_all_structural_edits() {
    let mut editor = setup();
    editor.delete_field("title");
    editor.move_field("email", "name");
    editor.update_field(
        "email",
        FieldUpdate {
            required: Some(true),
            ..Default::default()
        },
    );

    let snapshot = editor.snapshot();
    assert_eq!(snapshot.id, "test");
    let labels: Vec<&str> = snapshot.fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["Email", "Name"]);
    assert_eq!(snapshot.fields[0].order, 1);
    assert!(snapshot.fields[0].required);
}
