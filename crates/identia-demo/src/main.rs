//! Identia Demo — application entry point.
//!
//! Wires the session store and card editor over the file-backed
//! store and walks a demo login + card-edit session. A UI layer
//! would drive the same calls from its event handlers.

use identia_auth::{SessionConfig, SessionStore};
use identia_card::{CardEditor, TemplateCatalog};
use identia_core::models::card::FieldUpdate;
use identia_store::FileStore;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("identia=info".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Identia demo...");

    let storage = match FileStore::open("identia-session.json") {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "could not open session storage");
            std::process::exit(1);
        }
    };
    let mut sessions = SessionStore::open(storage, SessionConfig::default());
    sessions.subscribe(|record| match record {
        Some(r) => tracing::info!(user = %r.username, "session changed"),
        None => tracing::info!("session cleared"),
    });

    if !sessions.is_authenticated() {
        sessions.login("juan.perez@juan.pro", "demo123");
    }
    let user = sessions.current().expect("demo credentials are valid");
    tracing::info!(name = %user.name, plan = ?user.plan, "signed in");

    let catalog = TemplateCatalog::new();
    let template = catalog.get("modern-pro").expect("built-in preset");
    let mut editor = CardEditor::from_template(template);

    editor.update_field(
        "1",
        FieldUpdate {
            value: Some(user.name.clone()),
            ..Default::default()
        },
    );
    editor.update_field(
        "4",
        FieldUpdate {
            value: Some(user.email.clone()),
            ..Default::default()
        },
    );
    let note_id = editor.add_field().id.clone();
    editor.update_field(
        &note_id,
        FieldUpdate {
            label: Some("About".into()),
            value: Some("Digital identity, one card at a time.".into()),
            ..Default::default()
        },
    );
    editor.move_field(&note_id, "2");

    for field in editor.visible_fields() {
        println!("{:>2}. {}: {}", field.order, field.label, field.value);
    }

    tracing::info!(fields = editor.fields().len(), "demo finished");
}
