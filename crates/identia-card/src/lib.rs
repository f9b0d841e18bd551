//! Identia Card — the card editor's field-list model and the built-in
//! template catalog.

pub mod editor;
pub mod templates;

pub use editor::CardEditor;
pub use templates::TemplateCatalog;
