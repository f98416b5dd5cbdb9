pub mod line_editor;
pub mod reply;
pub mod tagger;
pub mod types;
pub mod ui;
