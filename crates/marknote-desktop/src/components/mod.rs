//! UI Components
//!
//! Reusable UI components for the desktop application.

mod note_editor;
mod sidebar;
mod split_pane;
mod toast;

pub use note_editor::NoteEditor;
pub use sidebar::Sidebar;
pub use split_pane::SplitPane;
pub use toast::ToastContainer;
