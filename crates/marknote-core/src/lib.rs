//! marknote-core - Core library for Marknote
//!
//! This crate contains the note model, the notes workspace state container,
//! note persistence, the markdown rendering boundary and the registration
//! form logic used by the Marknote desktop shell.

pub mod config;
pub mod error;
pub mod layout;
pub mod markdown;
pub mod models;
pub mod notification;
pub mod registration;
pub mod storage;
pub mod workspace;

pub use error::{Error, Result};
pub use models::{Note, NoteId};
pub use workspace::{resolve, NotesWorkspace};
