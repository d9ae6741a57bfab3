//! Application screens

mod login;
mod notes;
mod register;
mod shell;

pub use login::Login;
pub use notes::Notes;
pub use register::Register;
pub use shell::Shell;
