// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits between a form host and the pure domain rules
// - Turns verdicts into host effects (alert, clear, allow/block submit)
// - Translates verdicts into DTOs for the JSON surface

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod host;
pub mod terminal;


pub use commands::{on_selection_changed, on_submit};
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use host::FormHost;
pub use terminal::{check_upload, inspect_path, TerminalHost};
