//! TUI screens

mod form;

pub use form::{Field, FormScreen, FormView};
