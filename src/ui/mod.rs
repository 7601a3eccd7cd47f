//! Terminal UI for the translator form.
//!
//! - [`form_loop`]: the event loop that turns key presses into
//!   [`crate::core::app::AppAction`]s and runs backend requests in the background.
//! - [`renderer`]: draws the form from the current [`crate::core::app::App`].
//! - [`theme`] and [`builtin_themes`]: the dark and light paper palettes.
//! - [`picker`]: the filterable language list.

pub mod builtin_themes;
pub mod form_loop;
pub mod picker;
pub mod renderer;
pub mod theme;
