//! Translaterm is a terminal-first client for a remote translation backend.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the form state, notices, configuration, and the
//!   request service that talks to the backend off the UI task.
//! - [`ui`] renders the form and runs the interactive event loop that turns
//!   key presses into actions.
//! - [`api`] defines the wire payloads and the HTTP backend client.
//! - [`utils`] holds URL helpers, the translation history log, and tracing
//!   setup.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which either runs a one-shot command or
//! starts [`ui::form_loop`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
