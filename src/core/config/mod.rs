pub mod data;
pub mod io;
pub mod printing;


pub use data::{Config, ConfigKey, ThemeMode};
pub use io::ConfigError;
