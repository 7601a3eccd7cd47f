use crate::core::config::data::{Config, ConfigKey};

impl Config {
    pub fn format_all(&self) -> Vec<String> {
        ConfigKey::ALL
            .iter()
            .map(|key| match self.display_value(*key) {
                Some(value) => format!("  {}: {value}", key.name()),
                None => format!("  {}: (unset)", key.name()),
            })
            .collect()
    }

    pub fn print_all(&self) {
        println!("Current configuration:");
        for line in self.format_all() {
            println!("{line}");
        }
    }
}
