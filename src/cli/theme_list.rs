use crate::core::config::data::Config;
use crate::ui::builtin_themes::load_builtin_themes;

pub fn format_themes(config: &Config) -> Vec<String> {
    let current = config.theme_mode();
    let mut lines = vec!["Available themes:".to_string(), String::new()];
    lines.push("Built-in:".to_string());
    for t in load_builtin_themes() {
        let mark = if t.id.eq_ignore_ascii_case(current.id()) {
            "*"
        } else {
            " "
        };
        lines.push(format!("  {} {} - {}", mark, t.id, t.display_name));
    }

    let current_display = match config.theme.as_deref() {
        Some(_) => current.id().to_string(),
        None => format!("(default: {})", current.id()),
    };
    lines.push(String::new());
    lines.push(format!("Current: {current_display}"));
    lines
}

pub fn list_themes() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    for line in format_themes(&config) {
        println!("{line}");
    }
    Ok(())
}
