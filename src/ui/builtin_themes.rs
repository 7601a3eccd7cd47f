use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSpec {
    pub id: String,
    pub display_name: String,
    pub background: Option<String>,
    pub text: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub border: Option<String>,
    pub focus_border: Option<String>,
    pub output_text: Option<String>,
    pub pronunciation: Option<String>,
    pub helper_text: Option<String>,
    pub button: Option<String>,
    pub button_disabled: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub key_hint: Option<String>,
    pub selection: Option<String>,
    pub input_cursor_modifiers: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuiltinThemesConfig {
    themes: Vec<ThemeSpec>,
}

pub fn load_builtin_themes() -> Vec<ThemeSpec> {
    const CONFIG_CONTENT: &str = include_str!("../builtin_themes.toml");
    let config: BuiltinThemesConfig =
        toml::from_str(CONFIG_CONTENT).expect("Failed to parse builtin_themes.toml");
    config.themes
}

pub fn find_builtin_theme(id: &str) -> Option<ThemeSpec> {
    load_builtin_themes()
        .into_iter()
        .find(|t| t.id.eq_ignore_ascii_case(id))
}
