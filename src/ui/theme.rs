use crate::core::notice::Severity;
use crate::ui::builtin_themes::{find_builtin_theme, ThemeSpec};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Paper colour painted behind the whole form
    pub background_color: Color,
    pub text_style: Style,

    // Chrome
    pub title_style: Style,
    pub caption_style: Style,
    pub border_style: Style,
    pub focus_border_style: Style,
    pub key_hint_style: Style,
    pub selection_style: Style,

    // Results
    pub output_text_style: Style,
    pub pronunciation_style: Style,
    pub helper_text_style: Style,

    // Submit control
    pub button_style: Style,
    pub button_disabled_style: Style,

    // Notice banner
    pub warning_style: Style,
    pub error_style: Style,

    // Input area
    pub input_cursor_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        if let Some(spec) = find_builtin_theme("dark") {
            return Self::from_spec(&spec);
        }
        Theme {
            background_color: Color::Black,
            text_style: Style::default().fg(Color::White),
            title_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            caption_style: Style::default().fg(Color::Gray),
            border_style: Style::default().fg(Color::DarkGray),
            focus_border_style: Style::default().fg(Color::Magenta),
            key_hint_style: Style::default().fg(Color::DarkGray),
            selection_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::REVERSED),
            output_text_style: Style::default().fg(Color::White),
            pronunciation_style: Style::default().fg(Color::Cyan),
            helper_text_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            button_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            button_disabled_style: Style::default().fg(Color::DarkGray),
            warning_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error_style: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn light() -> Self {
        if let Some(spec) = find_builtin_theme("light") {
            return Self::from_spec(&spec);
        }
        Theme {
            background_color: Color::White,
            text_style: Style::default().fg(Color::Black),
            title_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            caption_style: Style::default().fg(Color::DarkGray),
            border_style: Style::default().fg(Color::Gray),
            focus_border_style: Style::default().fg(Color::Magenta),
            key_hint_style: Style::default().fg(Color::DarkGray),
            selection_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::REVERSED),
            output_text_style: Style::default().fg(Color::Black),
            pronunciation_style: Style::default().fg(Color::Blue),
            helper_text_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            button_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            button_disabled_style: Style::default().fg(Color::Gray),
            warning_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            error_style: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn for_paper(paper_light: bool) -> Self {
        if paper_light {
            Self::light()
        } else {
            Self::dark_default()
        }
    }

    pub fn notice_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Warning => self.warning_style,
            Severity::Error => self.error_style,
        }
    }

    pub fn from_spec(spec: &ThemeSpec) -> Self {
        let background_color = spec
            .background
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Black);

        let text_style = parse_style(&spec.text);
        Theme {
            background_color,
            text_style,
            title_style: parse_style(&spec.title),
            caption_style: parse_style(&spec.caption),
            border_style: parse_style(&spec.border),
            focus_border_style: parse_style(&spec.focus_border),
            key_hint_style: parse_style(&spec.key_hint),
            selection_style: parse_style(&spec.selection),
            output_text_style: parse_style(&spec.output_text),
            pronunciation_style: parse_style(&spec.pronunciation),
            helper_text_style: parse_style(&spec.helper_text),
            button_style: parse_style(&spec.button),
            button_disabled_style: parse_style(&spec.button_disabled),
            warning_style: parse_style(&spec.warning),
            error_style: parse_style(&spec.error),
            input_cursor_style: parse_modifiers(spec.input_cursor_modifiers.as_deref()),
        }
    }
}

pub fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if let Some(c) = parse_hex_color(&lower) {
        return Some(c);
    }
    if let Some(c) = parse_rgb_func(&lower) {
        return Some(c);
    }
    match lower.as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark-grey" | "darkgray" => Some(Color::DarkGray),
        "red" => Some(Color::Red),
        "light_red" | "light-red" => Some(Color::LightRed),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "yellow" => Some(Color::Yellow),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn parse_rgb_func(s: &str) -> Option<Color> {
    let content = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let parts: Vec<_> = content
        .split([',', ' '])
        .filter(|t| !t.is_empty())
        .collect();
    if parts.len() != 3 {
        return None;
    }
    let r = parts[0].parse::<u16>().ok()?;
    let g = parts[1].parse::<u16>().ok()?;
    let b = parts[2].parse::<u16>().ok()?;
    Some(Color::Rgb(
        r.min(255) as u8,
        g.min(255) as u8,
        b.min(255) as u8,
    ))
}

fn parse_modifier(token: &str) -> Option<Modifier> {
    match token.to_ascii_lowercase().as_str() {
        "bold" => Some(Modifier::BOLD),
        "reversed" => Some(Modifier::REVERSED),
        "italic" => Some(Modifier::ITALIC),
        "dim" => Some(Modifier::DIM),
        "underlined" => Some(Modifier::UNDERLINED),
        _ => None,
    }
}

fn parse_modifiers(spec: Option<&str>) -> Style {
    let mut style = Style::default();
    for tok in spec.unwrap_or_default().split(',').map(str::trim) {
        if let Some(modifier) = parse_modifier(tok) {
            style = style.add_modifier(modifier);
        }
    }
    style
}

fn parse_style(s: &Option<String>) -> Style {
    let mut style = Style::default();
    if let Some(ref spec) = s {
        for tok in spec.split(',').map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if let Some(color) = parse_color(tok) {
                style = style.fg(color);
            } else if let Some(modifier) = parse_modifier(tok) {
                style = style.add_modifier(modifier);
            }
        }
    }
    style
}
