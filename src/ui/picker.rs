use crate::api::LanguageOption;

#[derive(Debug, Clone)]
pub struct PickerItem {
    pub id: String,
    pub label: String,
}

impl From<&LanguageOption> for PickerItem {
    fn from(language: &LanguageOption) -> Self {
        Self {
            id: language.code.clone(),
            label: language.name.clone(),
        }
    }
}

/// Which selector a language picker writes back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Source,
    Target,
}

impl PickerTarget {
    pub fn caption(self) -> &'static str {
        match self {
            PickerTarget::Source => "From",
            PickerTarget::Target => "To",
        }
    }
}

/// Filterable popup list over the loaded languages.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub target: PickerTarget,
    pub title: String,
    pub items: Vec<PickerItem>,
    pub selected: usize,
    pub search_filter: String,
    all_items: Vec<PickerItem>,
}

impl PickerState {
    pub fn new(target: PickerTarget, languages: &[LanguageOption], current: &str) -> Self {
        let all_items: Vec<PickerItem> = languages.iter().map(PickerItem::from).collect();
        let selected = all_items
            .iter()
            .position(|item| item.id == current)
            .unwrap_or(0);
        let mut state = Self {
            target,
            title: String::new(),
            items: all_items.clone(),
            selected,
            search_filter: String::new(),
            all_items,
        };
        state.update_title();
        state
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.items.get(self.selected).map(|i| i.id.as_str())
    }

    pub fn move_up(&mut self) {
        if !self.items.is_empty() {
            if self.selected == 0 {
                self.selected = self.items.len() - 1;
            } else {
                self.selected -= 1;
            }
        }
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn move_to_start(&mut self) {
        self.selected = 0;
    }

    pub fn move_to_end(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn type_char(&mut self, ch: char) {
        self.search_filter.push(ch);
        self.apply_filter();
    }

    pub fn backspace(&mut self) {
        if self.search_filter.pop().is_some() {
            self.apply_filter();
        }
    }

    fn apply_filter(&mut self) {
        let search_term = self.search_filter.to_lowercase();
        self.items = if search_term.is_empty() {
            self.all_items.clone()
        } else {
            self.all_items
                .iter()
                .filter(|item| {
                    item.id.to_lowercase().contains(&search_term)
                        || item.label.to_lowercase().contains(&search_term)
                })
                .cloned()
                .collect()
        };
        if self.selected >= self.items.len() {
            self.selected = 0;
        }
        self.update_title();
    }

    fn update_title(&mut self) {
        let base_title = self.target.caption();
        self.title = if self.search_filter.is_empty() {
            format!("{base_title} ({} available - type to filter)", self.all_items.len())
        } else {
            format!(
                "{base_title} (filter: '{}' - {} matches)",
                self.search_filter,
                self.items.len()
            )
        };
    }
}
