//! List menu state: a title, its prompts and the selected row.

use super::prompts::PromptSource;

/// Borrowed menu data plus the current selection.
///
/// `count` must be at least 1; menus are compile-time data and an empty
/// one is a construction bug, caught by a debug assertion only.
#[derive(Debug)]
pub struct MenuModel<'a, P: ?Sized> {
    title: &'a str,
    prompts: &'a P,
    count: u8,
    selected: u8,
}

impl<'a, P: PromptSource + ?Sized> MenuModel<'a, P> {
    pub fn new(title: &'a str, prompts: &'a P, default_choice: u8) -> Self {
        let count = prompts.len().min(u8::MAX as usize) as u8;
        debug_assert!(count > 0, "menu '{}' has no prompts", title);
        Self {
            title,
            prompts,
            count,
            selected: default_choice.min(count.saturating_sub(1)),
        }
    }

    /// Select `index`, saturating at the last prompt.
    pub fn update(&mut self, index: u8) {
        self.selected = index.min(self.count.saturating_sub(1));
    }

    pub fn choice(&self) -> u8 {
        self.selected
    }

    pub fn max_choices(&self) -> u8 {
        self.count
    }

    pub fn title(&self) -> &'a str {
        self.title
    }

    pub fn prompts(&self) -> &'a P {
        self.prompts
    }

    pub fn prompt(&self, index: u8) -> &'a str {
        self.prompts.prompt(index as usize).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SYSTEMS: [&str; 4] = ["Game Boy", "NES", "SNES", "N64"];

    #[test]
    fn default_choice_is_clamped() {
        let model = MenuModel::new("Systems", &SYSTEMS[..], 9);
        assert_eq!(model.choice(), 3);
        assert_eq!(model.max_choices(), 4);
    }

    #[test]
    fn update_saturates_instead_of_wrapping() {
        let mut model = MenuModel::new("Systems", &SYSTEMS[..], 0);
        model.update(200);
        assert_eq!(model.choice(), 3);
        model.update(1);
        assert_eq!(model.choice(), 1);
    }

    #[test]
    fn accessors() {
        let model = MenuModel::new("Systems", &SYSTEMS[..], 2);
        assert_eq!(model.title(), "Systems");
        assert_eq!(model.prompt(2), "SNES");
        assert_eq!(model.prompt(7), "");
    }
}
