//! # Search Bar Model
//!
//! Text typed into the search input before it is submitted.

#[derive(Debug, Clone, Default)]
pub struct SearchBarModel {
    input: String,
}

impl SearchBarModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Remove the last character; returns false when the input was already empty
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Trimmed input ready for submission, `None` when only whitespace was typed
    pub fn submission(&self) -> Option<String> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace_should_edit_input() {
        let mut bar = SearchBarModel::new();
        for ch in "batmann".chars() {
            bar.insert_char(ch);
        }
        assert!(bar.backspace());
        assert_eq!(bar.input(), "batman");
    }

    #[test]
    fn backspace_on_empty_should_report_nothing_removed() {
        let mut bar = SearchBarModel::new();
        assert!(!bar.backspace());
    }

    #[test]
    fn submission_should_trim_whitespace() {
        let mut bar = SearchBarModel::new();
        bar.set_input("  dark knight  ");
        assert_eq!(bar.submission().as_deref(), Some("dark knight"));
    }

    #[test]
    fn blank_input_should_not_submit() {
        let mut bar = SearchBarModel::new();
        bar.set_input("   ");
        assert_eq!(bar.submission(), None);
    }

    #[test]
    fn unicode_input_should_backspace_whole_chars() {
        let mut bar = SearchBarModel::new();
        bar.set_input("アキラ");
        bar.backspace();
        assert_eq!(bar.input(), "アキ");
    }
}
