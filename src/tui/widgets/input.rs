//! Line editor widget
//!
//! Single-line text entry used for income, category names and amounts. The
//! cursor counts characters, so multibyte names edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Editable line of text with a prompt
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
    focused: bool,
    prompt: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt shown before the text
    pub fn label(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Replace the text and park the cursor after it
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.cursor = self.len();
        self
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, c: char) {
        let at = self.offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.offset(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at `index`, or the end of the text
    fn offset(&self, index: usize) -> usize {
        self.text
            .char_indices()
            .nth(index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut spans = Vec::with_capacity(4);
        if !self.prompt.is_empty() {
            spans.push(Span::styled(
                format!("{}: ", self.prompt),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        }

        let text_style = Style::default().fg(Color::White);
        if self.focused {
            // Split the text around the cursor so the cell under it can be highlighted
            let before: String = self.text.chars().take(self.cursor).collect();
            let under = self.text.chars().nth(self.cursor).unwrap_or(' ');
            let after: String = self.text.chars().skip(self.cursor + 1).collect();

            spans.push(Span::styled(before, text_style));
            spans.push(Span::styled(
                under.to_string(),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            spans.push(Span::styled(after, text_style));
        } else {
            spans.push(Span::styled(self.text, text_style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut input = TextInput::new();
        for c in "120".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "120");

        input.backspace();
        assert_eq!(input.value(), "12");

        input.move_start();
        input.insert('$');
        assert_eq!(input.value(), "$12");
        assert_eq!(input.cursor(), 1);

        input.delete();
        assert_eq!(input.value(), "$2");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().content("Café");
        assert_eq!(input.cursor(), 4);

        input.backspace();
        assert_eq!(input.value(), "Caf");

        input.insert('é');
        input.move_left();
        input.insert('f');
        assert_eq!(input.value(), "Caffé");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);

        input.move_start();
        input.move_left();
        input.backspace();
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.value(), "ab");

        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_render_shows_prompt_and_text() {
        let input = TextInput::new().label("Income").content("12").focused(true);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        input.render(area, &mut buf);

        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.starts_with("Income: 12"));
    }
}
