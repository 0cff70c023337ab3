/// The transcript buffer plus the editing discipline around the live prompt.
///
/// Everything before `edit_boundary` is committed output and immune to
/// mutation; the slice from `edit_boundary` to the end is the live command
/// line. Cursor and boundary are byte offsets, always on char boundaries.
#[derive(Debug, Default)]
pub struct PromptBuffer {
    text: String,
    cursor: usize,
    edit_boundary: usize,
    prompt_len: usize,
}

impl PromptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The live command line, i.e. everything typed after the prompt.
    pub fn line(&self) -> &str {
        &self.text[self.edit_boundary..]
    }

    pub fn edit_boundary(&self) -> usize {
        self.edit_boundary
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position relative to the start of the live line.
    pub fn cursor_in_line(&self) -> usize {
        self.cursor.saturating_sub(self.edit_boundary)
    }

    /// Length of the prompt prefix recorded when the prompt was opened. The
    /// prefix is measured once here rather than recomputed from the current
    /// directory string, which may serialize differently later.
    pub fn prompt_len(&self) -> usize {
        self.prompt_len
    }

    /// Append committed output. The cursor follows to the end.
    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
        self.cursor = self.text.len();
    }

    /// Open a fresh prompt: a newline separator (unless the buffer is empty)
    /// followed by `prompt`. Returns exactly what was appended so the caller
    /// can mirror it. This is the only place the boundary moves backward in
    /// meaning: it is re-anchored to the new end of the transcript.
    pub fn open_prompt(&mut self, prompt: &str) -> String {
        let mut appended = String::new();
        if !self.text.is_empty() {
            appended.push('\n');
        }
        appended.push_str(prompt);
        self.text.push_str(&appended);
        self.prompt_len = prompt.len();
        self.edit_boundary = self.text.len();
        self.cursor = self.text.len();
        appended
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.edit_boundary = 0;
        self.prompt_len = 0;
    }

    /// Insert at the cursor. Rejected (returns false) before the boundary.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.cursor < self.edit_boundary {
            return false;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Delete the char before the cursor, never crossing the boundary.
    pub fn backspace(&mut self) -> bool {
        if self.cursor <= self.edit_boundary {
            return false;
        }
        let prev = prev_char_start(&self.text, self.cursor);
        self.text.remove(prev);
        self.cursor = prev;
        true
    }

    /// Delete the char under the cursor; only valid inside the live line.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor < self.edit_boundary || self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    /// Replace the live line wholesale (history recall), keeping the prompt.
    pub fn replace_line(&mut self, new_line: &str) {
        self.text.truncate(self.edit_boundary);
        self.text.push_str(new_line);
        self.cursor = self.text.len();
    }

    pub fn move_left(&mut self) {
        if self.cursor > self.edit_boundary {
            self.cursor = prev_char_start(&self.text, self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += char_len_at(&self.text, self.cursor);
        }
    }

    /// Home lands exactly on the boundary, not at the start of the buffer.
    pub fn move_home(&mut self) {
        self.cursor = self.edit_boundary;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

fn prev_char_start(text: &str, from: usize) -> usize {
    let mut idx = from - 1;
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn char_len_at(text: &str, at: usize) -> usize {
    text[at..].chars().next().map(char::len_utf8).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with_prompt() -> PromptBuffer {
        let mut buf = PromptBuffer::new();
        buf.append("welcome");
        buf.open_prompt("$ /home> ");
        buf
    }

    #[test]
    fn test_open_prompt_sets_boundary_and_prompt_len() {
        let mut buf = PromptBuffer::new();
        let appended = buf.open_prompt("$ /home> ");
        assert_eq!(appended, "$ /home> ");
        assert_eq!(buf.edit_boundary(), buf.text().len());
        assert_eq!(buf.prompt_len(), "$ /home> ".len());

        // second prompt gets a separating newline
        let appended = buf.open_prompt("$ /home> ");
        assert!(appended.starts_with('\n'));
    }

    #[test]
    fn test_typing_stays_after_boundary() {
        let mut buf = buffer_with_prompt();
        assert!(buf.insert_char('l'));
        assert!(buf.insert_char('s'));
        assert_eq!(buf.line(), "ls");
    }

    #[test]
    fn test_backspace_stops_at_boundary() {
        let mut buf = buffer_with_prompt();
        buf.insert_char('x');
        assert!(buf.backspace());
        assert_eq!(buf.line(), "");
        // the prompt itself is untouchable
        assert!(!buf.backspace());
        assert!(buf.text().ends_with("$ /home> "));
    }

    #[test]
    fn test_left_never_crosses_boundary() {
        let mut buf = buffer_with_prompt();
        buf.insert_char('a');
        buf.move_left();
        assert_eq!(buf.cursor(), buf.edit_boundary());
        buf.move_left();
        assert_eq!(buf.cursor(), buf.edit_boundary());
    }

    #[test]
    fn test_no_mutation_before_boundary() {
        let mut buf = buffer_with_prompt();
        let committed = buf.text().to_string();

        // park the cursor inside committed output
        buf.cursor = 0;
        assert!(!buf.insert_char('z'));
        assert!(!buf.backspace());
        assert!(!buf.delete_forward());
        assert_eq!(buf.text(), committed);
    }

    #[test]
    fn test_home_moves_to_boundary() {
        let mut buf = buffer_with_prompt();
        buf.insert_char('p');
        buf.insert_char('w');
        buf.insert_char('d');
        buf.move_home();
        assert_eq!(buf.cursor(), buf.edit_boundary());
        assert_eq!(buf.cursor_in_line(), 0);
    }

    #[test]
    fn test_replace_line_keeps_prompt() {
        let mut buf = buffer_with_prompt();
        buf.insert_char('x');
        buf.replace_line("pwd");
        assert_eq!(buf.line(), "pwd");
        assert!(buf.text().contains("$ /home> pwd"));
        buf.replace_line("");
        assert_eq!(buf.line(), "");
    }

    #[test]
    fn test_delete_forward_inside_line() {
        let mut buf = buffer_with_prompt();
        buf.insert_char('a');
        buf.insert_char('b');
        buf.move_home();
        assert!(buf.delete_forward());
        assert_eq!(buf.line(), "b");
        buf.move_end();
        assert!(!buf.delete_forward());
    }

    #[test]
    fn test_multibyte_chars_edit_cleanly() {
        let mut buf = buffer_with_prompt();
        buf.insert_char('é');
        buf.insert_char('x');
        buf.move_left();
        buf.move_left();
        buf.move_right();
        assert!(buf.delete_forward());
        assert_eq!(buf.line(), "é");
        buf.move_end();
        assert!(buf.backspace());
        assert_eq!(buf.line(), "");
    }
}
