use std::path::{Path, PathBuf};

use crate::error::TerminalError;
use crate::fs;
use crate::parser;
use crate::path;
use crate::session::Session;

mod dispatch;
mod messages;

pub use messages::{HELP, RMDIR_USAGE, WELCOME};

/// Raw keystrokes as delivered by the embedding front-end. Printable input
/// arrives as `Char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
}

/// The rendering collaborator. It mirrors the core's transcript and holds no
/// authoritative state of its own; the live input line is mirrored by
/// querying [`Terminal::current_line`] after each delivered keystroke.
pub trait Frontend {
    /// Append `text` to the transcript verbatim (prompt lines, echoes).
    fn render_line(&mut self, text: &str);
    /// Append `text` as its own output block, separated from what precedes.
    fn render_block(&mut self, text: &str);
    /// Drop everything rendered so far; the core re-renders what survives.
    fn clear_screen(&mut self);
    /// A command finished; `current_dir` lets the front-end refresh any
    /// directory indicator it shows.
    fn notify_command_processed(&mut self, raw_command: &str, current_dir: &Path);
    /// The user asked to leave; the front-end owns actually closing.
    fn request_close(&mut self);
}

/// What a keystroke means, independent of which key carried it. Dispatch is
/// a single match over `(awaiting-confirmation, category)` so every state
/// transition is spelled out in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyCategory {
    Insert(char),
    EraseBack,
    EraseForward,
    Navigate(Key),
    HistoryPrevious,
    HistoryNext,
    Submit,
    ClearScreen,
}

fn categorize(key: Key, modifiers: Modifiers) -> KeyCategory {
    match key {
        Key::Char(c) if modifiers.ctrl && c.eq_ignore_ascii_case(&'l') => {
            KeyCategory::ClearScreen
        }
        Key::Char(c) => KeyCategory::Insert(c),
        Key::Enter => KeyCategory::Submit,
        Key::Backspace => KeyCategory::EraseBack,
        Key::Delete => KeyCategory::EraseForward,
        Key::Up => KeyCategory::HistoryPrevious,
        Key::Down => KeyCategory::HistoryNext,
        Key::Left | Key::Right | Key::Home | Key::End => KeyCategory::Navigate(key),
    }
}

/// The interpreter core. Owns the [`Session`] and drives command execution;
/// the front-end delivers keystrokes in and receives rendered text out.
pub struct Terminal<F: Frontend> {
    pub(crate) session: Session,
    pub(crate) frontend: F,
    pub(crate) closed: bool,
}

impl<F: Frontend> Terminal<F> {
    /// Start a session in the user's home directory.
    pub fn new(frontend: F) -> Result<Self, TerminalError> {
        let home = dirs::home_dir().ok_or(TerminalError::HomeDirNotFound)?;
        Ok(Terminal {
            session: Session::new(path::normalize(&home)),
            frontend,
            closed: false,
        })
    }

    /// Start a session in an explicit directory (`-d/--dir`).
    pub fn with_start_dir(frontend: F, start_dir: PathBuf) -> Result<Self, TerminalError> {
        let start_dir = path::normalize(&start_dir);
        if !path::is_directory(&start_dir) {
            return Err(TerminalError::StartDirNotFound(
                start_dir.display().to_string(),
            ));
        }
        Ok(Terminal {
            session: Session::new(start_dir),
            frontend,
            closed: false,
        })
    }

    /// One-shot startup signal, called by the collaborator once its own
    /// setup is done: welcome banner plus the first prompt.
    pub fn initialize(&mut self) {
        self.print_block(messages::WELCOME);
        self.insert_prompt();
    }

    pub fn current_dir(&self) -> &Path {
        self.session.current_dir()
    }

    /// The live command line being edited under the current prompt.
    pub fn current_line(&self) -> &str {
        self.session.buffer().line()
    }

    /// Cursor offset within the live line, for front-ends mirroring edits.
    pub fn cursor_in_line(&self) -> usize {
        self.session.buffer().cursor_in_line()
    }

    pub fn transcript(&self) -> &str {
        self.session.buffer().text()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.session.is_awaiting_confirmation()
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// Feed one keystroke through the state machine.
    pub fn deliver_keystroke(&mut self, key: Key, modifiers: Modifiers) {
        let category = categorize(key, modifiers);
        match (self.session.is_awaiting_confirmation(), category) {
            // A pending confirmation accepts only y/n and cursor movement;
            // everything else is dropped on the floor, not queued.
            (true, KeyCategory::Insert(c)) if c.eq_ignore_ascii_case(&'y') => {
                self.resolve_confirmation(true)
            }
            (true, KeyCategory::Insert(c)) if c.eq_ignore_ascii_case(&'n') => {
                self.resolve_confirmation(false)
            }
            (true, KeyCategory::Navigate(key)) => self.navigate(key),
            (true, _) => {}

            (false, KeyCategory::Insert(c)) => {
                self.session.buffer_mut().insert_char(c);
            }
            (false, KeyCategory::EraseBack) => {
                self.session.buffer_mut().backspace();
            }
            (false, KeyCategory::EraseForward) => {
                self.session.buffer_mut().delete_forward();
            }
            (false, KeyCategory::Navigate(key)) => self.navigate(key),
            (false, KeyCategory::HistoryPrevious) => {
                if let Some(entry) = self.session.recall_previous() {
                    self.session.buffer_mut().replace_line(&entry);
                }
            }
            (false, KeyCategory::HistoryNext) => {
                let entry = self.session.recall_next();
                self.session.buffer_mut().replace_line(&entry);
            }
            (false, KeyCategory::Submit) => self.submit_line(),
            (false, KeyCategory::ClearScreen) => self.clear_screen(),
        }
    }

    /// Convenience for front-ends that collect whole lines: types the text,
    /// then presses Enter. Runs through the same gating as raw keystrokes,
    /// so a pending confirmation sees the first char as its answer.
    pub fn deliver_submitted_line(&mut self, text: &str) {
        for c in text.chars() {
            self.deliver_keystroke(Key::Char(c), Modifiers::default());
        }
        self.deliver_keystroke(Key::Enter, Modifiers::default());
    }

    fn navigate(&mut self, key: Key) {
        let buffer = self.session.buffer_mut();
        match key {
            Key::Left => buffer.move_left(),
            Key::Right => buffer.move_right(),
            Key::Home => buffer.move_home(),
            Key::End => buffer.move_end(),
            _ => {}
        }
    }

    fn submit_line(&mut self) {
        let raw = self.session.buffer().line().trim().to_string();
        if raw.is_empty() {
            self.insert_prompt();
            return;
        }
        self.session.push_history(raw.clone());
        let parsed = parser::parse(&raw);
        dispatch::execute(self, parsed, &raw);
    }

    fn resolve_confirmation(&mut self, confirmed: bool) {
        // echo the answer the way typed input would appear
        self.print_inline(if confirmed { "y" } else { "n" });
        let pending = self.session.take_pending();
        if confirmed {
            if let Some(action) = pending {
                let result = fs::execute_removal(&action.target, action.recursive);
                self.print_block(result.message());
            }
        } else {
            self.print_block("Operation cancelled");
        }
        self.insert_prompt();
    }

    pub(crate) fn clear_screen(&mut self) {
        self.session.buffer_mut().clear();
        self.frontend.clear_screen();
        self.print_block(messages::WELCOME);
        self.insert_prompt();
    }

    pub(crate) fn insert_prompt(&mut self) {
        let appended = self.session.open_prompt();
        self.frontend.render_line(&appended);
    }

    pub(crate) fn print_block(&mut self, text: &str) {
        let rendered = if self.session.buffer().text().is_empty() {
            text.to_string()
        } else {
            format!("\n{}", text)
        };
        self.session.buffer_mut().append(&rendered);
        self.frontend.render_block(&rendered);
    }

    pub(crate) fn print_inline(&mut self, text: &str) {
        self.session.buffer_mut().append(text);
        self.frontend.render_line(text);
    }
}
