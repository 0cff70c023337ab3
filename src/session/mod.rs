use std::path::{Path, PathBuf};

mod buffer;

pub use buffer::PromptBuffer;

pub const PROMPT_SYMBOL: &str = "$ ";

/// The removal a pending confirmation would perform, held as plain data and
/// replayed through `fs::execute_removal` once 'y' arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub target: PathBuf,
    pub recursive: bool,
}

/// Whether the session is idle or gating input behind a y/n answer. At most
/// one confirmation is ever outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    Awaiting(PendingAction),
}

/// All authoritative interpreter state: working directory, history and its
/// cursor, the transcript buffer, and the confirmation sub-state. The
/// rendering layer mirrors this; it never owns any of it.
#[derive(Debug)]
pub struct Session {
    current_dir: PathBuf,
    history: Vec<String>,
    /// Index into `history`; `== history.len()` means a blank new command.
    history_cursor: usize,
    buffer: PromptBuffer,
    confirm: ConfirmState,
}

impl Session {
    pub fn new(start_dir: PathBuf) -> Self {
        Session {
            current_dir: start_dir,
            history: Vec::new(),
            history_cursor: 0,
            buffer: PromptBuffer::new(),
            confirm: ConfirmState::Idle,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    pub fn buffer(&self) -> &PromptBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PromptBuffer {
        &mut self.buffer
    }

    /// Render and open a new prompt line; returns the text that was appended
    /// to the transcript.
    pub fn open_prompt(&mut self) -> String {
        let prompt = format!("{}{}> ", PROMPT_SYMBOL, self.current_dir.display());
        self.buffer.open_prompt(&prompt)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn push_history(&mut self, command: String) {
        self.history.push(command);
        self.history_cursor = self.history.len();
    }

    /// Up arrow: step back through history, staying on the oldest entry.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.history_cursor == 0 {
            return None;
        }
        self.history_cursor -= 1;
        self.history.get(self.history_cursor).cloned()
    }

    /// Down arrow: step forward, or fall off the end into a blank line.
    pub fn recall_next(&mut self) -> String {
        if self.history_cursor + 1 < self.history.len() {
            self.history_cursor += 1;
            self.history[self.history_cursor].clone()
        } else {
            self.history_cursor = self.history.len();
            String::new()
        }
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        matches!(self.confirm, ConfirmState::Awaiting(_))
    }

    pub fn set_pending(&mut self, action: PendingAction) {
        self.confirm = ConfirmState::Awaiting(action);
    }

    /// Resolve the confirmation sub-state, returning to `Idle`.
    pub fn take_pending(&mut self) -> Option<PendingAction> {
        match std::mem::take(&mut self.confirm) {
            ConfirmState::Idle => None,
            ConfirmState::Awaiting(action) => Some(action),
        }
    }
}
