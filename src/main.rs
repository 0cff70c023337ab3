use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use conch::error::TerminalError;
use conch::flags::Flags;
use conch::highlight::Palette;
use conch::terminal::{Frontend, Terminal};

/// A plain stdin/stdout collaborator. It mirrors whatever the core renders
/// and keeps no state of its own beyond the color palette.
struct StdioFrontend {
    palette: Palette,
}

impl StdioFrontend {
    fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

impl Frontend for StdioFrontend {
    fn render_line(&mut self, text: &str) {
        // prompt lines end with "> "; style them, echo everything else as-is
        if text.ends_with("> ") {
            print!("{}", self.palette.prompt(text));
        } else {
            print!("{}", text);
        }
        self.flush();
    }

    fn render_block(&mut self, text: &str) {
        if text.trim_start().starts_with("Error") {
            print!("{}", self.palette.error(text));
        } else if text.contains('╔') {
            print!("{}", self.palette.banner(text));
        } else {
            print!("{}", text);
        }
        self.flush();
    }

    fn clear_screen(&mut self) {
        // ANSI clear plus cursor home
        print!("\x1b[2J\x1b[H");
        self.flush();
    }

    fn notify_command_processed(&mut self, _raw_command: &str, _current_dir: &Path) {
        // a GUI would refresh its directory indicator here; stdout shows the
        // directory in the prompt already
    }

    fn request_close(&mut self) {
        println!();
    }
}

fn main() -> Result<(), TerminalError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("conch {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let frontend = StdioFrontend::new();
    let mut terminal = match flags.get_value("dir") {
        Some(dir) => Terminal::with_start_dir(frontend, PathBuf::from(dir))?,
        None => Terminal::new(frontend)?,
    };

    ctrlc::set_handler(move || {
        println!("\nType 'exit' to close the terminal");
    })?;

    if flags.is_set("quiet") {
        // skip the banner, go straight to the prompt
        terminal.deliver_submitted_line("");
    } else {
        terminal.initialize();
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        terminal.deliver_submitted_line(&line);
        if terminal.is_closed() {
            break;
        }
    }

    Ok(())
}
