//! The fixed command table: maps a parsed line to filesystem operations and
//! renders the outcome. Every command except `clear` finishes by reopening
//! the prompt and notifying the front-end.

use super::{messages, Frontend, Terminal};
use crate::fs::{self, RemovalOutcome};
use crate::parser::ParsedCommand;
use crate::path;
use crate::session::PendingAction;

pub(crate) fn execute<F: Frontend>(term: &mut Terminal<F>, cmd: ParsedCommand, raw: &str) {
    // clear/cls and exit are alias-matched case-insensitively; every other
    // command name is exact
    if cmd.name.eq_ignore_ascii_case("clear") || cmd.name.eq_ignore_ascii_case("cls") {
        term.clear_screen();
        return;
    }
    if cmd.name.eq_ignore_ascii_case("exit") {
        term.closed = true;
        term.frontend.request_close();
    } else {
        run_command(term, &cmd, raw);
    }

    term.insert_prompt();
    let current_dir = term.session.current_dir().to_path_buf();
    term.frontend.notify_command_processed(raw, &current_dir);
}

fn run_command<F: Frontend>(term: &mut Terminal<F>, cmd: &ParsedCommand, raw: &str) {
    match cmd.name.as_str() {
        "help" => term.print_block(messages::HELP),
        "mkdir" => mkdir(term, cmd),
        "rmdir" => rmdir(term, cmd),
        "ls" => {
            let result = fs::render_listing(term.session.current_dir());
            term.print_block(result.message());
        }
        "touch" => touch(term, cmd),
        "cd" => cd(term, cmd),
        "pwd" => {
            let dir = term.session.current_dir().display().to_string();
            term.print_block(&dir);
        }
        "rm" => rm(term, cmd),
        "write" => write(term, cmd),
        "read" => read(term, cmd),
        _ => term.print_block(&format!("Command not found: {}", raw)),
    }
}

fn mkdir<F: Frontend>(term: &mut Terminal<F>, cmd: &ParsedCommand) {
    match cmd.args.first() {
        Some(name) => {
            let result = fs::create_directory(term.session.current_dir(), name);
            term.print_block(result.message());
        }
        None => term.print_block(
            "Error: mkdir command requires a directory name\n\
             Usage: mkdir <directory_name>\n\
             Example: mkdir project",
        ),
    }
}

fn rmdir<F: Frontend>(term: &mut Terminal<F>, cmd: &ParsedCommand) {
    if cmd.args.is_empty() {
        term.print_block(messages::RMDIR_USAGE);
        return;
    }
    let Some(target) = cmd.last_positional() else {
        term.print_block(messages::RMDIR_USAGE);
        return;
    };
    let force = cmd.has_flag("-f", "--force");
    let recursive = cmd.has_flag("-r", "--recursive");

    match fs::remove_directory(term.session.current_dir(), target, force, recursive) {
        RemovalOutcome::Completed(result) => term.print_block(result.message()),
        RemovalOutcome::NeedsConfirmation {
            question,
            target,
            recursive,
        } => {
            term.print_block(&question);
            term.session.set_pending(PendingAction { target, recursive });
        }
    }
}

fn touch<F: Frontend>(term: &mut Terminal<F>, cmd: &ParsedCommand) {
    match cmd.args.first() {
        Some(name) => {
            let result = fs::create_file(term.session.current_dir(), name);
            term.print_block(result.message());
        }
        None => term.print_block(
            "Error: touch command requires a file name\n\
             Usage: touch <file_name>\n\
             Example: touch index.ts",
        ),
    }
}

fn cd<F: Frontend>(term: &mut Terminal<F>, cmd: &ParsedCommand) {
    let Some(token) = cmd.args.first() else {
        term.print_block(
            "Error: cd command requires a directory path\n\
             Usage: cd <directory_path>\n\
             Examples:\n  cd project\n  cd ..\n  cd ../..",
        );
        return;
    };
    let target = path::resolve(term.session.current_dir(), token);
    if path::is_directory(&target) {
        term.print_block(&format!("Changed directory to: {}", target.display()));
        term.session.set_current_dir(target);
    } else {
        term.print_block(&format!("Directory not found: {}", target.display()));
    }
}

fn rm<F: Frontend>(term: &mut Terminal<F>, cmd: &ParsedCommand) {
    match cmd.args.first() {
        Some(name) => {
            let result = fs::delete_file(term.session.current_dir(), name);
            term.print_block(result.message());
        }
        None => term.print_block(
            "Error: rm command requires a file name\n\
             Usage: rm <file_name>\n\
             Example: rm test.txt",
        ),
    }
}

fn write<F: Frontend>(term: &mut Terminal<F>, cmd: &ParsedCommand) {
    if cmd.args.len() < 2 {
        term.print_block(
            "Error: write command requires a file name and content\n\
             Usage: write <file_name> <content>\n\
             Example: write test.txt \"Hello, World!\"",
        );
        return;
    }
    // everything after the file name is the content, rejoined on spaces
    let content = cmd.args[1..].join(" ");
    let result = fs::write_file(term.session.current_dir(), &cmd.args[0], &content);
    term.print_block(result.message());
}

fn read<F: Frontend>(term: &mut Terminal<F>, cmd: &ParsedCommand) {
    match cmd.args.first() {
        Some(name) => {
            let result = fs::read_file(term.session.current_dir(), name);
            term.print_block(result.message());
        }
        None => term.print_block(
            "Error: read command requires a file name\n\
             Usage: read <file_name>\n\
             Example: read test.txt",
        ),
    }
}
