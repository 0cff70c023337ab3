pub const WELCOME: &str = "\
╔════════════════════════════════════════════════════════════════════╗
║                    Welcome to the conch terminal                   ║
║                                                                    ║
║   Type 'help' to see available commands and their descriptions     ║
║   Press Ctrl+L to clear the screen                                 ║
║   Type 'exit' to close the terminal                                ║
╚════════════════════════════════════════════════════════════════════╝";

pub const HELP: &str = "\
Available Commands:
------------------
clear or cls : Clear the terminal screen
cd <dir> : Change directory (use .. to go back)
ls : List files and directories in current directory
pwd : Show current directory path
mkdir <name> : Create a new directory
rmdir <name> : Remove an empty directory
rmdir -r <name> : Remove directory and its contents
rmdir -f <name> : Force remove without confirmation
touch <name> : Create a new file
rm <name> : Delete a file or directory
write <file> <content> : Write content to a file
read <file> : Display the content of a file
help : Show this help message
exit : Close the terminal

Shortcuts:
---------
Ctrl+L : Clear screen
Up/Down Arrow : Navigate through command history";

pub const RMDIR_USAGE: &str = "\
rmdir - Remove directory command

Usage: rmdir [options] <directory_name>

Options:
  -r, --recursive  : Remove directory and its contents recursively
  -f, --force      : Force removal without confirmation

Examples:
  rmdir empty_dir          : Remove an empty directory
  rmdir -r project_dir     : Remove directory and all its contents
  rmdir -f old_dir         : Force remove without confirmation
  rmdir -r -f temp_dir     : Force remove recursively without confirmation";
