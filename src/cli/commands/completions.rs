//! The `completions` command: generate shell completion scripts.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::cli::commands::{Command, CommandResult};
use crate::error::Result;
use crate::ui::UserInterface;

pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        generate(
            self.args.shell,
            &mut cmd,
            "garmin-mcp-bridge",
            &mut io::stdout(),
        );
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    #[test]
    fn bash_completions_mention_the_binary() {
        let mut buf = Vec::new();
        let mut cmd = Cli::command();
        generate(Shell::Bash, &mut cmd, "garmin-mcp-bridge", &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("garmin-mcp-bridge"));
    }

    #[test]
    fn command_reports_success() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Zsh });
        let mut ui = crate::ui::MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
    }
}
