//! The session facade: one directory plus the dispatch/translate loop.
//!
//! `Session` is the single entry point a UI needs. It owns the
//! [`Directory`] (no ambient global state, so independent sessions can
//! coexist in tests), resolves each raw line, runs the handler, and maps
//! any domain failure to its fixed user-facing message. No error ever
//! escapes `execute`.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::dispatch::{self, Command};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct Session {
    directory: Directory,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Run one command line and return what to print.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        let parsed = dispatch::parse(line);
        self.run_command(parsed.command, &parsed.args)
            .unwrap_or_else(|err| CmdResult::with_message(CmdMessage::error(err.user_message())))
    }

    fn run_command(&mut self, command: Command, args: &[String]) -> Result<CmdResult> {
        match command {
            Command::Add => commands::add::run(&mut self.directory, args),
            Command::AppendPhone => commands::append::run(&mut self.directory, args),
            Command::Change => commands::change::run(&mut self.directory, args),
            Command::Delete => commands::delete::run(&mut self.directory, args),
            Command::Find => commands::find::run(&self.directory, args),
            Command::Seek => commands::seek::run(&self.directory, args),
            Command::Phone => commands::phone::run(&self.directory, args),
            Command::RemovePhone => commands::remove::run(&mut self.directory, args),
            Command::ShowAll => Ok(commands::show::run(&self.directory)),
            Command::Hello => Ok(commands::misc::hello()),
            Command::Help => Ok(commands::misc::help()),
            Command::Exit => Ok(commands::misc::exit()),
            Command::Unknown => Ok(commands::misc::unknown()),
        }
    }
}
