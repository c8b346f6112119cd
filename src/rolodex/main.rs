use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolodex::commands::{CmdMessage, CmdResult, MessageLevel};
use rolodex::config::RolodexConfig;
use rolodex::error::Result;
use rolodex::session::Session;
use std::io::{self, BufRead, Write};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.plain || !config.color {
        colored::control::set_override(false);
    }
    let prompt = cli.prompt.clone().unwrap_or(config.prompt);

    let mut session = Session::new();

    // One-shot mode for scripting: run a single line and exit.
    if let Some(line) = cli.command {
        print_result(&session.execute(&line));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF ends the session like an exit
            break;
        };
        let result = session.execute(&line?);
        print_result(&result);
        if result.terminate {
            break;
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<RolodexConfig> {
    if let Some(path) = &cli.config {
        return RolodexConfig::load_file(path);
    }
    match ProjectDirs::from("com", "rolodex", "rolodex") {
        Some(dirs) => RolodexConfig::load(dirs.config_dir()),
        None => Ok(RolodexConfig::default()),
    }
}

fn print_result(result: &CmdResult) {
    for line in &result.listed_records {
        println!("{}", line);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
