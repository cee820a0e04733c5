//! curator-review: interactive review of staged photos.

mod command;
mod helper;
mod render;
mod repl;

use anyhow::Result;
use colored::Colorize;
use curator_application::CuratorApp;
use curator_infrastructure::{CuratorPaths, logging};

use crate::command::ReviewCommand;
use crate::helper::ReviewHelper;
use crate::repl::{Flow, ReviewEditor, ReviewRepl};

#[tokio::main]
async fn main() -> Result<()> {
    let paths = CuratorPaths::from_env()?;
    // Keep the guard alive so buffered log lines are flushed on exit.
    let _log_guard = logging::init_file_logging(&paths.logs_dir(), "curator-review.log", "info")?;
    tracing::info!("[curator-review] Starting");

    let app = CuratorApp::bootstrap(paths)?;

    let mut rl: ReviewEditor = ReviewEditor::new()?;
    rl.set_helper(Some(ReviewHelper::new()));

    println!("{}", "=== Curator Review ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'help' for commands, 'submit' to send decisions, or 'quit' to exit.".bright_black()
    );
    println!();

    let mut repl = ReviewRepl::new(app);
    if !repl.start(&mut rl).await? {
        println!("{}", "Goodbye!".bright_green());
        return Ok(());
    }

    loop {
        match rl.readline("review> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match trimmed.parse::<ReviewCommand>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e.to_string().yellow());
                        continue;
                    }
                };

                if repl.execute(command, &mut rl).await? == Flow::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    tracing::info!("[curator-review] Exiting");
    Ok(())
}
