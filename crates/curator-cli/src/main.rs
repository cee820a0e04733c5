use anyhow::Result;
use clap::{Parser, Subcommand};
use curator_application::CuratorApp;
use curator_infrastructure::{CuratorPaths, logging};

mod commands;

#[derive(Parser)]
#[command(name = "curator")]
#[command(about = "Curator - review and batch-approve staged photos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Invalidate the session and clear local credentials
    Logout,
    /// Show the signed-in reviewer
    Whoami {
        /// Ask the server instead of the stored identity
        #[arg(long)]
        remote: bool,
    },
    /// Inspect the staging queue
    Staging {
        #[command(subcommand)]
        action: StagingAction,
    },
}

#[derive(Subcommand)]
enum StagingAction {
    /// List the current staging page
    List {
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_stderr_logging("warn");
    let app = CuratorApp::bootstrap(CuratorPaths::from_env()?)?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&app, &email, password).await?,
        Commands::Logout => commands::auth::logout(&app).await?,
        Commands::Whoami { remote } => commands::auth::whoami(&app, remote).await?,
        Commands::Staging { action } => match action {
            StagingAction::List { json } => commands::staging::list(&app, json).await?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        let cli = Cli::try_parse_from(["curator", "login", "--email", "a@b.c"]).unwrap();
        match cli.command {
            Commands::Login { email, password } => {
                assert_eq!(email, "a@b.c");
                assert_eq!(password, None);
            }
            _ => panic!("expected login"),
        }
    }

    #[test]
    fn test_parse_staging_list_and_whoami() {
        let cli = Cli::try_parse_from(["curator", "staging", "list", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Staging {
                action: StagingAction::List { json: true }
            }
        ));

        let cli = Cli::try_parse_from(["curator", "whoami", "--remote"]).unwrap();
        assert!(matches!(cli.command, Commands::Whoami { remote: true }));
    }

    #[test]
    fn test_login_requires_email() {
        assert!(Cli::try_parse_from(["curator", "login"]).is_err());
    }
}
