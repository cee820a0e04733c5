use super::prompt::read_password;
use anyhow::Result;
use curator_application::{CuratorApp, LogoutOutcome};

pub async fn login(app: &CuratorApp, email: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_password("Password: ")?,
    };

    let user = app.auth().login(email, &password).await?;
    println!("Signed in as {} <{}>", user.name, user.email);
    Ok(())
}

pub async fn logout(app: &CuratorApp) -> Result<()> {
    app.auth().hydrate().await?;

    match app.sign_out().await? {
        LogoutOutcome::Invalidated => println!("Signed out."),
        LogoutOutcome::LocalOnly { reason } => {
            println!("Signed out locally (server logout failed: {}).", reason)
        }
        LogoutOutcome::NotSignedIn => println!("Not signed in. Cleared stored session."),
    }
    Ok(())
}

pub async fn whoami(app: &CuratorApp, remote: bool) -> Result<()> {
    app.auth().hydrate().await?;

    let user = if remote {
        app.auth().refresh_user().await?
    } else {
        app.auth().require_authenticated()?
    };

    println!("{} <{}> (id {})", user.name, user.email, user.id);
    Ok(())
}
