//! Login and logout commands.

use clap::Args;
use dialoguer::Password;

use crate::output;
use reponote_client::RepoNoteClient;
use reponote_core::error::AppError;
use reponote_core::traits::AuthApi;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username
    pub username: String,

    /// Password (prompted for when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the login command
pub async fn login(args: &LoginArgs, client: &RepoNoteClient) -> Result<(), AppError> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::internal(format!("Failed to read password: {}", e)))?,
    };

    client.auth.login(&args.username, &password).await?;

    output::print_success(&format!("Logged in as '{}'", args.username));
    Ok(())
}

/// Execute the logout command
pub async fn logout(client: &RepoNoteClient) -> Result<(), AppError> {
    if !client.session.is_authenticated().await {
        output::print_warning("No active session");
        return Ok(());
    }

    client.auth.logout().await?;
    output::print_success("Logged out");
    Ok(())
}
