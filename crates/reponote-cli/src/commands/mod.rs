//! CLI command definitions and dispatch.

pub mod auth;
pub mod classify;
pub mod comment;
pub mod document;
pub mod download;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use reponote_client::RepoNoteClient;
use reponote_core::config::ClientConfig;
use reponote_core::error::AppError;
use reponote_core::traits::DocumentApi;

/// RepoNote: share documents, preview revisions and discuss them
#[derive(Debug, Parser)]
#[command(name = "reponote", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (overrides `REPONOTE_CONFIG`)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login(auth::LoginArgs),
    /// Forget the stored session token
    Logout,
    /// List recent documents
    List(document::ListArgs),
    /// Create a document and upload its first version
    Upload(document::UploadArgs),
    /// Show a document with its preview, versions and comments
    Show(document::ShowArgs),
    /// Post a comment on a document
    Comment(comment::CommentArgs),
    /// Download a version of a document
    Download(download::DownloadArgs),
    /// Show the tag and preview strategy for a file name (offline)
    Classify(classify::ClassifyArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &ClientConfig) -> Result<(), AppError> {
        if let Commands::Classify(args) = &self.command {
            return classify::execute(args, config, self.format);
        }

        let client = RepoNoteClient::from_config(config).await?;

        match &self.command {
            Commands::Login(args) => auth::login(args, &client).await,
            Commands::Logout => auth::logout(&client).await,
            Commands::List(args) => document::list(args, &client, self.format).await,
            Commands::Upload(args) => document::upload(args, &client, self.format).await,
            Commands::Show(args) => document::show(args, &client, config, self.format).await,
            Commands::Comment(args) => comment::execute(args, &client, self.format).await,
            Commands::Download(args) => download::execute(args, &client).await,
            Commands::Classify(_) => Ok(()),
        }
    }
}

/// Helper: the document API as a trait object for the services
pub(crate) fn document_api(client: &RepoNoteClient) -> Arc<dyn DocumentApi> {
    client.documents.clone()
}
