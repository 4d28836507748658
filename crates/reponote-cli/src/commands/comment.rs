//! Comment posting command.

use clap::Args;

use crate::output::{self, OutputFormat};
use reponote_client::RepoNoteClient;
use reponote_core::error::AppError;
use reponote_service::CommentThread;

/// Arguments for the comment command
#[derive(Debug, Args)]
pub struct CommentArgs {
    /// Document ID
    pub id: i64,

    /// Comment text
    pub content: String,
}

/// Execute the comment command
pub async fn execute(
    args: &CommentArgs,
    client: &RepoNoteClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut thread = CommentThread::new(args.id, Vec::new());
    let posted = thread
        .submit(client.documents.as_ref(), &args.content)
        .await?
        .clone();

    match format {
        OutputFormat::Json => output::print_json(&posted),
        OutputFormat::Table => output::print_success(&format!(
            "Comment #{} posted on document {}",
            posted.id, args.id
        )),
    }
    Ok(())
}
