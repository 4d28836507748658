//! Version download command.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::output;
use reponote_client::RepoNoteClient;
use reponote_core::error::AppError;
use reponote_core::traits::DocumentApi;

/// Arguments for the download command
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Document ID
    pub id: i64,

    /// Version number (defaults to the current version)
    #[arg(short, long)]
    pub version: Option<i32>,

    /// Output path (defaults to the stored file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to save into when no output path is given
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Execute the download command
pub async fn execute(args: &DownloadArgs, client: &RepoNoteClient) -> Result<(), AppError> {
    let versions = client
        .documents
        .list_versions(args.id)
        .await
        .map_err(|e| e.context("Failed to load versions"))?;

    let version = match args.version {
        Some(number) => versions.iter().find(|v| v.version_number == number),
        None => versions.first(),
    }
    .ok_or_else(|| match args.version {
        Some(number) => {
            AppError::not_found(format!("Document {} has no version {}", args.id, number))
        }
        None => AppError::not_found(format!("Document {} has no versions", args.id)),
    })?;

    let target = match &args.output {
        Some(path) => path.clone(),
        None => {
            let name = local_file_name(&version.file_name)?;
            match &args.dir {
                Some(dir) => dir.join(name),
                None => PathBuf::from(name),
            }
        }
    };

    let content = client.documents.download(&version.download_url).await?;
    tokio::fs::write(&target, &content)
        .await
        .map_err(|e| AppError::storage(format!("Failed to write {}: {}", target.display(), e)))?;

    info!(
        document_id = args.id,
        version_number = version.version_number,
        "Version downloaded"
    );
    output::print_success(&format!(
        "Saved version {} of document {} to {} ({} bytes)",
        version.version_number,
        args.id,
        target.display(),
        content.len()
    ));
    Ok(())
}

/// The final component of a server-supplied file name.
///
/// Directory parts are dropped so a download never lands outside the
/// chosen directory.
pub fn local_file_name(file_name: &str) -> Result<&std::ffi::OsStr, AppError> {
    Path::new(file_name)
        .file_name()
        .ok_or_else(|| AppError::validation(format!("Unusable file name '{}'", file_name)))
}
