//! Document listing, upload, and detail commands.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use reponote_client::RepoNoteClient;
use reponote_core::config::ClientConfig;
use reponote_core::error::AppError;
use reponote_entity::{Comment, Document, Version};
use reponote_service::{
    DetailAggregator, DocumentCatalog, DocumentDetail, PreviewResolver, PreviewStrategy,
    UploadFile, UploadRequest, UploadService,
};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Maximum number of documents to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Path to the file to upload
    pub file: Option<PathBuf>,

    /// Document title
    #[arg(short, long)]
    pub title: String,

    /// Document description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Override file name
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Document ID
    pub id: i64,
}

/// Document display row for table output
#[derive(Debug, Serialize, Tabled)]
struct DocumentRow {
    /// Document ID
    id: i64,
    /// Title
    title: String,
    /// Description
    description: String,
    /// Created at
    created: String,
}

impl From<&Document> for DocumentRow {
    fn from(d: &Document) -> Self {
        Self {
            id: d.id,
            title: output::truncate(&d.title, 40),
            description: output::truncate(d.summary(), 60),
            created: output::date(&d.created_at),
        }
    }
}

/// Version display row for table output
#[derive(Debug, Serialize, Tabled)]
struct VersionRow {
    /// Version number
    version: i32,
    /// File name
    file_name: String,
    /// Uploaded at
    uploaded: String,
    /// Download URL
    url: String,
}

impl From<&Version> for VersionRow {
    fn from(v: &Version) -> Self {
        Self {
            version: v.version_number,
            file_name: v.file_name.clone(),
            uploaded: output::datetime(&v.created_at),
            url: v.download_url.clone(),
        }
    }
}

/// Comment display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CommentRow {
    /// Author
    author: String,
    /// Posted at
    posted: String,
    /// Content
    content: String,
}

impl From<&Comment> for CommentRow {
    fn from(c: &Comment) -> Self {
        Self {
            author: c.username.clone(),
            posted: output::date(&c.created_at),
            content: output::truncate(&c.content, 80),
        }
    }
}

/// Detail view for JSON output
#[derive(Debug, Serialize)]
struct DetailView<'a> {
    #[serde(flatten)]
    detail: &'a DocumentDetail,
    preview: Option<PreviewStrategy>,
}

/// Execute the list command
pub async fn list(
    args: &ListArgs,
    client: &RepoNoteClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let documents = DocumentCatalog::new(super::document_api(client))
        .recent(args.limit)
        .await?;

    let rows: Vec<DocumentRow> = documents.iter().map(DocumentRow::from).collect();
    output::print_list(&rows, format, "No documents uploaded yet.");
    Ok(())
}

/// Execute the upload command
pub async fn upload(
    args: &UploadArgs,
    client: &RepoNoteClient,
    format: OutputFormat,
) -> Result<(), AppError> {
    let file = match &args.file {
        Some(path) => Some(UploadFile::from_path(path, args.name.clone()).await?),
        None => None,
    };

    let outcome = UploadService::new(super::document_api(client))
        .upload(UploadRequest {
            title: args.title.clone(),
            description: args.description.clone(),
            file,
        })
        .await?;

    match format {
        OutputFormat::Json => output::print_json(&outcome),
        OutputFormat::Table => {
            output::print_success(&format!(
                "Document '{}' created (id: {}, tag: {})",
                outcome.document.title, outcome.document.id, outcome.tag
            ));
            if let Some(version) = &outcome.version {
                output::print_kv("Version", &version.version_number.to_string());
                output::print_kv("File", &version.file_name);
            }
        }
    }
    Ok(())
}

/// Execute the show command
pub async fn show(
    args: &ShowArgs,
    client: &RepoNoteClient,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let detail = DetailAggregator::new(super::document_api(client))
        .load(args.id)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                AppError::not_found(format!("Document {} not found", args.id))
            } else {
                e
            }
        })?;

    let preview = detail.preview(&PreviewResolver::new(&config.preview));

    if format == OutputFormat::Json {
        output::print_json(&DetailView {
            detail: &detail,
            preview,
        });
        return Ok(());
    }

    let doc = &detail.document;
    println!("{}", doc.title);
    if !doc.description.is_empty() {
        println!("{}", doc.description);
    }
    output::print_kv("Created", &output::date(&doc.created_at));
    if let Some(tags) = &doc.tags {
        output::print_kv("Tag", tags);
    }

    if let Some(preview) = &preview {
        output::print_heading("Content Preview");
        output::print_kv("Strategy", preview.label());
        match preview.fallback_message() {
            Some(message) => {
                output::print_warning(&message);
                output::print_kv("Download", preview.target_url());
            }
            None => output::print_kv("Open", preview.target_url()),
        }
    }

    output::print_heading("Version History");
    let versions: Vec<VersionRow> = detail.versions.iter().map(VersionRow::from).collect();
    output::print_list(&versions, format, "No versions uploaded.");

    output::print_heading("Discussion");
    let comments: Vec<CommentRow> = detail.comments.iter().map(CommentRow::from).collect();
    output::print_list(&comments, format, "No comments yet.");

    Ok(())
}
