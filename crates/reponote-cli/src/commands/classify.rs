//! Offline classification and preview lookup.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use reponote_core::config::ClientConfig;
use reponote_core::error::AppError;
use reponote_entity::ClassificationTag;
use reponote_service::{PreviewResolver, PreviewStrategy, TagClassifier};

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// File name to classify
    pub file_name: String,

    /// Stored URL of the file (defaults to `/files/<file_name>`)
    #[arg(short, long)]
    pub url: Option<String>,
}

/// Classification result for JSON output
#[derive(Debug, Serialize)]
struct Classification<'a> {
    file_name: &'a str,
    tag: ClassificationTag,
    preview: PreviewStrategy,
}

/// Execute the classify command
pub fn execute(
    args: &ClassifyArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let url = args
        .url
        .clone()
        .unwrap_or_else(|| format!("/files/{}", args.file_name));

    let result = Classification {
        file_name: &args.file_name,
        tag: TagClassifier::classify(Some(&args.file_name)),
        preview: PreviewResolver::new(&config.preview).resolve(&args.file_name, &url),
    };

    match format {
        OutputFormat::Json => output::print_json(&result),
        OutputFormat::Table => {
            output::print_kv("File", result.file_name);
            output::print_kv("Tag", result.tag.as_str());
            output::print_kv("Preview", result.preview.label());
            output::print_kv("Target", result.preview.target_url());
        }
    }
    Ok(())
}
