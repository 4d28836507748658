//! Extension-based preview dispatch.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use reponote_core::config::preview::PreviewConfig;
use reponote_core::url;

/// Characters escaped when a URL is embedded as a query value.
/// Matches `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "ogg"];
const OFFICE_EXTENSIONS: [&str; 6] = ["doc", "docx", "ppt", "pptx", "xls", "xlsx"];

/// How a stored file should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreviewStrategy {
    /// Embed the PDF straight from its URL.
    EmbeddedPdf {
        /// The stored URL, untransformed.
        url: String,
    },
    /// Show the file as an inline image.
    InlineImage {
        /// The stored URL.
        url: String,
    },
    /// Play the file in an inline video player.
    InlineVideo {
        /// The stored URL.
        url: String,
    },
    /// Hand the file to the external office viewer.
    ExternalOfficeViewer {
        /// Viewer URL carrying the absolute file URL as a query value.
        viewer_url: String,
        /// Absolute URL of the file itself.
        file_url: String,
    },
    /// No preview; offer the file for download instead.
    Unsupported {
        /// Lower-cased extension, empty when the name has none.
        extension: String,
        /// The stored URL, for a manual download.
        download_url: String,
    },
}

impl PreviewStrategy {
    /// Stable upper-case name of the strategy.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmbeddedPdf { .. } => "EMBEDDED_PDF",
            Self::InlineImage { .. } => "INLINE_IMAGE",
            Self::InlineVideo { .. } => "INLINE_VIDEO",
            Self::ExternalOfficeViewer { .. } => "EXTERNAL_OFFICE_VIEWER",
            Self::Unsupported { .. } => "UNSUPPORTED",
        }
    }

    /// The URL a renderer should load.
    pub fn target_url(&self) -> &str {
        match self {
            Self::EmbeddedPdf { url } | Self::InlineImage { url } | Self::InlineVideo { url } => {
                url
            }
            Self::ExternalOfficeViewer { viewer_url, .. } => viewer_url,
            Self::Unsupported { download_url, .. } => download_url,
        }
    }

    /// Whether the strategy produces a renderable preview.
    pub fn is_renderable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }

    /// Fallback text shown instead of a preview.
    pub fn fallback_message(&self) -> Option<String> {
        match self {
            Self::Unsupported { extension, .. } => {
                Some(format!("Preview not available for .{extension} files."))
            }
            _ => None,
        }
    }
}

/// Selects a [`PreviewStrategy`] for a stored file.
#[derive(Debug, Clone)]
pub struct PreviewResolver {
    /// Origin prefixed to server-relative URLs.
    origin: String,
    /// External office viewer endpoint.
    office_viewer_url: String,
}

impl PreviewResolver {
    /// Creates a resolver from preview settings.
    pub fn new(config: &PreviewConfig) -> Self {
        Self {
            origin: config.origin.clone(),
            office_viewer_url: config.office_viewer_url.clone(),
        }
    }

    /// Text after the last `.`, lower-cased; empty when there is none.
    pub fn extension(file_name: &str) -> String {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }

    /// Pick the strategy for `file_name` stored at `url`.
    pub fn resolve(&self, file_name: &str, url: &str) -> PreviewStrategy {
        let ext = Self::extension(file_name);
        let url = url.to_string();

        match ext.as_str() {
            "pdf" => PreviewStrategy::EmbeddedPdf { url },
            e if IMAGE_EXTENSIONS.contains(&e) => PreviewStrategy::InlineImage { url },
            e if VIDEO_EXTENSIONS.contains(&e) => PreviewStrategy::InlineVideo { url },
            e if OFFICE_EXTENSIONS.contains(&e) => {
                let file_url = url::absolutize(&self.origin, &url);
                PreviewStrategy::ExternalOfficeViewer {
                    viewer_url: self.office_viewer_link(&file_url),
                    file_url,
                }
            }
            _ => PreviewStrategy::Unsupported {
                extension: ext,
                download_url: url,
            },
        }
    }

    /// The viewer cannot resolve relative paths, so `file_url` must be absolute.
    fn office_viewer_link(&self, file_url: &str) -> String {
        let separator = if self.office_viewer_url.contains('?') {
            '&'
        } else {
            '?'
        };
        format!(
            "{}{}url={}&embedded=true",
            self.office_viewer_url,
            separator,
            utf8_percent_encode(file_url, URI_COMPONENT)
        )
    }
}
