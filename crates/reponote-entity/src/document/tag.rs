//! Content-category tag enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse content-type label derived from a file's extension and
/// submitted alongside a new document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClassificationTag {
    /// Portable Document Format.
    Pdf,
    /// Word processing documents.
    Doc,
    /// Presentations.
    Ppt,
    /// Spreadsheets.
    Xls,
    /// Plain or lightly formatted text.
    Txt,
    /// Raster and vector images.
    Img,
    /// Compressed archives.
    Archive,
    /// Source code.
    Code,
    /// A file of any other type.
    File,
    /// No file was attached.
    General,
}

impl ClassificationTag {
    /// Every tag, in classification priority order.
    pub const ALL: [ClassificationTag; 10] = [
        Self::Pdf,
        Self::Doc,
        Self::Ppt,
        Self::Xls,
        Self::Txt,
        Self::Img,
        Self::Archive,
        Self::Code,
        Self::File,
        Self::General,
    ];

    /// Return the wire representation of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Doc => "DOC",
            Self::Ppt => "PPT",
            Self::Xls => "XLS",
            Self::Txt => "TXT",
            Self::Img => "IMG",
            Self::Archive => "ARCHIVE",
            Self::Code => "CODE",
            Self::File => "FILE",
            Self::General => "GENERAL",
        }
    }
}

impl fmt::Display for ClassificationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassificationTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown classification tag: {s}"))
    }
}
