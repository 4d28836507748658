//! File-name based content classification.

use reponote_entity::ClassificationTag;

/// Extension groups in priority order. The first group whose suffix
/// matches wins, so `.docx` is settled before the generic fallbacks.
const RULES: &[(&[&str], ClassificationTag)] = &[
    (&["pdf"], ClassificationTag::Pdf),
    (&["doc", "docx"], ClassificationTag::Doc),
    (&["ppt", "pptx"], ClassificationTag::Ppt),
    (&["xls", "xlsx"], ClassificationTag::Xls),
    (&["txt", "md", "rtf"], ClassificationTag::Txt),
    (
        &["jpg", "jpeg", "png", "gif", "webp", "svg"],
        ClassificationTag::Img,
    ),
    (&["zip", "rar", "7z", "tar", "gz"], ClassificationTag::Archive),
    (
        &[
            "js", "ts", "jsx", "tsx", "py", "html", "css", "json", "java", "cpp", "c", "cs", "go",
            "rs", "php",
        ],
        ClassificationTag::Code,
    ),
];

/// Maps an uploaded file name to a [`ClassificationTag`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TagClassifier;

impl TagClassifier {
    /// Classify a selected file, or `None` when no file was selected.
    ///
    /// Matching is a case-insensitive suffix check against the rule table.
    /// Names matching no group are [`ClassificationTag::File`].
    pub fn classify(file_name: Option<&str>) -> ClassificationTag {
        let Some(name) = file_name else {
            return ClassificationTag::General;
        };

        let name = name.to_lowercase();
        RULES
            .iter()
            .find(|(extensions, _)| {
                extensions.iter().any(|ext| {
                    name.strip_suffix(ext)
                        .is_some_and(|stem| stem.ends_with('.'))
                })
            })
            .map(|(_, tag)| *tag)
            .unwrap_or(ClassificationTag::File)
    }
}
