//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileFormat {
    Json,
    Text,
    Markdown,
    Unknown,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => FileFormat::Json,
            "txt" => FileFormat::Text,
            "md" | "markdown" => FileFormat::Markdown,
            _ => FileFormat::Unknown,
        }
    }
}
