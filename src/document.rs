use std::fs;
use std::path::PathBuf;

/// The full contents of the target file, held in memory as one string.
/// No structure beyond "UTF-8 text" is recognized; the transform passes
/// treat it as an opaque character sequence.
#[derive(Debug)]
pub struct Document {
    pub content: String,
    pub filename: PathBuf,
}

impl Document {
    pub fn from_file(filename: PathBuf) -> Result<Self, std::io::Error> {
        let content = fs::read_to_string(&filename)?;
        Ok(Self { content, filename })
    }

    /// Overwrite the file this document was loaded from, truncating any
    /// previous content. Returns the number of bytes written.
    pub fn save(&self) -> Result<usize, std::io::Error> {
        let byte_count = self.content.len();
        fs::write(&self.filename, &self.content)?;
        Ok(byte_count)
    }

    pub fn display_name(&self) -> String {
        self.filename
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("[No Name]")
            .to_string()
    }
}
