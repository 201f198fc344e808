use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem storage adapter. Reads resolve against the process working
/// directory so any user-named input path works; writes land under the
/// output root, creating directories as needed.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_root: String,
}

impl LocalStorage {
    pub fn new(output_root: String) -> Self {
        Self { output_root }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.output_root).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
