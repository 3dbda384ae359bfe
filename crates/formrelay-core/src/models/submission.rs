use std::fmt;
use std::path::Path;

use tempfile::TempPath;

/// One uploaded image backed by a uniquely named temporary file.
///
/// The backing file is removed by [`UploadedFile::discard`]. If the value is dropped
/// without being discarded the file is still removed on drop.
pub struct UploadedFile {
    original_name: String,
    path: TempPath,
    size_bytes: u64,
}

impl UploadedFile {
    pub fn new(original_name: impl Into<String>, path: TempPath, size_bytes: u64) -> Self {
        Self {
            original_name: original_name.into(),
            path,
            size_bytes,
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Delete the backing file.
    pub fn discard(self) -> std::io::Result<()> {
        self.path.close()
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("original_name", &self.original_name)
            .field("path", &self.path.display())
            .field("size_bytes", &self.size_bytes)
            .finish()
    }
}

/// Delete every file independently. Failures are logged and counted, never returned.
pub fn discard_all(files: Vec<UploadedFile>) -> usize {
    let mut failures = 0;
    for file in files {
        let path = file.path().to_path_buf();
        if let Err(e) = file.discard() {
            failures += 1;
            tracing::warn!(
                error = %e,
                path = %path.display(),
                "Failed to delete temporary upload"
            );
        }
    }
    failures
}

/// One accepted form post.
#[derive(Debug, Default)]
pub struct Submission {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub images: Vec<UploadedFile>,
}

impl Submission {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn image_names(&self) -> Vec<&str> {
        self.images.iter().map(|f| f.original_name()).collect()
    }

    /// Release all temporary storage held by this submission.
    ///
    /// Returns the number of files that could not be deleted.
    pub fn release(self) -> usize {
        let failures = discard_all(self.images);
        if failures > 0 {
            tracing::warn!(failures, "Some temporary uploads could not be deleted");
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_upload(dir: &Path, name: &str, bytes: &[u8]) -> UploadedFile {
        let mut file = tempfile::Builder::new()
            .prefix("upload-")
            .tempfile_in(dir)
            .expect("create temp file");
        file.write_all(bytes).expect("write temp file");
        UploadedFile::new(name, file.into_temp_path(), bytes.len() as u64)
    }

    #[test]
    fn release_removes_every_backing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let submission = Submission {
            name: Some("Ana".to_string()),
            comment: None,
            images: vec![
                temp_upload(dir.path(), "a.png", b"a"),
                temp_upload(dir.path(), "b.png", b"bb"),
            ],
        };
        assert_eq!(submission.image_count(), 2);
        assert_eq!(submission.image_names(), vec!["a.png", "b.png"]);

        let paths: Vec<_> = submission
            .images
            .iter()
            .map(|f| f.path().to_path_buf())
            .collect();
        assert!(paths.iter().all(|p| p.exists()));

        assert_eq!(submission.release(), 0);
        assert!(paths.iter().all(|p| !p.exists()));
    }

    #[test]
    fn one_failed_deletion_does_not_stop_the_others() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = temp_upload(dir.path(), "gone.png", b"x");
        let second = temp_upload(dir.path(), "kept.png", b"y");
        std::fs::remove_file(first.path()).expect("remove early");
        let second_path = second.path().to_path_buf();

        let failures = discard_all(vec![first, second]);
        assert_eq!(failures, 1);
        assert!(!second_path.exists());
    }

    #[test]
    fn dropped_upload_still_removes_its_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let upload = temp_upload(dir.path(), "c.png", b"c");
        let path = upload.path().to_path_buf();
        assert_eq!(upload.size_bytes(), 1);
        drop(upload);
        assert!(!path.exists());
    }
}
