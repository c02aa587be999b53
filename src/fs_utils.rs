use std::{
    cmp::Ordering,
    fs, io,
    path::{Path, PathBuf},
    time::SystemTime,
};

/// The fixed root of the tree: the platform's users directory.
#[cfg(windows)]
pub const ROOT_PATH: &str = "C:\\Users";
#[cfg(target_os = "macos")]
pub const ROOT_PATH: &str = "/Users";
#[cfg(not(any(windows, target_os = "macos")))]
pub const ROOT_PATH: &str = "/home";

/// Represents a node in the file tree
#[derive(Clone, Debug)]
pub struct FileNode {
    /// The name of the file (excluding the path)
    pub file_name: String,
    /// The absolute path to this file, including the file name
    pub path: PathBuf,
    /// A flag to indicate if this node is a directory
    pub is_dir: bool,
    /// The size of the file in bytes (0 for directories)
    pub size: u64,
    /// The last modification time, when the platform reports one
    pub modified: Option<SystemTime>,
}

/// File Node methods
impl FileNode {
    /// Constructs a file node by reading the metadata of the given path
    ///
    /// # Arguments
    ///
    /// * `path` - The path to read
    pub fn from_path(path: &Path) -> io::Result<FileNode> {
        let metadata = fs::metadata(path)?;
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };

        Ok(FileNode {
            file_name,
            path: path.to_path_buf(),
            is_dir: metadata.is_dir(),
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified: metadata.modified().ok(),
        })
    }

    /// Returns a display-friendly name for the file node
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("📂 {}/", self.file_name)
        } else {
            format!("📄 {}", self.file_name)
        }
    }

    /// Returns the text for the "Type" column of the tree: directories are
    /// folders, files are labelled by their extension (if any).
    pub fn type_label(&self) -> String {
        if self.is_dir {
            return String::from("File Folder");
        }

        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{} File", ext.to_uppercase()),
            None => String::from("File"),
        }
    }
}

/// Returns the FileNodes for one level of the given directory, directories
/// first, each group sorted by name
///
/// # Arguments
///
/// * `path` - The directory to list
pub fn read_dir(path: &Path) -> io::Result<Vec<FileNode>> {
    let mut nodes: Vec<FileNode> = Vec::new();

    for entry_result in fs::read_dir(path)? {
        let entry = match entry_result {
            Ok(entry) => entry.path(),
            Err(e) => {
                log::warn!("read_dir: could not read entry in {}: {}", path.display(), e);
                continue;
            }
        };

        match FileNode::from_path(&entry) {
            Ok(node) => nodes.push(node),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                // Skip entries that cannot be accessed
                log::debug!("read_dir: permission denied for {}", entry.display());
            }
            Err(e) => {
                log::warn!("read_dir: could not read {}: {}", entry.display(), e);
            }
        }
    }

    // Sort directories first, then files, both alphabetically
    nodes.sort_by(|a, b| {
        if a.is_dir && !b.is_dir {
            Ordering::Less
        } else if !a.is_dir && b.is_dir {
            Ordering::Greater
        } else {
            a.file_name.to_lowercase().cmp(&b.file_name.to_lowercase())
        }
    });

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_dir_sorts_directories_first_then_by_name() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();
        fs::create_dir(temp.path().join("Alpha")).unwrap();

        let nodes = read_dir(temp.path()).unwrap();
        let names: Vec<&str> = nodes.iter().map(|n| n.file_name.as_str()).collect();

        assert_eq!(names, vec!["Alpha", "zeta", "a.txt", "b.txt"]);
    }

    #[test]
    fn from_path_reads_file_metadata() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("notes.txt");
        fs::write(&file_path, "hello").unwrap();

        let node = FileNode::from_path(&file_path).unwrap();

        assert_eq!(node.file_name, "notes.txt");
        assert_eq!(node.path, file_path);
        assert!(!node.is_dir);
        assert_eq!(node.size, 5);
        assert!(node.modified.is_some());
    }

    #[test]
    fn directories_report_no_size() {
        let temp = tempdir().unwrap();
        let dir_path = temp.path().join("sub");
        fs::create_dir(&dir_path).unwrap();

        let node = FileNode::from_path(&dir_path).unwrap();

        assert!(node.is_dir);
        assert_eq!(node.size, 0);
    }

    #[test]
    fn type_labels_for_folders_and_files() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("folder")).unwrap();
        fs::write(temp.path().join("photo.jpg"), "").unwrap();
        fs::write(temp.path().join("README"), "").unwrap();

        let folder = FileNode::from_path(&temp.path().join("folder")).unwrap();
        let photo = FileNode::from_path(&temp.path().join("photo.jpg")).unwrap();
        let readme = FileNode::from_path(&temp.path().join("README")).unwrap();

        assert_eq!(folder.type_label(), "File Folder");
        assert_eq!(photo.type_label(), "JPG File");
        assert_eq!(readme.type_label(), "File");
    }

    #[test]
    fn from_path_fails_for_missing_paths() {
        let temp = tempdir().unwrap();

        assert!(FileNode::from_path(&temp.path().join("gone")).is_err());
    }
}
