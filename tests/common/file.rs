use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file: FileSpec) {
    if let Some(parent) = file.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }

    std::fs::write(&file.path, file.content).expect("Failed to write file");
}

pub fn delete_path(path: &Path) {
    if path.is_dir() {
        std::fs::remove_dir_all(path).expect("Failed to delete directory");
    } else {
        std::fs::remove_file(path).expect("Failed to delete file");
    }
}

/// Write `files_count` files with random names and content directly under `dir`
pub fn write_generated_files(dir: &Path, files_count: usize) -> Vec<FileSpec> {
    use fake::Fake;
    use fake::faker::lorem::en::{Word, Words};

    let mut files = Vec::with_capacity(files_count);
    for index in 0..files_count {
        let name = format!("{}-{}.txt", Word().fake::<String>(), index);
        let content = Words(3..8).fake::<Vec<String>>().join(" ");
        let file = FileSpec::new(dir.join(name), content);

        write_file(file.clone());
        files.push(file);
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}
