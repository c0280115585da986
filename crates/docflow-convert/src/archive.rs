//! ZIP packaging of result directories.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ConvertError;

/// Bundle every file under `dir` into a deflate-compressed ZIP archive.
///
/// Entry names are relative to `dir`; subdirectories are walked. Entries
/// are added in sorted order so the archive layout is deterministic.
///
/// # Errors
///
/// Returns an error when the directory cannot be read or the archive
/// cannot be written.
pub fn zip_directory(dir: &Path) -> Result<Vec<u8>, ConvertError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_directory(&mut writer, dir, dir, options)?;

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn add_directory(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    base: &Path,
    dir: &Path,
    options: SimpleFileOptions,
) -> Result<(), ConvertError> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            add_directory(writer, base, &path, options)?;
        } else {
            let name = path
                .strip_prefix(base)
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/");
            writer.start_file(name, options)?;
            writer.write_all(&std::fs::read(&path)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use pretty_assertions::assert_eq;
    use zip::ZipArchive;

    use super::*;

    #[test]
    fn test_zip_directory_relative_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "alpha").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("b.docx"), "beta").unwrap();

        let bytes = zip_directory(dir.path()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.md".to_owned(), "sub/b.docx".to_owned()]);

        let mut content = String::new();
        archive
            .by_name("a.md")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "alpha");
    }

    #[test]
    fn test_zip_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = zip_directory(dir.path()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
