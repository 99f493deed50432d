use crate::model::ModEntry;
use crate::Result as CrateResult;
use chrono::{DateTime, Local};
use std::{
    ffi::OsStr,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const ARCHIVE_EXTENSIONS: [&str; 3] = ["zip", "rar", "7z"];

pub const CHUNK_SIZE: usize = 8192;

pub fn is_hidden(file_name: &str) -> bool {
    file_name.starts_with('.')
}

pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| {
            ARCHIVE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// File name without its last extension.
pub fn mod_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

/// Lowercase hex MD5 of the whole file, read `chunk_size` bytes at a time.
pub fn file_checksum(path: &Path, chunk_size: usize) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = md5::Context::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.consume(&buffer[..bytes_read]);
    }
    Ok(format!("{:x}", hasher.compute()))
}

/// Direct children of `mods_dir`, in enumeration order unless `sort` is set.
pub fn list_mod_dir(mods_dir: &Path, sort: bool) -> CrateResult<Vec<PathBuf>> {
    debug!("Reading mod directory {}", mods_dir.display());
    let mut entries: Vec<PathBuf> = mods_dir
        .read_dir()?
        .map(|entry| -> CrateResult<PathBuf> {
            let entry = entry?;
            Ok(entry.path())
        })
        .collect::<Result<_, _>>()?;
    if sort {
        debug!("Sorting {} entries by file name", entries.len());
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(entries)
}

pub fn build_entry(path: &Path, file_name: &str, base_url: &str) -> CrateResult<ModEntry> {
    let metadata = std::fs::metadata(path)?;
    let modified: DateTime<Local> = metadata.modified()?.into();
    debug!("Generating checksum for {}", path.display());
    let checksum = file_checksum(path, CHUNK_SIZE)?;
    Ok(ModEntry {
        name: mod_name(file_name),
        file_name: file_name.to_string(),
        version: crate::util::date_version(&modified),
        size: metadata.len(),
        checksum,
        download_url: format!("{}{}", base_url, file_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_archive_extensions() {
        assert!(is_archive(Path::new("CoolMod.zip")));
        assert!(is_archive(Path::new("CoolMod.RAR")));
        assert!(is_archive(Path::new("CoolMod.7Z")));
        assert!(is_archive(Path::new("pack.tar.zip")));
        assert!(!is_archive(Path::new("readme.txt")));
        assert!(!is_archive(Path::new("CoolMod.pak")));
        assert!(!is_archive(Path::new("zip")));
        assert!(!is_archive(Path::new("CoolMod.zip.bak")));
    }

    #[test]
    fn test_hidden_files() {
        assert!(is_hidden(".DS_Store"));
        assert!(is_hidden(".secret.zip"));
        assert!(!is_hidden("CoolMod.zip"));
    }

    #[test]
    fn test_mod_name_strips_last_extension() {
        assert_eq!(mod_name("CoolMod.zip"), "CoolMod");
        assert_eq!(mod_name("pack.tar.7z"), "pack.tar");
        assert_eq!(mod_name("Some Mod v1.2.rar"), "Some Mod v1.2");
    }

    #[test]
    fn test_checksum_known_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CoolMod.zip");
        fs::write(&path, b"0123456789").unwrap();
        assert_eq!(
            file_checksum(&path, CHUNK_SIZE).unwrap(),
            "781e5e245d69b566979b86e28d23f2c7"
        );
    }

    #[test]
    fn test_checksum_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.zip");
        fs::write(&path, b"").unwrap();
        assert_eq!(
            file_checksum(&path, CHUNK_SIZE).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_checksum_independent_of_chunk_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.7z");
        let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &data).unwrap();

        let expected = format!("{:x}", md5::compute(&data));
        for chunk_size in [1, 3, 64, 4096, CHUNK_SIZE, 1 << 20] {
            assert_eq!(file_checksum(&path, chunk_size).unwrap(), expected);
        }
    }

    #[test]
    fn test_checksum_changes_with_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.zip");
        fs::write(&path, b"0123456789").unwrap();
        let before = file_checksum(&path, CHUNK_SIZE).unwrap();
        fs::write(&path, b"0123456780").unwrap();
        let after = file_checksum(&path, CHUNK_SIZE).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_checksum_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(file_checksum(&dir.path().join("gone.zip"), CHUNK_SIZE).is_err());
    }

    #[test]
    fn test_list_mod_dir_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.zip", "a.zip", "b.rar"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let names: Vec<_> = list_mod_dir(dir.path(), true)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.zip", "b.rar", "c.zip"]);
    }

    #[test]
    fn test_build_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CoolMod.zip");
        fs::write(&path, b"0123456789").unwrap();
        let modified: DateTime<Local> = fs::metadata(&path).unwrap().modified().unwrap().into();

        let entry = build_entry(&path, "CoolMod.zip", "https://x.io/mods/").unwrap();
        assert_eq!(entry.name, "CoolMod");
        assert_eq!(entry.file_name, "CoolMod.zip");
        assert_eq!(entry.size, 10);
        assert_eq!(entry.checksum, "781e5e245d69b566979b86e28d23f2c7");
        assert_eq!(entry.download_url, "https://x.io/mods/CoolMod.zip");
        assert_eq!(entry.version, crate::util::date_version(&modified));
    }
}
