use std::path::PathBuf;

use serde::Serialize;

pub const DEFAULT_MODPACK_NAME: &str = "BG3 Gayming Modpack";

/// Everything a single manifest run needs.
#[derive(Debug, Clone)]
pub struct ManifestConfig {
    pub mods_dir: PathBuf,
    pub base_url: String,
    pub output: PathBuf,
    pub name: String,
    /// Order entries by file name instead of directory order
    pub sort: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModEntry {
    pub name: String,
    pub file_name: String,
    pub version: String,
    pub size: u64,
    #[serde(rename = "md5")]
    pub checksum: String,
    pub download_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub last_updated: String,
    pub mod_count: usize,
    pub mods: Vec<ModEntry>,
}

impl Manifest {
    pub fn new(name: String, version: String, last_updated: String, mods: Vec<ModEntry>) -> Self {
        Manifest {
            name,
            version,
            last_updated,
            mod_count: mods.len(),
            mods,
        }
    }
}
