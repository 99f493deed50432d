use crate::model::{Manifest, ManifestConfig};
use crate::util::{check_base_url, date_version, normalize_base_url, timestamp, Clock};
use crate::{commands::util::*, Result as CrateResult};
use colored::*;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, info};

fn write_manifest(output: &Path, manifest: &Manifest) -> CrateResult<()> {
    debug!("Writing manifest to {}", output.display());
    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer_pretty(&mut writer, manifest)?;
    writer.flush()?;
    Ok(())
}

/// Scans `config.mods_dir` and writes the manifest to `config.output`.
///
/// Returns `Ok(false)` without touching the output when the mods directory is
/// missing or holds no archives. I/O failures while reading archives or
/// writing the manifest are returned as errors.
pub fn generate(config: &ManifestConfig, clock: &impl Clock) -> CrateResult<bool> {
    if !config.mods_dir.is_dir() {
        eprintln!(
            "{} Mods directory '{}' does not exist.",
            "Error:".red().bold(),
            config.mods_dir.display()
        );
        return Ok(false);
    }

    let base_url = normalize_base_url(&config.base_url);
    check_base_url(&base_url);

    println!("Scanning directory: {}", config.mods_dir.display().to_string().bold());
    let entries = list_mod_dir(&config.mods_dir, config.sort)?;

    let mut mods = Vec::new();
    for path in entries {
        if path.is_dir() {
            continue;
        }
        let file_name = match path.file_name() {
            Some(file_name) => file_name.to_string_lossy().into_owned(),
            None => continue,
        };
        if is_hidden(&file_name) {
            debug!("Ignoring hidden file {}", file_name);
            continue;
        }
        if !is_archive(&path) {
            println!("Skipping non-archive file: {}", file_name.yellow());
            continue;
        }

        let entry = build_entry(&path, &file_name, &base_url)?;
        println!("Added mod: {}", entry.name.bold().blue());
        mods.push(entry);
    }

    if mods.is_empty() {
        eprintln!("{}", "No mod files found in the specified directory.".red());
        return Ok(false);
    }

    let now = clock.now();
    let manifest = Manifest::new(config.name.clone(), date_version(&now), timestamp(&now), mods);
    write_manifest(&config.output, &manifest)?;
    info!("Wrote {} entries", manifest.mod_count);

    println!(
        "Manifest generated successfully with {} mods.",
        manifest.mod_count.to_string().green().bold()
    );
    println!("Saved to: {}", config.output.display());
    Ok(true)
}
