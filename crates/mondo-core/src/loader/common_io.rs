// crates/mondo-core/src/loader/common_io.rs
use crate::error::{MondoError, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps `.gz` files in a gzip decoder.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        MondoError::NotFound(format!("File not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(MondoError::InvalidData {
                path: path.to_path_buf(),
                reason: "gzip input requires the 'compact' feature".into(),
            });
        }
    }

    Ok(Box::new(reader))
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// File stem with the `.json` / `.json.gz` extension removed, or `None` for
/// files that are not JSON data files.
pub fn data_stem(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let stem = name
        .strip_suffix(".json.gz")
        .or_else(|| name.strip_suffix(".json"))?;
    (!stem.is_empty()).then(|| stem.to_string())
}

/// All data files of a directory, sorted by file name.
pub fn list_data_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        MondoError::NotFound(format!("Data directory not found: {}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(stem) = data_stem(&path) {
            files.push((stem, path));
        }
    }
    files.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(files)
}

pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_stream(path)?;
    Ok(serde_json::from_reader(reader)?)
}

/// Writes any serializable value as 2-space indented JSON, creating parent
/// directories as needed.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_strip_json_extensions() {
        assert_eq!(data_stem(Path::new("a/bali.json")).as_deref(), Some("bali"));
        assert_eq!(
            data_stem(Path::new("koh_samui.json.gz")).as_deref(),
            Some("koh_samui")
        );
        assert_eq!(data_stem(Path::new("notes.txt")), None);
        assert_eq!(data_stem(Path::new(".json")), None);
    }
}
