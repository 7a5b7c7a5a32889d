use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::FeatureCollection;

/// Write a feature collection as compact GeoJSON.
///
/// Parent directories are created as needed. Returns the size of the
/// written file in bytes.
pub fn write_geojson(path: &Path, collection: &FeatureCollection) -> Result<u64> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create GeoJSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, collection)
        .with_context(|| format!("Failed to serialize GeoJSON: {}", path.display()))?;
    writer.flush()?;

    let size = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat GeoJSON file: {}", path.display()))?
        .len();

    Ok(size)
}
