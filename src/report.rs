//! Report document sizes.
//!
//! Prints raw, gzip and brotli sizes for the source and built documents.
//! Files that do not exist are silently skipped, so the report can run before
//! the first build or on a source that was since removed.

use std::io::Write;
use std::path::PathBuf;

use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error;

use crate::config::Config;

/// List of errors for this module.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error reading a file.
    #[error("while reading {path:?}")]
    Read {
        /// Source error.
        source: std::io::Error,
        /// File path.
        path: PathBuf,
    },
    /// Error compressing a file.
    #[error("while compressing {path:?}")]
    Compress {
        /// Source error.
        source: std::io::Error,
        /// File path.
        path: PathBuf,
    },
}

/// Print a size report for the source and built documents.
pub fn report(config: &Config) -> Result<(), ReportError> {
    for path in [&config.input_path, &config.output_path] {
        if !path.exists() {
            continue;
        }

        let data = std::fs::read(path).map_err(|source| ReportError::Read {
            source,
            path: path.clone(),
        })?;

        let gzip = gzip_size(&data).map_err(|source| ReportError::Compress {
            source,
            path: path.clone(),
        })?;

        let brotli = brotli_size(&data).map_err(|source| ReportError::Compress {
            source,
            path: path.clone(),
        })?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        println!();
        println!("{name}");
        println!("  raw:    {}", format_size(data.len()));
        println!("  gzip:   {}", format_size(gzip));
        println!("  brotli: {}", format_size(brotli));
    }

    Ok(())
}

/// Size of the gzip encoding at maximum compression level.
fn gzip_size(data: &[u8]) -> std::io::Result<usize> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;

    Ok(encoder.finish()?.len())
}

/// Size of the brotli encoding at maximum quality.
fn brotli_size(data: &[u8]) -> std::io::Result<usize> {
    let mut output = Vec::new();

    {
        let mut encoder = brotli::CompressorWriter::new(&mut output, 4096, 11, 22);
        encoder.write_all(data)?;
    }

    Ok(output.len())
}

/// Format a byte count with its kilobyte equivalent.
fn format_size(bytes: usize) -> String {
    format!("{} B ({:.2} KB)", bytes, bytes as f64 / 1024.0)
}
