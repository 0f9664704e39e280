//! Shared JSON file plumbing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::IoError;

pub(crate) fn read<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<T, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| fs_error(path, e))?;
    let value = serde_json::from_reader(BufReader::new(file)).map_err(|e| IoError::Json {
        kind,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), kind, "parsed");
    Ok(value)
}

pub(crate) fn write<T: Serialize + ?Sized>(
    path: &Path,
    kind: &'static str,
    value: &T,
) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| fs_error(path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, value).map_err(|e| IoError::Json {
        kind,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    out.write_all(b"\n").map_err(|e| fs_error(path, e))?;
    out.flush().map_err(|e| fs_error(path, e))?;
    debug!(path = %path.display(), kind, "written");
    Ok(())
}

fn fs_error(path: &Path, e: std::io::Error) -> IoError {
    IoError::Fs {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
