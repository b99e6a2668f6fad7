use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{PantreeError, PantreeResult};

/// Read a JSON file and deserialize it into `T`.
///
/// Failures carry the offending path: open errors become
/// [`PantreeError::Read`] and malformed content becomes
/// [`PantreeError::Parse`]. Callers that treat a missing file specially
/// can match on `Read` and inspect the source's [`std::io::ErrorKind`].
pub fn decode_from_file<T: DeserializeOwned>(path: &Path) -> PantreeResult<T> {
    let file = File::open(path).map_err(|source| PantreeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| PantreeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
