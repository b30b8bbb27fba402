use serde::de::DeserializeOwned;
use std::fs;

use crate::error::Result;

/// Reads a JSON file and deserializes it into `T`.
///
/// I/O failures and malformed JSON convert into the crate error type:
/// `Error::IoError` if the file cannot be read, `Error::DeserializationError`
/// if the contents are not valid JSON for `T`.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    let parsed = serde_json::from_str(&data)?;
    Ok(parsed)
}
