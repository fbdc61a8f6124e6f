//! Small helpers shared by agent operations.

use std::io;
use std::path::PathBuf;

use uuid::Uuid;

/// Generate a random identifier of `len` uppercase hex characters.
///
/// Draws as many UUIDs as needed, so any length is honored.
pub fn short_id(len: usize) -> String {
    let mut id = String::with_capacity(len.next_multiple_of(32));
    while id.len() < len {
        id.push_str(&Uuid::new_v4().simple().to_string());
    }
    id.truncate(len);
    id.to_uppercase()
}

/// Create a fresh, uniquely named directory under the system temp dir.
///
/// The directory is not cleaned up automatically; callers own its
/// lifetime.
pub fn create_temp_dir() -> io::Result<PathBuf> {
    let path = std::env::temp_dir().join(short_id(5));
    std::fs::create_dir_all(&path)?;
    Ok(path)
}
