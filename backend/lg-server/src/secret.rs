//! JWT secret generation and `.env` maintenance

use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::Path;

use rand::{TryRngCore, rngs::OsRng};

pub const JWT_SECRET_ENV: &str = "LINGORA_AUTH_JWT_SECRET";
pub const JWT_EXPIRES_IN_ENV: &str = "LINGORA_AUTH_JWT_EXPIRES_IN";
pub const DEFAULT_EXPIRES_IN: &str = "7d";

const SECRET_BYTES: usize = 64;

/// 64 random bytes from the OS, hex encoded.
pub fn generate_secret() -> ServerErrorResult<String> {
    let mut bytes = [0u8; SECRET_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| ServerError::Secret {
            message: e.to_string(),
        })?;

    Ok(hex::encode(bytes))
}

/// Set each `KEY=value` in `contents`, replacing existing assignments in
/// place and appending the rest. Unrelated lines are kept verbatim.
pub fn upsert_env_entries(contents: &str, entries: &[(&str, &str)]) -> String {
    let mut written = vec![false; entries.len()];
    let mut lines: Vec<String> = Vec::new();

    for line in contents.lines() {
        let key = line.split_once('=').map(|(key, _)| key.trim());
        match entries
            .iter()
            .position(|(entry_key, _)| Some(*entry_key) == key)
        {
            Some(index) if written[index] => {}
            Some(index) => {
                let (entry_key, value) = entries[index];
                lines.push(format!("{}={}", entry_key, value));
                written[index] = true;
            }
            None => lines.push(line.to_string()),
        }
    }

    for (index, (key, value)) in entries.iter().enumerate() {
        if !written[index] {
            lines.push(format!("{}={}", key, value));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Write a fresh secret (and the default expiry) into the env file at `path`.
pub fn write_env_file(path: &Path, secret: &str) -> ServerErrorResult<()> {
    let existing = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(ServerError::EnvFile {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let updated = upsert_env_entries(
        &existing,
        &[
            (JWT_SECRET_ENV, secret),
            (JWT_EXPIRES_IN_ENV, DEFAULT_EXPIRES_IN),
        ],
    );

    std::fs::write(path, updated).map_err(|source| ServerError::EnvFile {
        path: path.display().to_string(),
        source,
    })
}
