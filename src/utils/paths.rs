use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size for a search response document: 10MB
pub(crate) const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rejects files larger than 10MB
///
/// Takes the already-open handle so the size check and the read see the same file.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Reads a stream that has no size metadata (stdin), rejecting more than 10MB
pub fn read_to_string_limited<R: Read>(reader: R, source: &str) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_FILE_SIZE_BYTES + 1)
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read {}", source))?;

    if bytes.len() as u64 > MAX_FILE_SIZE_BYTES {
        bail!("Input too large: {} (more than {} bytes)", source, MAX_FILE_SIZE_BYTES);
    }

    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", source))
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use logseq_sidekick::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.config/logseq-sidekick/config.json");
/// // Returns "~/.config/logseq-sidekick/config.json" if HOME=/home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    path.to_string_lossy().into_owned()
}
