use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::models::{Block, PageIdentity, SearchResult};
use crate::utils::{read_to_string_limited, validate_file_size};

/// A decoded search response together with how many items were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResponse {
    pub result: SearchResult,
    pub skipped: usize,
}

/// Parse a search response document.
///
/// Accepted shapes:
/// - `{"blocks": [...], "pages": [...], "graph": "..."}`
/// - `{"success": true, "data": [...]}` as returned by the HTTP search server
/// - a bare array of blocks
pub fn parse_search_response(text: &str) -> Result<ParsedResponse> {
    let document: Value =
        serde_json::from_str(text).context("Search response is not valid JSON")?;

    match document {
        Value::Array(items) => {
            let (blocks, skipped) = decode_items::<Block>(items, "block")?;
            Ok(ParsedResponse {
                result: SearchResult { blocks, pages: Vec::new(), graph: String::new() },
                skipped,
            })
        }
        Value::Object(map) if map.contains_key("success") || map.contains_key("data") => {
            parse_envelope(map)
        }
        Value::Object(map) => parse_full_result(map),
        _ => bail!("Search response must be a JSON object or array"),
    }
}

/// Read and parse a search response from a file, `-` reads stdin
pub fn parse_search_file(path: &Path) -> Result<ParsedResponse> {
    let text = if path == Path::new("-") {
        read_to_string_limited(io::stdin().lock(), "search response from stdin")?
    } else {
        let mut text = String::new();
        // Validate size on the open handle to avoid TOCTOU race condition
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open search response: {}", path.display()))?;
        validate_file_size(&file, path)?;
        file.read_to_string(&mut text)
            .with_context(|| format!("Failed to read search response: {}", path.display()))?;
        text
    };

    parse_search_response(&text)
        .with_context(|| format!("Failed to parse search response: {}", path.display()))
}

fn parse_envelope(mut map: Map<String, Value>) -> Result<ParsedResponse> {
    let success = match map.get("success") {
        None | Some(Value::Null) => true,
        Some(Value::Bool(success)) => *success,
        Some(other) => bail!("`success` must be a boolean, got {}", other),
    };
    if !success {
        let reason = map
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("no error message provided")
            .to_string();
        bail!("Search server reported failure: {}", reason);
    }

    let graph = take_string(&map, "graph");
    let (blocks, skipped) = decode_items::<Block>(take_array(&mut map, "data")?, "block")?;

    Ok(ParsedResponse { result: SearchResult { blocks, pages: Vec::new(), graph }, skipped })
}

fn parse_full_result(mut map: Map<String, Value>) -> Result<ParsedResponse> {
    let graph = take_string(&map, "graph");
    let (blocks, skipped_blocks) = decode_items::<Block>(take_array(&mut map, "blocks")?, "block")?;
    let (pages, skipped_pages) =
        decode_items::<PageIdentity>(take_array(&mut map, "pages")?, "page")?;

    Ok(ParsedResponse {
        result: SearchResult { blocks, pages, graph },
        skipped: skipped_blocks + skipped_pages,
    })
}

fn take_array(map: &mut Map<String, Value>, key: &str) -> Result<Vec<Value>> {
    match map.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => bail!("`{}` must be an array", key),
    }
}

fn take_string(map: &Map<String, Value>, key: &str) -> String {
    map.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Decode items one by one, skipping malformed ones.
/// Returns an error if more than 50% of the non-null items fail.
fn decode_items<T: DeserializeOwned>(items: Vec<Value>, kind: &str) -> Result<(Vec<T>, usize)> {
    let mut decoded = Vec::with_capacity(items.len());
    let mut skipped = 0;
    let mut total = 0;

    for (index, item) in items.into_iter().enumerate() {
        if item.is_null() {
            tracing::debug!(index, kind, "Dropping null entry");
            continue;
        }

        total += 1;

        match serde_json::from_value::<T>(item) {
            Ok(value) => decoded.push(value),
            Err(e) => {
                tracing::warn!(index, kind, error = %e, "Skipping malformed search hit");
                skipped += 1;
            }
        }
    }

    if total > 0 {
        let failure_rate = (skipped as f64) / (total as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many malformed {}s in search response: {} of {} failed ({:.1}%)",
                kind,
                skipped,
                total,
                failure_rate * 100.0
            );
        }
    }

    if skipped > 0 {
        tracing::info!(kind, decoded = decoded.len(), skipped, "Parsed search response");
    }

    Ok((decoded, skipped))
}
