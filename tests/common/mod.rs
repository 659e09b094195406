//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a single search hit as it appears in the JSON response
pub struct BlockBuilder {
    uuid: String,
    content: String,
    page_id: i64,
    page_name: String,
    journal_day: Option<Value>,
    marker: String,
}

impl BlockBuilder {
    pub fn new(uuid: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            content: "Test content".to_string(),
            page_id: 1,
            page_name: "Test Page".to_string(),
            journal_day: None,
            marker: String::new(),
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn page(mut self, id: i64, name: &str) -> Self {
        self.page_id = id;
        self.page_name = name.to_string();
        self
    }

    pub fn journal_day(mut self, day: i64) -> Self {
        self.journal_day = Some(json!(day));
        self
    }

    /// Emit `"journal-day": null`
    pub fn null_journal_day(mut self) -> Self {
        self.journal_day = Some(Value::Null);
        self
    }

    pub fn marker(mut self, marker: &str) -> Self {
        self.marker = marker.to_string();
        self
    }

    pub fn to_value(&self) -> Value {
        let mut page = json!({
            "id": self.page_id,
            "name": self.page_name,
            "originalName": self.page_name.to_lowercase(),
        });
        if let Some(day) = &self.journal_day {
            page["journal-day"] = day.clone();
        }

        json!({
            "uuid": self.uuid,
            "content": self.content,
            "page": page,
            "html": "",
            "format": "markdown",
            "marker": self.marker,
            "priority": "",
        })
    }
}

/// The three hits from the journal filter proof of concept
pub fn sample_blocks() -> Vec<BlockBuilder> {
    vec![
        BlockBuilder::new("6838ddea-4496-48f4-8724-94050c2c2190")
            .content("sifolakaw@gmail.com")
            .page(2742, "Sifo Lakaw 鍾文觀"),
        BlockBuilder::new("6842357c-03c2-48ef-9cce-5ff933e20f20")
            .content("Contact: sifolakaw@gmail.com (Sifo Lakaw)")
            .page(809, "Jun 6th, 2025")
            .journal_day(20250606),
        BlockBuilder::new("68ebba7d-1a01-456e-80a4-543a280a342a")
            .content("Email: sifolakaw@gmail.com")
            .page(10165, "Oct 10th, 2025")
            .journal_day(20251010),
    ]
}

/// `{"graph": ..., "blocks": [...], "pages": []}`
pub fn search_result_json(graph: &str, blocks: &[BlockBuilder]) -> String {
    let blocks: Vec<Value> = blocks.iter().map(BlockBuilder::to_value).collect();
    json!({ "graph": graph, "blocks": blocks, "pages": [] }).to_string()
}

/// Temp directory holding search responses and a config file
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.json")
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
