//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use qr_studio::models::{GradientMode, PayloadType, SaveCandidate};
use qr_studio::render::{ExportFormat, RenderRequest, Renderer};
use qr_studio::storage::{FileStore, STORAGE_KEY};
use tempfile::TempDir;

/// Builder for a temporary data directory holding a history blob
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the history blob inside the data directory
    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join(format!("{}.json", STORAGE_KEY))
    }

    /// Write raw content as the history blob
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.history_path(), content).expect("Failed to write history blob");
        self
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.temp_dir.path())
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for save candidates
pub struct CandidateBuilder {
    candidate: SaveCandidate,
}

impl CandidateBuilder {
    pub fn new() -> Self {
        Self { candidate: SaveCandidate::default() }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.candidate.payload_type = PayloadType::Url;
        self.candidate.form_data.url.url = url.to_string();
        self
    }

    pub fn text(mut self, content: &str) -> Self {
        self.candidate.payload_type = PayloadType::Text;
        self.candidate.form_data.text.content = content.to_string();
        self
    }

    pub fn foreground(mut self, color: &str) -> Self {
        self.candidate.style.foreground_color = color.to_string();
        self
    }

    pub fn gradient(mut self, gradient: GradientMode) -> Self {
        self.candidate.style.gradient = gradient;
        self
    }

    pub fn logo(mut self, data_uri: &str) -> Self {
        self.candidate.style.logo = Some(data_uri.to_string());
        self
    }

    pub fn build(self) -> SaveCandidate {
        self.candidate
    }
}

impl Default for CandidateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renderer that records every request it receives
#[derive(Default)]
pub struct RecordingRenderer {
    pub draws: Vec<RenderRequest>,
    pub exports: Vec<(RenderRequest, ExportFormat, String)>,
    pub fail_draws: bool,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, request: &RenderRequest) -> Result<()> {
        if self.fail_draws {
            bail!("renderer unavailable");
        }
        self.draws.push(request.clone());
        Ok(())
    }

    fn export(&mut self, request: &RenderRequest, format: ExportFormat, file_name: &str) -> Result<()> {
        self.exports.push((request.clone(), format, file_name.to_string()));
        Ok(())
    }
}
