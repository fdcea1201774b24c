//! Codec surface connecting projects to on-disk model files
//!
//! A codec compiles a project into the bytes of one output file; an
//! export target decides where those bytes land. The host's save dialog
//! is one target, the in-memory and directory targets here cover
//! headless use and tests.

use std::io;
use std::path::PathBuf;

use tracing::debug;

use foxelforge_core::scene::Project;
use foxelforge_export::{ExportResult, FoxelExporter};

/// Identifier of the Foxel model codec
pub const CODEC_ID: &str = "foxel_model";

/// Turns a project into the contents of one output file
pub trait ModelCodec: Send + Sync {
    /// Unique codec identifier
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// File extension without the leading dot
    fn extension(&self) -> &str;

    /// Compile the project into file contents
    fn compile(&self, project: &Project) -> ExportResult<Vec<u8>>;

    /// Default output file name for a project
    fn file_name(&self, project: &Project) -> String {
        format!("{}.{}", project.name, self.extension())
    }
}

/// Codec producing Foxel Engine JSON models
pub struct FoxelModelCodec {
    exporter: FoxelExporter,
}

impl FoxelModelCodec {
    /// Create the codec with default export options
    pub fn new() -> Self {
        Self {
            exporter: FoxelExporter::new(),
        }
    }
}

impl Default for FoxelModelCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelCodec for FoxelModelCodec {
    fn id(&self) -> &str {
        CODEC_ID
    }

    fn name(&self) -> &str {
        "Foxel Model"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn compile(&self, project: &Project) -> ExportResult<Vec<u8>> {
        let json = self.exporter.export_string(project)?;
        debug!(project = %project.name, bytes = json.len(), "Compiled Foxel model");
        Ok(json.into_bytes())
    }
}

/// Destination for compiled model files
pub trait ExportTarget {
    /// Persist one compiled file
    fn save_model(&mut self, file_name: &str, contents: &[u8]) -> io::Result<()>;
}

/// Collects exports in memory
#[derive(Debug, Default)]
pub struct MemoryExportTarget {
    saved: Vec<(String, Vec<u8>)>,
}

impl MemoryExportTarget {
    /// Create an empty target
    pub fn new() -> Self {
        Self::default()
    }

    /// Files saved so far, in save order
    pub fn saved(&self) -> &[(String, Vec<u8>)] {
        &self.saved
    }
}

impl ExportTarget for MemoryExportTarget {
    fn save_model(&mut self, file_name: &str, contents: &[u8]) -> io::Result<()> {
        self.saved.push((file_name.to_string(), contents.to_vec()));
        Ok(())
    }
}

/// Writes exports into a directory on disk
#[derive(Debug)]
pub struct DirectoryExportTarget {
    root: PathBuf,
}

impl DirectoryExportTarget {
    /// Create a target rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory exports are written into
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl ExportTarget for DirectoryExportTarget {
    fn save_model(&mut self, file_name: &str, contents: &[u8]) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.root.join(file_name), contents)
    }
}
