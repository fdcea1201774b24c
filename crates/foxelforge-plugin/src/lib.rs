//! foxelforge-plugin
//!
//! Editor integration for the Foxel Engine model format: a format
//! descriptor, an export codec, a menu action, and a validator check
//! that keeps sibling names unique. Hosts hold one [`HostRegistry`] and
//! let [`FoxelPlugin::install`] populate it.
//!
//! # Registered identifiers
//!
//! | Piece       | Identifier       |
//! |-------------|------------------|
//! | Plugin      | `foxel_exporter` |
//! | Format      | `foxel`          |
//! | Codec       | `foxel_model`    |
//! | Menu action | `foxel_export`   |
//! | Validator   | `foxel_check`    |
//!
//! # Example
//!
//! ```rust,ignore
//! use foxelforge_plugin::{FoxelPlugin, HostRegistry, MemoryExportTarget};
//!
//! let mut registry = HostRegistry::new();
//! let handle = FoxelPlugin::new().install(&mut registry)?;
//!
//! let mut target = MemoryExportTarget::new();
//! registry.trigger_action("foxel_export", &project, &mut target)?;
//! ```

pub mod codec;
pub mod format;
pub mod logging;
pub mod plugin;
pub mod registry;

// Re-export main types
pub use codec::{
    DirectoryExportTarget, ExportTarget, FoxelModelCodec, MemoryExportTarget, ModelCodec, CODEC_ID,
};
pub use format::{foxel_format, FormatDescriptor, FOXEL_FORMAT_ID};
pub use logging::{init_default, init_with_config, TracingConfig};
pub use plugin::{
    FoxelPlugin, PluginHandle, PluginManifest, EXPORT_ACTION_ID, PLUGIN_ID, VALIDATOR_ID,
};
pub use registry::{
    EditorEvent, HostRegistry, MenuAction, MenuSlot, RegistryError, RegistryResult, ValidatorCheck,
    ValidatorContext,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
