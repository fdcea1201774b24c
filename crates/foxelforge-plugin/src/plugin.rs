//! Plugin lifecycle for the Foxel exporter
//!
//! `install` registers translations, the format, the codec, the export
//! menu action, and the sibling-name validator check with a host
//! registry, in that order. The returned handle records what was
//! registered so `uninstall` can replay it in reverse.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use foxelforge_core::scene::ensure_unique_names;

use crate::codec::{FoxelModelCodec, ModelCodec, CODEC_ID};
use crate::format::{foxel_format, FOXEL_FORMAT_ID};
use crate::registry::{
    EditorEvent, HostRegistry, MenuAction, MenuSlot, RegistryResult, ValidatorCheck,
};

/// Identifier of the plugin itself
pub const PLUGIN_ID: &str = "foxel_exporter";

/// Identifier of the export menu action
pub const EXPORT_ACTION_ID: &str = "foxel_export";

/// Identifier of the sibling-name validator check
pub const VALIDATOR_ID: &str = "foxel_check";

/// Metadata shown on the host's plugin page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub icon: String,
    pub version: String,
}

/// The Foxel exporter plugin
///
/// Stateless; everything it contributes lives in the host registry
/// between `install` and `uninstall`.
#[derive(Debug, Default)]
pub struct FoxelPlugin;

impl FoxelPlugin {
    /// Create the plugin
    pub fn new() -> Self {
        Self
    }

    /// Manifest describing this plugin
    pub fn manifest(&self) -> PluginManifest {
        PluginManifest {
            id: PLUGIN_ID.to_string(),
            title: "Foxel Model Exporter".to_string(),
            author: "Foxel Developers".to_string(),
            description: "Export models as Foxel Engine JSON".to_string(),
            icon: "bar_chart".to_string(),
            version: crate::VERSION.to_string(),
        }
    }

    /// Register everything this plugin contributes
    pub fn install(&self, registry: &mut HostRegistry) -> RegistryResult<PluginHandle> {
        registry.add_translations("en", [("action.foxel_export", "Foxel Engine Model")]);

        registry.register_format(foxel_format())?;

        let codec: Arc<dyn ModelCodec> = Arc::new(FoxelModelCodec::new());
        registry.register_codec(Arc::clone(&codec))?;

        let action_codec = Arc::clone(&codec);
        registry.register_action(MenuAction::new(
            EXPORT_ACTION_ID,
            "bar_chart",
            MenuSlot::parse("file.export.0"),
            move |project, target| {
                let contents = action_codec.compile(project)?;
                target.save_model(&action_codec.file_name(project), &contents)?;
                info!(project = %project.name, "Exported Foxel model");
                Ok(())
            },
        ))?;

        registry.register_validator(ValidatorCheck::new(
            VALIDATOR_ID,
            vec![EditorEvent::SelectionChanged],
            |context| context.active_format == Some(FOXEL_FORMAT_ID),
            |project| ensure_unique_names(&mut project.roots),
        ))?;

        info!(plugin = PLUGIN_ID, "Plugin installed");

        Ok(PluginHandle {
            registrations: vec![
                Registration::Format(FOXEL_FORMAT_ID.to_string()),
                Registration::Codec(CODEC_ID.to_string()),
                Registration::Action(EXPORT_ACTION_ID.to_string()),
                Registration::Validator(VALIDATOR_ID.to_string()),
            ],
        })
    }

    /// Remove everything `install` registered
    ///
    /// Translations stay behind so surviving references keep readable
    /// labels, matching host convention for plugin removal.
    pub fn uninstall(
        &self,
        handle: PluginHandle,
        registry: &mut HostRegistry,
    ) -> RegistryResult<()> {
        for registration in handle.registrations.into_iter().rev() {
            match registration {
                Registration::Format(id) => registry.unregister_format(&id)?,
                Registration::Codec(id) => registry.unregister_codec(&id)?,
                Registration::Action(id) => registry.unregister_action(&id)?,
                Registration::Validator(id) => registry.unregister_validator(&id)?,
            }
        }
        info!(plugin = PLUGIN_ID, "Plugin uninstalled");
        Ok(())
    }
}

/// Record of what one `install` call registered
#[derive(Debug)]
pub struct PluginHandle {
    registrations: Vec<Registration>,
}

impl PluginHandle {
    /// Number of host registrations this handle tracks
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the handle tracks no registrations
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

/// One host-side registration to undo on uninstall
#[derive(Debug)]
enum Registration {
    Format(String),
    Codec(String),
    Action(String),
    Validator(String),
}
