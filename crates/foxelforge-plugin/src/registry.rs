//! Host registry for formats, codecs, menu actions, and validator checks
//!
//! The registry stands in for the editor host: plugins register their
//! pieces here, and the host dispatches menu clicks and editor events
//! back to them. The editor drives it from a single UI loop, so all
//! mutation goes through plain `&mut self` borrows.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use foxelforge_core::scene::Project;
use foxelforge_export::ExportError;

use crate::codec::{ExportTarget, ModelCodec};
use crate::format::FormatDescriptor;

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("'{0}' is already registered")]
    DuplicateId(String),

    #[error("'{0}' is not registered")]
    NotFound(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Events the host forwards to registered validator checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorEvent {
    /// The outliner selection changed
    SelectionChanged,
    /// Project content changed outside the selection
    ProjectChanged,
}

/// Position of an action inside the host menu tree
///
/// Slots are dot-separated paths with an optional numeric position as
/// the last segment, e.g. `"file.export.0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSlot {
    path: String,
    position: Option<usize>,
}

impl MenuSlot {
    /// Parse a slot from its dotted form
    ///
    /// A non-numeric last segment means the whole string is the path and
    /// the action sorts after positioned entries.
    pub fn parse(slot: &str) -> Self {
        if let Some((path, tail)) = slot.rsplit_once('.') {
            if let Ok(position) = tail.parse() {
                return Self {
                    path: path.to_string(),
                    position: Some(position),
                };
            }
        }
        Self {
            path: slot.to_string(),
            position: None,
        }
    }

    /// Menu path without the position segment
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Requested position within the menu, if any
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

/// Handler invoked when a menu action is triggered
pub type ActionHandler =
    Box<dyn Fn(&Project, &mut dyn ExportTarget) -> RegistryResult<()> + Send + Sync>;

/// A clickable menu entry registered by a plugin
pub struct MenuAction {
    id: String,
    icon: String,
    slot: MenuSlot,
    handler: ActionHandler,
}

impl MenuAction {
    /// Create an action with its handler
    pub fn new<F>(
        id: impl Into<String>,
        icon: impl Into<String>,
        slot: MenuSlot,
        handler: F,
    ) -> Self
    where
        F: Fn(&Project, &mut dyn ExportTarget) -> RegistryResult<()> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            icon: icon.into(),
            slot,
            handler: Box::new(handler),
        }
    }

    /// Unique action identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Icon shown next to the menu entry
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Where the action appears in the menu tree
    pub fn slot(&self) -> &MenuSlot {
        &self.slot
    }
}

/// State visible to validator conditions
#[derive(Debug, Clone, Copy)]
pub struct ValidatorContext<'a> {
    /// Identifier of the active format, if one is set
    pub active_format: Option<&'a str>,
}

/// Condition deciding whether a check applies in the current context
pub type CheckCondition = Box<dyn Fn(&ValidatorContext<'_>) -> bool + Send + Sync>;

/// Body of a validator check
pub type CheckBody = Box<dyn Fn(&mut Project) + Send + Sync>;

/// A check the host runs in response to editor events
pub struct ValidatorCheck {
    id: String,
    update_triggers: Vec<EditorEvent>,
    condition: CheckCondition,
    run: CheckBody,
}

impl ValidatorCheck {
    /// Create a check with its triggers, condition, and body
    pub fn new<C, R>(
        id: impl Into<String>,
        update_triggers: Vec<EditorEvent>,
        condition: C,
        run: R,
    ) -> Self
    where
        C: Fn(&ValidatorContext<'_>) -> bool + Send + Sync + 'static,
        R: Fn(&mut Project) + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            update_triggers,
            condition: Box::new(condition),
            run: Box::new(run),
        }
    }

    /// Unique check identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the given event is one of this check's triggers
    pub fn triggered_by(&self, event: EditorEvent) -> bool {
        self.update_triggers.contains(&event)
    }

    /// Whether the check applies under the given context
    pub fn applies(&self, context: &ValidatorContext<'_>) -> bool {
        (self.condition)(context)
    }

    /// Run the check against a project
    pub fn run(&self, project: &mut Project) {
        (self.run)(project);
    }
}

/// Central registration point for everything a plugin contributes
pub struct HostRegistry {
    formats: HashMap<String, FormatDescriptor>,
    codecs: HashMap<String, Arc<dyn ModelCodec>>,
    actions: HashMap<String, MenuAction>,
    validators: Vec<ValidatorCheck>,
    translations: HashMap<String, HashMap<String, String>>,
    active_format: Option<String>,
}

impl HostRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            formats: HashMap::new(),
            codecs: HashMap::new(),
            actions: HashMap::new(),
            validators: Vec::new(),
            translations: HashMap::new(),
            active_format: None,
        }
    }

    /// Register a model format
    pub fn register_format(&mut self, format: FormatDescriptor) -> RegistryResult<()> {
        if self.formats.contains_key(&format.id) {
            return Err(RegistryError::DuplicateId(format.id));
        }
        debug!(id = %format.id, "Registered format");
        self.formats.insert(format.id.clone(), format);
        Ok(())
    }

    /// Unregister a format by ID
    ///
    /// Removing the active format clears the active-format selection.
    pub fn unregister_format(&mut self, id: &str) -> RegistryResult<()> {
        if self.formats.remove(id).is_none() {
            return Err(RegistryError::NotFound(id.to_string()));
        }
        if self.active_format.as_deref() == Some(id) {
            self.active_format = None;
        }
        Ok(())
    }

    /// Look up a format descriptor by ID
    pub fn format(&self, id: &str) -> Option<&FormatDescriptor> {
        self.formats.get(id)
    }

    /// Mark a registered format as the one driving the editor
    pub fn set_active_format(&mut self, id: &str) -> RegistryResult<()> {
        if !self.formats.contains_key(id) {
            return Err(RegistryError::NotFound(id.to_string()));
        }
        info!(id, "Format activated");
        self.active_format = Some(id.to_string());
        Ok(())
    }

    /// Identifier of the active format, if any
    pub fn active_format(&self) -> Option<&str> {
        self.active_format.as_deref()
    }

    /// Register a codec
    pub fn register_codec(&mut self, codec: Arc<dyn ModelCodec>) -> RegistryResult<()> {
        let id = codec.id().to_string();
        if self.codecs.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        debug!(id = %id, "Registered codec");
        self.codecs.insert(id, codec);
        Ok(())
    }

    /// Unregister a codec by ID
    pub fn unregister_codec(&mut self, id: &str) -> RegistryResult<()> {
        self.codecs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Look up a codec by ID
    pub fn codec(&self, id: &str) -> Option<Arc<dyn ModelCodec>> {
        self.codecs.get(id).cloned()
    }

    /// Register a menu action
    pub fn register_action(&mut self, action: MenuAction) -> RegistryResult<()> {
        if self.actions.contains_key(action.id()) {
            return Err(RegistryError::DuplicateId(action.id().to_string()));
        }
        debug!(id = %action.id(), "Registered menu action");
        self.actions.insert(action.id().to_string(), action);
        Ok(())
    }

    /// Unregister a menu action by ID
    pub fn unregister_action(&mut self, id: &str) -> RegistryResult<()> {
        self.actions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Actions under a menu path, ordered by requested position
    ///
    /// Unpositioned actions sort last; ties break on the action ID.
    pub fn menu_actions(&self, path: &str) -> Vec<&MenuAction> {
        let mut actions: Vec<&MenuAction> = self
            .actions
            .values()
            .filter(|action| action.slot().path() == path)
            .collect();
        actions.sort_by(|a, b| {
            let pa = a.slot().position().unwrap_or(usize::MAX);
            let pb = b.slot().position().unwrap_or(usize::MAX);
            pa.cmp(&pb).then_with(|| a.id().cmp(b.id()))
        });
        actions
    }

    /// Run a registered action against a project
    pub fn trigger_action(
        &self,
        id: &str,
        project: &Project,
        target: &mut dyn ExportTarget,
    ) -> RegistryResult<()> {
        let action = self
            .actions
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        info!(id, "Menu action triggered");
        (action.handler)(project, target)
    }

    /// Register a validator check
    pub fn register_validator(&mut self, check: ValidatorCheck) -> RegistryResult<()> {
        if self.validators.iter().any(|v| v.id() == check.id()) {
            return Err(RegistryError::DuplicateId(check.id().to_string()));
        }
        debug!(id = %check.id(), "Registered validator check");
        self.validators.push(check);
        Ok(())
    }

    /// Unregister a validator check by ID
    pub fn unregister_validator(&mut self, id: &str) -> RegistryResult<()> {
        let before = self.validators.len();
        self.validators.retain(|check| check.id() != id);
        if self.validators.len() == before {
            return Err(RegistryError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Dispatch an editor event to every triggered, applicable check
    pub fn fire(&self, event: EditorEvent, project: &mut Project) {
        let context = ValidatorContext {
            active_format: self.active_format.as_deref(),
        };
        for check in &self.validators {
            if check.triggered_by(event) && check.applies(&context) {
                debug!(id = %check.id(), ?event, "Running validator check");
                check.run(project);
            }
        }
    }

    /// Add translations for a locale, overwriting existing keys
    pub fn add_translations<I, K, V>(&mut self, locale: &str, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.translations.entry(locale.to_string()).or_default();
        for (key, value) in entries {
            table.insert(key.into(), value.into());
        }
    }

    /// Look up a translation, falling back to the key itself
    pub fn translate<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        self.translations
            .get(locale)
            .and_then(|table| table.get(key))
            .map_or(key, String::as_str)
    }
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::new()
    }
}
