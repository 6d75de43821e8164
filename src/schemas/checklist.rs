//! Checklist schema - declarative document requirements per entity type

use serde::{Deserialize, Serialize};

/// How a checklist item is captured in the back office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Data,
    Modal,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::File => write!(f, "file"),
            ItemKind::Data => write!(f, "data"),
            ItemKind::Modal => write!(f, "modal"),
        }
    }
}

/// One slot of a checklist.
///
/// Every variant is backed by a stored document record keyed by
/// `document_type`, so completion is evaluated the same way for all kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChecklistItem {
    /// An uploaded file accepted by a reviewer
    File {
        document_type: String,
        label: String,
        #[serde(default = "default_required")]
        required: bool,
    },
    /// Form fields captured on the entity and filed as a record
    Data {
        document_type: String,
        label: String,
        #[serde(default = "default_required")]
        required: bool,
        #[serde(default)]
        fields: Vec<String>,
    },
    /// An acknowledgement or signature captured through a modal dialog
    Modal {
        document_type: String,
        label: String,
        #[serde(default = "default_required")]
        required: bool,
        form: String,
    },
}

fn default_required() -> bool {
    true
}

impl ChecklistItem {
    pub fn file(document_type: &str, label: &str, required: bool) -> Self {
        ChecklistItem::File {
            document_type: document_type.to_string(),
            label: label.to_string(),
            required,
        }
    }

    pub fn data(document_type: &str, label: &str, required: bool, fields: &[&str]) -> Self {
        ChecklistItem::Data {
            document_type: document_type.to_string(),
            label: label.to_string(),
            required,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn modal(document_type: &str, label: &str, required: bool, form: &str) -> Self {
        ChecklistItem::Modal {
            document_type: document_type.to_string(),
            label: label.to_string(),
            required,
            form: form.to_string(),
        }
    }

    pub fn document_type(&self) -> &str {
        match self {
            ChecklistItem::File { document_type, .. }
            | ChecklistItem::Data { document_type, .. }
            | ChecklistItem::Modal { document_type, .. } => document_type,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ChecklistItem::File { label, .. }
            | ChecklistItem::Data { label, .. }
            | ChecklistItem::Modal { label, .. } => label,
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            ChecklistItem::File { required, .. }
            | ChecklistItem::Data { required, .. }
            | ChecklistItem::Modal { required, .. } => *required,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ChecklistItem::File { .. } => ItemKind::File,
            ChecklistItem::Data { .. } => ItemKind::Data,
            ChecklistItem::Modal { .. } => ItemKind::Modal,
        }
    }

    /// Short description of what satisfies the item, for listings
    pub fn describe(&self) -> String {
        match self {
            ChecklistItem::File { label, .. } => format!("{} (upload)", label),
            ChecklistItem::Data { label, fields, .. } if fields.is_empty() => {
                format!("{} (data)", label)
            }
            ChecklistItem::Data { label, fields, .. } => {
                format!("{} (data: {})", label, fields.join(", "))
            }
            ChecklistItem::Modal { label, form, .. } => format!("{} (form: {})", label, form),
        }
    }
}

/// An ordered status change, the key a gate is attached to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatusTransition {
    pub from: String,
    pub to: String,
}

impl StatusTransition {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        StatusTransition {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl std::fmt::Display for StatusTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A named set of document requirements for one entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistDefinition {
    /// Stable identifier, unique within the entity type
    pub key: String,

    /// Entity type the checklist applies to (e.g. "employee", "truck")
    pub entity_type: String,

    /// Human-readable name used in decision reasons
    pub name: String,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<ChecklistItem>,

    /// Status transitions this checklist must be complete for
    #[serde(default)]
    pub gates: Vec<StatusTransition>,
}

impl ChecklistDefinition {
    pub fn new(key: &str, entity_type: &str, name: &str) -> Self {
        ChecklistDefinition {
            key: key.to_string(),
            entity_type: entity_type.to_string(),
            name: name.to_string(),
            items: Vec::new(),
            gates: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: ChecklistItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_gate(mut self, from: &str, to: &str) -> Self {
        self.gates.push(StatusTransition::new(from, to));
        self
    }

    /// Required items in definition order
    pub fn required_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().filter(|item| item.is_required())
    }

    pub fn item(&self, document_type: &str) -> Option<&ChecklistItem> {
        self.items
            .iter()
            .find(|item| item.document_type() == document_type)
    }

    /// Label for a document type, falling back to the raw key when the
    /// checklist has no such item.
    pub fn label_for<'a>(&'a self, document_type: &'a str) -> &'a str {
        match self.item(document_type) {
            Some(item) => item.label(),
            None => {
                tracing::warn!(
                    checklist = %self.key,
                    document_type,
                    "Checklist has no item for document type, using key as label"
                );
                document_type
            }
        }
    }

    pub fn gates_transition(&self, transition: &StatusTransition) -> bool {
        self.gates.contains(transition)
    }
}

/// On-disk form of a checklist registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub checklists: Vec<ChecklistDefinition>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for RegistryFile {
    fn default() -> Self {
        RegistryFile {
            schema_version: 1,
            checklists: Vec::new(),
        }
    }
}
