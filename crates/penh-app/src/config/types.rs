//! Configuration types for Permissions Enhancer
//!
//! Every key is optional; defaults match the markup the host application
//! renders for its permissions page.

use serde::{Deserialize, Serialize};

/// Application settings (.penh/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub selectors: SelectorSettings,

    #[serde(default)]
    pub classes: ClassSettings,

    #[serde(default)]
    pub glyphs: GlyphSettings,
}

/// Where to find the table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectorSettings {
    /// `id` attribute of the permissions table
    #[serde(default = "default_table_id")]
    pub table_id: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            table_id: default_table_id(),
        }
    }
}

fn default_table_id() -> String {
    "permissions".to_string()
}

/// Class name contract. All marker, output and trigger classes share one prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassSettings {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ClassSettings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    "permissions-enhancer".to_string()
}

/// Data attribute naming a permission row's owning module
pub const MODULE_ATTRIBUTE: &str = "data-module";

impl ClassSettings {
    fn with_suffix(&self, suffix: &str) -> String {
        format!("{}-{}", self.prefix, suffix)
    }

    /// Marker placed on the table once it has been enhanced
    pub fn processed(&self) -> String {
        self.with_suffix("processed")
    }

    pub fn module_header(&self) -> String {
        self.with_suffix("module-header")
    }

    /// Header cell class
    pub fn clickable(&self) -> String {
        self.with_suffix("clickable")
    }

    pub fn permission_row(&self) -> String {
        self.with_suffix("permission-row")
    }

    /// Glyph indicator span
    pub fn toggle(&self) -> String {
        self.with_suffix("toggle")
    }

    /// Count annotation span
    pub fn count(&self) -> String {
        self.with_suffix("count")
    }

    pub fn expand_all(&self) -> String {
        self.with_suffix("expand-all")
    }

    pub fn collapse_all(&self) -> String {
        self.with_suffix("collapse-all")
    }

    pub fn collapse_inactive(&self) -> String {
        self.with_suffix("collapse-inactive")
    }
}

/// Toggle indicator glyphs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GlyphSettings {
    #[serde(default = "default_expanded")]
    pub expanded: String,

    #[serde(default = "default_collapsed")]
    pub collapsed: String,
}

impl Default for GlyphSettings {
    fn default() -> Self {
        Self {
            expanded: default_expanded(),
            collapsed: default_collapsed(),
        }
    }
}

fn default_expanded() -> String {
    "▼".to_string()
}

fn default_collapsed() -> String {
    "▶".to_string()
}

impl GlyphSettings {
    pub fn for_state(&self, collapsed: bool) -> &str {
        if collapsed {
            &self.collapsed
        } else {
            &self.expanded
        }
    }
}
