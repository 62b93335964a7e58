//! Inspection report, as text or JSON

use serde::Serialize;

use penh_app::{Enhancer, MemoryView};
use penh_core::prelude::*;
use penh_core::CountStyle;

/// Rendered state of one module group
#[derive(Debug, Clone, Serialize)]
pub struct ModuleReport {
    pub name: String,
    pub glyph: String,
    pub annotation: String,
    pub style: CountStyle,
    pub collapsed: bool,
    pub total: usize,
    pub active: usize,
    pub visible_rows: usize,
}

/// Rendered state of the whole table
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub table_id: String,
    pub modules: Vec<ModuleReport>,
}

impl Report {
    /// Read the report back from what the view currently shows
    pub fn from_enhancer(enhancer: &Enhancer<MemoryView>) -> Self {
        let view = enhancer.view();
        let modules = enhancer
            .state()
            .groups()
            .iter()
            .zip(enhancer.indicators())
            .map(|(group, ind)| ModuleReport {
                name: group.name().to_string(),
                glyph: view.indicator_text(ind.glyph).unwrap_or_default().to_string(),
                annotation: view
                    .indicator_text(ind.annotation)
                    .unwrap_or_default()
                    .to_string(),
                style: group.style(),
                collapsed: group.is_collapsed(),
                total: group.counts().total,
                active: group.counts().active,
                visible_rows: group
                    .rows()
                    .iter()
                    .filter(|p| view.row(p.row).is_some_and(|r| r.visible))
                    .count(),
            })
            .collect();

        Self {
            table_id: enhancer.settings().selectors.table_id.clone(),
            modules,
        }
    }

    /// One line per module: `<glyph> <name><annotation> [<style>]`
    pub fn to_text(&self) -> String {
        if self.modules.is_empty() {
            return format!("#{}: no modules\n", self.table_id);
        }
        let mut out = String::new();
        for m in &self.modules {
            out.push_str(&format!("{} {}{} [{}]\n", m.glyph, m.name, m.annotation, m.style));
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
