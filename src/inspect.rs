//! Scripted actions for the headless inspector

use std::str::FromStr;

use penh_app::{BulkAction, Enhancer, MemoryView, Message};
use penh_core::prelude::*;

/// One step of an inspection script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// One of the page-level triggers
    Bulk(BulkAction),
    /// Click the header of the first module with this name
    Toggle(String),
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('=') {
            Some(("toggle", name)) => Ok(Action::Toggle(name.to_string())),
            Some((other, _)) => Err(format!("unknown action '{}'", other)),
            None => s.parse::<BulkAction>().map(Action::Bulk),
        }
    }
}

/// Apply actions in order
///
/// Returns one warning per `toggle=` naming a module that does not exist.
pub fn run_actions(enhancer: &mut Enhancer<MemoryView>, actions: &[Action]) -> Vec<String> {
    let mut warnings = Vec::new();
    for action in actions {
        let message = match action {
            Action::Bulk(bulk) => bulk.message(),
            Action::Toggle(name) => match enhancer.state().find_group(name) {
                Some(id) => Message::ToggleGroup(id),
                None => {
                    warn!("No module named {:?}", name);
                    warnings.push(format!("no module named '{}'", name));
                    continue;
                }
            },
        };
        let result = enhancer.dispatch(message);
        debug!("{:?} toggled {} groups", action, result.toggled.len());
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use penh_app::Settings;
    use penh_core::TableRow;

    fn enhancer() -> Enhancer<MemoryView> {
        let rows = vec![
            TableRow::header("Node"),
            TableRow::permission("access content", true),
            TableRow::header("User"),
            TableRow::permission("administer users", false),
        ];
        Enhancer::attach(MemoryView::from_rows(&rows), &rows, Settings::default()).unwrap()
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            "expand-all".parse::<Action>(),
            Ok(Action::Bulk(BulkAction::ExpandAll))
        );
        assert_eq!(
            "toggle=Node".parse::<Action>(),
            Ok(Action::Toggle("Node".to_string()))
        );
        assert_eq!(
            "toggle=".parse::<Action>(),
            Ok(Action::Toggle(String::new()))
        );
        assert!("collapse=Node".parse::<Action>().is_err());
        assert!("shrink".parse::<Action>().is_err());
    }

    #[test]
    fn test_run_actions_in_order() {
        let mut enhancer = enhancer();
        let actions = vec![
            Action::Bulk(BulkAction::CollapseAll),
            Action::Toggle("Node".to_string()),
        ];

        let warnings = run_actions(&mut enhancer, &actions);

        assert!(warnings.is_empty());
        let flags: Vec<bool> = enhancer
            .state()
            .groups()
            .iter()
            .map(|g| g.is_collapsed())
            .collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_unknown_module_is_reported_and_skipped() {
        let mut enhancer = enhancer();

        let warnings = run_actions(
            &mut enhancer,
            &[
                Action::Toggle("Views".to_string()),
                Action::Bulk(BulkAction::CollapseInactive),
            ],
        );

        assert_eq!(warnings, vec!["no module named 'Views'".to_string()]);
        assert_eq!(enhancer.state().collapsed_count(), 1);
    }
}
