// Terminal rendering of result items
use crate::domain::model::ResultItem;
use colored::Colorize;
use std::fmt::Write;

/// Render items the way the query bar would show them: title, direction
/// line, then the available actions.
pub fn format_items(items: &[ResultItem]) -> String {
    let mut output = String::new();
    for item in items {
        writeln!(output, "{}", item.title.bold()).ok();
        writeln!(output, "  {}", item.subtitle.cyan()).ok();
        if !item.actions.is_empty() {
            let labels: Vec<&str> = item.actions.iter().map(|a| a.label.as_str()).collect();
            writeln!(output, "  {}", labels.join(" | ").dimmed()).ok();
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ActionCommand, IconSource, ResultAction};

    fn item(actions: Vec<ResultAction>) -> ResultItem {
        ResultItem {
            id: "translation".to_string(),
            title: "hola".to_string(),
            subtitle: "AUTO > ES".to_string(),
            icon: IconSource::Name("accessories-dictionary".to_string()),
            actions,
        }
    }

    #[test]
    fn formats_title_direction_and_actions() {
        colored::control::set_override(false);
        let rendered = format_items(&[item(vec![ResultAction {
            id: "copy".to_string(),
            label: "Copy to clipboard".to_string(),
            command: ActionCommand::CopyToClipboard("hola".to_string()),
        }])]);
        assert!(rendered.contains("hola"));
        assert!(rendered.contains("AUTO > ES"));
        assert!(rendered.contains("Copy to clipboard"));
    }

    #[test]
    fn actionless_items_render_two_lines() {
        colored::control::set_override(false);
        let rendered = format_items(&[item(Vec::new())]);
        assert_eq!(rendered.lines().count(), 2);
    }
}
