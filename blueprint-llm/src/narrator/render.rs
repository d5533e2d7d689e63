use crate::narrator::{NarratorConfig, Outline};
use blueprint_utils::{capitalize_first_letter, ensure_period, join_prose};

/// Turn an outline into one to `max_sentences` sentences of prose.
pub fn render_summary(outline: &Outline, cfg: &NarratorConfig) -> String {
    let templates = &cfg.templates;
    let mut sentences = Vec::new();

    if let Some(role) = &outline.role {
        sentences.push(role.clone());
    }

    if outline.definitions.is_empty() {
        sentences.push(
            templates
                .script
                .replace("{count}", &outline.statement_count.to_string()),
        );
    } else {
        let list = with_remainder(&outline.definitions, outline.hidden_definitions);
        sentences.push(templates.definitions.replace("{list}", &list));
    }

    if !outline.io.is_empty() {
        sentences.push(join_prose(&outline.io));
    } else if !outline.imports.is_empty() {
        let list = with_remainder(&outline.imports, outline.hidden_imports);
        sentences.push(templates.imports.replace("{list}", &list));
    }

    if outline.entrypoint {
        sentences.push(templates.entrypoint.clone());
    }

    sentences
        .iter()
        .take(cfg.limits.max_sentences.max(1))
        .map(|s| ensure_period(&capitalize_first_letter(s.trim())))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn with_remainder(items: &[String], hidden: usize) -> String {
    if hidden == 0 {
        return join_prose(items);
    }
    let mut items = items.to_vec();
    items.push(format!("{hidden} more"));
    join_prose(&items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_without_definitions() {
        let outline = Outline {
            statement_count: 2,
            ..Outline::default()
        };
        assert_eq!(
            render_summary(&outline, &NarratorConfig::default()),
            "A top-level script of 2 statement(s)."
        );
    }

    #[test]
    fn test_io_wins_over_imports() {
        let outline = Outline {
            definitions: vec!["function load(path)".into()],
            imports: vec!["json".into()],
            io: vec!["performs file I/O via open in load".into()],
            ..Outline::default()
        };
        assert_eq!(
            render_summary(&outline, &NarratorConfig::default()),
            "Defines function load(path). Performs file I/O via open in load."
        );
    }

    #[test]
    fn test_sentence_limit() {
        let outline = Outline {
            role: Some("Nightly export job".into()),
            definitions: vec!["function main()".into()],
            imports: vec!["csv".into(), "os".into()],
            hidden_imports: 3,
            entrypoint: true,
            ..Outline::default()
        };
        let mut cfg = NarratorConfig::default();
        assert_eq!(
            render_summary(&outline, &cfg),
            "Nightly export job. Defines function main(). Imports csv, os and 3 more."
        );
        cfg.limits.max_sentences = 1;
        assert_eq!(render_summary(&outline, &cfg), "Nightly export job.");
    }
}
