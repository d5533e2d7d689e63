use crate::narrator::{Finding, FindingType, NarratorConfig};
use blueprint_utils::join_prose;
use itertools::Itertools;

/// What a snippet consists of, ready to be put into sentences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    /// First line of the module docstring
    pub role: Option<String>,
    /// Rendered definition fragments, source order
    pub definitions: Vec<String>,
    pub hidden_definitions: usize,
    pub imports: Vec<String>,
    pub hidden_imports: usize,
    /// Rendered I/O fragments, one per (kind, callee)
    pub io: Vec<String>,
    pub entrypoint: bool,
    pub statement_count: usize,
}

pub fn aggregate_findings(findings: &[Finding], statement_count: usize, cfg: &NarratorConfig) -> Outline {
    let templates = &cfg.templates;
    let limits = &cfg.limits;
    let mut outline = Outline {
        statement_count,
        ..Outline::default()
    };

    outline.role = findings
        .iter()
        .find(|f| f.typ == FindingType::ModuleDocstring)
        .and_then(|f| f.text.clone())
        .filter(|text| !text.is_empty());

    outline.entrypoint = findings.iter().any(|f| f.typ == FindingType::Entrypoint);

    let definitions: Vec<String> = findings
        .iter()
        .filter(|f| matches!(f.typ, FindingType::FunctionDef | FindingType::ClassDef))
        .sorted_by_key(|f| f.line)
        .filter_map(|f| {
            let name = f.subject.as_deref()?;
            Some(match f.typ {
                FindingType::FunctionDef => templates
                    .function
                    .replace("{name}", name)
                    .replace("{params}", &f.notes.join(", ")),
                _ if f.notes.is_empty() => templates.class.replace("{name}", name),
                _ => templates
                    .class_with_methods
                    .replace("{name}", name)
                    .replace("{count}", &f.notes.len().to_string()),
            })
        })
        .collect();
    outline.hidden_definitions = definitions.len().saturating_sub(limits.definitions_max);
    outline.definitions = definitions.into_iter().take(limits.definitions_max).collect();

    let imports: Vec<String> = findings
        .iter()
        .filter(|f| f.typ == FindingType::Import)
        .filter_map(|f| f.subject.clone())
        .unique()
        .collect();
    outline.hidden_imports = imports.len().saturating_sub(limits.imports_max);
    outline.imports = imports.into_iter().take(limits.imports_max).collect();

    // One fragment per (kind, callee), owners merged
    let grouped = findings
        .iter()
        .filter(|f| f.typ.is_io())
        .into_group_map_by(|f| (f.typ, f.subject.clone().unwrap_or_default()));

    outline.io = grouped
        .into_iter()
        .sorted_by_key(|(_, items)| items.iter().map(|f| f.line).min().unwrap_or(0))
        .map(|((typ, subject), items)| {
            let owners: Vec<&str> = items.iter().filter_map(|f| f.owner.as_deref()).unique().collect();
            let owners = if owners.is_empty() {
                String::new()
            } else {
                templates.owners.replace("{list}", &join_prose(&owners))
            };
            let template = match typ {
                FindingType::NetworkCall => &templates.network_call,
                FindingType::DbCall => &templates.db_call,
                FindingType::FsIo => &templates.fs_io,
                _ => &templates.subprocess_call,
            };
            template.replace("{subject}", &subject).replace("{owners}", &owners)
        })
        .collect();

    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_are_capped() {
        let cfg = NarratorConfig::default();
        let findings: Vec<Finding> = (1..=6)
            .map(|i| Finding::new(i, FindingType::FunctionDef).with_subject(format!("f{i}")))
            .collect();
        let outline = aggregate_findings(&findings, 6, &cfg);
        assert_eq!(outline.definitions.len(), cfg.limits.definitions_max);
        assert_eq!(outline.hidden_definitions, 2);
        assert_eq!(outline.definitions[0], "function f1()");
    }

    #[test]
    fn test_io_owners_are_merged() {
        let findings = vec![
            Finding::new(3, FindingType::FsIo).with_subject("open".into()).with_owner("load".into()),
            Finding::new(7, FindingType::FsIo).with_subject("open".into()).with_owner("save".into()),
            Finding::new(9, FindingType::FsIo).with_subject("open".into()).with_owner("save".into()),
        ];
        let outline = aggregate_findings(&findings, 2, &NarratorConfig::default());
        assert_eq!(outline.io, vec!["performs file I/O via open in load and save"]);
    }

    #[test]
    fn test_duplicate_imports_collapse() {
        let findings = vec![
            Finding::new(1, FindingType::Import).with_subject("os".into()),
            Finding::new(2, FindingType::Import).with_subject("os".into()),
        ];
        let outline = aggregate_findings(&findings, 2, &NarratorConfig::default());
        assert_eq!(outline.imports, vec!["os"]);
        assert_eq!(outline.hidden_imports, 0);
    }
}
