//! Spec export and share collaborators.
//!
//! The completion screen's download and share actions go through these
//! traits. Only a markdown exporter ships today; sharing is an extension
//! point that reports itself as not configured.

use crate::domain::{checklist_for, find_template, prompt, SpecDraft};
use crate::error::{ExportError, ExportResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Renders a completed draft into a downloadable artifact
pub trait SpecExporter {
    /// Produce the artifact bytes for a draft
    fn export(&self, draft: &SpecDraft) -> ExportResult<Vec<u8>>;

    /// File extension for artifacts produced by this exporter
    fn extension(&self) -> &'static str;
}

/// Produces a shareable reference to a draft
pub trait SpecSharer {
    /// Produce a shareable link for a draft
    fn share(&self, draft: &SpecDraft) -> ExportResult<String>;
}

/// Markdown renderer for completed drafts
#[derive(Debug, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Create a new markdown exporter
    pub fn new() -> Self {
        Self
    }
}

impl SpecExporter for MarkdownExporter {
    fn export(&self, draft: &SpecDraft) -> ExportResult<Vec<u8>> {
        if draft.content.is_empty() && draft.selected_template.is_none() {
            return Err(ExportError::EmptyDraft);
        }

        let mut out = String::new();

        let title = draft
            .content
            .answer("project-name")
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Untitled Project");
        out.push_str(&format!("# {}: Project Specification\n\n", title.trim()));

        match draft
            .selected_template
            .as_ref()
            .and_then(|id| find_template(id.as_str()))
        {
            Some(tpl) => {
                out.push_str(&format!("Template: **{}** ({})\n\n", tpl.name, tpl.description));
            }
            None => {
                if let Some(id) = &draft.selected_template {
                    out.push_str(&format!("Template: `{}`\n\n", id));
                }
            }
        }

        out.push_str(&format!("Completion score: {}%\n\n", draft.completion_score));

        for p in prompt::PROMPTS {
            if let Some(answer) = draft.content.answer(p.field) {
                if answer.trim().is_empty() {
                    continue;
                }
                out.push_str(&format!("## {}\n\n{}\n\n", p.question, answer.trim()));
            }
        }

        out.push_str("## Readiness Checklist\n\n");
        for item in checklist_for(draft) {
            let mark = if item.done { "x" } else { " " };
            out.push_str(&format!("- [{}] {}\n", mark, item.label));
        }

        Ok(out.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

/// JSON renderer: the raw draft, pretty-printed
#[derive(Debug, Default)]
pub struct JsonExporter;

impl SpecExporter for JsonExporter {
    fn export(&self, draft: &SpecDraft) -> ExportResult<Vec<u8>> {
        if draft.content.is_empty() && draft.selected_template.is_none() {
            return Err(ExportError::EmptyDraft);
        }
        Ok(serde_json::to_vec_pretty(draft)?)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Placeholder sharer: sharing has no backing service yet
#[derive(Debug, Default)]
pub struct UnconfiguredSharer;

impl SpecSharer for UnconfiguredSharer {
    fn share(&self, _draft: &SpecDraft) -> ExportResult<String> {
        Err(ExportError::ShareUnavailable)
    }
}

/// Write an exported draft into `directory`, returning the artifact path.
///
/// The filename is derived from the project name answer, falling back to
/// "spec" when unset.
pub fn write_artifact(
    exporter: &dyn SpecExporter,
    draft: &SpecDraft,
    directory: &Path,
) -> ExportResult<PathBuf> {
    let bytes = exporter.export(draft)?;

    let slug = draft
        .content
        .answer("project-name")
        .map(slugify)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "spec".to_string());

    let path = directory.join(format!("{}.{}", slug, exporter.extension()));
    fs::write(&path, bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!("Wrote spec artifact to {}", path.display());
    Ok(path)
}

/// Lowercase alphanumeric with hyphens, collapsing runs of other characters
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemplateId;

    fn sample_draft() -> SpecDraft {
        let mut draft = SpecDraft::default();
        draft.selected_template = Some(TemplateId::new("saas-platform"));
        draft.content.merge([
            ("project-name".to_string(), "Acme Billing".to_string()),
            ("problem".to_string(), "Invoicing is manual".to_string()),
        ]);
        draft.recompute_score();
        draft
    }

    #[test]
    fn test_export_empty_draft_fails() {
        let exporter = MarkdownExporter::new();
        assert!(matches!(
            exporter.export(&SpecDraft::default()),
            Err(ExportError::EmptyDraft)
        ));
    }

    #[test]
    fn test_export_contains_template_and_answers() {
        let exporter = MarkdownExporter::new();
        let bytes = exporter.export(&sample_draft()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("# Acme Billing: Project Specification"));
        assert!(text.contains("SaaS Platform"));
        assert!(text.contains("Invoicing is manual"));
        assert!(text.contains("Readiness Checklist"));
    }

    #[test]
    fn test_export_unknown_template_renders_raw_id() {
        let exporter = MarkdownExporter::new();
        let mut draft = sample_draft();
        draft.selected_template = Some(TemplateId::new("mystery"));
        let text = String::from_utf8(exporter.export(&draft).unwrap()).unwrap();
        assert!(text.contains("`mystery`"));
    }

    #[test]
    fn test_write_artifact_uses_project_slug() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = MarkdownExporter::new();

        let path = write_artifact(&exporter, &sample_draft(), dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "acme-billing.md");
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Acme Billing"));
    }

    #[test]
    fn test_json_export_roundtrips() {
        let exporter = JsonExporter;
        let draft = sample_draft();
        let bytes = exporter.export(&draft).unwrap();
        let parsed: SpecDraft = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, draft);
    }

    #[test]
    fn test_sharer_is_unconfigured() {
        let sharer = UnconfiguredSharer;
        assert!(matches!(
            sharer.share(&sample_draft()),
            Err(ExportError::ShareUnavailable)
        ));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Acme Billing!"), "acme-billing");
        assert_eq!(slugify("   "), "");
    }
}
