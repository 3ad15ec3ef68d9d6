//! Offline build pipeline: source markdown -> distribution assets.
//!
//! SuperClaude's upstream sources are markdown files with YAML frontmatter
//! describing each agent (name, description, model, allowed tools). This
//! module converts a tree of those sources into the layout `install` ships:
//! a stripped prompt file under `prompts/` plus a JSON descriptor under
//! `agents/` for every source file.
//!
//! The conversion is a plain text transform; it never touches the Copilot
//! directory.

use anyhow::{Context, Result};
use gray_matter::Matter;
use gray_matter::engine::YAML;
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use walkdir::WalkDir;

use crate::constants::{AGENTS_DIR, PROMPTS_DIR};

/// Frontmatter schema of a source agent file.
///
/// Every field is optional; missing values fall back to defaults derived
/// from the file name.
#[derive(Debug, Default, Deserialize)]
pub struct AgentMeta {
    /// Agent identifier; defaults to the source file stem.
    pub name: Option<String>,

    /// One-line description shown in agent listings.
    pub description: Option<String>,

    /// Model override for this agent.
    pub model: Option<String>,

    /// Tools the agent may use without confirmation.
    pub tools: Option<Vec<String>>,
}

/// Counters reported after a conversion run.
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Files converted into descriptor + prompt pairs.
    pub converted: usize,

    /// Files skipped because their outputs already existed.
    pub skipped: usize,
}

/// Convert every markdown file under `source` into assets under `out`.
///
/// Writes `out/prompts/<name>.md` (frontmatter stripped) and
/// `out/agents/<name>.json` per source file. Existing outputs are skipped
/// unless `force` is set.
pub fn convert_tree(source: &Path, out: &Path, force: bool) -> Result<ConvertReport> {
    let matter = Matter::<YAML>::new();
    let mut report = ConvertReport::default();

    crate::utils::ensure_dir(&out.join(AGENTS_DIR))?;
    crate::utils::ensure_dir(&out.join(PROMPTS_DIR))?;

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk source tree: {}", source.display()))?;
        if !entry.file_type().is_file()
            || entry.path().extension().is_none_or(|ext| ext != "md")
        {
            continue;
        }

        if convert_file(&matter, entry.path(), out, force)? {
            report.converted += 1;
        } else {
            report.skipped += 1;
        }
    }

    Ok(report)
}

/// Convert a single source file. Returns whether outputs were written.
fn convert_file(matter: &Matter<YAML>, path: &Path, out: &Path, force: bool) -> Result<bool> {
    let raw = crate::utils::read_text_file(path)?;
    let parsed = matter
        .parse::<AgentMeta>(&raw)
        .with_context(|| format!("Failed to parse frontmatter in {}", path.display()))?;

    let meta = parsed.data.unwrap_or_default();
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("agent");
    let name = meta.name.as_deref().unwrap_or(stem);

    let prompt_path = out.join(PROMPTS_DIR).join(format!("{name}.md"));
    let descriptor_path = out.join(AGENTS_DIR).join(format!("{name}.json"));

    if !force && (prompt_path.exists() || descriptor_path.exists()) {
        tracing::debug!(agent = %name, "outputs exist, skipping (use --force to overwrite)");
        return Ok(false);
    }

    // Descriptor references the prompt by its install-relative path.
    let mut descriptor = json!({
        "name": name,
        "prompt": format!("{PROMPTS_DIR}/{name}.md"),
    });
    if let Some(obj) = descriptor.as_object_mut() {
        if let Some(description) = &meta.description {
            obj.insert("description".to_string(), json!(description));
        }
        if let Some(model) = &meta.model {
            obj.insert("model".to_string(), json!(model));
        }
        if let Some(tools) = &meta.tools {
            obj.insert("tools".to_string(), json!(tools));
        }
    }

    let body = parsed.content.trim_start();
    crate::utils::write_text_file(&prompt_path, body)?;
    crate::utils::write_json_file(&descriptor_path, &descriptor, true)?;

    tracing::info!(agent = %name, "converted");
    Ok(true)
}
