use anyhow::{Context, Result};
use factcheck_core::ReportRecord;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::reports::{ReportSummary, format_timestamp};

pub struct ExportPaths {
    pub root: PathBuf,
    pub index_dir: PathBuf,
    pub reports_dir: PathBuf,
}

impl ExportPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            index_dir: root.join("00_Index"),
            reports_dir: root.join("Reports"),
            root,
        }
    }

    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.index_dir)
            .with_context(|| format!("creating {}", self.index_dir.display()))?;
        fs::create_dir_all(&self.reports_dir)
            .with_context(|| format!("creating {}", self.reports_dir.display()))?;
        Ok(())
    }

    pub fn note_path(&self, id: &str) -> PathBuf {
        self.reports_dir.join(format!("{}.md", note_stem(id)))
    }

    pub fn index_path(&self) -> PathBuf {
        self.index_dir.join("MOC - Reports.md")
    }
}

/// Writes one note per record plus an index. Returns the number of notes.
pub fn export_reports(records: &[ReportRecord], out_dir: &Path) -> Result<usize> {
    let paths = ExportPaths::new(out_dir);
    paths.ensure()?;

    let mut index_lines: Vec<String> = Vec::new();
    index_lines.push("# MOC - Reports".to_string());
    index_lines.push(String::new());
    index_lines.push("This index is generated. Do not edit manually.".to_string());
    index_lines.push(String::new());

    let summary = ReportSummary::from_records(records);
    index_lines.push(format!(
        "Total: {} | Verified: {} | False: {} | Uncertain: {} | Avg. truth score: {}%",
        summary.total,
        summary.verified,
        summary.false_count,
        summary.uncertain,
        summary.average_truth_score
    ));
    index_lines.push(String::new());
    index_lines.push("## Reports".to_string());
    index_lines.push(String::new());

    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();

    if records.is_empty() {
        index_lines.push("_No reports found._".to_string());
    }
    for record in records {
        write_report_note(&paths, record)?;
        index_lines.push(format!(
            "- [[Reports/{}|{}]] ({}%, {})",
            note_stem(&record.id),
            index_title(record),
            record.truth_score,
            record.status
        ));
        *category_counts.entry(record.category.clone()).or_insert(0) += 1;
    }

    index_lines.push(String::new());
    index_lines.push("## Categories".to_string());
    index_lines.push(String::new());

    let mut category_vec: Vec<(String, usize)> = category_counts.into_iter().collect();
    category_vec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if category_vec.is_empty() {
        index_lines.push("_No categories found._".to_string());
    } else {
        for (category, count) in category_vec {
            index_lines.push(format!("- {category} ({count})"));
        }
    }

    let index_path = paths.index_path();
    fs::write(&index_path, index_lines.join("\n"))
        .with_context(|| format!("writing {}", index_path.display()))?;
    debug!(notes = records.len(), root = %paths.root.display(), "exported report notes");

    Ok(records.len())
}

pub fn write_report_note(paths: &ExportPaths, record: &ReportRecord) -> Result<PathBuf> {
    let note_path = paths.note_path(&record.id);

    let mut md = String::new();
    md.push_str("---\n");
    md.push_str(&format!("id: {}\n", record.id));
    md.push_str(&format!("kind: {}\n", record.kind));
    md.push_str(&format!("truth_score: {}\n", record.truth_score));
    md.push_str(&format!("status: {}\n", record.status));
    md.push_str(&format!("category: {}\n", record.category));
    md.push_str(&format!("timestamp: {}\n", record.timestamp));
    md.push_str(&format!("source_count: {}\n", record.source_count));
    md.push_str("content: |\n");
    md.push_str(&indent_yaml_block(&record.content));
    md.push_str("---\n\n");

    md.push_str(&format!("# Report {}\n\n", record.id));

    md.push_str("## Result\n");
    md.push_str(&format!("- Truth score: `{}%`\n", record.truth_score));
    md.push_str(&format!("- Status: `{}`\n", record.status));
    md.push_str(&format!("- Category: {}\n", record.category));
    md.push_str(&format!("- Type: `{}`\n", record.kind));
    md.push_str(&format!("- Sources: {}\n", record.source_count));
    // Keep the raw value when it does not parse; the note is still useful.
    let checked = format_timestamp(&record.timestamp).unwrap_or_else(|_| record.timestamp.clone());
    md.push_str(&format!("- Checked: {checked}\n\n"));

    md.push_str("## Content\n");
    if record.content.trim().is_empty() {
        md.push_str("_No content recorded._\n");
    } else {
        md.push_str(&record.content);
        md.push('\n');
    }

    fs::write(&note_path, md).with_context(|| format!("writing {}", note_path.display()))?;
    Ok(note_path)
}

fn index_title(record: &ReportRecord) -> String {
    const MAX_CHARS: usize = 60;
    let content = record.content.trim();
    if content.chars().count() <= MAX_CHARS {
        return content.to_string();
    }
    let mut title: String = content.chars().take(MAX_CHARS).collect();
    title.push_str("...");
    title
}

// Ids come from callers; keep them to one safe path segment.
fn note_stem(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn indent_yaml_block(s: &str) -> String {
    let mut out = String::new();
    for line in s.lines() {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::report_history;

    #[test]
    fn exports_every_report_and_an_index() {
        let dir = tempfile::tempdir().unwrap();
        let records = report_history();

        let written = export_reports(&records, dir.path()).unwrap();
        assert_eq!(written, 5);

        let paths = ExportPaths::new(dir.path());
        for record in &records {
            assert!(paths.note_path(&record.id).exists());
        }

        let index = fs::read_to_string(paths.index_path()).unwrap();
        assert!(index.starts_with("# MOC - Reports"));
        assert!(index.contains("Total: 5 | Verified: 3 | False: 2 | Uncertain: 0 | Avg. truth score: 60%"));
        assert!(index.contains("- [[Reports/4|Cryptocurrency investment scheme promises 500% returns guara...]] (8%, false)"));
        assert!(index.contains("- Finance (1)"));
    }

    #[test]
    fn note_carries_frontmatter_and_formatted_time() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ExportPaths::new(dir.path());
        paths.ensure().unwrap();

        let record = report_history().remove(1);
        let path = write_report_note(&paths, &record).unwrap();
        let note = fs::read_to_string(path).unwrap();

        assert!(note.starts_with("---\nid: 2\nkind: url\ntruth_score: 92\nstatus: verified\n"));
        assert!(note.contains("- Checked: Jan 15, 2024, 09:15 AM"));
        assert!(note.contains("## Content\nLocal election results"));
    }

    #[test]
    fn empty_export_still_writes_index() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(export_reports(&[], dir.path()).unwrap(), 0);
        let index = fs::read_to_string(ExportPaths::new(dir.path()).index_path()).unwrap();
        assert!(index.contains("_No reports found._"));
        assert!(index.contains("_No categories found._"));
    }

    #[test]
    fn unsafe_ids_stay_inside_reports_dir() {
        let paths = ExportPaths::new("/tmp/out");
        assert_eq!(
            paths.note_path("../etc/passwd"),
            PathBuf::from("/tmp/out/Reports/___etc_passwd.md")
        );
    }
}
