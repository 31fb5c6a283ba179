use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::Deserialize;
use serde_json::json;
use sift_list::session_item::{Session, SessionItem, SessionRow};

use crate::config::{Config, expand_path};
use crate::error::{Result, SiftError, validate_offsets};

#[derive(Debug, Clone, Args)]
pub struct SessionsArgs {
    /// JSON file holding an array of sessions. `~` and `$VAR` are expanded.
    pub file: String,

    /// Row width. Defaults to SIFT_WIDTH, then 40.
    #[arg(long, short)]
    pub width: Option<usize>,

    /// Session id shown as "Active now".
    #[arg(long)]
    pub active: Option<String>,

    /// Session id rendered as focused.
    #[arg(long)]
    pub focus: Option<String>,

    /// Reference time in Unix seconds. Defaults to the system clock.
    #[arg(long)]
    pub now: Option<i64>,
}

/// One entry of a sessions file.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRecord {
    #[serde(flatten)]
    pub session: Session,
    #[serde(default)]
    pub match_offsets: Vec<usize>,
}

pub fn load_sessions(path: &Path) -> Result<Vec<SessionRecord>> {
    if !path.exists() {
        return Err(SiftError::MissingPath {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<SessionRecord> = serde_json::from_str(&raw)?;
    for record in &records {
        validate_offsets(&record.match_offsets)?;
    }
    tracing::debug!(path = %path.display(), count = records.len(), "sessions loaded");
    Ok(records)
}

pub fn run_sessions<W: Write>(
    args: &SessionsArgs,
    config: &Config,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let path = expand_path(&args.file, |key| std::env::var(key).ok());
    let records = load_sessions(&path)?;
    for id in [&args.active, &args.focus].into_iter().flatten() {
        if !records.iter().any(|record| &record.session.id == id) {
            return Err(SiftError::SessionNotFound { id: id.clone() });
        }
    }

    let width = config.width_or(args.width);
    let now = args.now.unwrap_or_else(|| chrono::Utc::now().timestamp());
    let rows = render_rows(records, width, now, args);

    if json {
        let rows: Vec<_> = rows
            .iter()
            .map(|(id, row)| json!({ "id": id, "row": row }))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    for (_, row) in &rows {
        let marker = if row.focused { '>' } else { ' ' };
        writeln!(out, "{marker}{}", row.plain())?;
    }
    Ok(())
}

fn render_rows(
    records: Vec<SessionRecord>,
    width: usize,
    now: i64,
    args: &SessionsArgs,
) -> Vec<(String, SessionRow)> {
    records
        .into_iter()
        .map(|record| {
            let id = record.session.id.clone();
            let is_active = args.active.as_deref() == Some(id.as_str());
            let mut item = SessionItem::new(record.session, is_active, now);
            item.set_width(width);
            item.set_match_offsets(record.match_offsets);
            if args.focus.as_deref() == Some(id.as_str()) {
                item.focus();
            }
            (id, item.render())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_defaults_optional_fields() {
        let records: Vec<SessionRecord> =
            serde_json::from_str(r#"[{"id":"a","title":"t","created_at":5}]"#).unwrap();
        assert_eq!(records[0].session.updated_at, 0);
        assert!(records[0].match_offsets.is_empty());
    }

    #[test]
    fn missing_file_is_reported() {
        let path = std::path::PathBuf::from("/definitely/not/here/sessions.json");
        let error = load_sessions(&path).unwrap_err();
        assert!(matches!(error, SiftError::MissingPath { .. }));
        assert_eq!(error.exit_code(), 3);
    }
}
