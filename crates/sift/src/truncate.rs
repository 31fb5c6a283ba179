use std::io::Write;

use clap::Args;
use sift_text::ranges::ColumnRange;
use sift_text::truncate::{Truncated, truncate_offsets};

use crate::config::Config;
use crate::error::{Result, validate_offsets};

#[derive(Debug, Clone, Args)]
pub struct TruncateArgs {
    /// Text to truncate.
    pub text: String,

    /// Column budget. Defaults to SIFT_WIDTH, then 40.
    #[arg(long, short)]
    pub width: Option<usize>,

    /// Matched byte offsets, comma separated and strictly increasing.
    #[arg(long, short, value_delimiter = ',')]
    pub matches: Vec<usize>,
}

pub fn run_truncate<W: Write>(
    args: &TruncateArgs,
    config: &Config,
    json: bool,
    out: &mut W,
) -> Result<()> {
    validate_offsets(&args.matches)?;
    let width = config.width_or(args.width);
    let truncated = truncate_offsets(&args.text, &args.matches, width);

    if json {
        serde_json::to_writer(&mut *out, &truncated)?;
        writeln!(out)?;
    } else {
        write_plain(&truncated, out)?;
    }
    Ok(())
}

fn write_plain<W: Write>(truncated: &Truncated, out: &mut W) -> Result<()> {
    writeln!(out, "{}", truncated.text)?;
    if !truncated.highlights.is_empty() {
        writeln!(out, "{}", marker_line(&truncated.highlights))?;
    }
    Ok(())
}

/// Carets under every highlighted column.
fn marker_line(highlights: &[ColumnRange]) -> String {
    let end = highlights.iter().map(|r| r.end + 1).max().unwrap_or(0);
    (0..end)
        .map(|col| {
            if highlights.iter().any(|r| r.contains(col)) {
                '^'
            } else {
                ' '
            }
        })
        .collect()
}
