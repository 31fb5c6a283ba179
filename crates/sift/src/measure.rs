use std::io::Write;

use clap::Args;
use serde_json::json;
use sift_text::measure::Measurement;

use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct MeasureArgs {
    /// Text to measure.
    pub text: String,
}

pub fn run_measure<W: Write>(args: &MeasureArgs, json: bool, out: &mut W) -> Result<()> {
    let measurement = Measurement::new(&args.text);
    let clusters = measurement.clusters().iter().map(|cluster| {
        let grapheme = &args.text[cluster.byte_start..cluster.byte_end()];
        (cluster, grapheme)
    });

    if json {
        let clusters: Vec<_> = clusters
            .map(|(cluster, grapheme)| {
                json!({
                    "text": grapheme,
                    "byte": cluster.byte_start,
                    "column": cluster.column,
                    "width": cluster.width,
                })
            })
            .collect();
        let report = json!({
            "clusters": clusters,
            "total_columns": measurement.total_columns(),
            "total_bytes": measurement.total_bytes(),
        });
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:>5} {:>6} {:>5}  cluster", "byte", "column", "width")?;
    for (cluster, grapheme) in clusters {
        writeln!(
            out,
            "{:>5} {:>6} {:>5}  {:?}",
            cluster.byte_start, cluster.column, cluster.width, grapheme
        )?;
    }
    writeln!(out, "total {} columns", measurement.total_columns())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, json: bool) -> String {
        let args = MeasureArgs {
            text: text.to_string(),
        };
        let mut out = Vec::new();
        run_measure(&args, json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_lists_each_cluster() {
        let out = run("a世", false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "    0      0     1  \"a\"");
        assert_eq!(lines[2], "    1      1     2  \"世\"");
        assert_eq!(lines[3], "total 3 columns");
    }

    #[test]
    fn json_report() {
        let out = run("e\u{301}x", true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_columns"], 2);
        assert_eq!(value["total_bytes"], 4);
        assert_eq!(value["clusters"][1]["byte"], 3);
        assert_eq!(value["clusters"][1]["column"], 1);
    }
}
