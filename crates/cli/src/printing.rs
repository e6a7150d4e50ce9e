use anyhow::Result;
use std::path::PathBuf;

/// Write rendered output to `output`, or to stdout if no path was given.
pub fn emit(content: &str, output: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)?;
        eprintln!("✓ Results written to {}", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Render a float for CSV, spelling out non-finite values.
pub fn csv_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{value}")
    }
}

/// Build a CSV document from a header line and pre-rendered rows.
pub fn csv_document<I>(header: &str, rows: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::from(header);
    for row in rows {
        out.push('\n');
        out.push_str(&row);
    }
    out
}

pub fn unknown_format(format: &str) -> anyhow::Error {
    anyhow::anyhow!("Unknown format '{format}'. Use: pretty, json or csv")
}
