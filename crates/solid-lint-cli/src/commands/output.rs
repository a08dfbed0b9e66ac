//! Shared output formatting for analysis results.

use anyhow::Result;
use solid_lint_core::AnalyzedLine;

use crate::OutputFormat;

/// Prints analyzed lines in the specified format.
///
/// Returns true when any line is flagged.
pub fn print(source_name: &str, lines: &[AnalyzedLine], format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Text => print_text(source_name, lines),
        OutputFormat::Json => print_json(lines)?,
        OutputFormat::Compact => print_compact(source_name, lines),
    }
    Ok(lines.iter().any(|l| l.flagged))
}

fn print_text(source_name: &str, lines: &[AnalyzedLine]) {
    let flagged = lines.iter().filter(|l| l.flagged).count();

    println!("== {source_name}");
    for (idx, line) in lines.iter().enumerate() {
        if line.flagged {
            println!("\x1b[31m{:>4} | {}\x1b[0m", idx + 1, line.content);
            for note in line.note.lines() {
                println!("     | \x1b[33m{note}\x1b[0m");
            }
        } else {
            println!("{:>4} | {}", idx + 1, line.content);
        }
    }

    let color = if flagged > 0 { "\x1b[31m" } else { "\x1b[32m" };
    println!("{}Flagged {} of {} line(s)\x1b[0m", color, flagged, lines.len());
}

fn print_json(lines: &[AnalyzedLine]) -> Result<()> {
    let json = serde_json::to_string_pretty(lines)?;
    println!("{json}");
    Ok(())
}

fn print_compact(source_name: &str, lines: &[AnalyzedLine]) {
    for (idx, line) in lines.iter().enumerate() {
        if !line.flagged {
            continue;
        }
        for note in line.note.lines() {
            println!("{source_name}:{}: {note}", idx + 1);
        }
    }
}
