use anyhow::Result;
use colored::Colorize;
use phoneword::{ConvertError, Converter, ResultSet};
use serde::Serialize;
use std::fmt::{self, Write};

use crate::commands::load_dictionary;
use crate::config::{Config, OutputFormat};

/// Conversion outcome for one input number
#[derive(Debug, Serialize)]
struct NumberReport<'a> {
    number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    splits: ResultSet,
}

impl<'a> NumberReport<'a> {
    fn new(number: &'a str, outcome: Result<ResultSet, ConvertError>) -> Self {
        match outcome {
            Ok(splits) => Self {
                number,
                error: None,
                splits,
            },
            Err(e) => Self {
                number,
                error: Some(e.to_string()),
                splits: Vec::new(),
            },
        }
    }
}

pub fn execute(config: &Config, numbers: &[String], format: OutputFormat) -> Result<()> {
    let converter = Converter::new(load_dictionary(config)?);

    let reports: Vec<NumberReport> = numbers
        .iter()
        .map(|number| NumberReport::new(number, converter.convert(number)))
        .collect();

    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            render_text(&reports, &mut out)?;
            print!("{}", out);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    let mut errors = String::new();
    let failed = render_errors(&reports, &mut errors)?;
    eprint!("{}", errors);

    if failed > 0 {
        anyhow::bail!("{} of {} numbers could not be converted", failed, reports.len());
    }

    Ok(())
}

/// Successful conversions, grouped by split
fn render_text(reports: &[NumberReport], out: &mut impl Write) -> fmt::Result {
    for report in reports.iter().filter(|r| r.error.is_none()) {
        writeln!(out, "{}", report.number.bold())?;

        if report.splits.is_empty() {
            writeln!(out, "  {}", "no word pairs found".yellow())?;
            continue;
        }

        for split in &report.splits {
            let shape = format!("{} + {}", split.first_len, split.second_len);
            writeln!(out, "  {}", shape.cyan())?;
            for pair in &split.pairs {
                writeln!(out, "    {}", pair)?;
            }
        }
    }

    Ok(())
}

/// One line per rejected number; returns how many were rejected
fn render_errors(reports: &[NumberReport], out: &mut impl Write) -> Result<usize, fmt::Error> {
    let mut failed = 0;
    for report in reports {
        if let Some(error) = &report.error {
            writeln!(out, "{} {}: {}", "✗".red(), report.number.bold(), error.as_str().red())?;
            failed += 1;
        }
    }
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phoneword::Dictionary;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn converter() -> Converter {
        Converter::new(Arc::new(Dictionary::parse("motor\nnouns\nonto\nstruck\ntruck\n")))
    }

    fn render(reports: &[NumberReport]) -> (String, String, usize) {
        let mut out = String::new();
        let mut errors = String::new();
        render_text(reports, &mut out).unwrap();
        let failed = render_errors(reports, &mut errors).unwrap();
        (out, errors, failed)
    }

    #[test]
    fn test_render_text() {
        colored::control::set_override(false);
        let converter = converter();

        let reports = vec![
            NumberReport::new("6686787825", converter.convert("6686787825")),
            NumberReport::new("2222222222", converter.convert("2222222222")),
        ];

        let (out, errors, failed) = render(&reports);
        assert_eq!(
            out,
            "\
6686787825
  4 + 6
    ONTO, STRUCK
  5 + 5
    MOTOR, TRUCK
    NOUNS, TRUCK
2222222222
  no word pairs found
"
        );
        assert_eq!(errors, "");
        assert_eq!(failed, 0);
    }

    #[test]
    fn test_invalid_numbers_kept_out_of_results() {
        colored::control::set_override(false);
        let converter = converter();

        let reports = vec![
            NumberReport::new("123", converter.convert("123")),
            NumberReport::new("6686787825", converter.convert("6686787825")),
            NumberReport::new("2034567892", converter.convert("2034567892")),
        ];

        let (out, errors, failed) = render(&reports);
        assert!(out.starts_with("6686787825\n"));
        assert!(!out.contains("invalid number"));
        assert_eq!(
            errors,
            "\
✗ 123: invalid number: number should contain 10 digits
✗ 2034567892: invalid number: number shouldn't contain digit '0'
"
        );
        assert_eq!(failed, 2);
    }

    #[test]
    fn test_render_json() {
        let converter = converter();
        let reports = vec![
            NumberReport::new("6686787825", converter.convert("6686787825")),
            NumberReport::new("2034567892", converter.convert("2034567892")),
        ];

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&reports).unwrap()).unwrap();

        assert_eq!(json[0]["number"], "6686787825");
        assert!(json[0].get("error").is_none());
        assert_eq!(json[0]["splits"][1]["boundary"], 4);
        assert_eq!(json[0]["splits"][1]["pairs"][0]["first"], "MOTOR");
        assert_eq!(json[0]["splits"][1]["pairs"][0]["second"], "TRUCK");

        assert_eq!(
            json[1]["error"],
            "invalid number: number shouldn't contain digit '0'"
        );
        assert_eq!(json[1]["splits"], serde_json::json!([]));
    }
}
