use anyhow::{bail, Result};
use colored::Colorize;
use phoneword::{all_combinations, is_keypad_digit};
use std::fmt::Write;

pub fn execute(digits: &str, limit: usize) -> Result<()> {
    print!("{}", render(digits.trim(), limit)?);
    Ok(())
}

fn render(digits: &str, limit: usize) -> Result<String> {
    if let Some(c) = digits.chars().find(|&c| !is_keypad_digit(c)) {
        bail!("{:?} has no keypad letters; use digits 2-9", c);
    }

    let combinations = all_combinations(digits);
    let Some(total) = combinations.total() else {
        bail!("{} digits have too many combinations to count", digits.len());
    };

    let mut out = String::new();
    writeln!(out, "{} {} combinations", digits.bold(), total.to_string().cyan())?;
    for word in combinations.take(limit) {
        writeln!(out, "  {}", word)?;
    }
    if total > limit {
        writeln!(out, "  {}", format!("... {} more", total - limit).dimmed())?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_with_limit() {
        colored::control::set_override(false);

        assert_eq!(
            render("22", 4).unwrap(),
            "22 9 combinations\n  AA\n  AB\n  AC\n  BA\n  ... 5 more\n"
        );
        assert_eq!(render("7", 10).unwrap(), "7 4 combinations\n  P\n  Q\n  R\n  S\n");
    }

    #[test]
    fn test_render_rejects_non_keypad_digits() {
        let err = render("2013", 5).unwrap_err();
        assert_eq!(err.to_string(), "'0' has no keypad letters; use digits 2-9");
    }

    #[test]
    fn test_render_rejects_uncountable_segment() {
        let err = render(&"9".repeat(64), 5).unwrap_err();
        assert_eq!(err.to_string(), "64 digits have too many combinations to count");
    }
}
