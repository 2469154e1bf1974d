//! Line-oriented prompting with validation and re-prompt on bad input.

use anyhow::{bail, Context, Result};
use staffdesk_core::Seniority;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a plain line to the prompt output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write prompt output")
    }

    /// Reads one trimmed line. End of input is an error.
    pub fn line(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut buffer = String::new();
        let read = self
            .input
            .read_line(&mut buffer)
            .context("failed to read input")?;
        if read == 0 {
            bail!("input ended while waiting for: {}", label.trim());
        }
        Ok(buffer.trim().to_string())
    }

    /// Reads a strictly positive amount, asking again until one is given.
    pub fn positive_amount(&mut self, label: &str) -> Result<f64> {
        loop {
            let raw = self.line(label)?;
            match parse_amount(&raw) {
                Some(value) => return Ok(value),
                None => self.say("❌ Invalid amount. Enter a positive number.")?,
            }
        }
    }

    /// Reads a comma separated list, dropping blank items.
    pub fn list(&mut self, label: &str) -> Result<Vec<String>> {
        Ok(split_list(&self.line(label)?))
    }

    /// Reads a seniority level, asking again until a known one is given.
    pub fn seniority(&mut self, label: &str) -> Result<Seniority> {
        loop {
            let raw = self.line(label)?;
            match Seniority::parse(&raw) {
                Some(level) => return Ok(level),
                None => self.say("❌ Invalid level. Try again.")?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses `3500`, `3500.50`, `$3,500.50`; rejects zero, negatives and NaN.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    let value: f64 = cleaned.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_amount, split_list, Prompter};
    use staffdesk_core::Seniority;
    use std::io::Cursor;

    #[test]
    fn parse_amount_accepts_currency_formatting() {
        assert_eq!(parse_amount("3500"), Some(3500.0));
        assert_eq!(parse_amount(" $3,500.50 "), Some(3500.5));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-10"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(
            split_list("Figma, ,Photoshop,,"),
            vec!["Figma".to_string(), "Photoshop".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn positive_amount_reprompts_until_valid() {
        let input = Cursor::new("nope\n-3\n2500\n");
        let mut prompter = Prompter::new(input, Vec::new());

        let value = prompter.positive_amount("Salary: $").expect("amount");
        assert_eq!(value, 2500.0);

        let output = String::from_utf8(prompter.into_output()).expect("utf-8");
        assert_eq!(output.matches("Invalid amount").count(), 2);
    }

    #[test]
    fn seniority_reprompts_until_valid() {
        let input = Cursor::new("lead\nsemi senior\n");
        let mut prompter = Prompter::new(input, Vec::new());
        assert_eq!(
            prompter.seniority("Level: ").expect("level"),
            Seniority::SemiSenior
        );
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let err = prompter.line("Name: ").unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }
}
