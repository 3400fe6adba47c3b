//! Validated line-based input.
//!
//! Every prompt trims its input and re-asks until the answer is valid.
//! End of input surfaces as `io::ErrorKind::UnexpectedEof` so the session
//! can wind down cleanly.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use mcu_core::{Category, CheckupDate, Gender};

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output for rendering.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` on its own line.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn success(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "✓ {}", message)
    }

    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "✗ {}", message)
    }

    pub fn warning(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "⚠ {}", message)
    }

    /// One trimmed line, possibly empty.
    pub fn line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buf.trim().to_string())
    }

    /// A non-empty trimmed line.
    pub fn text(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let answer = self.line(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.error("Input cannot be empty. Please try again.")?;
        }
    }

    /// A number in `min..=max`.
    pub fn number<T>(&mut self, prompt: &str, min: T, max: T) -> io::Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            let answer = self.text(prompt)?;
            match answer.parse::<T>() {
                Ok(n) if n >= min && n <= max => return Ok(n),
                Ok(_) => self.error(format!("Please enter a number between {} and {}.", min, max))?,
                Err(_) => self.error("Please enter a valid number.")?,
            }
        }
    }

    /// A menu choice in `0..=max`.
    pub fn choice(&mut self, max: u32) -> io::Result<u32> {
        self.number("\nSelect option: ", 0, max)
    }

    /// A price: finite and at least zero.
    pub fn price(&mut self, prompt: &str) -> io::Result<f64> {
        loop {
            let answer = self.text(prompt)?;
            match answer.parse::<f64>() {
                Ok(p) if p.is_finite() && p >= 0.0 => return Ok(p),
                Ok(_) => self.error("Please enter a number greater than or equal to 0.00.")?,
                Err(_) => self.error("Please enter a valid number.")?,
            }
        }
    }

    pub fn gender(&mut self) -> io::Result<Gender> {
        loop {
            let answer = self.text("Enter gender (M/F): ")?;
            match answer.parse::<Gender>() {
                Ok(g) => return Ok(g),
                Err(_) => self.error("Please enter 'M' for Male or 'F' for Female.")?,
            }
        }
    }

    /// Pick a category from a numbered list.
    pub fn category(&mut self) -> io::Result<Category> {
        self.say("Available categories:")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            self.say(format_args!("{}. {}", i + 1, category))?;
        }
        let max = Category::ALL.len();
        let pick: usize = self.number(&format!("Select category (1-{}): ", max), 1, max)?;
        Ok(Category::ALL[pick - 1])
    }

    /// A calendar date typed as `DD/MM/YYYY`.
    pub fn date(&mut self, prompt: &str) -> io::Result<CheckupDate> {
        let prompt = format!("{} (DD/MM/YYYY): ", prompt);
        loop {
            let answer = self.text(&prompt)?;
            match answer.parse::<CheckupDate>() {
                Ok(date) => return Ok(date),
                Err(_) => self.error("Please enter a valid date in DD/MM/YYYY format.")?,
            }
        }
    }

    /// True only for `y` or `yes`, in any case. Empty answers are re-asked.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.text(prompt)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
