//! Line prompts with validation loops.
//!
//! All reading goes through the [`Prompter`] trait so menu handlers can be
//! driven by a terminal, by piped stdin, or by a script in tests. Invalid
//! input is reported and asked again; only end of input escapes a loop, as
//! an [`InputClosed`] error.

use std::fmt;
use std::io::{self, BufRead, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

/// Source of user input lines.
pub trait Prompter {
    /// Show `prompt` and read one line without its line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Raised when input ends in the middle of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entrada encerrada")
    }
}

impl std::error::Error for InputClosed {}

/// Reads from the terminal with dialoguer, or from stdin lines when piped.
pub struct TerminalPrompter {
    interactive: bool,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        if self.interactive {
            let result = Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text();
            return match result {
                Ok(line) => Ok(Some(line)),
                Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    Ok(None)
                }
                Err(err) => Err(anyhow::anyhow!("Falha ao ler entrada: {}", err)),
            };
        }

        print!("{}: ", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| anyhow::anyhow!("Falha ao ler entrada: {}", e))?;
        if read == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Constraint on numeric answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    NonNegative,
    Positive,
}

impl Bound {
    fn accepts(&self, value: f64) -> bool {
        match self {
            Self::NonNegative => value >= 0.0,
            Self::Positive => value > 0.0,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NonNegative => "O valor não pode ser negativo.",
            Self::Positive => "O valor deve ser maior que zero.",
        }
    }
}

const EMPTY_FIELD: &str = "Este campo não pode ser vazio.";
const INVALID_NUMBER: &str = "Valor inválido. Insira um número válido com ponto (.) para decimais.";

/// Parse a decimal accepting either `,` or `.` as separator.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn next_line(prompter: &mut dyn Prompter, prompt: &str) -> anyhow::Result<String> {
    prompter
        .read_line(prompt)?
        .ok_or_else(|| anyhow::Error::new(InputClosed))
}

/// Non-blank text, trimmed.
pub fn text_required(prompter: &mut dyn Prompter, prompt: &str) -> anyhow::Result<String> {
    loop {
        let value = next_line(prompter, prompt)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            println!("{}", EMPTY_FIELD);
            continue;
        }
        return Ok(trimmed.to_string());
    }
}

/// Text where blank means "keep the current value".
pub fn text_optional(prompter: &mut dyn Prompter, prompt: &str) -> anyhow::Result<Option<String>> {
    let value = next_line(prompter, prompt)?;
    let trimmed = value.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

pub fn number_required(
    prompter: &mut dyn Prompter,
    prompt: &str,
    bound: Bound,
) -> anyhow::Result<f64> {
    loop {
        match number_answer(prompter, prompt, bound)? {
            Some(value) => return Ok(value),
            None => println!("{}", EMPTY_FIELD),
        }
    }
}

/// Number where blank means "keep the current value".
///
/// With `zero_keeps_previous`, an answer of zero also keeps the current value.
pub fn number_optional(
    prompter: &mut dyn Prompter,
    prompt: &str,
    bound: Bound,
    zero_keeps_previous: bool,
) -> anyhow::Result<Option<f64>> {
    if zero_keeps_previous {
        // Zero is routed to "keep" before the bound check so a Positive
        // field does not reject it.
        loop {
            let value = next_line(prompter, prompt)?;
            if value.trim().is_empty() {
                return Ok(None);
            }
            match parse_decimal(&value) {
                Some(parsed) if parsed == 0.0 => return Ok(None),
                Some(parsed) if bound.accepts(parsed) => return Ok(Some(parsed)),
                Some(_) => println!("{}", bound.message()),
                None => println!("{}", INVALID_NUMBER),
            }
        }
    }
    number_answer(prompter, prompt, bound)
}

/// Loop until the answer is blank (`None`) or a number within `bound`.
fn number_answer(
    prompter: &mut dyn Prompter,
    prompt: &str,
    bound: Bound,
) -> anyhow::Result<Option<f64>> {
    loop {
        let value = next_line(prompter, prompt)?;
        if value.trim().is_empty() {
            return Ok(None);
        }
        match parse_decimal(&value) {
            Some(parsed) if bound.accepts(parsed) => return Ok(Some(parsed)),
            Some(_) => println!("{}", bound.message()),
            None => println!("{}", INVALID_NUMBER),
        }
    }
}

/// Positive integer id.
pub fn positive_id(prompter: &mut dyn Prompter, prompt: &str) -> anyhow::Result<u32> {
    loop {
        let value = next_line(prompter, prompt)?;
        match value.trim().parse::<i64>() {
            Ok(id) if id <= 0 => println!("ID deve ser um número positivo."),
            Ok(id) => match u32::try_from(id) {
                Ok(id) => return Ok(id),
                Err(_) => println!("Por favor, digite um número inteiro válido."),
            },
            Err(_) => println!("Por favor, digite um número inteiro válido."),
        }
    }
}

/// `s` (case-insensitive) confirms; anything else declines.
pub fn confirm(prompter: &mut dyn Prompter, prompt: &str) -> anyhow::Result<bool> {
    let value = next_line(prompter, prompt)?;
    Ok(value.trim().eq_ignore_ascii_case("s"))
}

/// Prompter fed from a fixed list of answers.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
