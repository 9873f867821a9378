use crate::commands::{birthday, contacts};
use crate::error::{malformed_command, message_for};
use crate::util::title_case;
use abook_config::AppConfig;
use abook_core::{Address, Birthday, Email, Name, Phone, Record};
use abook_store::{persist, ContactBook};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::warn;

const HELP: &str = "Доступні команди: 'hello', 'add', 'change', 'delete <name>', \
'search <name>', 'birthday <N>', 'show all', 'good bye', 'close', 'exit'";

/// Line-oriented interactive shell. Generic over reader and writer so
/// tests can drive a whole session through in-memory buffers.
pub struct Shell<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs the command loop until an exit command or end of input.
    /// Command errors are printed and the loop continues; the book is
    /// saved after every command except exit, and a failed save is a
    /// warning, not a crash.
    pub fn run(
        &mut self,
        book: &mut ContactBook,
        config: &AppConfig,
        data_path: &Path,
    ) -> Result<()> {
        writeln!(self.writer, "{HELP}")?;
        loop {
            let Some(line) = self.prompt_line("Enter your command: ")? else {
                break;
            };
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if matches!(line.as_str(), "good bye" | "close" | "exit") {
                writeln!(self.writer, "Good bye!")?;
                break;
            }

            match self.dispatch(&line, book, config) {
                Ok(message) => writeln!(self.writer, "{message}")?,
                Err(err) => writeln!(self.writer, "{}", message_for(&err))?,
            }

            if let Err(err) = persist::save(book, data_path) {
                warn!(error = %err, path = %data_path.display(), "failed to save contact book");
                writeln!(self.writer, "Warning: contacts were not saved: {err}")?;
            }
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        line: &str,
        book: &mut ContactBook,
        config: &AppConfig,
    ) -> Result<String> {
        let mut tokens = line.split_whitespace();
        let head = tokens.next().unwrap_or_default();
        match head {
            "hello" if line == "hello" => Ok("How can I help you?".to_string()),
            "add" => {
                no_arguments(tokens, "add")?;
                let record = self.prompt_record()?;
                Ok(contacts::add(book, record))
            }
            "change" => {
                no_arguments(tokens, "change")?;
                let record = self.prompt_record()?;
                Ok(contacts::change(book, record))
            }
            "delete" => {
                let name = single_argument(tokens, "delete <name>")?;
                Ok(contacts::delete(book, &title_case(name))?)
            }
            "search" => {
                let name = single_argument(tokens, "search <name>")?;
                Ok(contacts::search(book, &title_case(name)))
            }
            "birthday" => {
                let days = window_argument(tokens, config.birthday_window_days)?;
                Ok(birthday::upcoming(book, today(), days))
            }
            "show" if line == "show all" => Ok(contacts::show_all(book)),
            _ => Ok(format!("Невірно введена команда. {HELP}")),
        }
    }

    /// Interactive field collection for `add` and `change`. Prompts
    /// match the original tool; the name is title-cased before it
    /// becomes the store key.
    fn prompt_record(&mut self) -> Result<Record> {
        let raw = self.prompt_field("Введіть ім'я: ")?;
        let name = Name::new(title_case(&raw))?;

        let raw = self.prompt_field("Введіть номер: ")?;
        let phone = Phone::new(raw.trim())?;
        let phones = if phone.as_str().is_empty() {
            Vec::new()
        } else {
            vec![phone]
        };

        let raw = self.prompt_field("Введіть дату народження: ")?;
        let birthday = Birthday::parse(raw.trim())?;

        let raw = self.prompt_field("Введіть email-пошту: ")?;
        let email = match raw.trim() {
            "" => None,
            value => Some(Email::new(value)?),
        };

        let raw = self.prompt_field("Введіть адресу: ")?;
        let address = match raw.trim() {
            "" => None,
            _ => Some(Address::new(raw)),
        };

        Ok(Record::from_parts(
            Some(name),
            phones,
            Some(birthday),
            email,
            address,
        )?)
    }

    fn prompt_field(&mut self, prompt: &str) -> Result<String> {
        Ok(self.prompt_line(prompt)?.unwrap_or_default())
    }

    /// Writes the prompt, reads one line. `None` means end of input.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn no_arguments<'a, I>(mut tokens: I, usage: &str) -> Result<()>
where
    I: Iterator<Item = &'a str>,
{
    if tokens.next().is_some() {
        return Err(malformed_command(usage.to_string()));
    }
    Ok(())
}

fn single_argument<'a, I>(mut tokens: I, usage: &str) -> Result<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    let value = tokens
        .next()
        .ok_or_else(|| malformed_command(usage.to_string()))?;
    if tokens.next().is_some() {
        return Err(malformed_command(usage.to_string()));
    }
    Ok(value)
}

/// `birthday` takes an optional non-negative day count; with no
/// argument the configured default window applies.
fn window_argument<'a, I>(mut tokens: I, default_days: i64) -> Result<i64>
where
    I: Iterator<Item = &'a str>,
{
    let usage = "birthday <N> (N is a number of days)";
    let days = match tokens.next() {
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|days| *days >= 0)
            .ok_or_else(|| malformed_command(usage))?,
        None => default_days,
    };
    if tokens.next().is_some() {
        return Err(malformed_command(usage));
    }
    Ok(days)
}
