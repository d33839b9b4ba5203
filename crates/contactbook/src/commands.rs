// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client subcommands: `list`, `add`, `delete` and `config`.
//!
//! Each one drives the same cache, form and list state a front end would,
//! and prints what that front end would show.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use colored::Colorize;

use contactbook_client::list::EMPTY_STATE;
use contactbook_client::{
    ContactApi, ContactForm, ContactList, ContactsCache, Field, ListView, Prompt, SortOrder,
    SubmitPhase,
};
use contactbook_config::ContactbookConfig;
use contactbook_core::ContactId;

pub async fn list<A: ContactApi + ?Sized>(
    api: &A,
    sort: SortOrder,
    out: &mut impl Write,
) -> io::Result<ExitCode> {
    let mut cache = ContactsCache::new();
    cache.load(api).await;
    if !cache.error().is_empty() {
        writeln!(out, "{}", cache.error().red())?;
        return Ok(ExitCode::FAILURE);
    }

    let mut view = ContactList::new();
    view.set_sort(sort);
    match view.view(cache.contacts()) {
        ListView::Empty => writeln!(out, "{EMPTY_STATE}")?,
        ListView::Populated { count, rows } => {
            writeln!(
                out,
                "{} ({count})  sort: {}",
                "Contacts".bold(),
                sort.label()
            )?;
            for row in rows {
                writeln!(
                    out,
                    "{}  {}  {}  {}  {}  {}",
                    row.id.as_str().dimmed(),
                    row.name.bold(),
                    row.email,
                    row.phone,
                    row.message,
                    row.created
                )?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Raw field values for `add`, as typed.
#[derive(Debug, Default)]
pub struct AddFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

pub async fn add<A: ContactApi + ?Sized>(
    api: &A,
    fields: AddFields,
    out: &mut impl Write,
) -> io::Result<ExitCode> {
    let mut form = ContactForm::new();
    form.set_field(Field::Name, fields.name);
    form.set_field(Field::Email, fields.email);
    form.set_field(Field::Phone, fields.phone);
    form.set_field(Field::Message, fields.message);

    let mut created = None;
    match form.submit(api, |c| created = Some(c)).await {
        SubmitPhase::Succeeded => {
            writeln!(out, "{}", form.success_message().green())?;
            if let Some(contact) = created {
                writeln!(out, "id: {}", contact.id)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        SubmitPhase::Failed => {
            writeln!(out, "{}", form.submit_error().red())?;
            Ok(ExitCode::FAILURE)
        }
        SubmitPhase::Idle | SubmitPhase::Submitting => {
            for message in form.errors().messages() {
                writeln!(out, "{}", message.red())?;
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Prompt over a line-based terminal. `assume_yes` answers every
/// confirmation without reading input.
pub struct TerminalPrompt<R, W> {
    assume_yes: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(assume_yes: bool, input: R, output: W) -> Self {
        Self {
            assume_yes,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if write!(self.output, "{message} [y/N] ").is_err() || self.output.flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if self.input.read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message.red());
    }
}

pub async fn delete<A, P>(
    api: &A,
    id: &ContactId,
    prompt: &mut P,
    out: &mut impl Write,
) -> io::Result<ExitCode>
where
    A: ContactApi + ?Sized,
    P: Prompt + ?Sized,
{
    let mut list = ContactList::new();
    if !list.begin_delete(id, prompt) {
        writeln!(out, "Cancelled.")?;
        return Ok(ExitCode::SUCCESS);
    }

    let result = api.delete(id).await;
    let mut removed = false;
    list.finish_delete(id, result, prompt, |_| removed = true);

    if removed {
        writeln!(out, "{}", format!("Deleted {id}").green())?;
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

pub fn print_config(config: &ContactbookConfig, out: &mut impl Write) -> io::Result<ExitCode> {
    let rendered = toml::to_string_pretty(config).map_err(io::Error::other)?;
    write!(out, "{rendered}")?;
    Ok(ExitCode::SUCCESS)
}
