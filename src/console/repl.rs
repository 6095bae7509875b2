//! Interactive line-oriented console loop.
//!
//! Binds operator commands to the controller one line at a time. The loop
//! is strictly sequential: a command's service call completes before the
//! next line is read, so the controller's stale-token guard is a safety
//! net here rather than a daily occurrence.

use crate::{
    client::PromotionApi,
    console::Console,
    core::form::FormState,
    errors::Result,
};
use std::fmt::Write as _;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  set <field> <value>   set a form field (id, title, code, type, amount,
                        site_wide, start, end, product_id)
  form                  show the edit form
  clear                 reset the form and the id field
  create                create a promotion from the form
  update                replace the promotion identified by the id field
  retrieve [id]         fetch a promotion into the form
  delete [id]           delete a promotion
  activate [id]         activate a promotion
  deactivate [id]       deactivate a promotion
  list                  list all promotions
  search                search using the form fields as filter
  help                  show this help
  quit                  exit";

/// A parsed console command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    ShowForm,
    Clear,
    Set { field: Field, value: String },
    Create,
    Update,
    Retrieve { id: Option<String> },
    Delete { id: Option<String> },
    Activate { id: Option<String> },
    Deactivate { id: Option<String> },
    List,
    Search,
}

/// A settable form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    Code,
    Type,
    Amount,
    SiteWide,
    Start,
    End,
    ProductId,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "code" => Some(Self::Code),
            "type" => Some(Self::Type),
            "amount" => Some(Self::Amount),
            "site_wide" | "site-wide" => Some(Self::SiteWide),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "product_id" | "product" => Some(Self::ProductId),
            _ => None,
        }
    }
}

/// Parses one input line; the error is the usage text to print.
pub fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Err(HELP.to_string());
    };

    match verb {
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "form" => Ok(Command::ShowForm),
        "clear" => Ok(Command::Clear),
        "create" => Ok(Command::Create),
        "update" => Ok(Command::Update),
        "retrieve" | "get" => Ok(Command::Retrieve {
            id: parts.next().map(str::to_string),
        }),
        "delete" => Ok(Command::Delete {
            id: parts.next().map(str::to_string),
        }),
        "activate" => Ok(Command::Activate {
            id: parts.next().map(str::to_string),
        }),
        "deactivate" => Ok(Command::Deactivate {
            id: parts.next().map(str::to_string),
        }),
        "list" => Ok(Command::List),
        "search" => Ok(Command::Search),
        "set" => {
            let Some(name) = parts.next() else {
                return Err("usage: set <field> <value>".to_string());
            };
            let Some(field) = Field::from_name(name) else {
                return Err(format!(
                    "unknown field '{name}' (expected id, title, code, type, amount, \
                     site_wide, start, end, or product_id)"
                ));
            };
            let value = parts.collect::<Vec<_>>().join(" ");
            Ok(Command::Set {
                field,
                value,
            })
        }
        other => Err(format!("unknown command '{other}' - try 'help'")),
    }
}

fn set_field(form: &mut FormState, field: Field, value: String) {
    match field {
        Field::Id => form.id = value,
        Field::Title => form.title = value,
        Field::Code => form.code = value,
        Field::Type => form.promo_type = value,
        Field::Amount => form.amount = value,
        Field::SiteWide => form.is_site_wide = value,
        Field::Start => form.start = value,
        Field::End => form.end = value,
        Field::ProductId => form.product_id = value,
    }
}

fn format_form(form: &FormState) -> String {
    let mut out = String::new();
    for (name, value) in [
        ("id", &form.id),
        ("title", &form.title),
        ("code", &form.code),
        ("type", &form.promo_type),
        ("amount", &form.amount),
        ("site_wide", &form.is_site_wide),
        ("start", &form.start),
        ("end", &form.end),
        ("product_id", &form.product_id),
    ] {
        // Infallible: writing to a String cannot fail.
        let _ = writeln!(out, "  {name:<11} {value}");
    }
    out
}

/// Runs the console loop until `quit` or end of input.
///
/// # Errors
/// Returns an error only for terminal I/O failures; action failures are
/// shown in the flash area and the loop continues.
pub async fn run<S: PromotionApi>(console: &mut Console<S>) -> Result<()> {
    let stdin = std::io::stdin();
    let mut out = std::io::stdout();
    writeln!(out, "Promotions admin console. Type 'help' for commands.")?;

    loop {
        write!(out, "promo> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // end of input
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(usage) => {
                writeln!(out, "{usage}")?;
                continue;
            }
        };

        let show_table = matches!(command, Command::List | Command::Search);
        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::ShowForm => write!(out, "{}", format_form(&console.form))?,
            Command::Clear => console.clear(),
            Command::Set { field, value } => set_field(&mut console.form, field, value),
            Command::Create => console.create().await,
            Command::Update => console.update().await,
            Command::Retrieve { id } => {
                if let Some(id) = id {
                    console.form.id = id;
                }
                console.retrieve().await;
            }
            Command::Delete { id } => {
                if let Some(id) = id {
                    console.form.id = id;
                }
                console.delete().await;
            }
            Command::Activate { id } => {
                if let Some(id) = id {
                    console.form.id = id;
                }
                console.activate().await;
            }
            Command::Deactivate { id } => {
                if let Some(id) = id {
                    console.form.id = id;
                }
                console.deactivate().await;
            }
            Command::List => console.list().await,
            Command::Search => console.search().await,
        }

        if !console.flash().is_empty() {
            writeln!(out, "{}", console.flash())?;
        }
        if show_table {
            if let Some(table) = console.results() {
                write!(out, "{table}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_verbs() {
        assert_eq!(parse_command("list"), Ok(Command::List));
        assert_eq!(parse_command("search"), Ok(Command::Search));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert_eq!(parse_command("form"), Ok(Command::ShowForm));
    }

    #[test]
    fn parses_optional_id_arguments() {
        assert_eq!(
            parse_command("retrieve 42"),
            Ok(Command::Retrieve {
                id: Some("42".to_string())
            })
        );
        assert_eq!(parse_command("delete"), Ok(Command::Delete { id: None }));
    }

    #[test]
    fn set_joins_multi_word_values() {
        assert_eq!(
            parse_command("set title Summer Sale"),
            Ok(Command::Set {
                field: Field::Title,
                value: "Summer Sale".to_string()
            })
        );
    }

    #[test]
    fn rejects_unknown_commands_and_fields() {
        assert!(parse_command("frobnicate").is_err());
        assert!(parse_command("set bogus x").is_err());
        assert!(parse_command("set").is_err());
    }

    #[test]
    fn set_field_writes_the_right_slot() {
        let mut form = FormState::new();
        set_field(&mut form, Field::SiteWide, "true".to_string());
        set_field(&mut form, Field::Type, "percentage".to_string());
        assert_eq!(form.is_site_wide, "true");
        assert_eq!(form.promo_type, "percentage");
    }
}
