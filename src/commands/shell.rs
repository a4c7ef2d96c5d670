//! Interactive session over a loaded list.
//!
//! Each input line is one user action; the list is re-rendered after every
//! action that changes what is shown. Edits last until the session ends.

use std::io::Write;

use anyhow::{Context, Result};
use apptbook_core::appointment::{parse_date, parse_time};
use apptbook_core::{AppointmentStore, Direction, NewAppointment, SortField};
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::render::{render_count, render_list, Render};

#[derive(Debug, PartialEq)]
enum ShellCommand {
    List,
    Search(String),
    Sort(SortField),
    Order(Direction),
    Add,
    Remove(String),
    Help,
    Quit,
}

const HELP: &str = "\
  list               show the current view
  search <text>      filter by pet, owner or notes (no text clears the filter)
  sort <field>       petName, ownerName, aptNotes or date
  order <asc|desc>   sort direction
  add                add an appointment
  rm <id>            remove an appointment
  help               show this help
  quit               leave (edits are not saved)";

pub fn run(mut store: AppointmentStore) -> Result<()> {
    print_view(&store);
    println!("{}", "Type 'help' for commands".dimmed());

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("{} ", ">".green());
        std::io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line).context("Failed to read input")? == 0 {
            println!();
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                continue;
            }
        };

        if !handle(&mut store, command, prompt_new_appointment) {
            break;
        }
    }

    Ok(())
}

/// Apply one command to the store. Returns `false` when the session should end.
///
/// `form` collects a new appointment for `add`; if it fails the error is
/// reported and the session goes on.
fn handle<F>(store: &mut AppointmentStore, command: ShellCommand, form: F) -> bool
where
    F: FnOnce() -> Result<NewAppointment>,
{
    match command {
        ShellCommand::Quit => return false,
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::List => print_view(store),
        ShellCommand::Search(query) => {
            store.set_query(query);
            print_view(store);
        }
        ShellCommand::Sort(field) => {
            store.set_sort_field(field);
            print_view(store);
        }
        ShellCommand::Order(direction) => {
            store.set_direction(direction);
            print_view(store);
        }
        ShellCommand::Add => match form() {
            Ok(new) => {
                let id = store.add(new);
                if let Some(added) = store.appointments().get(&id) {
                    println!("{}", format!("  Added: {added} (#{id})").green());
                }
            }
            Err(e) => eprintln!("  {}", format!("Could not add appointment: {e:#}").red()),
        },
        ShellCommand::Remove(id) => match store.appointments().get(&id).cloned() {
            Some(removed) => {
                store.remove(&id);
                println!("{}", format!("  Removed: {removed} (#{id})").red());
            }
            None => println!("{}", format!("  No appointment with id {id}").dimmed()),
        },
    }

    true
}

fn print_view(store: &AppointmentStore) {
    let visible = store.visible();
    println!("{}", store.state().view.render());
    println!("{}", render_list(&visible));
    println!("{}", render_count(visible.len(), store.appointments().len()).dimmed());
}

/// Parse one input line. Blank lines yield `None`.
fn parse_command(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "list" | "ls" => ShellCommand::List,
        "search" | "find" => ShellCommand::Search(rest.to_string()),
        "sort" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: sort <petName|ownerName|aptNotes|date>");
            }
            ShellCommand::Sort(rest.parse()?)
        }
        "order" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: order <asc|desc>");
            }
            ShellCommand::Order(rest.parse()?)
        }
        "add" | "new" => ShellCommand::Add,
        "rm" | "remove" | "delete" => {
            if rest.is_empty() {
                anyhow::bail!("Usage: rm <id>");
            }
            ShellCommand::Remove(rest.to_string())
        }
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => anyhow::bail!("Unknown command '{other}'. Type 'help' for commands"),
    };

    Ok(Some(command))
}

/// Ask for the fields of a new appointment.
fn prompt_new_appointment() -> Result<NewAppointment> {
    let pet_name: String = Input::new().with_prompt("  Pet name").interact_text()?;
    let owner_name: String = Input::new().with_prompt("  Owner name").interact_text()?;
    let date = prompt_with_retry("  Date (YYYY-MM-DD)", |s| parse_date(s).map(|_| ()))?;
    let time = prompt_with_retry("  Time (HH:MM)", |s| parse_time(s).map(|_| ()))?;
    let apt_notes: String = Input::new()
        .with_prompt("  Notes (skip)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    Ok(NewAppointment::from_form(pet_name, owner_name, apt_notes, &date, &time)?)
}

/// Prompt until `validate` accepts the input.
fn prompt_with_retry<F, E>(prompt: &str, validate: F) -> Result<String>
where
    F: Fn(&str) -> Result<(), E>,
    E: std::fmt::Display,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match validate(&input) {
            Ok(()) => return Ok(input),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(parse_command("   \n").unwrap(), None);
    }

    #[test]
    fn parses_search_with_spaces() {
        assert_eq!(
            parse_command("search  ana lopez\n").unwrap(),
            Some(ShellCommand::Search("ana lopez".into()))
        );
    }

    #[test]
    fn bare_search_clears_filter() {
        assert_eq!(
            parse_command("search").unwrap(),
            Some(ShellCommand::Search(String::new()))
        );
    }

    #[test]
    fn parses_sort_and_order() {
        assert_eq!(
            parse_command("sort ownerName").unwrap(),
            Some(ShellCommand::Sort(SortField::OwnerName))
        );
        assert_eq!(
            parse_command("ORDER desc").unwrap(),
            Some(ShellCommand::Order(Direction::Desc))
        );
    }

    #[test]
    fn rejects_bad_sort_field() {
        assert!(parse_command("sort species").is_err());
        assert!(parse_command("sort").is_err());
    }

    #[test]
    fn parses_remove() {
        assert_eq!(
            parse_command("rm 12").unwrap(),
            Some(ShellCommand::Remove("12".into()))
        );
        assert!(parse_command("rm").is_err());
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("ls").unwrap(), Some(ShellCommand::List));
        assert_eq!(parse_command("add").unwrap(), Some(ShellCommand::Add));
        assert_eq!(parse_command("help").unwrap(), Some(ShellCommand::Help));
        assert_eq!(parse_command("exit").unwrap(), Some(ShellCommand::Quit));
    }

    fn new_apt(pet: &str) -> NewAppointment {
        NewAppointment {
            pet_name: pet.to_string(),
            owner_name: "Ana Lopez".to_string(),
            apt_notes: String::new(),
            date: "2024-05-02 10:00".to_string(),
        }
    }

    #[test]
    fn failed_form_keeps_session_open() {
        let mut store = AppointmentStore::default();
        let keep_going = handle(&mut store, ShellCommand::Add, || {
            anyhow::bail!("IO error: not a terminal")
        });
        assert!(keep_going);
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn add_uses_form_result() {
        let mut store = AppointmentStore::default();
        assert!(handle(&mut store, ShellCommand::Add, || Ok(new_apt("Rex"))));
        let added = store.appointments().get("1").unwrap();
        assert_eq!(added.pet_name, "Rex");
    }

    #[test]
    fn remove_and_quit() {
        let mut store = AppointmentStore::default();
        store.add(new_apt("Rex"));
        store.add(new_apt("Max"));

        assert!(handle(&mut store, ShellCommand::Remove("1".into()), || unreachable!()));
        assert!(handle(&mut store, ShellCommand::Remove("9".into()), || unreachable!()));
        let ids: Vec<&str> = store.appointments().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);

        assert!(!handle(&mut store, ShellCommand::Quit, || unreachable!()));
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(parse_command("frobnicate").is_err());
    }
}
