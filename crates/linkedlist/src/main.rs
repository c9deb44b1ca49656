//! `llist` - CLI for linkedlist
//!
//! This binary builds a linked list from its command-line values and runs a
//! single operation on it.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use linkedlist::cli::{Cli, Command, ConfigCommand, ValuesArgs};
use linkedlist::{init_logging, linked_list, Config, DisplayConfig, LinkedList, Slice, Value};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    let style = &config.display;

    match cli.command {
        Command::Show(args) => show(&args.to_list(), style),
        Command::Len(args) => {
            println!("{}", args.to_list().len());
            Ok(())
        }
        Command::List(args) => handle_list(&args),
        Command::Get(cmd) => {
            match cmd.list.to_list().get(cmd.index) {
                Some(value) => println!("{value}"),
                None => println!("{}", style.terminator),
            }
            Ok(())
        }
        Command::Slice(cmd) => {
            let selected = cmd.list.to_list().get_item(cmd.index)?;
            show(&selected, style)
        }
        Command::Remove(cmd) => {
            let mut list = cmd.list.to_list();
            list.remove(&Value::from_arg(&cmd.target))?;
            show(&list, style)
        }
        Command::Set(cmd) => {
            let mut list = cmd.list.to_list();
            list.set_item(cmd.index, Value::from_arg(&cmd.value))?;
            show(&list, style)
        }
        Command::Demo => demo(style),
        Command::Config(config_cmd) => handle_config(&config, &config_cmd),
    }
}

fn show(list: &LinkedList, style: &DisplayConfig) -> Result<()> {
    list.write_elements(&mut io::stdout().lock(), style)?;
    Ok(())
}

fn handle_list(args: &ValuesArgs) -> Result<()> {
    let sequence = args.to_list().to_sequence()?;
    println!("{}", serde_json::to_string(&sequence)?);
    Ok(())
}

fn demo(style: &DisplayConfig) -> Result<()> {
    let mut out = io::stdout().lock();

    let mut list: LinkedList = LinkedList::new();
    writeln!(out, "Length of a new list: {}", list.len())?;
    debug!("Demo starting from an empty list");

    list.append([Value::from(7), Value::from("Hello"), Value::from(vec![1, 2, 3])]);
    list.append([Value::from(8)]);
    list.append([Value::from(vec![1, 2, 3])]);
    list.write_elements(&mut out, style)?;

    list.remove(&Value::from(8))?;
    list.remove(&Value::from("Hello"))?;
    list.remove(&Value::from(vec![1, 2, 3]))?;
    list.write_elements(&mut out, style)?;
    writeln!(out, "Length after removals: {}", list.len())?;

    if let Some(head) = list.head() {
        let next = head
            .next()
            .map_or_else(|| style.terminator.clone(), |n| n.data().to_string());
        writeln!(out, "Head: {}, next: {next}", head.data())?;
    }

    let sequence = list.to_sequence()?;
    writeln!(out, "As a sequence: {}", serde_json::to_string(&sequence)?)?;
    list.append(sequence);
    list.write_elements(&mut out, style)?;

    let show_get = |index: isize| {
        list.get(index)
            .map_or_else(|| style.terminator.clone(), ToString::to_string)
    };
    writeln!(out, "get(1) = {}", show_get(1))?;
    writeln!(out, "get(8) = {}", show_get(8))?;

    writeln!(out, "Reversed:")?;
    list.get_item(Slice::reversed())?
        .write_elements(&mut out, style)?;

    if let Err(err) = list.get_item(8) {
        writeln!(out, "list[8] fails: {err}")?;
    }

    list.set_item(0, Value::from("Hello"))?;
    list.write_elements(&mut out, style)?;

    let nested: LinkedList = linked_list![0, list];
    writeln!(out, "Nested: {nested}")?;
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Display]");
                println!("  Label:      {:?}", config.display.label);
                println!("  Separator:  {:?}", config.display.separator);
                println!("  Terminator: {:?}", config.display.terminator);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}
