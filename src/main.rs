//! Address Book - demo entry point
//!
//! Builds a small address book, edits it, and prints every confirmation and
//! record the library returns. Logs go to stderr; stdout carries only output.

use address_book::{AddressBook, Config, OutputFormat, Record};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Display;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Writes library values to stdout in the configured format.
struct Printer {
    format: OutputFormat,
}

impl Printer {
    fn print<T: Display + Serialize>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Text => println!("{}", value),
            OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        }
        Ok(())
    }

    fn print_book(&self, book: &AddressBook) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for (_, record) in book {
                    println!("{}", record);
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(book)?),
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout carries just the output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded, output format: {}", config.output);

    let printer = Printer {
        format: config.output,
    };

    if let Err(e) = run(&printer) {
        error!("Demo failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}

fn run(printer: &Printer) -> Result<()> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    printer.print(&john.add_phone("1234567890")?)?;
    printer.print(&john.add_phone("5555555555")?)?;
    printer.print(&book.add_record(john))?;

    let mut jane = Record::new("Jane")?;
    printer.print(&jane.add_phone("9876543210")?)?;
    printer.print(&book.add_record(jane))?;

    printer.print_book(&book)?;

    let john = book
        .find_mut("John")
        .context("John should be in the address book")?;
    printer.print(&john.edit_phone("1234567890", "1112223333")?)?;
    printer.print(&*john)?;

    match john.find_phone("5555555555") {
        Some(phone) => println!("{}: found {}", john.name(), phone),
        None => println!("{}: 5555555555 not found", john.name()),
    }

    printer.print(&book.delete("Jane"))?;
    printer.print(&book.delete("Jane"))?;

    Ok(())
}
