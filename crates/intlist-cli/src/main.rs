//! intlist CLI
//!
//! Builds a list from command-line values, a text string or a file, then
//! prints it and its sum.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use intlist_core::IntList;
use intlist_lexer::parse_list_with_filename;
use log::debug;
use serde_json::json;
use std::io::{self, Write};
use std::process;

/// How results are written
#[derive(Debug, Clone, Copy, Default)]
struct OutputOptions {
    json: bool,
    wrapping: bool,
}

fn cli() -> Command {
    Command::new("intlist")
        .version("0.1.0")
        .about("Print and sum a singly linked list of integers")
        .arg(
            Arg::new("values")
                .value_name("VALUE")
                .help("Integers to place in the list, in order")
                .num_args(1..)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i32))
                .index(1),
        )
        .arg(
            Arg::new("command")
                .short('c')
                .long("command")
                .value_name("STRING")
                .help("Read values from a string such as \"10, 20 30\"")
                .num_args(1)
                .conflicts_with_all(["file", "values"]),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Read values from a file")
                .num_args(1)
                .conflicts_with("values"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Write the values and sum as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("wrapping")
                .long("wrapping")
                .help("Wrap the sum on 32-bit overflow instead of failing")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();

    match run(&matches) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<i32, anyhow::Error> {
    let list = load_list(matches)?;
    debug!("built list with {} values", list.len());

    let options = OutputOptions {
        json: matches.get_flag("json"),
        wrapping: matches.get_flag("wrapping"),
    };

    let mut stdout = io::stdout().lock();
    render(&list, options, &mut stdout)?;
    stdout.flush()?;
    Ok(0)
}

fn load_list(matches: &ArgMatches) -> Result<IntList, anyhow::Error> {
    if let Some(text) = matches.get_one::<String>("command") {
        debug!("reading values from command string");
        return Ok(parse_list_with_filename(text, "<command>")?);
    }

    if let Some(path) = matches.get_one::<String>("file") {
        debug!("reading values from {path}");
        return read_file(path);
    }

    Ok(matches
        .get_many::<i32>("values")
        .map(|values| values.copied().collect())
        .unwrap_or_default())
}

fn read_file(path: &str) -> Result<IntList, anyhow::Error> {
    let content = std::fs::read_to_string(path).with_context(|| format!("intlist: {path}"))?;
    Ok(parse_list_with_filename(&content, path)?)
}

fn render<W: Write>(
    list: &IntList,
    options: OutputOptions,
    out: &mut W,
) -> Result<(), anyhow::Error> {
    let sum = if options.wrapping {
        list.sum()
    } else {
        list.checked_sum()?
    };

    if options.json {
        let document = json!({
            "values": list.iter().collect::<Vec<_>>(),
            "sum": sum,
        });
        writeln!(out, "{document}")?;
    } else {
        list.write_to(out)?;
        writeln!(out, "{sum}")?;
    }
    Ok(())
}
