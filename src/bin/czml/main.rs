//! CZML CLI - Build one property from arguments and print its JSON.

use anyhow::{bail, Context, Result};
use czml::prelude::*;
use czml::util::{init_tracing, MAX_INDENT};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    // Parse global flags
    let mut level: Option<&str> = None;
    let mut indent: Option<usize> = None;
    let mut delete_only = false;
    let mut settings_file: Option<&str> = None;
    let mut filtered_args: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => level = Some("debug"),
            "-vv" | "--trace" => level = Some("trace"),
            "-q" | "--quiet" => level = Some("off"),
            "--delete-only" => delete_only = true,
            "--indent" => {
                let value = iter.next().context("--indent needs a value")?;
                indent = Some(parse_indent(value)?);
            }
            "--settings" => {
                settings_file = Some(iter.next().context("--settings needs a path")?.as_str());
            }
            _ => filtered_args.push(arg),
        }
    }

    init_tracing(level);

    let mut settings = match settings_file {
        Some(path) => Settings::load(path)?,
        None => Settings::from_env(),
    };
    if let Some(indent) = indent {
        settings.indent = indent;
    }
    if delete_only {
        settings.delete_policy = DeletePolicy::DeleteOnly;
    }
    tracing::debug!(?settings, "effective settings");

    let Some((command, rest)) = filtered_args.split_first() else {
        print_help();
        return Ok(());
    };

    match *command {
        "cartesian" | "c" => cmd_cartesian(rest, &settings),
        "string" | "s" => cmd_string(rest, &settings),
        "label" | "l" => cmd_label(rest, &settings),
        "version" | "-V" | "--version" => {
            println!(
                "czml-cli {} (built {})",
                env!("CARGO_PKG_VERSION"),
                option_env!("CZML_BUILD_DATE").unwrap_or("unknown")
            );
            Ok(())
        }
        "help" | "h" | "-h" | "--help" => {
            print_help();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!();
            print_help();
            process::exit(1);
        }
    }
}

/// Split command arguments into positionals, switches and `--flag value`
/// options. Flags outside the accepted sets are errors.
#[derive(Debug)]
struct CommandArgs<'a> {
    positional: Vec<&'a str>,
    switches: Vec<&'a str>,
    options: Vec<(&'a str, &'a str)>,
}

impl<'a> CommandArgs<'a> {
    fn parse(args: &[&'a str], switches: &[&str], valued: &[&str]) -> Result<Self> {
        let mut parsed = Self {
            positional: Vec::new(),
            switches: Vec::new(),
            options: Vec::new(),
        };

        let mut iter = args.iter();
        while let Some(&arg) = iter.next() {
            if !arg.starts_with("--") {
                parsed.positional.push(arg);
            } else if valued.contains(&arg) {
                let value = *iter.next().with_context(|| format!("{} needs a value", arg))?;
                parsed.options.push((arg, value));
            } else if switches.contains(&arg) {
                parsed.switches.push(arg);
            } else {
                bail!("unknown option '{}'", arg);
            }
        }

        Ok(parsed)
    }

    fn has(&self, switch: &str) -> bool {
        self.switches.contains(&switch)
    }

    fn option(&self, name: &str) -> Option<&'a str> {
        self.options.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

fn parse_indent(arg: &str) -> Result<usize> {
    let indent: usize = arg.parse().with_context(|| format!("invalid indent '{}'", arg))?;
    if indent > MAX_INDENT {
        bail!("indent {} exceeds the maximum of {}", indent, MAX_INDENT);
    }
    Ok(indent)
}

/// Numbers stay numbers (integers stay integers); anything else is a time tag.
fn parse_element(arg: &str) -> Element {
    if let Ok(v) = arg.parse::<i64>() {
        Element::Int(v)
    } else if let Ok(v) = arg.parse::<f64>() {
        Element::Float(v)
    } else {
        Element::Time(arg.to_owned())
    }
}

fn parse_time(arg: &str) -> TimeValue {
    match arg.parse::<f64>() {
        Ok(seconds) => TimeValue::Seconds(seconds),
        Err(_) => TimeValue::iso8601(arg),
    }
}

fn cmd_cartesian(args: &[&str], settings: &Settings) -> Result<()> {
    let args = CommandArgs::parse(args, &["--delete"], &["--epoch", "--algorithm"])?;
    if args.positional.is_empty() {
        bail!("missing values\nUsage: czml-cli cartesian <values...> [--delete] [--epoch T] [--algorithm A]");
    }

    let values = Cartesian3Value::new(args.positional.iter().map(|a| parse_element(a)))?;
    tracing::debug!(len = values.len(), samples = values.num_samples(), "parsed cartesian");

    let mut builder = Position::builder().cartesian(values);
    if args.has("--delete") {
        builder = builder.delete(true);
    }
    if let Some(epoch) = args.option("--epoch") {
        builder = builder.epoch(parse_time(epoch));
    }
    if let Some(algorithm) = args.option("--algorithm") {
        builder = builder.interpolation_algorithm(algorithm.parse()?);
    }

    println!("{}", builder.build()?.dumps_with(settings)?);
    Ok(())
}

fn cmd_string(args: &[&str], settings: &Settings) -> Result<()> {
    let args = CommandArgs::parse(args, &["--delete"], &[])?;
    let Some(text) = args.positional.first() else {
        bail!("missing text\nUsage: czml-cli string <text> [--delete]");
    };

    let mut builder = StringValue::builder().string(*text);
    if args.has("--delete") {
        builder = builder.delete(true);
    }

    println!("{}", builder.build()?.dumps_with(settings)?);
    Ok(())
}

fn cmd_label(args: &[&str], settings: &Settings) -> Result<()> {
    let args = CommandArgs::parse(args, &[], &["--horizontal", "--vertical"])?;
    let Some(text) = args.positional.first() else {
        bail!("missing text\nUsage: czml-cli label <text> [--horizontal H] [--vertical V]");
    };

    let mut builder = Label::builder().text(*text);
    if let Some(origin) = args.option("--horizontal") {
        builder = builder.horizontal_origin(origin.parse()?);
    }
    if let Some(origin) = args.option("--vertical") {
        builder = builder.vertical_origin(origin.parse()?);
    }

    println!("{}", builder.build()?.dumps_with(settings)?);
    Ok(())
}

fn print_help() {
    println!("czml-cli - build CZML properties from the command line");
    println!();
    println!("USAGE:");
    println!("    czml-cli [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    c, cartesian <values...>    Position from 3 values or [T X Y Z] samples");
    println!("                 [--delete] [--epoch T] [--algorithm LINEAR|LAGRANGE|HERMITE]");
    println!("    s, string    <text>         String value [--delete]");
    println!("    l, label     <text>         Label [--horizontal LEFT|CENTER|RIGHT]");
    println!("                                [--vertical BASELINE|BOTTOM|CENTER|TOP]");
    println!("    version                     Show version and build date");
    println!("    h, help                     Show this help");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose        Show debug output");
    println!("    -vv, --trace         Show trace output (very verbose)");
    println!("    -q, --quiet          Suppress all log output");
    println!("    --indent N           Indentation width, 0 for a single line");
    println!("    --delete-only        Emit only {{\"delete\": true}} for deleted properties");
    println!("    --settings FILE      Load settings from a JSON file");
    println!();
    println!("ENVIRONMENT:");
    println!("    CZML_LOG             Log filter (e.g. debug, czml=trace)");
    println!("    CZML_INDENT          Default indentation width");
    println!("    CZML_DELETE_POLICY   emit_all | delete_only");
    println!();
    println!("EXAMPLES:");
    println!("    czml-cli cartesian 1 2 3");
    println!("    czml-cli cartesian 0 1 2 3 60 4 5 6 --epoch 2012-08-04T16:00:00Z --algorithm LAGRANGE");
    println!("    czml-cli --indent 0 string hello --delete");
    println!("    czml-cli label Hi --horizontal LEFT --vertical TOP");
}
