use anyhow::{bail, Result};
use pinparse_bin::css::parser_config::ParserConfig;
use pinparse_bin::css::CssParser;
use pinparse_bin::html::document::outline;
use pinparse_bin::html::{parse_html, ParserOptions};
use pinparse_bin::shared::errors::ParseError;
use simple_logger::SimpleLogger;
use std::fs;
use std::process::exit;

fn main() -> Result<()> {
    let matches = clap::Command::new("Pinparse")
        .version("0.1.0")
        .about("Checks an HTML document, or a style sheet, for the first authoring error")
        .arg(
            clap::Arg::new("file")
                .help("The file to check")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("css")
                .help("Treat the file as a style sheet")
                .long("css")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("https")
                .help("The document is served over https; warn about http resources")
                .long("https")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("disallow-active-attributes")
                .help("Blank the value of on* attributes")
                .long("disallow-active-attributes")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("json")
                .help("Print the parse output as JSON")
                .long("json")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("debug")
                .help("Enable debug logging")
                .short('d')
                .long("debug")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("debug") {
        SimpleLogger::new().with_level(log::LevelFilter::Trace).init()?;
    }

    let Some(file) = matches.get_one::<String>("file") else {
        bail!("Usage: pinparse <file>");
    };
    let source = fs::read_to_string(file)?;
    let https_context = matches.get_flag("https");
    let json = matches.get_flag("json");

    if matches.get_flag("css") {
        let config = ParserConfig { https_context };
        return match CssParser::parse_str(&source, config) {
            Ok(block) if json => {
                println!("{}", serde_json::to_string_pretty(&block)?);
                Ok(())
            }
            Ok(block) => {
                for rule in &block.parse_info.rules {
                    println!("{} ({} declarations)", rule.selector.value, rule.declarations.properties.len());
                }
                Ok(())
            }
            Err(err) => report(&source, &err),
        };
    }

    let options = ParserOptions {
        https_context,
        disallow_active_attributes: matches.get_flag("disallow-active-attributes"),
        ..ParserOptions::default()
    };
    let output = parse_html(&source, &options);
    log::debug!("element outline:\n{}", outline(&output.document));

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.document);
        for warning in output.warnings.iter().flatten() {
            println!("warning: {warning}");
        }
    }

    match &output.error {
        Some(err) => report(&source, err),
        None => Ok(()),
    }
}

/// Prints the error together with the source lines around its cursor and exits
fn report(source: &str, err: &ParseError) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(err)?);
    println!("error: {err}");
    display_snippet(source, err.cursor());
    exit(1);
}

fn display_snippet(source: &str, cursor: usize) {
    let before: String = source.chars().take(cursor).collect();
    let line_nr = before.matches('\n').count();
    let col_nr = before.rsplit('\n').next().map_or(0, |line| line.chars().count());

    if col_nr > 1000 {
        println!("Error is too far to the right to display.");
        return;
    }

    let lines: Vec<&str> = source.split('\n').collect();

    println!();
    for n in line_nr.saturating_sub(5)..line_nr {
        println!("{:<5}|{}", n + 1, lines[n]);
    }

    if let Some(line) = lines.get(line_nr) {
        println!("{:<5}|{}", line_nr + 1, line);
    }
    println!("     |{}^", " ".repeat(col_nr));

    for n in line_nr + 1..(line_nr + 6).min(lines.len()) {
        println!("{:<5}|{}", n + 1, lines[n]);
    }
    println!();
}
