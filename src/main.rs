use generatoc::report::{ReportError, parse_headings, render_json, render_text};
use generatoc::{LevelSet, build};
use std::env;
use std::fs;

const USAGE: &str = "Usage: generatoc <headings.json> [--json] [--levels h2,h3,...]";

/// Prints the outline of a JSON heading list.
fn main() -> Result<(), ReportError> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut path = None;
    let mut as_json = false;
    let mut levels = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => as_json = true,
            "--levels" => {
                let Some(list) = iter.next() else {
                    exit_with_usage("--levels needs a value");
                };
                levels = Some(LevelSet::from_tags(list.split(','))?);
            }
            other if path.is_none() && !other.starts_with("--") => path = Some(other.to_string()),
            other => exit_with_usage(&format!("Unexpected argument '{}'", other)),
        }
    }
    let Some(path) = path else {
        exit_with_usage("Missing heading file");
    };

    log::info!("Loading headings from {}", path);
    let source = fs::read_to_string(&path)?;
    let records = parse_headings(&source, levels.as_ref())?;
    let outline = build(&records);

    if as_json {
        println!("{}", render_json(&outline)?);
    } else {
        print!("{}", render_text(&outline));
    }
    Ok(())
}

fn exit_with_usage(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!();
    eprintln!("{}", USAGE);
    std::process::exit(1);
}
