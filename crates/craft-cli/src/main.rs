use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use craft_cli::commands::{self, DiffArgs, FormatArgs};
use craft_cli::{init_logging, CraftConfig};
use craft_format::FieldOrder;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("craft")
        .version(craft_cli::VERSION)
        .about("Diff and format CRAFT document drafts")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to craft.toml"),
        )
        .subcommand(
            Command::new("diff")
                .about("Compare a current draft with a proposed draft")
                .arg(path_arg("original", "Current draft"))
                .arg(path_arg("revised", "Proposed draft"))
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_parser(["unified", "side-by-side", "side-by-side-diff"])
                        .help("View mode (defaults to the configured mode)"),
                )
                .arg(table_arg())
                .arg(section_type_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print segments and summary as JSON"),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Format a draft for display")
                .arg(path_arg("path", "Draft to format"))
                .arg(table_arg())
                .arg(section_type_arg())
                .arg(
                    Arg::new("field-order")
                        .long("field-order")
                        .help("Comma separated top-level key order"),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Print word counts of the changes between two drafts")
                .arg(path_arg("original", "Current draft"))
                .arg(path_arg("revised", "Proposed draft")),
        )
}

fn path_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help(help)
}

fn table_arg() -> Arg {
    Arg::new("table")
        .long("table")
        .action(ArgAction::SetTrue)
        .help("Treat drafts as table JSON")
}

fn section_type_arg() -> Arg {
    Arg::new("section-type")
        .long("section-type")
        .help("Table section type (e.g. model_risk_issues)")
}

fn path(args: &ArgMatches, name: &str) -> PathBuf {
    args.get_one::<PathBuf>(name).cloned().unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CraftConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CraftConfig::default(),
    };
    init_logging(&config.log_filter, config.log_json);

    let output = match matches.subcommand() {
        Some(("diff", args)) => {
            let mode =
                commands::parse_mode(args.get_one::<String>("mode").map(String::as_str))?;
            let diff_args = DiffArgs {
                original: path(args, "original"),
                revised: path(args, "revised"),
                mode,
                table: args.get_flag("table"),
                section_type: args.get_one::<String>("section-type").cloned(),
                json: args.get_flag("json"),
            };
            commands::diff(&config, &diff_args)?
        }
        Some(("format", args)) => {
            let format_args = FormatArgs {
                path: path(args, "path"),
                table: args.get_flag("table"),
                section_type: args.get_one::<String>("section-type").cloned(),
                field_order: args
                    .get_one::<String>("field-order")
                    .map(String::as_str)
                    .map(FieldOrder::parse_list),
            };
            commands::format(&config, &format_args)?
        }
        Some(("summary", args)) => {
            commands::summary(&path(args, "original"), &path(args, "revised"))?
        }
        _ => unreachable!("subcommand is required"),
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
