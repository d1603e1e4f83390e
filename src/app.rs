use std::io::IsTerminal;

use nbnames::{
    ExtractOptions, SystemClock, check_and_format_names_with_clock, get_values_from_batch,
    substitute_datetime_tags, update_names_with_range_to_flag,
};
use serde::Serialize;

use crate::cli::{AppError, Cli, Commands};
use crate::output::{NameReport, print_inspect_table, print_lines, print_tags_table, to_json};

fn emit<T: Serialize + std::fmt::Display>(items: &[T], json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", to_json(items)?);
    } else {
        print_lines(items);
    }
    Ok(())
}

/// Run the selected subcommand.
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let prefix = cli.prefix();
    let use_color = std::io::stdout().is_terminal();

    match &cli.command {
        Commands::Format { names } => {
            let clock = SystemClock::new(cli.timezone()?);
            let formatted = check_and_format_names_with_clock(names.clone(), prefix, &clock)?;
            emit(&formatted, cli.json)
        }
        Commands::Expand { names } => {
            let expanded =
                update_names_with_range_to_flag(names, prefix).map_err(nbnames::NameError::from)?;
            emit(&expanded, cli.json)
        }
        Commands::Datetime { names } => {
            let clock = SystemClock::new(cli.timezone()?);
            let substituted = substitute_datetime_tags(names.clone(), &clock);
            emit(&substituted, cli.json)
        }
        Commands::Extract {
            key,
            int,
            sort,
            names,
        } => {
            let options = ExtractOptions {
                as_int: *int,
                sort: *sort,
            };
            let values =
                get_values_from_batch(names, key, options).map_err(nbnames::NameError::from)?;
            emit(&values, cli.json)
        }
        Commands::Inspect { names } => {
            let reports: Vec<NameReport> = names.iter().map(|name| NameReport::new(name)).collect();
            if cli.json {
                println!("{}", to_json(&reports)?);
            } else {
                print_inspect_table(&reports, use_color);
            }
            Ok(())
        }
        Commands::Tags => {
            if cli.json {
                let tags: Vec<_> = nbnames::Tag::ALL
                    .iter()
                    .map(|tag| {
                        serde_json::json!({
                            "name": tag.name(),
                            "marker": tag.marker(),
                            "value_format": tag.value_format(),
                        })
                    })
                    .collect();
                println!("{}", to_json(&tags)?);
            } else {
                print_tags_table(use_color);
            }
            Ok(())
        }
    }
}
