//! Searchpad CLI
//!
//! Launches the search window by default. The `search` and `url`
//! subcommands drive the same dispatcher from a terminal.

use clap::{Parser, Subcommand};
use console::style;
use searchpad::{build_url, dispatch, SearchMode};

/// Searchpad - Minimal web search launcher
#[derive(Parser)]
#[command(name = "searchpad")]
#[command(author = "Searchpad Contributors")]
#[command(version)]
#[command(about = "Minimal web search launcher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the search window (default when no subcommand is given)
    Gui,

    /// Search from the terminal, opening the default browser
    Search {
        /// Search terms (joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,

        /// Jump straight to the top result
        #[arg(long)]
        lucky: bool,
    },

    /// Print the constructed search URL without opening anything
    Url {
        /// Search terms (joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,

        /// Build the first-result redirect URL
        #[arg(long)]
        lucky: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

fn mode_for(lucky: bool) -> SearchMode {
    if lucky {
        SearchMode::Lucky
    } else {
        SearchMode::Standard
    }
}

fn main() {
    searchpad::logging::init();
    tracing::info!("Searchpad starting up");

    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Gui) => searchpad::gui::run(),

        Some(Commands::Search { query, lucky }) => cmd_search(&query.join(" "), mode_for(lucky)),

        Some(Commands::Url {
            query,
            lucky,
            output,
        }) => cmd_url(&query.join(" "), mode_for(lucky), &output),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Search command implementation
fn cmd_search(query: &str, mode: SearchMode) -> searchpad::Result<()> {
    // Empty queries stay a silent no-op, same as the GUI
    if let Some(url) = dispatch(query, mode) {
        println!(
            "{} Opening {}",
            style("→").cyan().bold(),
            style(url).yellow()
        );
    }

    Ok(())
}

/// Url command implementation
fn cmd_url(query: &str, mode: SearchMode, output_format: &str) -> searchpad::Result<()> {
    let url = build_url(query, mode);

    if output_format == "json" {
        println!(
            "{}",
            serde_json::json!({
                "query": query,
                "lucky": mode == SearchMode::Lucky,
                "url": url,
            })
        );
    } else {
        println!("{}", url);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mode_for_flag() {
        assert_eq!(mode_for(false), SearchMode::Standard);
        assert_eq!(mode_for(true), SearchMode::Lucky);
    }

    #[test]
    fn search_terms_are_joined_with_spaces() {
        let cli = Cli::parse_from(["searchpad", "search", "hello", "world"]);
        match cli.command {
            Some(Commands::Search { query, lucky }) => {
                assert_eq!(query.join(" "), "hello world");
                assert!(!lucky);
            }
            _ => panic!("expected search subcommand"),
        }
    }

    #[test]
    fn no_subcommand_means_gui() {
        let cli = Cli::parse_from(["searchpad"]);
        assert!(cli.command.is_none());
    }
}
