use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use hintwise_config::{ConfigLoader, OutputFormat};
use hintwise_core::UsagePosition;
use std::io;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod pool;

/// Hintwise: "did you mean" suggestions for unresolved identifiers.
///
/// Ranks a pool of candidate names against a misspelled or unknown name,
/// using Jaro-Winkler similarity, word-token overlap, the syntactic position
/// of the name, and where each candidate came from.
///
/// EXAMPLES:
///     hintwise suggest Lenght --pool pool.json            Rank a candidate pool
///     hintwise suggest Strng --pool pool.json --usage type
///     hintwise suggest getUsr --pool pool.json --json     Output as JSON
///     hintwise score Lenght Length                         Explain one score
///
/// ENVIRONMENT VARIABLES:
///     HINTWISE_MAX_SUGGESTIONS     Maximum suggestions (1-50)
///     HINTWISE_PARALLEL_THRESHOLD  Pool size at which scoring goes parallel
///     HINTWISE_OUTPUT              Default output format ('text' or 'json')
///     RUST_LOG                     Log filter when --log-level is not given
///     HINTWISE_NO_COLOR            Set to disable colored output
///     NO_COLOR                     Set to disable colored output
#[derive(Parser)]
#[command(name = "hintwise")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Log filter for diagnostics on stderr (e.g. 'debug', 'hintwise_core=trace')
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest names from a candidate pool
    ///
    /// Reads a JSON pool file, filters it by usage position, and prints the
    /// best-ranked candidates for QUERY.
    ///
    /// POOL FILE:
    ///     { "candidates": [ { "key": "Length", "tier": "current_class",
    ///                         "symbol": { "kind": "property", "name": "Length",
    ///                                     "container": "System.String" } } ],
    ///       "universe":   [ { "tier": "external_library",
    ///                         "tree": { "symbol": { "kind": "namespace", "path": "System" },
    ///                                   "children": [ ... ] } } ] }
    ///
    /// TIERS:
    ///     local_scope, current_class, current_project, external_library
    ///
    /// EXAMPLES:
    ///     hintwise suggest Lenght --pool pool.json
    ///     hintwise suggest Strng --pool pool.json --usage type
    ///     hintwise suggest Obsolet --pool pool.json --usage attribute --limit 3
    #[command(visible_alias = "s")]
    Suggest {
        /// The unresolved name
        query: String,
        /// JSON file with the candidate pool
        #[arg(long, short = 'p')]
        pool: PathBuf,
        /// Syntactic position of the name (type, value, attribute, namespace, unknown)
        #[arg(long, short = 'u', default_value = "unknown")]
        usage: UsagePosition,
        /// Output suggestions as JSON
        #[arg(long)]
        json: bool,
        /// Maximum suggestions to print (1-50)
        #[arg(long, short = 'n', value_parser = RangedU64ValueParser::<usize>::new().range(1..=50))]
        limit: Option<usize>,
    },

    /// Show the composite score of one candidate
    ///
    /// Prints every term of the similarity score: Jaro-Winkler base, exact
    /// match, containment, token overlap, multi-token and length penalty.
    ///
    /// EXAMPLES:
    ///     hintwise score Lenght Length
    ///     hintwise score getUsr getUserName --json
    Score {
        /// The unresolved name
        query: String,
        /// The candidate name
        candidate: String,
        /// Output the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Outputs shell completion scripts for bash, zsh, fish, or powershell.
    /// Redirect to a file and source it in your shell configuration.
    ///
    /// EXAMPLES:
    ///     hintwise completions bash > ~/.bash_completions/hintwise.bash
    ///     hintwise completions zsh > ~/.zfunc/_hintwise
    ///     hintwise completions fish > ~/.config/fish/completions/hintwise.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();

    // Layered hintwise.toml / global config / HINTWISE_* environment
    let config = ConfigLoader::new()
        .load_from_directory(&std::env::current_dir()?)
        .context("Failed to load configuration")?;

    // Command-line flag overrides environment and config
    let no_color = cli.no_color || cli_config.no_color || !config.color();
    if no_color {
        colored::control::set_override(false);
    }

    logging::init_logger(cli.log_level.as_deref(), config.log_level(), no_color)?;

    match cli.command {
        Commands::Suggest {
            query,
            pool,
            usage,
            json,
            limit,
        } => {
            let mut options = config.ranker_options();
            if let Some(limit) = limit {
                options.max_suggestions = limit;
            }
            let args = commands::suggest::SuggestArgs {
                query,
                pool,
                usage,
                json: json || config.output_format() == OutputFormat::Json,
                options,
            };
            commands::suggest::run(args)?;
        }
        Commands::Score {
            query,
            candidate,
            json,
        } => {
            let use_json = json || config.output_format() == OutputFormat::Json;
            commands::score::run(&query, &candidate, use_json)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_smoke() {
        let _cli = Cli::parse_from(["hintwise", "score", "a", "b"]);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_suggest_parses_all_flags() {
        let cli = Cli::parse_from([
            "hintwise",
            "suggest",
            "Strng",
            "--pool",
            "pool.json",
            "--usage",
            "type",
            "--json",
            "--limit",
            "3",
        ]);
        match cli.command {
            Commands::Suggest {
                query,
                pool,
                usage,
                json,
                limit,
            } => {
                assert_eq!(query, "Strng");
                assert_eq!(pool, PathBuf::from("pool.json"));
                assert_eq!(usage, UsagePosition::Type);
                assert!(json);
                assert_eq!(limit, Some(3));
            }
            _ => panic!("Expected Suggest command"),
        }
    }

    #[test]
    fn test_suggest_usage_defaults_to_unknown() {
        let cli = Cli::parse_from(["hintwise", "suggest", "x", "--pool", "p.json"]);
        match cli.command {
            Commands::Suggest { usage, limit, .. } => {
                assert_eq!(usage, UsagePosition::Unknown);
                assert_eq!(limit, None);
            }
            _ => panic!("Expected Suggest command"),
        }
    }

    #[test]
    fn test_suggest_rejects_bad_usage() {
        let result = Cli::try_parse_from([
            "hintwise", "suggest", "x", "--pool", "p.json", "--usage", "statement",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_suggest_rejects_zero_limit() {
        let result =
            Cli::try_parse_from(["hintwise", "suggest", "x", "--pool", "p.json", "--limit", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["hintwise", "score", "a", "b", "--no-color", "--log-level", "debug"]);
        assert!(cli.no_color);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_completions_bash() {
        let cli = Cli::parse_from(["hintwise", "completions", "bash"]);
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Bash),
            _ => panic!("Expected Completions command"),
        }
    }
}
