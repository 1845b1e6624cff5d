//! Command line access to the grammar lexer.
//!
//! Usage:
//!   bnfc tokens <path> [--name <name>] [--keep-comments]
//!   bnfc rules <path> [--name <name>] [--merge-duplicates]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::{Path, PathBuf};

use bnf::{reader, Config, DuplicatePolicy, Lexer, RuleTable};

#[derive(Parser, Debug)]
#[command(name = "bnfc", version, about = "Lex and group BNF grammar files")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token stream, one token per line.
    Tokens {
        path: PathBuf,
        /// Grammar name used in diagnostics. Defaults to the file name.
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        keep_comments: bool,
    },
    /// Print the grouped rule table.
    Rules {
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
        /// Combine repeated definitions of a rule instead of failing.
        #[arg(long)]
        merge_duplicates: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Command::Tokens {
            path,
            name,
            keep_comments,
        } => {
            let config = config_for(&path, name).with_keep_comments(keep_comments);
            let lexer = Lexer::with_config(config, read_lines(&path)?);
            info!(
                "lexing [{}]: {} lines, keep comments: {}",
                lexer.name(),
                lexer.lines().len(),
                lexer.config().keep_comments
            );
            for token in lexer.lex()? {
                println!("{:?}\t{}", token.kind(), token);
            }
        }
        Command::Rules {
            path,
            name,
            merge_duplicates,
        } => {
            let policy = if merge_duplicates {
                DuplicatePolicy::Merge
            } else {
                DuplicatePolicy::Reject
            };
            let config = config_for(&path, name).with_duplicates(policy);
            let tokens = Lexer::with_config(config.clone(), read_lines(&path)?).lex()?;
            let table = RuleTable::build(&tokens, &config)?;
            info!("{} rules in {}", table.len(), path.display());
            for name in table.unresolved() {
                warn!("<{}> is referenced but never defined", name);
            }
            print!("{}", table);
        }
    }

    Ok(())
}

fn config_for(path: &Path, name: Option<String>) -> Config {
    let name = name.unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| bnf::DEFAULT_GRAMMAR_NAME.to_owned())
    });
    Config::new(name)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    reader::read_grammar_from_file(path).with_context(|| format!("read {}", path.display()))
}
