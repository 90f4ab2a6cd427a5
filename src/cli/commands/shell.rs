//! Shell command - interactive search session
//!
//! The shell is one search session: the index is loaded when it
//! starts, every input line replaces the query, and `:q` (or EOF)
//! closes the session and drops the index.

use crate::cli::commands::{render_options, resolve_location};
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::session::SearchSession;
use clap::Args;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Arguments for the shell command
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Index location (path or http(s) URL), overrides the configuration
    #[arg(long, short = 'i')]
    pub index: Option<String>,

    /// Maximum number of results shown per query (0 = all)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show result URLs
    #[arg(long)]
    pub urls_only: bool,
}

/// A line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput<'a> {
    /// New query text (may be empty, which clears results)
    Query(&'a str),
    /// Close the session and exit
    Quit,
    /// Close the session and load the index again
    Reload,
    /// Print session status
    Status,
    /// Unrecognized `:` command
    Unknown(&'a str),
}

impl<'a> ShellInput<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            ":q" | ":quit" | ":exit" => ShellInput::Quit,
            ":r" | ":reload" => ShellInput::Reload,
            ":s" | ":status" => ShellInput::Status,
            cmd if cmd.starts_with(':') => ShellInput::Unknown(cmd),
            _ => ShellInput::Query(line),
        }
    }
}

/// Execute the shell command, reading queries from stdin
pub async fn execute(
    args: ShellArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(tokio::io::stdin());
    run(args, services, format, reader).await
}

/// Run a shell session over any line source
pub async fn run<R>(
    args: ShellArgs,
    services: &Arc<Services>,
    format: OutputFormat,
    reader: R,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
{
    let location = resolve_location(&args.index, services);
    let mut session = services.create_session_for(location);
    session.subscribe(output::session_presenter(
        format,
        render_options(services, args.limit, args.urls_only),
    ));

    session.open().await?;

    let mut lines = reader.lines();
    prompt(format);

    while let Some(line) = lines.next_line().await? {
        match ShellInput::parse(&line) {
            ShellInput::Quit => break,
            ShellInput::Reload => {
                session.close();
                session.open().await?;
            }
            ShellInput::Status => print_status(&session),
            ShellInput::Unknown(cmd) => output::print_warning(&format!(
                "Unknown command '{cmd}' (try :q, :reload, :status)"
            )),
            ShellInput::Query(query) => {
                if let Err(e) = session.input(query) {
                    output::print_error(&e.to_string());
                }
            }
        }
        prompt(format);
    }

    session.close();
    Ok(())
}

fn prompt(format: OutputFormat) {
    if format == OutputFormat::Human {
        eprint!("{} ", colors::label("search>"));
        let _ = std::io::stderr().flush();
    }
}

fn print_status(session: &SearchSession) {
    eprintln!("{}", colors::label("Session:"));
    eprintln!("  index: {}", colors::url(session.location()));
    if let Some(stats) = session.stats() {
        eprintln!("  documents: {}", colors::number(&stats.documents.to_string()));
    }
    if let Some(opened_at) = session.opened_at() {
        eprintln!("  loaded: {}", output::format_relative_time(&opened_at));
    }
    eprintln!("  query: {:?}", session.query());
    eprintln!("  input: {:?}", session.validity());
}
