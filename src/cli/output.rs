//! Output formatting for CLI commands
//!
//! Renders search responses and session events in human-readable or
//! JSON form. Colored output respects the NO_COLOR env var.

use crate::cli::OutputFormat;
use crate::core::session::SessionEvent;
use crate::core::types::{MatchResult, SearchResponse};
use serde::Serialize;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for result titles
    pub fn title(s: &str) -> ColoredString {
        s.cyan().bold()
    }

    /// Style for URLs and index locations
    pub fn url(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for highlighted keywords
    pub fn highlight(s: &str) -> ColoredString {
        s.black().on_yellow()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// How responses are rendered
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum results shown, 0 for all
    pub limit: usize,

    /// Print only URLs
    pub urls_only: bool,

    /// Highlight marker used in snippets (opening)
    pub highlight_pre: String,

    /// Highlight marker used in snippets (closing)
    pub highlight_post: String,
}

impl RenderOptions {
    /// Results that fit the limit
    pub fn visible<'a>(&self, results: &'a [MatchResult]) -> &'a [MatchResult] {
        if self.limit == 0 {
            results
        } else {
            &results[..results.len().min(self.limit)]
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        let search = crate::core::config::SearchConfig::default();
        Self {
            limit: search.default_limit,
            urls_only: false,
            highlight_pre: search.highlight_pre,
            highlight_post: search.highlight_post,
        }
    }
}

/// Search response as printed in JSON mode
#[derive(Debug, Serialize)]
pub struct ResponseOutput<'a> {
    pub query: &'a str,
    pub keywords: &'a [String],
    pub total_results: usize,
    pub validity: crate::core::types::InputValidity,
    pub duration_ms: u64,
    pub results: Vec<ResultItem<'a>>,
}

/// Single result as printed in JSON mode
#[derive(Debug, Serialize)]
pub struct ResultItem<'a> {
    pub rank: usize,
    pub title: &'a str,
    pub url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<&'a str>,
}

impl<'a> ResponseOutput<'a> {
    pub fn new(response: &'a SearchResponse, options: &RenderOptions) -> Self {
        Self {
            query: &response.query,
            keywords: &response.keywords,
            total_results: response.count,
            validity: response.validity,
            duration_ms: response.duration_ms,
            results: options
                .visible(&response.results)
                .iter()
                .enumerate()
                .map(|(i, r)| ResultItem {
                    rank: i + 1,
                    title: &r.title,
                    url: &r.url,
                    snippet: if options.urls_only {
                        None
                    } else {
                        r.snippet.as_deref()
                    },
                })
                .collect(),
        }
    }
}

/// Replace highlight markers with terminal colors.
///
/// Text between a `pre` marker and the next `post` marker is
/// highlighted, everything else is dimmed.
pub fn render_snippet(snippet: &str, pre: &str, post: &str) -> String {
    let mut out = String::with_capacity(snippet.len());
    let mut rest = snippet;

    while let Some(start) = rest.find(pre) {
        out.push_str(&colors::dim(&rest[..start]).to_string());
        let after = &rest[start + pre.len()..];

        match after.find(post) {
            Some(end) => {
                out.push_str(&colors::highlight(&after[..end]).to_string());
                rest = &after[end + post.len()..];
            }
            None => {
                rest = after;
                break;
            }
        }
    }

    out.push_str(&colors::dim(rest).to_string());
    out
}

/// Print a search response
pub fn print_response(
    response: &SearchResponse,
    options: &RenderOptions,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => print_response_human(response, options),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ResponseOutput::new(response, options))?
            );
        }
    }
    Ok(())
}

fn print_response_human(response: &SearchResponse, options: &RenderOptions) {
    if response.keywords.is_empty() {
        return;
    }

    if response.results.is_empty() {
        println!(
            "{} for '{}'",
            colors::warning("No matches"),
            colors::label(&response.query)
        );
        return;
    }

    let visible = options.visible(&response.results);
    if visible.len() < response.count {
        println!(
            "Found {} result(s), showing {}:\n",
            colors::number(&response.count.to_string()),
            colors::number(&visible.len().to_string())
        );
    } else {
        println!(
            "Found {} result(s):\n",
            colors::number(&response.count.to_string())
        );
    }

    for (i, result) in visible.iter().enumerate() {
        if options.urls_only {
            println!("{}", colors::url(&result.url));
            continue;
        }

        println!(
            "[{}] {}",
            colors::rank(&(i + 1).to_string()),
            colors::title(&result.title)
        );
        println!("    {}", colors::url(&result.url));
        if let Some(snippet) = &result.snippet {
            println!(
                "    {}",
                render_snippet(snippet, &options.highlight_pre, &options.highlight_post)
            );
        }
        println!();
    }
}

/// Build a listener that renders session events.
///
/// Status lines go to stderr so stdout only carries results. In JSON
/// mode every response is printed as one line.
pub fn session_presenter(
    format: OutputFormat,
    options: RenderOptions,
) -> impl FnMut(&SessionEvent<'_>) + Send + 'static {
    move |event: &SessionEvent<'_>| match event {
        SessionEvent::Loading { location } => {
            if format == OutputFormat::Human {
                eprintln!("{} {}", colors::dim("Loading..."), colors::url(location));
            }
        }
        SessionEvent::Ready { stats } => {
            if format == OutputFormat::Human {
                eprintln!(
                    "{} {} document(s)",
                    colors::success("Ready:"),
                    colors::number(&stats.documents.to_string())
                );
            }
        }
        SessionEvent::LoadFailed { error } => {
            print_error(&format!("Search unavailable: {error}"));
        }
        SessionEvent::Results(response) => match format {
            OutputFormat::Human => print_response_human(response, &options),
            OutputFormat::Json => {
                match serde_json::to_string(&ResponseOutput::new(response, &options)) {
                    Ok(json) => println!("{json}"),
                    Err(e) => print_error(&format!("Failed to serialize results: {e}")),
                }
            }
        },
        SessionEvent::Closed => {
            if format == OutputFormat::Human {
                eprintln!("{}", colors::dim("Search closed"));
            }
        }
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Format relative time (e.g., "2h ago", "3d ago")
pub fn format_relative_time(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(*timestamp);

    let secs = duration.num_seconds();
    if secs < 0 {
        return "in the future".to_string();
    }

    let mins = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if mins > 0 {
        format!("{mins}m ago")
    } else {
        "just now".to_string()
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
