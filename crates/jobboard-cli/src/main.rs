mod config;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jobboard_core::impls::FileStorage;
use jobboard_core::{App, AppBuilder, JobBoardError, JobForm, ListOrder, UiEvent};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrderArg {
    /// New postings follow the last rendered posting
    Append,
    /// New postings go right after the list header
    Legacy,
}

impl From<OrderArg> for ListOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Append => ListOrder::Append,
            OrderArg::Legacy => ListOrder::Legacy,
        }
    }
}

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Post and list developer jobs")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "JOBBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Storage file holding saved jobs
    #[arg(long, env = "JOBBOARD_STORAGE")]
    storage: Option<PathBuf>,

    /// Storage key for the job list
    #[arg(long)]
    key: Option<String>,

    /// Placement of newly rendered postings
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a new job posting
    Post {
        #[arg(long)]
        title: String,

        #[arg(long)]
        summary: String,

        /// Contact email (rendered as a mailto: link)
        #[arg(long)]
        email: String,

        /// Save the form as typed, without checking it
        #[arg(long)]
        no_validate: bool,
    },
    /// List saved job postings
    List {
        /// Print the stored JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Render the job board page with every saved posting
    Render {
        /// Write the HTML to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Default to WARN level for quiet CLI output
    // Use RUST_LOG=info or RUST_LOG=debug for verbose output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut cfg = config::load_config(cli.config)?;
    if let Some(storage) = cli.storage {
        cfg.storage_path = Some(storage);
    }
    if let Some(key) = cli.key {
        cfg.board.storage_key = key;
    }
    if let Some(order) = cli.order {
        cfg.board.list_order = order.into();
    }
    if let Commands::Post { no_validate: true, .. } = cli.command {
        cfg.board.validate_input = false;
    }

    let mut app = open_board(cfg)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Post {
            title,
            summary,
            email,
            ..
        } => {
            let form = JobForm {
                title,
                summary,
                contact_email: email,
            };
            post(&mut app, &form, &mut stdout)
        }
        Commands::List { json } => list(&app, json, &mut stdout),
        Commands::Render { out } => render(&mut app, out, &mut stdout),
    }
}

fn open_board(cfg: config::Config) -> Result<App<FileStorage>> {
    let storage_path = config::get_storage_path(&cfg)?;
    tracing::info!(path = %storage_path.display(), key = %cfg.board.storage_key, "opening job storage");

    AppBuilder::new(FileStorage::new(storage_path))
        .with_config(cfg.board)
        .with_default_handlers()
        .expect_events(&[UiEvent::Submit, UiEvent::Load])
        .build()
        .context("Failed to set up the job board")
}

/// The user-facing message leads; the underlying error follows as its cause.
fn report(err: JobBoardError) -> anyhow::Error {
    let message = err.user_message();
    anyhow::Error::new(err).context(message)
}

fn post(app: &mut App<FileStorage>, form: &JobForm, out: &mut impl Write) -> Result<()> {
    app.fill_form(form).map_err(report)?;
    app.dispatch(UiEvent::Submit).map_err(report)?;

    let count = app.board().store().len().map_err(report)?;
    writeln!(out, "Posted: {} ({count} jobs saved)", form.title)?;
    Ok(())
}

fn list(app: &App<FileStorage>, json: bool, out: &mut impl Write) -> Result<()> {
    let jobs = app.board().store().load_all().map_err(report)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&jobs)?)?;
        return Ok(());
    }
    if jobs.is_empty() {
        writeln!(out, "No jobs posted yet.")?;
        return Ok(());
    }
    for (i, job) in jobs.iter().enumerate() {
        writeln!(out, "{}. {} <{}>", i + 1, job.title, job.mailto())?;
        if !job.summary.is_empty() {
            writeln!(out, "   {}", job.summary)?;
        }
    }
    Ok(())
}

fn render(app: &mut App<FileStorage>, path: Option<PathBuf>, out: &mut impl Write) -> Result<()> {
    app.dispatch(UiEvent::Load).map_err(report)?;
    let html = app.page().to_html();

    match path {
        Some(path) => {
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "Wrote {}", path.display())?;
        }
        None => write!(out, "{html}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_at(dir: &std::path::Path) -> App<FileStorage> {
        let cfg = config::Config {
            storage_path: Some(dir.join("storage.json")),
            ..config::Config::default()
        };
        open_board(cfg).unwrap()
    }

    fn form(title: &str, summary: &str, email: &str) -> JobForm {
        JobForm {
            title: title.into(),
            summary: summary.into(),
            contact_email: email.into(),
        }
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn post_then_list_shows_jobs_in_order() {
        let dir = tempfile::tempdir().unwrap();

        let mut out = Vec::new();
        post(&mut board_at(dir.path()), &form("Engineer", "Build things", "a@b.com"), &mut out)
            .unwrap();
        post(&mut board_at(dir.path()), &form("Designer", "Draw things", "d@b.com"), &mut out).unwrap();
        assert_eq!(
            output(out),
            "Posted: Engineer (1 jobs saved)\nPosted: Designer (2 jobs saved)\n"
        );

        let mut out = Vec::new();
        list(&board_at(dir.path()), false, &mut out).unwrap();
        assert_eq!(
            output(out),
            "1. Engineer <mailto:a@b.com>\n   Build things\n2. Designer <mailto:d@b.com>\n   Draw things\n"
        );
    }

    #[test]
    fn list_json_prints_stored_format() {
        let dir = tempfile::tempdir().unwrap();
        post(&mut board_at(dir.path()), &form("Engineer", "Build things", "a@b.com"), &mut Vec::new())
            .unwrap();

        let mut out = Vec::new();
        list(&board_at(dir.path()), true, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["contactEmail"], "a@b.com");
    }

    #[test]
    fn empty_board_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        list(&board_at(dir.path()), false, &mut out).unwrap();
        assert_eq!(output(out), "No jobs posted yet.\n");
    }

    #[test]
    fn invalid_post_reports_user_message_first() {
        let dir = tempfile::tempdir().unwrap();
        let err = post(&mut board_at(dir.path()), &form("", "x", "nope"), &mut Vec::new())
            .unwrap_err();
        assert!(err.to_string().starts_with("Please fix the form"));
        assert!(err.chain().count() >= 2);
    }

    #[test]
    fn render_writes_saved_jobs_into_page() {
        let dir = tempfile::tempdir().unwrap();
        post(&mut board_at(dir.path()), &form("Engineer", "Build things", "a@b.com"), &mut Vec::new())
            .unwrap();

        let page = dir.path().join("index.html");
        let mut out = Vec::new();
        render(&mut board_at(dir.path()), Some(page.clone()), &mut out).unwrap();
        let html = fs::read_to_string(&page).unwrap();
        assert!(html.contains("href=\"mailto:a@b.com\""));
        assert!(output(out).starts_with("Wrote "));
    }
}
