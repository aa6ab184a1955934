// src/cli.rs
//
// Console front end: extract → holding area → review/export, plus settings.
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use clap::{ArgGroup, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::{
    config::{
        options::{ExportOptions, PollOptions, ScrapeMode, ScrapeOptions},
        settings::{SettingsStore, Theme},
    },
    core::{FileSource, PageSource, StaticSource, UrlSource},
    csv::Delimiter,
    file,
    progress::Progress,
    review::{render, ReviewState},
    scrape,
    transfer::{self, FileMailbox, Mailbox},
};

#[derive(Parser)]
#[command(name = "cli", version, about = "StudyGo flashcard exporter (console)")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract flashcards from a list page and store them for review
    #[command(group(ArgGroup::new("source").required(true).args(["url", "file", "stdin"])))]
    Extract {
        /// StudyGo list URL
        #[arg(long)]
        url: Option<String>,
        /// Page saved from the browser
        #[arg(long)]
        file: Option<PathBuf>,
        /// Read page HTML from stdin
        #[arg(long)]
        stdin: bool,
        /// Guess pairs from unrendered HTML instead of waiting for the list
        #[arg(long)]
        heuristic: bool,
        #[arg(long, default_value_t = crate::config::consts::POLL_INTERVAL_MS)]
        interval_ms: u64,
        #[arg(long, default_value_t = crate::config::consts::POLL_TIMEOUT_MS)]
        timeout_ms: u64,
    },
    /// Print the stored flashcards
    Review {
        /// Also write an HTML table here
        #[arg(long)]
        html: Option<PathBuf>,
        #[arg(long)]
        swap: bool,
    },
    /// Write the stored flashcards as delimited text (stdout unless --out)
    Export {
        /// tab | comma | equals (unknown values fall back to comma)
        #[arg(short, long)]
        delimiter: Option<String>,
        /// File or directory (trailing slash) to write to
        #[arg(short, long)]
        out: Option<String>,
        #[arg(long)]
        swap: bool,
    },
    /// Show or change saved settings
    Settings {
        /// Default export format: tab | comma | equals
        #[arg(short, long)]
        delimiter: Option<String>,
        /// light | dark
        #[arg(long)]
        theme: Option<String>,
    },
}

/// Progress on stderr so stdout stays clean for piping.
struct CliProgress {
    max: u32,
}

impl Progress for CliProgress {
    fn begin(&mut self, max_attempts: u32) {
        self.max = max_attempts;
        eprintln!("Waiting for flashcards to load…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn attempt(&mut self, n: u32, found_container: bool) {
        if found_container {
            eprintln!("  attempt {n}/{}: list found, no cards yet", self.max);
        } else {
            eprintln!("  attempt {n}/{}: list not rendered yet", self.max);
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { url, file, stdin, heuristic, interval_ms, timeout_ms } => {
            let mode = if heuristic { ScrapeMode::Heuristic } else { ScrapeMode::Live };
            let opts = ScrapeOptions {
                mode,
                poll: PollOptions::from_millis(interval_ms, timeout_ms),
                ..ScrapeOptions::default()
            };
            let mut source = open(url, file, stdin, mode)?;
            extract(source.as_mut(), &opts)
        }
        Commands::Review { html, swap } => review(html, swap),
        Commands::Export { delimiter, out, swap } => export(delimiter, out, swap),
        Commands::Settings { delimiter, theme } => settings(delimiter, theme),
    }
}

fn open(url: Option<String>, file: Option<PathBuf>, stdin: bool, mode: ScrapeMode) -> Result<Box<dyn PageSource>> {
    if let Some(url) = url {
        scrape::site::check_url(&url, mode)?;
        return Ok(Box::new(UrlSource::new(url)?));
    }
    if let Some(path) = file {
        return Ok(Box::new(FileSource::new(path)));
    }
    if stdin {
        let mut html = String::new();
        io::stdin().read_to_string(&mut html).wrap_err("reading page from stdin")?;
        return Ok(Box::new(StaticSource::new("stdin", html)));
    }
    Err(eyre!("no source given (use --url, --file or --stdin)"))
}

fn extract(source: &mut dyn PageSource, opts: &ScrapeOptions) -> Result<()> {
    let mut prog = CliProgress { max: 0 };
    let result = scrape::run(source, opts, Some(&mut prog))?;

    let mut mailbox = FileMailbox::default();
    let shown = ReviewState::from_result(result.clone());
    let mut surface = || print!("{}", render::text_table(&shown));
    transfer::hand_off(&mut mailbox, &result, &mut surface)?;

    eprintln!("Stored in {}", mailbox.path().display());
    Ok(())
}

fn load_review(swap: bool) -> Result<ReviewState> {
    let mailbox = FileMailbox::default();
    let result = mailbox
        .peek()?
        .ok_or_else(|| eyre!("no flashcards stored yet; run `extract` first"))?;
    let mut state = ReviewState::from_result(result);
    if swap {
        state.swap();
    }
    Ok(state)
}

fn review(html: Option<PathBuf>, swap: bool) -> Result<()> {
    let state = load_review(swap)?;
    print!("{}", render::text_table(&state));

    if let Some(path) = html {
        fs::write(&path, render::html_table(&state))
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        eprintln!("HTML table written to {}", path.display());
    }
    Ok(())
}

fn export(delimiter: Option<String>, out: Option<String>, swap: bool) -> Result<()> {
    let state = load_review(swap)?;
    let delim = match delimiter {
        Some(d) => Delimiter::parse_or_comma(&d),
        None => SettingsStore::default().load_or_default().default_copy_format,
    };

    match out {
        Some(o) => {
            let mut opts = ExportOptions::with_delimiter(delim);
            let path = file::resolve_out_path(&o, &opts)?;
            opts.set_path(&path.to_string_lossy());
            let written = file::write_export(&opts, state.pairs())?;
            eprintln!("Wrote {} flashcards to {}", state.len(), written.display());
        }
        None => {
            if state.is_empty() {
                return Err(crate::error::ExportError::Empty.into());
            }
            let mut stdout = io::stdout().lock();
            stdout.write_all(state.export_string(delim).as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn settings(delimiter: Option<String>, theme: Option<String>) -> Result<()> {
    let store = SettingsStore::default();
    let mut s = store.load()?;
    let before = s;

    if let Some(d) = delimiter {
        s.default_copy_format =
            Delimiter::from_name(&d).ok_or_else(|| eyre!("unknown delimiter {d:?} (tab, comma, equals)"))?;
    }
    if let Some(t) = theme {
        s.theme = Theme::parse(&t).ok_or_else(|| eyre!("unknown theme {t:?} (light, dark)"))?;
    }

    if s != before {
        store.save(&s)?;
        eprintln!("Saved {}", store.path().display());
    }
    println!("defaultCopyFormat = {}", s.default_copy_format.label());
    println!("theme             = {:?}", s.theme);
    Ok(())
}
