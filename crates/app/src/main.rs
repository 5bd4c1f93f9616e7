use std::fmt;

use lingua_core::localization::Localizer;
use lingua_core::model::{DifficultyTier, Language, SectionId, SectionView, SessionConfig};
use services::{AppServices, Clock, SessionController, SessionLoopService};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidTier { raw: String },
    InvalidSection { raw: String },
    InvalidBatchSize { raw: String },
    InvalidLanguage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidTier { raw } => write!(f, "invalid --tier value: {raw}"),
            ArgsError::InvalidSection { raw } => write!(f, "invalid --section value: {raw}"),
            ArgsError::InvalidBatchSize { raw } => write!(f, "invalid --batch-size value: {raw}"),
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --lang value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Review,
    Sections,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "review" => Some(Self::Review),
            "sections" => Some(Self::Sections),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    tier: DifficultyTier,
    section: Option<SectionId>,
    batch_size: Option<usize>,
    language: Option<Language>,
    system_locale: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- review   [--db <sqlite_url>] [--tier <tier>] [--section <id>]");
    eprintln!("                               [--batch-size <n>] [--lang <en|tr>]");
    eprintln!("  cargo run -p app -- sections [--db <sqlite_url>] [--tier <tier>] [--lang <en|tr>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:lingua.sqlite3");
    eprintln!("  --tier beginner");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LINGUA_DB_URL, LINGUA_LANG (falls back to LANG), RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("LINGUA_DB_URL")
            .ok()
            .map_or_else(|| normalize_sqlite_url("sqlite:lingua.sqlite3".into()), normalize_sqlite_url);
        let system_locale = std::env::var("LINGUA_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_default();
        let mut tier = DifficultyTier::Beginner;
        let mut section = None;
        let mut batch_size = None;
        let mut language = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--tier" => {
                    let value = require_value(args, "--tier")?;
                    tier = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTier { raw: value.clone() })?;
                }
                "--section" => {
                    let value = require_value(args, "--section")?;
                    let id = SectionId::new(value.clone())
                        .map_err(|_| ArgsError::InvalidSection { raw: value })?;
                    section = Some(id);
                }
                "--batch-size" => {
                    let value = require_value(args, "--batch-size")?;
                    let parsed: usize = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidBatchSize { raw: value.clone() })?;
                    batch_size = Some(parsed);
                }
                "--lang" => {
                    let value = require_value(args, "--lang")?;
                    let parsed: Language = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLanguage { raw: value.clone() })?;
                    language = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            tier,
            section,
            batch_size,
            language,
            system_locale,
        })
    }

    fn session_config(&self) -> Result<SessionConfig, Box<dyn std::error::Error>> {
        let config = SessionConfig::default();
        Ok(match self.batch_size {
            Some(size) => config.with_batch_size(size)?,
            None => config,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: review when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Review,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Review,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };
    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(
        &parsed.db_url,
        Clock::system(),
        parsed.session_config()?,
        &parsed.system_locale,
    )
    .await?;
    tracing::info!(db = %parsed.db_url, "storage ready");

    let preferences = services.preferences();
    if let Some(language) = parsed.language {
        preferences.set_language(language).await?;
    }
    let language = preferences.language().await?;
    let localizer = services.localizer();
    let t = |key: &str| localizer.text(key, language).into_owned();

    if !preferences.has_seen_onboarding().await? {
        println!("{} · {}", t("app_name"), t("app_subtitle"));
        preferences.set_has_seen_onboarding(true).await?;
    }

    let views = services.progress().sections_for_tier(parsed.tier).await?;

    match cmd {
        Command::Sections => {
            let tier_progress = services.progress().tier_progress(parsed.tier).await?;
            println!(
                "{} ({}) {}",
                t(parsed.tier.title_key()),
                t(parsed.tier.description_key()),
                tier_progress
            );
            for view in &views {
                print_section_line(view, localizer.as_ref(), language);
            }
            Ok(())
        }
        Command::Review => {
            let Some(view) = pick_section(&views, parsed.section.as_ref()) else {
                eprintln!("no playable section in {}", parsed.tier);
                return Ok(());
            };
            if view.is_locked() {
                eprintln!("{}: {}", t(view.section.display_key()), t("locked"));
                return Ok(());
            }

            println!(
                "{} · {}",
                t(view.section.display_key()),
                t(view.section.description_key())
            );
            let loop_svc = services.session_loop();
            let mut session = loop_svc.start_session(view.section.id())?;
            review_loop(&loop_svc, &mut session).await?;
            loop_svc.flush().await;

            if let Ok(summary) = session.summary() {
                println!();
                println!("{}", t("game_over"));
                println!("{}: {}", t("score"), summary.score());
                println!("{}: {:.0}%", t("accuracy"), summary.accuracy() * 100.0);
                println!("{}: {}", t("correct_answers"), summary.correct_words().len());
                println!("{}: {}", t("incorrect_answers"), summary.incorrect_words().len());
                for word in summary.incorrect_words() {
                    println!("  {} → {}", word.source_text(), word.target_text());
                }
            }

            let progress = services.progress();
            let updated = progress.section_progress_of(view.section.id()).await?;
            println!("{}: {}", t("progress"), updated);
            Ok(())
        }
    }
}

fn print_section_line(view: &SectionView, localizer: &dyn Localizer, language: Language) {
    let marker = if view.is_locked() { "🔒" } else { "  " };
    println!(
        "{marker} {:>2}. {:<28} {:>4}  {}",
        view.section.order(),
        localizer.text(view.section.display_key(), language),
        view.progress,
        view.section.id()
    );
}

/// The requested section, or the first open one that is not finished yet.
fn pick_section<'a>(views: &'a [SectionView], requested: Option<&SectionId>) -> Option<&'a SectionView> {
    if let Some(id) = requested {
        return views.iter().find(|v| v.section.id() == id);
    }
    views
        .iter()
        .filter(|v| !v.is_locked())
        .find(|v| v.progress.value() < 1.0)
        .or_else(|| views.first())
}

async fn review_loop(
    loop_svc: &SessionLoopService,
    session: &mut SessionController,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let snap = loop_svc.snapshot(session);
        let Some(word) = snap.current_word else {
            return Ok(());
        };
        println!();
        println!(
            "{} {}   [{}/{}]  score {}",
            snap.icon.as_deref().unwrap_or("•"),
            word.source_text(),
            snap.batch.answered + 1,
            snap.batch.total,
            snap.score
        );
        println!("[y] knew it  [n] missed  [u] undo  [q] quit");

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };
        match line.trim() {
            "y" => {
                loop_svc.answer(session, true);
                println!("  ✓ {}", word.target_text());
            }
            "n" => {
                loop_svc.answer(session, false);
                println!("  ✗ {}", word.target_text());
            }
            "u" => {
                if loop_svc.undo(session).is_some() {
                    // Nothing to animate in a terminal.
                    session.finish_undo_animation();
                } else {
                    println!("  nothing to undo");
                }
            }
            "q" => return Ok(()),
            other => println!("  unknown input: {other}"),
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
