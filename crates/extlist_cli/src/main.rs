//! Terminal host for the extensions list.
//!
//! # Responsibility
//! - Build `AppConfig` from command-line arguments.
//! - Drive `ExtensionsApp` the way a page drives it from DOM events.

use clap::{Parser, Subcommand, ValueEnum};
use extlist_core::config::DEFAULT_PREFERENCES_FILE_NAME;
use extlist_core::db::open_db;
use extlist_core::source::DEFAULT_DATA_LOCATION;
use extlist_core::{
    default_log_level, init_logging, AppConfig, ExtensionsApp, FilterMode,
    MemoryPreferenceRepository, PreferenceRepository, SqlitePreferenceRepository, Theme, UiEvent,
};
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

#[derive(Debug, Parser)]
#[command(name = "extlist", version, about = "Browse, filter and manage extensions")]
struct Cli {
    /// File path or http(s) URL serving the extension records.
    #[arg(long, default_value = DEFAULT_DATA_LOCATION)]
    data: String,

    /// SQLite file holding the theme preference.
    #[arg(long, default_value = DEFAULT_PREFERENCES_FILE_NAME)]
    prefs: PathBuf,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Give up on an HTTP data source after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the extensions and print them.
    Show {
        #[arg(long, default_value = "all")]
        filter: FilterMode,
        /// Print the rendered page markup instead of a text list.
        #[arg(long)]
        html: bool,
    },
    /// Print or change the persisted theme.
    Theme { action: Option<ThemeAction> },
    /// Read interactive commands from stdin.
    Session,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl ThemeAction {
    fn event(self) -> UiEvent {
        match self {
            Self::Light => UiEvent::ThemeSelected(Theme::Light),
            Self::Dark => UiEvent::ThemeSelected(Theme::Dark),
            Self::Toggle => UiEvent::ThemeToggled,
        }
    }
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig {
            data_location: self.data.clone(),
            preferences_path: self.prefs.clone(),
            log_level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: self.log_dir.clone(),
            fetch_timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    if let Some(dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &dir.to_string_lossy()) {
            eprintln!("extlist: {err}");
            return ExitCode::FAILURE;
        }
    }

    let conn = match open_db(&config.preferences_path) {
        Ok(conn) => Some(conn),
        Err(err) => {
            warn!("event=prefs_open module=cli status=fallback error={err}");
            eprintln!("extlist: preferences unavailable, theme changes will not persist: {err}");
            None
        }
    };
    let sqlite_prefs = conn.as_ref().map(SqlitePreferenceRepository::new);
    let memory_prefs = MemoryPreferenceRepository::new();
    let prefs: &dyn PreferenceRepository = match &sqlite_prefs {
        Some(repo) => repo,
        None => &memory_prefs,
    };

    let mut app = ExtensionsApp::new(prefs);
    match run(&cli.command, &config, &mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("extlist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: &Command,
    config: &AppConfig,
    app: &mut ExtensionsApp<&dyn PreferenceRepository>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Show { filter, html } => {
            app.startup(config.source().as_ref());
            app.dispatch(UiEvent::FilterSelected(*filter), Instant::now())?;
            if *html {
                println!("{}", app.to_html());
            } else {
                print_list(app);
            }
        }
        Command::Theme { action } => {
            if let Some(action) = action {
                app.dispatch(action.event(), Instant::now())?;
            }
            println!("theme={}", app.theme());
        }
        Command::Session => {
            app.startup(config.source().as_ref());
            print_list(app);
            run_session(app)?;
        }
    }
    Ok(())
}

/// One parsed line of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Empty,
    Quit,
    Show,
    Html,
    Dispatch(UiEvent),
    /// Name lookup missed; nothing to dispatch.
    NoSuchExtension(String),
    Unknown(String),
}

/// Parses one session line, resolving extension names against `app`.
fn parse_session_line<R: PreferenceRepository>(
    app: &ExtensionsApp<R>,
    line: &str,
) -> SessionCommand {
    let (verb, arg) = match line.trim().split_once(' ') {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line.trim(), ""),
    };

    let store = app.page().store();
    match verb {
        "" => SessionCommand::Empty,
        "quit" | "exit" => SessionCommand::Quit,
        "show" => SessionCommand::Show,
        "html" => SessionCommand::Html,
        "filter" => SessionCommand::Dispatch(UiEvent::FilterSelected(FilterMode::from_label(arg))),
        "theme" => match arg {
            "light" => SessionCommand::Dispatch(UiEvent::ThemeSelected(Theme::Light)),
            "dark" => SessionCommand::Dispatch(UiEvent::ThemeSelected(Theme::Dark)),
            "toggle" | "" => SessionCommand::Dispatch(UiEvent::ThemeToggled),
            other => SessionCommand::Unknown(format!("theme {other}")),
        },
        "toggle" => match store.find_by_name(arg) {
            Some(extension) => SessionCommand::Dispatch(UiEvent::ToggleChanged {
                id: extension.id,
                checked: !extension.is_active,
            }),
            None => SessionCommand::NoSuchExtension(arg.to_string()),
        },
        "remove" => match store.find_by_name(arg) {
            Some(extension) => {
                SessionCommand::Dispatch(UiEvent::RemoveClicked { id: extension.id })
            }
            None => SessionCommand::NoSuchExtension(arg.to_string()),
        },
        other => SessionCommand::Unknown(other.to_string()),
    }
}

fn run_session(app: &mut ExtensionsApp<&dyn PreferenceRepository>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let now = Instant::now();
        match parse_session_line(app, &line) {
            SessionCommand::Empty => {}
            SessionCommand::Quit => break,
            SessionCommand::Show => {
                app.tick(now);
                print_list(app);
            }
            SessionCommand::Html => {
                app.tick(now);
                println!("{}", app.to_html());
            }
            SessionCommand::Dispatch(event) => match app.dispatch(event, now) {
                Ok(_) => print_list(app),
                Err(err) => println!("error: {err}"),
            },
            SessionCommand::NoSuchExtension(name) => {
                println!("no extension named `{name}`");
            }
            SessionCommand::Unknown(command) => {
                println!(
                    "unknown command `{command}`; try filter|toggle|remove|theme light|dark|toggle|show|html|quit"
                );
            }
        }

        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_list(app: &ExtensionsApp<&dyn PreferenceRepository>) {
    let page = app.page();
    println!("theme={} filter={}", app.theme(), page.filter());
    for card in page.view().cards() {
        let mark = if card.checked { "x" } else { " " };
        let leaving = if card.is_leaving() { " (removing)" } else { "" };
        println!("[{mark}] {}: {}{leaving}", card.name, card.description);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_session_line, SessionCommand};
    use extlist_core::{
        ExtensionRecord, ExtensionSource, ExtensionsApp, FilterMode, MemoryPreferenceRepository,
        SourceResult, Theme, UiEvent,
    };

    struct StaticSource(Vec<ExtensionRecord>);

    impl ExtensionSource for StaticSource {
        fn location(&self) -> String {
            "static".to_string()
        }

        fn fetch(&self) -> SourceResult<Vec<ExtensionRecord>> {
            Ok(self.0.clone())
        }
    }

    fn started_app(prefs: &MemoryPreferenceRepository) -> ExtensionsApp<&MemoryPreferenceRepository> {
        let mut app = ExtensionsApp::new(prefs);
        app.startup(&StaticSource(vec![
            ExtensionRecord::new("A", true),
            ExtensionRecord::new("B", false),
        ]));
        app
    }

    #[test]
    fn theme_accepts_only_light_dark_and_toggle() {
        let prefs = MemoryPreferenceRepository::new();
        let app = started_app(&prefs);

        assert_eq!(
            parse_session_line(&app, "theme dark"),
            SessionCommand::Dispatch(UiEvent::ThemeSelected(Theme::Dark))
        );
        assert_eq!(
            parse_session_line(&app, "theme toggle"),
            SessionCommand::Dispatch(UiEvent::ThemeToggled)
        );
        assert_eq!(
            parse_session_line(&app, "theme"),
            SessionCommand::Dispatch(UiEvent::ThemeToggled)
        );
        assert_eq!(
            parse_session_line(&app, "theme sepia"),
            SessionCommand::Unknown("theme sepia".to_string())
        );
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn toggle_by_name_flips_current_state() {
        let prefs = MemoryPreferenceRepository::new();
        let app = started_app(&prefs);
        let a = app.page().store().find_by_name("A").unwrap().id;
        let b = app.page().store().find_by_name("B").unwrap().id;

        assert_eq!(
            parse_session_line(&app, "toggle A"),
            SessionCommand::Dispatch(UiEvent::ToggleChanged { id: a, checked: false })
        );
        assert_eq!(
            parse_session_line(&app, "  toggle   B "),
            SessionCommand::Dispatch(UiEvent::ToggleChanged { id: b, checked: true })
        );
    }

    #[test]
    fn missing_names_dispatch_nothing() {
        let prefs = MemoryPreferenceRepository::new();
        let app = started_app(&prefs);

        assert_eq!(
            parse_session_line(&app, "toggle Z"),
            SessionCommand::NoSuchExtension("Z".to_string())
        );
        assert_eq!(
            parse_session_line(&app, "remove Z"),
            SessionCommand::NoSuchExtension("Z".to_string())
        );
        assert_eq!(app.page().store().len(), 2);
    }

    #[test]
    fn plain_verbs_parse() {
        let prefs = MemoryPreferenceRepository::new();
        let app = started_app(&prefs);
        let a = app.page().store().find_by_name("A").unwrap().id;

        assert_eq!(parse_session_line(&app, ""), SessionCommand::Empty);
        assert_eq!(parse_session_line(&app, "exit"), SessionCommand::Quit);
        assert_eq!(parse_session_line(&app, "show"), SessionCommand::Show);
        assert_eq!(parse_session_line(&app, "html"), SessionCommand::Html);
        assert_eq!(
            parse_session_line(&app, "filter Inactive"),
            SessionCommand::Dispatch(UiEvent::FilterSelected(FilterMode::Inactive))
        );
        assert_eq!(
            parse_session_line(&app, "remove A"),
            SessionCommand::Dispatch(UiEvent::RemoveClicked { id: a })
        );
        assert_eq!(
            parse_session_line(&app, "dance"),
            SessionCommand::Unknown("dance".to_string())
        );
    }
}
