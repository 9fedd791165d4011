use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use tripsearch::app::{App, MouseCapture};
use tripsearch::config::{VoiceConfig, load_config};
use tripsearch::navigation::PendingRoute;
use tripsearch::search::{Category, HttpBackend, QueryController, spawn_worker};
use tripsearch::search_box::SearchBox;
use tripsearch::voice::{CommandSpeech, NoSpeech, SpeechCapability, VoiceInput};

/// Log file path; logging stays off unless this is set
const LOG_ENV: &str = "TRIPSEARCH_LOG";

/// Longest the event loop waits for input before ticking timers
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Type-ahead search for places, hotels and restaurants
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Initial query
    query: Option<String>,

    /// Search service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Category filter: all, hotel, place or restaurant
    #[arg(long, short)]
    category: Option<Category>,

    /// Config file (default: ~/.config/tripsearch/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging()?;

    let mut config = load_config(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        config.search.endpoint = endpoint;
    }

    let backend = HttpBackend::new(
        &config.search.endpoint,
        Duration::from_secs(config.search.timeout_secs),
    )?;
    // Worker stops when this handle goes out of scope
    let (_worker, request_tx, response_rx) = spawn_worker(backend);

    let mut controller = QueryController::from_config(&config.search);
    controller.set_channels(request_tx, response_rx);

    let voice = VoiceInput::new(speech_capability(&config.voice));
    let mut search = SearchBox::new(controller, voice, PendingRoute::new());

    let now = Instant::now();
    if let Some(category) = args.category {
        search.set_category(category, now);
    }

    let mut app = App::new(search, config.routes.base_url.clone());
    if let Some(query) = args.query.as_deref() {
        app = app.with_query(query, now);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();
    result?;

    // Hand the chosen destination to whoever launched us
    if let Some(url) = app.route_url() {
        println!("{}", url);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    let _mouse = MouseCapture::enable()?;

    loop {
        app.update(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now(), POLL_INTERVAL))? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn speech_capability(config: &VoiceConfig) -> Box<dyn SpeechCapability> {
    if config.command.is_empty() {
        return Box::new(NoSpeech);
    }
    let speech = CommandSpeech::new(&config.command);
    if speech.program().is_none() {
        log::warn!("Voice command {:?} not found on PATH", config.command[0]);
    }
    Box::new(speech)
}

/// Log to the file named by `TRIPSEARCH_LOG`; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("tripsearch=debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log::debug!("Logging to {}", PathBuf::from(path).display());
    Ok(())
}
