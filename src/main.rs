use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::KeyEventKind;
use ratatui::DefaultTerminal;
use tracing::{error, info};

use tasktool::app::App;
use tasktool::config::{Config, GeneralConfig, load_config, load_config_from_path};
use tasktool::event::{Event, EventHandler};
use tasktool::logging;
use tasktool::system::collector::Collector;
use tasktool::ui;

/// Lower bound for the tick interval.
const MIN_REFRESH_MS: u64 = 50;

#[derive(Parser)]
#[command(
    name = "tasktool",
    version,
    about = "Interactive terminal task manager with live CPU, memory and disk rates"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Initial sort: ram, cpu, disk, pid
    #[arg(long)]
    sort: Option<String>,

    /// Initial filter query (`%` shows everything)
    #[arg(long)]
    filter: Option<String>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    let config = load_config_for_cli(&cli);
    info!(
        refresh_rate_ms = config.general.refresh_rate_ms,
        sort = %config.general.default_sort,
        filter = %config.general.default_filter,
        "starting tasktool"
    );

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!(%panic_info, "panicked");
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();
    info!("tasktool exited");

    result
}

async fn run(terminal: &mut DefaultTerminal, config: Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms.max(MIN_REFRESH_MS));
    let mut app = App::new(&config, Box::new(Collector::new()));
    let mut events = EventHandler::new(tick_rate);

    render(terminal, &mut app)?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = app.map_key(key);
                app.dispatch(action);
            }
            Event::Tick => app.on_tick(),
            Event::Resize => {}
        }
        if app.running {
            render(terminal, &mut app)?;
        }
    }

    Ok(())
}

fn render(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    if app.redraw.needs_clear(size.width, size.height, app.view) {
        terminal.clear()?;
    }
    terminal.draw(|frame| ui::draw(frame, app))?;
    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(ref sort) = cli.sort {
        config.general.default_sort = sort.clone();
    }
    if let Some(ref filter) = cli.filter {
        config.general.default_filter = filter.clone();
    }
    if config.general.default_filter.is_empty() {
        config.general.default_filter = GeneralConfig::default().default_filter;
    }

    config
}
