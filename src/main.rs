use std::cell::RefCell;
use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tracing_subscriber::EnvFilter;

use skycast::action::Action;
use skycast::api::WeatherClient;
use skycast::components::{
    AlertModal, AlertModalProps, Component, WeatherPanel, WeatherPanelProps,
};
use skycast::config::AppConfig;
use skycast::effect::Effect;
use skycast::event::EventKind;
use skycast::reducer::reducer;
use skycast::runtime::{EffectContext, EventOutcome, Runtime};
use skycast::state::{AppState, DEFAULT_CITY};
use skycast::store::{LoggingMiddleware, StoreWithMiddleware};

/// Tick period for the loading spinner animation.
const LOADING_ANIM_TICK_MS: u64 = 120;

/// skycast - city weather lookup TUI
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Look up current weather for a city")]
struct Args {
    /// City queried automatically on startup
    #[arg(long, short, default_value = DEFAULT_CITY)]
    city: String,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_env();
    init_tracing(&config)?;

    let client = WeatherClient::new(&config);

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client, args.city).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// The terminal is owned by the TUI, so tracing output only goes to a file,
/// and only when one is configured.
fn init_tracing(config: &AppConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

struct Ui {
    panel: WeatherPanel,
    alert: AlertModal,
}

impl Ui {
    fn new() -> Self {
        Self {
            panel: WeatherPanel::new(),
            alert: AlertModal::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.panel.render(
            frame,
            area,
            WeatherPanelProps {
                state,
                is_focused: !state.alert_open,
            },
        );
        // The alert draws last, on top of the panel.
        self.alert.render(
            frame,
            area,
            AlertModalProps {
                is_open: state.alert_open,
            },
        );
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome {
        if event.is_quit() {
            return EventOutcome::from_actions([Action::Quit]);
        }

        if let EventKind::Resize(_, _) = event {
            return EventOutcome::needs_render();
        }

        // The alert is blocking: while open, it owns the keyboard.
        if state.alert_open {
            return EventOutcome::from_actions(
                self.alert.handle_event(event, AlertModalProps { is_open: true }),
            );
        }

        EventOutcome::from_actions(self.panel.handle_event(
            event,
            WeatherPanelProps {
                state,
                is_focused: true,
            },
        ))
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    client: WeatherClient,
    city: String,
) -> io::Result<()> {
    let store = StoreWithMiddleware::new(AppState::new(city), reducer, LoggingMiddleware);
    let mut runtime = Runtime::from_store(store);

    // Spinner animation frames.
    runtime.every(Duration::from_millis(LOADING_ANIM_TICK_MS), || Action::Tick);

    // Fetch the default city with no user interaction.
    runtime.enqueue(Action::WeatherFetch);

    let ui = RefCell::new(Ui::new());

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}

/// Handle effects by spawning detached fetch tasks. Nothing cancels an
/// in-flight request, so overlapping fetches settle last-resolved-wins.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<'_>, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather { city } => {
            let client = client.clone();
            ctx.spawn(async move {
                match client.current_by_city(&city).await {
                    Ok(reading) => Action::WeatherDidLoad(reading),
                    Err(e) => {
                        tracing::warn!(city = %city, error = %e, "weather fetch failed");
                        Action::WeatherDidError(e.to_string())
                    }
                }
            });
        }
    }
}
