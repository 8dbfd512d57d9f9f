//! Focus Tray - A tray-style focus/break countdown timer
//!
//! This is the main entry point for the focus-tray application.

use tokio::{io::BufReader, runtime::Builder, sync::mpsc};
use tracing::{info, warn};

use focus_tray::{
    config::{Config, BREAK_MINUTES, FOCUS_MINUTES},
    state::AppState,
    tasks::{menu_input_task, run_event_loop, LoopExit},
    tray::ConsoleTray,
    utils::{shutdown_signal, signals::shutdown_signals},
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout belongs to the tray
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting focus-tray v1.0.0");
    info!("Focus {}m, break {}m", FOCUS_MINUTES, BREAK_MINUTES);

    // All state lives on one thread
    let runtime = Builder::new_current_thread().enable_all().build()?;
    let result = runtime.block_on(run(config));

    // The stdin reader may still be parked on a blocking read
    runtime.shutdown_background();
    result
}

async fn run(config: Config) -> anyhow::Result<()> {
    let signals = shutdown_signals()?;

    let tray = ConsoleTray::stdout(config.assets.clone(), !config.no_menu);
    let mut state = AppState::new(tray);
    if let Err(e) = state.tray_mut().render_menu() {
        warn!("{}", e);
    }

    let (action_tx, action_rx) = mpsc::channel(16);
    tokio::spawn(menu_input_task(BufReader::new(tokio::io::stdin()), action_tx));

    match run_event_loop(&mut state, action_rx, shutdown_signal(signals)).await {
        LoopExit::Quit => info!("Quit from menu"),
        LoopExit::Shutdown => info!("Stopped by signal"),
    }

    let counters = state.counters();
    info!(
        "Session totals: finished={}, cancelled={}, breaks={}",
        counters.finished, counters.cancelled, counters.breaks
    );
    println!();
    Ok(())
}
