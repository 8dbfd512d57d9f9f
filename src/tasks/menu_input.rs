//! Console menu input task

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::{debug, error, info, warn};

use crate::tray::MenuAction;

/// Read one action per line and forward it to the event loop.
/// Stops after a quit action, at end of input, or when the loop is gone.
pub async fn menu_input_task<R>(reader: R, tx: mpsc::Sender<MenuAction>)
where
    R: AsyncBufRead + Unpin,
{
    debug!("Starting menu input task");

    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("End of menu input");
                break;
            }
            Err(e) => {
                error!("Failed to read menu input: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let action = match line.parse::<MenuAction>() {
            Ok(action) => action,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        if tx.send(action).await.is_err() {
            debug!("Event loop gone, stopping menu input");
            break;
        }

        if action == MenuAction::Quit {
            break;
        }
    }
}
