//! Event loop tying keyboard input, the session actor and the renderer together.

use std::io::Write;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent};
use tokio::time::{self, Duration};
use tracing::{debug, warn};

use crate::input::{KeyAction, handle_key};
use crate::render;
use crate::session::SessionHandle;

const FRAME_INTERVAL_MS: u64 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Runs until the player quits or the session worker goes away.
pub async fn run<W: Write>(handle: &SessionHandle, out: &mut W) -> Result<()> {
    let mut view_rx = handle.subscribe();
    let initial = view_rx.borrow_and_update().clone();
    render::draw(out, &initial)?;

    loop {
        tokio::select! {
            changed = view_rx.changed() => {
                if changed.is_err() {
                    warn!("view feed closed");
                    break;
                }
                let view = view_rx.borrow_and_update().clone();
                render::draw(out, &view)?;
            }
            _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                if poll_input(handle, out).await? == LoopControl::Quit {
                    break;
                }
            }
        }
    }
    Ok(())
}

async fn poll_input<W: Write>(handle: &SessionHandle, out: &mut W) -> Result<LoopControl> {
    if !term_event::poll(Duration::from_millis(0))? {
        return Ok(LoopControl::Continue);
    }

    match term_event::read()? {
        TermEvent::Key(key) => dispatch(handle, handle_key(key)).await,
        TermEvent::Resize(_, _) => {
            render::draw(out, &handle.snapshot().await?)?;
            Ok(LoopControl::Continue)
        }
        _ => Ok(LoopControl::Continue),
    }
}

/// Forwards one decoded key to the session.
pub async fn dispatch(handle: &SessionHandle, action: KeyAction) -> Result<LoopControl> {
    match action {
        KeyAction::Quit => Ok(LoopControl::Quit),
        KeyAction::Submit(command) => {
            let report = handle.send(command).await?;
            debug!(?command, ?report, "command applied");
            Ok(LoopControl::Continue)
        }
        KeyAction::None => Ok(LoopControl::Continue),
    }
}
