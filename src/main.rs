//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for mouse/keyboard input and the framebuffer renderer from
//! `tui_memory::term`. Configuration errors (bad pool, missing assets) are
//! reported before the terminal switches to the alternate screen.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use tracing::{debug, info};

use tui_memory::cli::Args;
use tui_memory::core::{Deck, Session, SessionSnapshot};
use tui_memory::input::{translate, InputEvent};
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer};
use tui_memory::types::{GameAction, Viewport, TICK_MS};

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_logging()?;

    let seed = args.seed();
    let config = args.session_config(seed);
    let deck = args.load_deck(config.pairs())?;
    let session = Session::new(config, deck.content_ids()).context("dealing the first round")?;
    info!(seed, size = config.grid_size, "session started");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, &deck);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session, deck: &Deck) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();
    let mut viewport = term.viewport().unwrap_or(Viewport::new(80, 24));

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        view.render_into(&snap, deck, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match translate(event::read()?) {
                Some(InputEvent::Quit) => return Ok(()),
                Some(InputEvent::Resize(w, h)) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                Some(InputEvent::Action(action)) => {
                    debug!(action = action.as_str(), "input");
                    match action {
                        GameAction::Reveal(point) => {
                            let outcome = session.handle_click(point, viewport);
                            debug!(x = point.x, y = point.y, ?outcome, "click");
                        }
                        GameAction::Restart => {
                            session.start_round().context("dealing a new round")?;
                        }
                    }
                }
                None => {}
            }
        }

        // Tick with the real elapsed time so the score tracks the wall clock.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            last_tick += Duration::from_millis(ms as u64);
            session.tick(ms);
        }
    }
}
