//! Crossterm front end: redraws the replay every tick and listens for the restart and quit keys.

use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, PrintStyledContent, Stylize},
    terminal::{self, ClearType},
};
use log::{info, warn};

use grid_navigation::render::{self, Tile};
use grid_navigation::{Playback, Scenario};

const TITLE: &str = "Robot avoiding obstacles simulation";
const HELP: &str = "[r] loop   [q] quit";
const LIGHT_BLUE: Color = Color::Rgb {
    r: 173,
    g: 216,
    b: 230,
};

/// Set while the replay owns the screen.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Whether log lines may be written to the terminal. False while the replay is drawn, since
/// stderr shares the screen with the frame.
pub fn can_log() -> bool {
    !SCREEN_ACTIVE.load(Ordering::Relaxed)
}

/// Puts the terminal in raw mode on an alternate screen and undoes both when dropped, including
/// on early return through `?`. Logging is muted for the guard's lifetime.
struct TerminalGuard;

impl TerminalGuard {
    fn new(stdout: &mut Stdout) -> Result<Self> {
        SCREEN_ACTIVE.store(true, Ordering::Relaxed);
        let guard = TerminalGuard;
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
        .context("failed to prepare the terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        SCREEN_ACTIVE.store(false, Ordering::Relaxed);
    }
}

enum Action {
    Restart,
    Quit,
}

fn to_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

fn tile_cell(tile: Tile) -> PrintStyledContent<&'static str> {
    let content = match tile {
        Tile::Free => "  ".on(Color::White),
        Tile::Blocked => "  ".on(Color::Black),
        Tile::Start => "  ".on(Color::Green),
        Tile::Goal => "  ".on(Color::Red),
        Tile::Trail => "  ".on(LIGHT_BLUE),
        Tile::Robot => "[]".with(Color::Black).on(LIGHT_BLUE),
    };
    PrintStyledContent(content)
}

fn draw(stdout: &mut Stdout, scenario: &Scenario, playback: &Playback) -> Result<()> {
    queue!(
        stdout,
        cursor::MoveTo(0, 0),
        PrintStyledContent(TITLE.bold())
    )?;
    let tiles = render::tiles(scenario, playback);
    let mut line: u16 = 2;
    for row in tiles {
        queue!(stdout, cursor::MoveTo(0, line))?;
        for tile in row {
            queue!(stdout, tile_cell(tile))?;
        }
        line += 1;
    }
    queue!(
        stdout,
        cursor::MoveTo(0, line + 1),
        terminal::Clear(ClearType::CurrentLine),
        Print(render::status(playback)),
        cursor::MoveTo(0, line + 2),
        PrintStyledContent(HELP.dark_grey())
    )?;
    stdout.flush()?;
    Ok(())
}

/// Replays the solved scenario until the user quits. Restarting runs a fresh search on the same
/// grid and replays the result from the first step.
pub fn run(scenario: &Scenario, tick: Duration) -> Result<()> {
    let mut playback = Playback::new(scenario.solve()?);
    if playback.path().is_empty() {
        warn!("No path from {} to {}", scenario.start, scenario.goal);
    }

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::new(&mut stdout)?;
    let mut next_tick = Instant::now() + tick;
    loop {
        draw(&mut stdout, scenario, &playback).context("failed to draw frame")?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match to_action(key) {
                    Some(Action::Quit) => return Ok(()),
                    Some(Action::Restart) => {
                        info!("Restarting replay");
                        playback.restart(scenario.solve()?);
                        next_tick = Instant::now() + tick;
                    }
                    None => {}
                }
            }
            continue;
        }
        playback.tick();
        next_tick += tick;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_is_muted_while_the_screen_is_active() {
        assert!(can_log());
        SCREEN_ACTIVE.store(true, Ordering::Relaxed);
        assert!(!can_log());
        SCREEN_ACTIVE.store(false, Ordering::Relaxed);
        assert!(can_log());
    }

    #[test]
    fn keys_map_to_actions() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert!(matches!(to_action(press(KeyCode::Char('r'))), Some(Action::Restart)));
        assert!(matches!(to_action(press(KeyCode::Esc)), Some(Action::Quit)));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(to_action(ctrl_c), Some(Action::Quit)));
        assert!(to_action(press(KeyCode::Char('c'))).is_none());
    }
}
