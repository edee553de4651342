//! Terminal entry point: sets up the terminal, runs the 60 Hz game loop,
//! and restores the terminal on the way out.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dinorun::config::{Config, FRAME_INTERVAL};
use dinorun::game::logic::{process_input, tick_game, DinoGame, GameInput, GameStatus};
use dinorun::ui::render_scene;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore the terminal before printing anything
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if result? {
        println!("Game over!");
    }
    Ok(())
}

/// Drive the game at 60 ticks per second until it ends. Returns true when
/// the run ended in a collision, false on quit.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<bool> {
    let mut game = DinoGame::new(Config::default());
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();

    loop {
        // Drain every event that arrived since the previous tick.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(input) = decode_key(key_event) {
                    process_input(&mut game, input);
                }
            }
        }
        if game.status == GameStatus::Ended {
            return Ok(false);
        }

        terminal.draw(|frame| render_scene(frame, &game))?;

        tick_game(&mut game, &mut rng);
        if game.status == GameStatus::Ended {
            return Ok(true);
        }

        // Frame pacing: sleep out the rest of the 1/60 s budget.
        let elapsed = last_tick.elapsed();
        if elapsed < FRAME_INTERVAL {
            std::thread::sleep(FRAME_INTERVAL - elapsed);
        }
        last_tick = Instant::now();
    }
}

/// Map raw key events onto game inputs. Unbound keys are ignored.
fn decode_key(key_event: KeyEvent) -> Option<GameInput> {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Up => Some(GameInput::Jump),
        KeyCode::Char(' ') => Some(GameInput::Pause),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
