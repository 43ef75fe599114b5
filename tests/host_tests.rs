//! Frame-level behavior of the mode dispatcher, driven through the input sampler.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tty_arcade::engine::Host;
use tty_arcade::input::{InputSampler, KeySource};
use tty_arcade::term::FrameBuffer;
use tty_arcade::types::{Coords, GameMode, Velocity, Viewport};

struct Scripted(VecDeque<Event>);

impl KeySource for Scripted {
    fn poll_event(&mut self) -> io::Result<Option<Event>> {
        Ok(self.0.pop_front())
    }
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

struct Rig {
    host: Host,
    sampler: InputSampler,
    source: Scripted,
    fb: FrameBuffer,
}

impl Rig {
    fn new() -> Self {
        Self {
            host: Host::new(Viewport::new(80, 40), 12345, false).unwrap(),
            sampler: InputSampler::new(),
            source: Scripted(VecDeque::new()),
            fb: FrameBuffer::new(80, 40),
        }
    }

    /// One frame with at most one queued event.
    fn frame(&mut self, event: Option<Event>) -> GameMode {
        self.source.0.extend(event);
        self.sampler.sample(&mut self.source).unwrap();
        let mode = self.host.run_sampled(&self.sampler, &mut self.fb).unwrap();
        self.sampler.clear();
        mode
    }

    fn cell(&self, at: Coords) -> char {
        self.fb.get_at(at.x, at.y).map(|c| c.ch).unwrap_or('?')
    }
}

#[test]
fn starts_in_menu() {
    let mut rig = Rig::new();
    assert_eq!(rig.frame(None), GameMode::Menu);
    assert!(rig.fb.row_text(5).contains("Snake"));
}

#[test]
fn mode_key_applies_on_the_next_frame() {
    let mut rig = Rig::new();
    assert_eq!(rig.frame(Some(press(KeyCode::Char('S')))), GameMode::Menu);
    assert_eq!(rig.host.context().mode, GameMode::Snake);

    assert_eq!(rig.frame(None), GameMode::Snake);
    let snake = rig.host.snake();
    assert_eq!(rig.cell(snake.player), 'X');
    assert_eq!(rig.cell(snake.apple), '$');
}

#[test]
fn released_keys_are_ignored() {
    let mut rig = Rig::new();
    let release = Event::Key(KeyEvent::new_with_kind_and_state(
        KeyCode::Char('S'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    ));
    rig.frame(Some(release));
    assert_eq!(rig.frame(None), GameMode::Menu);
}

#[test]
fn collision_returns_to_menu() {
    let mut rig = Rig::new();
    rig.frame(Some(press(KeyCode::Char('S'))));

    let snake = rig.host.snake_mut();
    snake.tail_size = 10;
    snake.step();
    snake.velocity = Velocity::LEFT;
    snake.step();
    snake.velocity = Velocity::UP;
    snake.step();
    snake.velocity = Velocity::RIGHT;
    snake.frame_timer = 0.0;

    assert_eq!(rig.frame(None), GameMode::Snake);
    assert_eq!(rig.host.snake().tail_size, 1);
    assert_eq!(rig.frame(None), GameMode::Menu);
}

#[test]
fn escape_always_forces_menu() {
    let mut rig = Rig::new();
    rig.frame(Some(press(KeyCode::Char('A'))));
    assert_eq!(rig.frame(None), GameMode::Asteroids);
    assert!(rig.fb.cells().iter().all(|c| c.ch == '*'));

    rig.frame(Some(press(KeyCode::Esc)));
    assert_eq!(rig.frame(None), GameMode::Menu);
}

#[test]
fn test_bed_box_follows_arrows() {
    let mut rig = Rig::new();
    rig.frame(Some(press(KeyCode::Char('T'))));
    let start = rig.host.testbed().position();

    assert_eq!(rig.frame(Some(press(KeyCode::Right))), GameMode::TestBed);
    assert_eq!(rig.host.testbed().position(), Coords::new(start.x + 1, start.y));
    assert_eq!(rig.cell(Coords::new(start.x + 1, start.y)), '≠');
}

#[test]
fn resize_reallocates_before_rendering() {
    let mut rig = Rig::new();
    rig.frame(Some(press(KeyCode::Char('S'))));

    assert_eq!(rig.frame(Some(Event::Resize(100, 50))), GameMode::Snake);
    assert_eq!(rig.host.context().viewport, Viewport::new(100, 50));
    assert_eq!((rig.fb.width(), rig.fb.height()), (100, 50));
    assert_eq!(rig.host.snake().history().capacity(), 5000);
    assert_eq!(rig.fb.row_text(40).chars().filter(|&c| c == '=').count(), 100);
}

#[test]
fn debug_key_toggles_overlay_flag() {
    let mut rig = Rig::new();
    rig.frame(Some(press(KeyCode::Char('P'))));
    assert!(rig.host.context().show_debug);
    rig.frame(Some(press(KeyCode::Char('P'))));
    assert!(!rig.host.context().show_debug);
}

#[test]
fn backspace_and_ctrl_c_quit() {
    let mut rig = Rig::new();
    rig.frame(Some(press(KeyCode::Backspace)));
    assert!(!rig.host.is_running());

    let mut rig = Rig::new();
    rig.frame(Some(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    ))));
    assert!(!rig.host.is_running());
}
