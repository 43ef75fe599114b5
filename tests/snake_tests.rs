//! Snake simulation scenarios driven through the public API.

use tty_arcade::core::{SnakeState, StepOutcome};
use tty_arcade::types::{Coords, Key, KeyFlags, Velocity, Viewport};

fn snake() -> SnakeState {
    SnakeState::new(Viewport::new(80, 40), 12345).unwrap()
}

#[test]
fn eating_grows_by_five_and_speeds_up() {
    let mut s = snake();
    s.apple = Coords::new(40, 21);

    assert_eq!(s.step(), StepOutcome::Ate);
    assert_eq!(s.tail_size, 6);
    assert_eq!(s.speed_multiplier, 0.25);
    assert_eq!(s.score(), 1);
    assert!(s.playfield().contains(s.apple));
}

fn press(key: Key) -> KeyFlags {
    let mut flags = KeyFlags::default();
    flags.set(key);
    flags
}

fn assert_in_playable_rows(apple: Coords, width: i32, height: i32) {
    let border_y = 10;
    let border_height = height - 10;
    assert!((2..=width - 3).contains(&apple.x), "apple x {}", apple.x);
    assert!(
        (border_y + 1..=border_height - 1).contains(&apple.y),
        "apple y {}",
        apple.y
    );
}

#[test]
fn steering_around_to_the_starting_apple() {
    let mut s = snake();
    assert_eq!(s.player, Coords::new(40, 20));
    assert_eq!(s.apple, Coords::new(40, 15));

    // Reversing straight up into the neck is refused.
    s.steer(&press(Key::Up));
    assert_eq!(s.velocity, Velocity::DOWN);

    s.steer(&press(Key::Left));
    assert_eq!(s.step(), StepOutcome::Moved);
    s.steer(&press(Key::W));
    for _ in 0..5 {
        assert_eq!(s.step(), StepOutcome::Moved);
    }
    assert_eq!(s.player, Coords::new(39, 15));

    s.steer(&press(Key::Right));
    assert_eq!(s.step(), StepOutcome::Ate);
    assert_eq!(s.player, Coords::new(40, 15));
    assert_eq!(s.tail_size, 6);
    assert_eq!(s.speed_multiplier, 0.25);
    assert_in_playable_rows(s.apple, 80, 40);
}

#[test]
fn relocated_apple_stays_in_the_playable_rectangle() {
    for seed in 0..200 {
        let mut s = SnakeState::new(Viewport::new(80, 40), seed).unwrap();
        s.apple = Coords::new(40, 21);
        assert_eq!(s.step(), StepOutcome::Ate);
        assert_in_playable_rows(s.apple, 80, 40);
    }
}

#[test]
fn apple_cell_is_marked_ingested_when_the_body_passes() {
    let mut s = snake();
    s.apple = Coords::new(40, 21);
    s.step();
    s.apple = Coords::new(2, 11);
    s.step();
    s.step();

    let newest = s.history().get(0).unwrap();
    assert_eq!(newest.pos, Coords::new(40, 21));
    assert!(newest.ingested);
    assert!(!s.history().get(1).unwrap().ingested);
}

#[test]
fn speed_multiplier_never_goes_negative() {
    let mut s = snake();
    for i in 0..4 {
        s.apple = s.playfield().wrap(s.player.advanced(s.velocity));
        assert_eq!(s.step(), StepOutcome::Ate, "apple {i}");
    }
    assert_eq!(s.speed_multiplier, 0.0);
}

#[test]
fn tail_size_stays_one_plus_multiple_of_five() {
    let mut s = snake();
    let mut left = KeyFlags::default();
    left.set(Key::Left);
    s.steer(&left);
    assert_eq!(s.velocity, Velocity::LEFT);

    // A straight run shorter than the row, fed every tenth column.
    for _ in 0..30 {
        if s.player.x % 10 == 0 {
            s.apple = s.player.advanced(s.velocity);
        }
        assert_ne!(s.step(), StepOutcome::Collided);
        assert_eq!((s.tail_size - 1) % 5, 0);
    }
    assert!(s.tail_size >= 16);
}

#[test]
fn head_wraps_to_the_opposite_edge() {
    let mut s = snake();
    let pf = s.playfield();

    s.velocity = Velocity::RIGHT;
    s.player = Coords::new(pf.right, 20);
    s.tail = Coords::new(pf.right - 1, 20);
    s.step();
    assert_eq!(s.player, Coords::new(pf.left, 20));

    s.velocity = Velocity::UP;
    s.player = Coords::new(40, pf.top);
    s.tail = Coords::new(40, pf.top + 1);
    s.step();
    assert_eq!(s.player, Coords::new(40, pf.bottom));
}

#[test]
fn self_collision_resets_the_body() {
    let mut s = snake();
    s.apple = Coords::new(40, 21);
    assert_eq!(s.step(), StepOutcome::Ate);
    s.apple = Coords::new(2, 11);

    s.step();
    s.velocity = Velocity::LEFT;
    s.step();
    s.velocity = Velocity::UP;
    s.step();
    assert!(s.history().iter().any(|b| b.ingested));

    // Back onto the cell where the apple was eaten.
    s.velocity = Velocity::RIGHT;
    assert_eq!(s.step(), StepOutcome::Collided);

    assert_eq!(s.tail_size, 1);
    assert!(s.history().is_empty());
    assert!(s.history().slots().iter().all(|b| *b == Default::default()));
    assert_eq!(s.player, s.playfield().center());
    assert_eq!(s.tail, Coords::new(s.player.x - 1, s.player.y));
}

#[test]
fn resize_round_trip_yields_a_fresh_buffer() {
    let mut s = snake();
    s.tail_size = 6;
    for _ in 0..5 {
        s.step();
    }
    assert!(!s.history().is_empty());

    s.resize(Viewport::new(100, 50)).unwrap();
    assert_eq!(s.history().capacity(), 5000);
    s.resize(Viewport::new(80, 40)).unwrap();

    assert_eq!(s.history().capacity(), 3200);
    assert!(s.history().is_empty());
    assert!(s.history().slots().iter().all(|b| *b == Default::default()));
    assert!(s.playfield().contains(s.player));
    assert!(s.playfield().contains(s.apple));
}

#[test]
fn shrinking_pulls_entities_back_inside() {
    let mut s = SnakeState::new(Viewport::new(200, 100), 3).unwrap();
    s.resize(Viewport::new(40, 30)).unwrap();

    let pf = s.playfield();
    assert!(pf.contains(s.player));
    assert!(pf.contains(s.tail));
    assert!(pf.contains(s.apple));
    assert!(s.tail_size <= s.growth_limit());
}
