//! The application shell on a headless screen with silent audio.

use std::fs;

use mixel_memory::app::gallery;
use mixel_memory::core::Phase;
use mixel_memory::media::{Assets, SilentAudio, TextVideo};
use mixel_memory::term::Screen;
use mixel_memory::types::{InputEvent, MouseButton, Rect, ToggleKind, GAME_TITLE};
use mixel_memory::{App, Config};
use tempfile::TempDir;

const CATS: [&str; 6] = ["ash", "bean", "coco", "dot", "echo", "fig"];

fn scaffold(cats: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("cats")).unwrap();
    fs::create_dir_all(root.join("sounds")).unwrap();
    fs::create_dir_all(root.join("video")).unwrap();
    fs::write(root.join("sounds/audio.wav"), b"RIFF").unwrap();
    fs::write(root.join("video/video.txt"), "~one~\n---\n~two~\n---\n~three~\n").unwrap();
    for cat in cats {
        fs::write(root.join("cats").join(format!("{cat}.txt")), format!("=^{cat}^=\n")).unwrap();
    }
    dir
}

fn app(dir: &TempDir) -> App {
    let config = Config {
        assets_dir: dir.path().to_path_buf(),
        fps: 4,
        seed: Some(3),
        video_hold: 1,
        ..Config::default()
    };
    let assets = Assets::load(&config.assets_dir).unwrap();
    let screen = Screen::headless(gallery(&assets), 80, 30);
    App::assemble(config, &assets, screen, Box::new(SilentAudio::new()), TextVideo::new()).unwrap()
}

fn click(rect: Rect) -> InputEvent {
    InputEvent::Click {
        button: MouseButton::Left,
        x: rect.x,
        y: rect.y,
    }
}

fn screen_text(app: &App) -> String {
    let frame = app.screen().frame();
    (0..frame.height())
        .map(|y| frame.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn first_frame_draws_title_level_and_backdrop() {
    let dir = scaffold(&CATS);
    let mut app = app(&dir);
    app.frame(&[]).unwrap();
    let text = screen_text(&app);
    assert!(text.contains(GAME_TITLE));
    assert!(text.contains("Level 1"));
    assert!(text.contains("~two~"));
    assert!(text.contains("[♪]"));
    assert_eq!(app.frames(), 1);
}

#[test]
fn music_starts_looped_and_follows_the_toggle() {
    let dir = scaffold(&CATS);
    let mut app = app(&dir);
    assert!(!app.audio().is_paused());

    let icon = app.game().toggles().get(ToggleKind::Music).rect;
    app.frame(&[click(icon)]).unwrap();
    assert!(app.audio().is_paused());
    assert!(screen_text(&app).contains("[×]"));

    app.frame(&[click(icon)]).unwrap();
    assert!(!app.audio().is_paused());
}

#[test]
fn video_toggle_freezes_the_backdrop() {
    let dir = scaffold(&CATS);
    let mut app = app(&dir);
    let icon = app.game().toggles().get(ToggleKind::Video).rect;

    app.frame(&[click(icon)]).unwrap();
    assert!(!app.backdrop().is_playing());
    let frozen = app.backdrop().frame().clone();
    for _ in 0..5 {
        app.frame(&[]).unwrap();
    }
    assert_eq!(app.backdrop().frame(), &frozen);

    // The frame that turns the video back on was drawn still frozen.
    app.frame(&[click(icon)]).unwrap();
    assert!(app.backdrop().is_playing());
    assert_eq!(app.backdrop().frame(), &frozen);
    app.frame(&[]).unwrap();
    assert_ne!(app.backdrop().frame(), &frozen);
}

#[test]
fn backdrop_loops_forever() {
    let dir = scaffold(&CATS);
    let mut app = app(&dir);
    for _ in 0..7 {
        app.frame(&[]).unwrap();
    }
    assert!(app.backdrop().reopens() >= 2);
}

#[test]
fn mismatch_reveal_lasts_one_second_of_frames() {
    let dir = scaffold(&CATS);
    let mut app = app(&dir);
    let tiles = app.game().tiles();
    let first = tiles.get(0).unwrap().clone();
    let other = tiles.iter().find(|t| t.key != first.key).unwrap().clone();

    app.frame(&[click(first.rect), click(other.rect)]).unwrap();
    assert_eq!(app.game().phase(), Phase::Blocked);
    for _ in 0..3 {
        app.frame(&[]).unwrap();
        assert!(app.game().blocked());
    }
    app.frame(&[]).unwrap();
    assert_eq!(app.game().phase(), Phase::Idle);
}

#[test]
fn quit_event_stops_the_loop() {
    let dir = scaffold(&CATS);
    let mut app = app(&dir);
    assert!(!app.should_quit());
    app.frame(&[InputEvent::Quit]).unwrap();
    assert!(app.should_quit());
    app.teardown().unwrap();
}

#[test]
fn resize_moves_toggles_and_canvas() {
    let dir = scaffold(&CATS);
    let mut app = app(&dir);
    app.frame(&[InputEvent::Resize {
        width: 100,
        height: 40,
    }])
    .unwrap();
    assert_eq!(app.screen().width(), 100);
    assert_eq!(app.screen().height(), 40);
    assert_eq!(app.game().toggles().get(ToggleKind::Music).rect.x, 96);
}

#[test]
fn too_few_cats_fail_at_startup() {
    let dir = scaffold(&CATS[..5]);
    let config = Config {
        assets_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let assets = Assets::load(&config.assets_dir).unwrap();
    let screen = Screen::headless(gallery(&assets), 80, 30);
    let err = App::assemble(config, &assets, screen, Box::new(SilentAudio::new()), TextVideo::new())
        .err()
        .unwrap();
    assert!(format!("{err:#}").contains("configuration error"));
}
