use macroquad::math::{vec2, Vec2};
use sparse_life::{Camera, Config, Coord, Intent, Session};

fn session() -> Session {
    Session::with_seed(Config::default(), 11)
}

/// Frame with no input
fn wait(session: &mut Session, dt: f32) -> bool {
    session.frame(Vec::<Intent>::new(), dt)
}

/// Screen point at the middle of a cell under the current camera
fn over(session: &Session, x: i32, y: i32) -> Vec2 {
    let size = session.config().cell_size;
    session.camera.world_to_screen(vec2((x as f32 + 0.5) * size, (y as f32 + 0.5) * size))
}

#[test]
fn test_reset_from_arbitrary_state() {
    let mut s = session();
    let at = over(&s, 0, 0);
    s.frame(
        [
            Intent::Randomize,
            Intent::StampPattern { index: 6, at },
            Intent::TogglePause,
            Intent::Slower,
            Intent::Slower,
            Intent::PanStart,
            Intent::PanMove(vec2(-120.0, 64.0)),
            Intent::PanEnd,
            Intent::Zoom { anchor: vec2(10.0, 10.0), wheel: 4.0 },
            Intent::StepOnce,
        ],
        0.0,
    );
    wait(&mut s, 1.0);
    assert!(s.snapshot().generation >= 2);

    s.frame([Intent::Reset], 0.0);
    let snapshot = s.snapshot();
    assert_eq!(snapshot.generation, 0);
    assert_eq!(snapshot.population, 0);
    assert!(snapshot.paused);
    assert_eq!(snapshot.step_interval, 0.2);
    assert_eq!(s.camera, Camera::from_config(&Config::default()));
}

#[test]
fn test_stroke_never_toggles_a_cell_twice() {
    let mut s = session();
    let a = over(&s, 0, 0);
    let b = over(&s, 1, 0);
    let c = over(&s, 2, 0);

    s.frame(
        [
            Intent::PaintBegin(a),
            Intent::PaintMove(b),
            Intent::PaintMove(a),
            Intent::PaintMove(c),
            Intent::PaintMove(b),
            Intent::PaintMove(a),
        ],
        0.0,
    );
    assert_eq!(s.snapshot().population, 3);

    // A fresh gesture starting on a live cell erases
    s.frame([Intent::PaintEnd, Intent::PaintBegin(b), Intent::PaintMove(a)], 0.0);
    let grid = s.snapshot().grid;
    assert!(!grid.contains(Coord::new(0, 0)));
    assert!(!grid.contains(Coord::new(1, 0)));
    assert!(grid.contains(Coord::new(2, 0)));
}

#[test]
fn test_painted_blinker_oscillates_on_timer() {
    let mut s = session();
    let cells = [over(&s, -1, 0), over(&s, 0, 0), over(&s, 1, 0)];
    s.frame(
        [
            Intent::PaintBegin(cells[0]),
            Intent::PaintMove(cells[1]),
            Intent::PaintMove(cells[2]),
            Intent::PaintEnd,
            Intent::TogglePause,
        ],
        0.0,
    );

    assert!(!wait(&mut s, 0.1));
    assert!(wait(&mut s, 0.15));
    let grid = s.snapshot().grid;
    assert!(grid.contains(Coord::new(0, -1)) && grid.contains(Coord::new(0, 1)));
    assert_eq!(grid.population(), 3);

    assert!(wait(&mut s, 0.25));
    let grid = s.snapshot().grid;
    assert!(grid.contains(Coord::new(-1, 0)) && grid.contains(Coord::new(1, 0)));
    assert_eq!(s.snapshot().generation, 2);
}

#[test]
fn test_paint_lands_under_cursor_after_zoom_and_pan() {
    let mut s = session();
    s.frame(
        [
            Intent::Zoom { anchor: vec2(731.0, 97.0), wheel: 6.0 },
            Intent::PanStart,
            Intent::PanMove(vec2(5000.0, 3000.0)),
            Intent::PanEnd,
        ],
        0.0,
    );
    let target = Coord::new(-250, -173);
    let at = over(&s, target.x, target.y);
    s.frame([Intent::PaintBegin(at), Intent::PaintEnd], 0.0);

    let grid = s.snapshot().grid;
    assert_eq!(grid.population(), 1);
    assert!(grid.contains(target));
}

#[test]
fn test_single_step_works_while_running() {
    let mut s = session();
    s.frame([Intent::TogglePause, Intent::StepOnce], 0.0);
    assert_eq!(s.snapshot().generation, 1);
    assert!(!s.snapshot().paused);
}

#[test]
fn test_manual_step_is_the_only_step_that_frame() {
    let mut s = session();
    s.frame([Intent::TogglePause], 0.0);
    assert!(!wait(&mut s, 0.15));

    // The timer would fire this frame, but the manual step takes its place
    assert!(!s.frame([Intent::StepOnce], 0.1));
    assert_eq!(s.snapshot().generation, 1);

    // A long frame with a manual step still advances only once
    assert!(!s.frame([Intent::StepOnce], 5.0));
    assert_eq!(s.snapshot().generation, 2);

    // The timer restarts from the manual step
    assert!(!wait(&mut s, 0.1));
    assert!(wait(&mut s, 0.1));
    assert_eq!(s.snapshot().generation, 3);
}
