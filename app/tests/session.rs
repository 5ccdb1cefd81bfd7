//! Whole sessions driven through the scripted terminal driver.

use std::time::Duration;

use gridpath_core::{CellState, Pos};
use gridpath_lib::render::ORANGE;
use gridpath_lib::{Algorithm, Config, Status, Visualizer};
use gridpath_term::{App, AppConfig, Key, MouseAction, Msg, Point, ScriptedDriver};

const SIDE: i32 = 5;

fn config() -> Config {
    Config {
        size: SIDE,
        delay: Duration::ZERO,
        seed: Some(11),
        ..Config::default()
    }
}

fn session(script: Vec<Vec<Msg>>) -> App<Visualizer, ScriptedDriver> {
    interrupted(script, vec![])
}

/// Like [`session`], with `interrupts` arriving while a run is animating.
fn interrupted(script: Vec<Vec<Msg>>, interrupts: Vec<Vec<Msg>>) -> App<Visualizer, ScriptedDriver> {
    let model = Visualizer::new(&config()).unwrap();
    let layout = model.layout();
    let mut app = App::new(AppConfig {
        model,
        driver: ScriptedDriver::new(script).with_interrupts(interrupts),
        width: layout.width(),
        height: layout.height(),
        poll_timeout: Duration::from_millis(1),
    });
    app.run().unwrap();
    app
}

/// A left click on grid cell (`row`, `col`).
fn click(row: i32, col: i32) -> Msg {
    Msg::mouse(MouseAction::Main, col * 2, row)
}

fn right_click(row: i32, col: i32) -> Msg {
    Msg::mouse(MouseAction::Secondary, col * 2, row)
}

fn key(c: char) -> Msg {
    match c {
        ' ' => Msg::key(Key::Space),
        c => Msg::key(Key::Char(c)),
    }
}

fn status_line(app: &App<Visualizer, ScriptedDriver>) -> String {
    let row = app.model().layout().status_row();
    app.driver().screen().row_text(row)
}

#[test]
fn clicks_place_start_end_then_walls() {
    let app = session(vec![vec![click(0, 0), click(4, 4), click(2, 2), click(2, 3)]]);
    let grid = app.model().grid();
    assert_eq!(grid.start(), Some(Pos::new(0, 0)));
    assert_eq!(grid.end(), Some(Pos::new(4, 4)));
    assert!(grid.is_barrier(Pos::new(2, 2)));
    assert!(grid.is_barrier(Pos::new(2, 3)));
    assert_eq!(grid.count_barriers(), 2);
    assert_eq!(app.driver().screen().get(Point::new(0, 0)).style.bg, ORANGE);
    assert!(app.driver().closed());
}

#[test]
fn clicking_an_endpoint_again_changes_nothing() {
    let app = session(vec![vec![click(0, 0), click(0, 0), click(1, 1), click(1, 1)]]);
    let grid = app.model().grid();
    assert_eq!(grid.start(), Some(Pos::new(0, 0)));
    assert_eq!(grid.end(), Some(Pos::new(1, 1)));
    assert_eq!(grid.count_barriers(), 0);
}

#[test]
fn endpoint_dropped_on_a_wall_clears_it() {
    let app = session(vec![
        vec![click(0, 0), click(4, 4), click(2, 2)],
        vec![right_click(0, 0), click(2, 2)],
    ]);
    let grid = app.model().grid();
    assert_eq!(grid.start(), Some(Pos::new(2, 2)));
    assert!(!grid.is_barrier(Pos::new(2, 2)));
}

#[test]
fn run_finds_the_shortest_path() {
    let app = session(vec![vec![click(0, 0), click(0, 4), key(' ')]]);
    let model = app.model();
    match model.status() {
        Status::Found {
            algorithm, steps, ..
        } => {
            assert_eq!(*algorithm, Algorithm::Dijkstra);
            assert_eq!(*steps, 4);
        }
        other => panic!("unexpected status {other:?}"),
    }
    assert_eq!(model.grid().count(CellState::Path), 3);
    assert_eq!(model.grid().state(Pos::new(0, 4)), Some(CellState::End));
    assert!(status_line(&app).starts_with("Dijkstra's shortest path: path found, 4 steps"));
}

#[test]
fn astar_runs_after_tab() {
    let app = session(vec![vec![click(0, 0), click(4, 4), Msg::key(Key::Tab), key(' ')]]);
    assert_eq!(app.model().algorithm(), Algorithm::AStar);
    assert!(status_line(&app).starts_with("A star: path found, 8 steps"));
}

#[test]
fn buttons_select_the_algorithm() {
    let row = SIDE;
    // "[ Dijkstra's shortest path ]" is 28 columns, then a 2 column gap.
    let astar = session(vec![vec![Msg::mouse(MouseAction::Main, 31, row)]]);
    assert_eq!(astar.model().algorithm(), Algorithm::AStar);
    let back = session(vec![vec![
        Msg::mouse(MouseAction::Main, 31, row),
        Msg::mouse(MouseAction::Main, 3, row),
    ]]);
    assert_eq!(back.model().algorithm(), Algorithm::Dijkstra);
}

#[test]
fn walled_off_goal_reports_no_path() {
    let app = session(vec![vec![
        click(0, 0),
        click(4, 4),
        click(3, 4),
        click(4, 3),
        key(' '),
    ]]);
    assert!(matches!(app.model().status(), Status::NoPath { .. }));
    assert_eq!(app.model().grid().count(CellState::Path), 0);
}

#[test]
fn escape_cancels_a_run() {
    let app = interrupted(
        vec![vec![click(0, 0), click(4, 4), key(' ')]],
        vec![vec![], vec![Msg::key(Key::Escape)]],
    );
    assert_eq!(app.model().status(), &Status::Cancelled);
    assert_eq!(app.model().grid().count(CellState::Path), 0);
    assert!(status_line(&app).starts_with("run cancelled"));
}

#[test]
fn quit_during_a_run_ends_the_session() {
    let app = interrupted(
        vec![vec![click(0, 0), click(4, 4), key(' ')], vec![click(2, 2)]],
        vec![vec![key('q')]],
    );
    assert_eq!(app.model().status(), &Status::Cancelled);
    assert!(!app.model().grid().is_barrier(Pos::new(2, 2)));
    assert!(app.driver().closed());
}

#[test]
fn run_without_endpoints_asks_for_them() {
    let app = session(vec![vec![click(0, 0), key(' ')]]);
    assert_eq!(app.model().status(), &Status::NeedEndpoints);
    assert!(status_line(&app).starts_with("place a start and an end first"));
}

#[test]
fn right_click_erases_but_keeps_search_marks() {
    let app = session(vec![
        vec![click(0, 0), click(0, 4), click(3, 3), key(' ')],
        vec![right_click(1, 0), right_click(3, 3), right_click(0, 4)],
    ]);
    let grid = app.model().grid();
    assert_eq!(grid.state(Pos::new(1, 0)), Some(CellState::Closed));
    assert!(!grid.is_barrier(Pos::new(3, 3)));
    assert_eq!(grid.end(), None);
    assert_eq!(grid.state(Pos::new(0, 4)), Some(CellState::Default));
}

#[test]
fn clear_resets_everything() {
    let app = session(vec![
        vec![click(0, 0), click(4, 4), click(2, 2), key(' ')],
        vec![key('c')],
    ]);
    let grid = app.model().grid();
    assert_eq!(grid.start(), None);
    assert_eq!(grid.end(), None);
    assert_eq!(grid.count_barriers(), 0);
    assert_eq!(grid.count(CellState::Closed), 0);
    assert_eq!(app.model().status(), &Status::Cleared);
}

#[test]
fn seeded_mazes_repeat() {
    let first = session(vec![vec![click(0, 0), key('g')]]);
    let second = session(vec![vec![key('g')]]);
    let (a, b) = (first.model().grid(), second.model().grid());
    assert_eq!(a.to_layout(), b.to_layout());
    assert_eq!(a.start(), None);
    assert!(a.count_barriers() > 0);
    assert!(!a.is_barrier(Pos::new(0, 0)));
    assert!(matches!(first.model().status(), Status::MazeDone { .. }));
}

#[test]
fn maze_then_search() {
    // The maze root is always open, as is the cell it first carves into.
    let app = session(vec![vec![key('g')]]);
    let grid = app.model().grid();
    let open: Vec<Pos> = grid
        .iter()
        .filter(|(_, c)| !c.barrier)
        .map(|(p, _)| p)
        .collect();
    assert!(open.len() >= 2);
    let (s, e) = (open[0], open[open.len() - 1]);
    let app = session(vec![
        vec![key('g')],
        vec![click(s.row, s.col), click(e.row, e.col), key(' ')],
    ]);
    assert!(matches!(app.model().status(), Status::Found { .. }));
}

#[test]
fn escape_when_idle_quits() {
    let app = session(vec![vec![Msg::key(Key::Escape), click(0, 0)]]);
    assert_eq!(app.model().grid().start(), None);
    assert!(app.driver().closed());
}
