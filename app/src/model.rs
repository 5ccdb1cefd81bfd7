//! The visualizer model: grid editing, controls, and animated runs.

use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use gridpath_core::{CellState, Grid, GridError, Observer, Pos};
use gridpath_maze::{MazeGen, MazeOutcome};
use gridpath_search::{Outcome, SearchError, run_heuristic_search, run_uniform_cost};
use gridpath_term::{
    Canvas, Driver, DriverResult, Effect, Key, Model, MouseAction, Msg, Point, Screen,
};

use crate::config::{Algorithm, Config};
use crate::render::{self, Layout};

/// What the status line says.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Ready,
    Running(Algorithm),
    Found {
        algorithm: Algorithm,
        steps: usize,
        explored: usize,
    },
    NoPath {
        algorithm: Algorithm,
        explored: usize,
    },
    Cancelled,
    NeedEndpoints,
    Carving,
    MazeDone { open: usize },
    MazeCancelled,
    Cleared,
    Rejected(GridError),
    Failed(SearchError),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::Running(a) => write!(f, "running {}... (Esc cancels)", a.label()),
            Self::Found {
                algorithm,
                steps,
                explored,
            } => write!(
                f,
                "{}: path found, {steps} steps, {explored} cells explored",
                algorithm.label()
            ),
            Self::NoPath {
                algorithm,
                explored,
            } => write!(f, "{}: no path, {explored} cells explored", algorithm.label()),
            Self::Cancelled => f.write_str("run cancelled"),
            Self::NeedEndpoints => f.write_str("place a start and an end first"),
            Self::Carving => f.write_str("carving maze... (Esc cancels)"),
            Self::MazeDone { open } => write!(f, "maze ready, {open} open cells"),
            Self::MazeCancelled => f.write_str("maze cancelled"),
            Self::Cleared => f.write_str("cleared"),
            Self::Rejected(e) => write!(f, "{e}"),
            Self::Failed(e) => write!(f, "search failed: {e}"),
        }
    }
}

/// Observer that animates a run on the terminal and watches for Esc/q.
struct StepView<'a, D: Driver> {
    screen: &'a mut Screen<D>,
    layout: Layout,
    algorithm: Algorithm,
    status: Status,
    delay: Duration,
    steps: usize,
    cancelled: bool,
    quit: bool,
    failed: Option<Box<dyn Error>>,
}

impl<'a, D: Driver> StepView<'a, D> {
    fn new(screen: &'a mut Screen<D>, viz: &Visualizer, status: Status) -> Self {
        Self {
            screen,
            layout: viz.layout,
            algorithm: viz.algorithm,
            status,
            delay: viz.delay,
            steps: 0,
            cancelled: false,
            quit: false,
            failed: None,
        }
    }

    fn finish(self) -> DriverResult<(usize, bool)> {
        match self.failed {
            Some(e) => Err(e),
            None => Ok((self.steps, self.quit)),
        }
    }
}

impl<D: Driver> Observer for StepView<'_, D> {
    fn on_step(&mut self, grid: &Grid) {
        self.steps += 1;
        if self.failed.is_some() {
            return;
        }
        let (layout, algorithm, status) = (&self.layout, self.algorithm, &self.status);
        if let Err(e) = self
            .screen
            .present(|c| render::draw(c, grid, layout, algorithm, status))
        {
            self.failed = Some(e);
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn is_cancelled(&mut self) -> bool {
        if self.cancelled || self.failed.is_some() {
            return true;
        }
        let msgs = match self.screen.poll(Duration::ZERO) {
            Ok(msgs) => msgs,
            Err(e) => {
                self.failed = Some(e);
                return true;
            }
        };
        for msg in msgs {
            match msg {
                Msg::KeyDown {
                    key: Key::Escape, ..
                } => self.cancelled = true,
                Msg::KeyDown {
                    key: Key::Char('q'),
                    ..
                }
                | Msg::Quit => {
                    self.cancelled = true;
                    self.quit = true;
                }
                Msg::Screen { .. } => self.screen.invalidate(),
                // The grid is busy; edits are dropped.
                _ => {}
            }
        }
        self.cancelled
    }
}

/// The interactive grid visualizer.
pub struct Visualizer {
    grid: Grid,
    layout: Layout,
    algorithm: Algorithm,
    status: Status,
    delay: Duration,
    maze: MazeGen<StdRng>,
}

impl Visualizer {
    pub fn new(config: &Config) -> Result<Self, GridError> {
        let layout = Layout::new(config.size);
        let grid = Grid::new(config.size, layout.grid_extent())?;
        let maze = match config.seed {
            Some(seed) => MazeGen::seeded(seed),
            None => MazeGen::with_rng(StdRng::from_os_rng()),
        };
        Ok(Self {
            grid,
            layout,
            algorithm: config.algorithm,
            status: Status::Ready,
            delay: config.delay,
            maze,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    fn reject(&mut self, e: GridError) {
        warn!("edit rejected: {e}");
        self.status = Status::Rejected(e);
    }

    /// Left click: place the start, then the end, then walls.
    fn place(&mut self, p: Pos) {
        let (start, end) = (self.grid.start(), self.grid.end());
        let res = if start.is_none() && end != Some(p) {
            self.clear_then(p, Grid::set_start)
        } else if end.is_none() && start != Some(p) {
            self.clear_then(p, Grid::set_end)
        } else if start != Some(p) && end != Some(p) {
            self.grid.set_barrier(p)
        } else {
            Ok(())
        };
        if let Err(e) = res {
            self.reject(e);
        }
    }

    /// An endpoint may be dropped onto a wall; the wall goes.
    fn clear_then(
        &mut self,
        p: Pos,
        set: fn(&mut Grid, Pos) -> Result<(), GridError>,
    ) -> Result<(), GridError> {
        if self.grid.is_barrier(p) {
            self.grid.clear(p)?;
        }
        set(&mut self.grid, p)
    }

    /// Right click: erase anything but search marks.
    fn erase(&mut self, p: Pos) {
        match self.grid.state(p) {
            Some(CellState::Open | CellState::Closed | CellState::Path) | None => {}
            Some(_) => {
                if let Err(e) = self.grid.clear(p) {
                    self.reject(e);
                }
            }
        }
    }

    fn mouse(&mut self, action: MouseAction, at: Point) {
        if let Some(p) = self.layout.cell_at(&self.grid, at) {
            match action {
                MouseAction::Main => self.place(p),
                MouseAction::Secondary => self.erase(p),
                _ => {}
            }
        } else if action == MouseAction::Main {
            if let Some(a) = self.layout.button_at(at) {
                self.algorithm = a;
            }
        }
    }

    fn clear_all(&mut self) {
        self.grid.reset(false);
        self.status = Status::Cleared;
    }

    /// Run the selected search, animating every expansion.
    fn run<D: Driver>(&mut self, screen: &mut Screen<D>) -> DriverResult<Option<Effect>> {
        let (start, end) = match self.grid.prepare_search() {
            Ok(endpoints) => endpoints,
            Err(_) => {
                self.status = Status::NeedEndpoints;
                return Ok(None);
            }
        };
        let algorithm = self.algorithm;
        info!("running {algorithm} from {start} to {end}");
        let mut view = StepView::new(screen, self, Status::Running(algorithm));
        let res = match algorithm {
            Algorithm::Dijkstra => run_uniform_cost(&mut self.grid, start, end, &mut view),
            Algorithm::AStar => run_heuristic_search(&mut self.grid, start, end, &mut view),
        };
        let (explored, quit) = view.finish()?;
        self.status = match res {
            Ok(Outcome::Found) => Status::Found {
                algorithm,
                steps: self.grid.count(CellState::Path) + 1,
                explored,
            },
            Ok(Outcome::Exhausted) => Status::NoPath {
                algorithm,
                explored,
            },
            Ok(Outcome::Cancelled) => Status::Cancelled,
            Err(e) => {
                warn!("search refused: {e}");
                Status::Failed(e)
            }
        };
        debug!("run finished: {}", self.status);
        Ok(quit.then_some(Effect::End))
    }

    /// Wall over the grid and carve a fresh maze, animating every step.
    fn carve<D: Driver>(&mut self, screen: &mut Screen<D>) -> DriverResult<Option<Effect>> {
        info!("generating maze");
        let mut view = StepView::new(screen, self, Status::Carving);
        let outcome = self.maze.generate(&mut self.grid, &mut view);
        let (_, quit) = view.finish()?;
        self.status = match outcome {
            MazeOutcome::Completed => Status::MazeDone {
                open: self.grid.len() - self.grid.count_barriers(),
            },
            MazeOutcome::Cancelled => Status::MazeCancelled,
        };
        Ok(quit.then_some(Effect::End))
    }

    fn key<D: Driver>(&mut self, key: Key, screen: &mut Screen<D>) -> DriverResult<Option<Effect>> {
        match key {
            Key::Space => return self.run(screen),
            Key::Char('g') => return self.carve(screen),
            Key::Tab => self.algorithm = self.algorithm.toggled(),
            Key::Char('c') => self.clear_all(),
            Key::Char('q') | Key::Escape => return Ok(Some(Effect::End)),
            _ => {}
        }
        Ok(None)
    }
}

impl Model for Visualizer {
    fn update<D: Driver>(&mut self, msg: Msg, screen: &mut Screen<D>) -> DriverResult<Option<Effect>> {
        match msg {
            Msg::Init => {
                info!(
                    "grid {}x{}, {} selected",
                    self.grid.side(),
                    self.grid.side(),
                    self.algorithm
                );
                Ok(None)
            }
            Msg::KeyDown { key, .. } => self.key(key, screen),
            Msg::Mouse { action, pos, .. } => {
                self.mouse(action, pos);
                Ok(None)
            }
            Msg::Screen { .. } => Ok(Some(Effect::Redraw)),
            Msg::Quit => Ok(Some(Effect::End)),
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        render::draw(canvas, &self.grid, &self.layout, self.algorithm, &self.status);
    }
}
