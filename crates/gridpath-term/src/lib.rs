//! **gridpath-term**: the terminal surface of the gridpath visualizer.
//!
//! A [`Model`] draws into a [`Canvas`]; the [`App`] loop diffs each canvas
//! against the previous one and hands the resulting [`Frame`] to a
//! [`Driver`]. [`CrosstermDriver`] talks to a real terminal and
//! [`ScriptedDriver`] replays canned input for tests.

pub mod app;
pub mod canvas;
pub mod input;
pub mod script;
pub mod style;
pub mod terminal;

pub use app::{App, AppConfig, Context, Driver, DriverResult, Effect, Model, Screen};
pub use canvas::{Canvas, Frame, FrameCell, Glyph, Point, compute_frame};
pub use input::{Key, ModMask, MouseAction, Msg};
pub use script::ScriptedDriver;
pub use style::{AttrMask, Color, Style};
pub use terminal::CrosstermDriver;
