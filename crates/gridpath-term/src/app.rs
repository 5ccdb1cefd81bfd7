//! The update/draw loop: [`Model`], [`Driver`], [`Screen`], [`App`].
//!
//! Unlike a pure Elm loop, a model may keep control inside `update` for a
//! long time (an animated search), so it is handed the [`Screen`] and can
//! present intermediate frames and poll for input itself.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use log::{debug, trace};

use crate::canvas::{Canvas, Frame, compute_frame};
use crate::input::Msg;

/// Result type of driver and loop operations.
pub type DriverResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// A cooperative-cancellation token for the loop.
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

/// What the loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Stop the loop.
    End,
    /// Forget what is on screen and repaint every glyph next frame.
    Redraw,
}

/// Back-end driver (terminal, or a scripted stand-in for tests).
pub trait Driver {
    fn init(&mut self) -> DriverResult;

    /// Wait up to `timeout` for input and send whatever is pending through
    /// `tx`. Must not block longer than `timeout`, and should stop early
    /// once `ctx` is done.
    fn poll_msgs(&mut self, ctx: &Context, tx: &Sender<Msg>, timeout: Duration) -> DriverResult;

    /// Paint a computed frame.
    fn flush(&mut self, frame: &Frame) -> DriverResult;

    /// Restore the terminal. Called exactly once, also after errors.
    fn close(&mut self);
}

/// The application model.
pub trait Model {
    /// Handle one message. Long-running work may present frames and poll
    /// input through `screen` before returning.
    fn update<D: Driver>(&mut self, msg: Msg, screen: &mut Screen<D>) -> DriverResult<Option<Effect>>;

    /// Render the current state. The canvas is blank on entry.
    fn draw(&self, canvas: &mut Canvas);
}

/// The driver together with the double-buffered canvas and input queue.
pub struct Screen<D: Driver> {
    driver: D,
    ctx: Context,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
    prev: Canvas,
    curr: Canvas,
}

impl<D: Driver> Screen<D> {
    pub fn new(driver: D, width: i32, height: i32) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            driver,
            ctx: Context::new(),
            tx,
            rx,
            prev: Canvas::new(0, 0),
            curr: Canvas::new(width, height),
        }
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    #[inline]
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Queue a message for the next poll.
    pub fn send(&self, msg: Msg) {
        // The receiver lives in `self`, so the channel cannot be closed.
        let _ = self.tx.send(msg);
    }

    /// Collect pending input, waiting up to `timeout` for the driver.
    pub fn poll(&mut self, timeout: Duration) -> DriverResult<Vec<Msg>> {
        self.driver.poll_msgs(&self.ctx, &self.tx, timeout)?;
        Ok(self.rx.try_iter().collect())
    }

    /// Draw a new frame with `draw`, diff it against what is on screen and
    /// flush the changes. Returns the number of glyphs flushed.
    pub fn present(&mut self, draw: impl FnOnce(&mut Canvas)) -> DriverResult<usize> {
        self.curr.fill(Default::default());
        draw(&mut self.curr);
        let frame = compute_frame(&self.prev, &self.curr);
        let changed = frame.cells.len();
        if !frame.is_empty() {
            trace!("flushing {changed} glyphs");
            self.driver.flush(&frame)?;
        }
        if self.prev.width() != self.curr.width() || self.prev.height() != self.curr.height() {
            self.prev = Canvas::new(self.curr.width(), self.curr.height());
        }
        std::mem::swap(&mut self.prev, &mut self.curr);
        Ok(changed)
    }

    /// Make the next [`present`](Self::present) repaint everything.
    pub fn invalidate(&mut self) {
        self.prev = Canvas::new(0, 0);
    }
}

/// Configuration for an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
    /// How long one idle poll waits for input.
    pub poll_timeout: Duration,
}

/// Runs a [`Model`] against a [`Driver`].
pub struct App<M: Model, D: Driver> {
    model: M,
    screen: Screen<D>,
    poll_timeout: Duration,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            screen: Screen::new(config.driver, config.width, config.height),
            poll_timeout: config.poll_timeout,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn driver(&self) -> &D {
        self.screen.driver()
    }

    /// Run the loop: init, then poll → update → draw → diff → flush until
    /// the model ends it or input runs out. The driver is always closed.
    pub fn run(&mut self) -> DriverResult {
        self.screen.driver.init()?;
        let res = self.event_loop();
        self.screen.driver.close();
        res
    }

    fn event_loop(&mut self) -> DriverResult {
        self.screen.send(Msg::Init);
        let mut msgs: Vec<Msg> = self.screen.rx.try_iter().collect();
        loop {
            self.process(msgs)?;
            if self.screen.ctx.is_done() {
                debug!("application loop finished");
                return Ok(());
            }
            msgs = self.screen.poll(self.poll_timeout)?;
        }
    }

    fn process(&mut self, msgs: Vec<Msg>) -> DriverResult {
        if msgs.is_empty() {
            return Ok(());
        }
        for msg in msgs {
            let quit = msg == Msg::Quit;
            match self.model.update(msg, &mut self.screen)? {
                Some(Effect::End) => self.screen.ctx.cancel(),
                Some(Effect::Redraw) => self.screen.invalidate(),
                None => {}
            }
            if quit {
                self.screen.ctx.cancel();
            }
            if self.screen.ctx.is_done() {
                return Ok(());
            }
        }
        let model = &self.model;
        self.screen.present(|c| model.draw(c))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Point;
    use crate::input::Key;
    use crate::script::ScriptedDriver;
    use crate::style::Style;

    /// Counts key presses; `q` ends, `r` asks for a repaint, `!` animates
    /// three intermediate frames from inside `update`.
    #[derive(Default)]
    struct Counter {
        keys: usize,
        seen_init: bool,
        seen_quit: bool,
    }

    impl Model for Counter {
        fn update<D: Driver>(&mut self, msg: Msg, screen: &mut Screen<D>) -> DriverResult<Option<Effect>> {
            match msg {
                Msg::Init => self.seen_init = true,
                Msg::Quit => self.seen_quit = true,
                Msg::KeyDown { key: Key::Char('q'), .. } => return Ok(Some(Effect::End)),
                Msg::KeyDown { key: Key::Char('r'), .. } => return Ok(Some(Effect::Redraw)),
                Msg::KeyDown { key: Key::Char('!'), .. } => {
                    for _ in 0..3 {
                        self.keys += 1;
                        let keys = self.keys;
                        screen.present(|c| {
                            c.print(Point::new(0, 0), &keys.to_string(), Style::default());
                        })?;
                    }
                }
                Msg::KeyDown { .. } => self.keys += 1,
                _ => {}
            }
            Ok(None)
        }

        fn draw(&self, canvas: &mut Canvas) {
            canvas.print(Point::new(0, 0), &self.keys.to_string(), Style::default());
        }
    }

    fn app(script: Vec<Vec<Msg>>) -> App<Counter, ScriptedDriver> {
        App::new(AppConfig {
            model: Counter::default(),
            driver: ScriptedDriver::new(script),
            width: 4,
            height: 1,
            poll_timeout: Duration::from_millis(1),
        })
    }

    #[test]
    fn runs_until_end_effect() {
        let mut a = app(vec![
            vec![Msg::key(Key::Char('a')), Msg::key(Key::Char('b'))],
            vec![],
            vec![Msg::key(Key::Char('q')), Msg::key(Key::Char('c'))],
        ]);
        a.run().unwrap();
        assert!(a.model().seen_init);
        assert_eq!(a.model().keys, 2);
        assert!(a.driver().initialized());
        assert!(a.driver().closed());
        assert_eq!(a.driver().screen().row_text(0), "2   ");
    }

    #[test]
    fn exhausted_input_quits() {
        let mut a = app(vec![vec![Msg::key(Key::Char('a'))]]);
        a.run().unwrap();
        assert!(a.model().seen_quit);
        assert!(a.driver().closed());
    }

    #[test]
    fn only_changes_are_flushed() {
        // Init draws "0"; an unchanged redraw flushes nothing.
        let mut a = app(vec![vec![Msg::Screen { width: 9, height: 9 }]]);
        a.run().unwrap();
        assert_eq!(a.driver().frames(), 1);
    }

    #[test]
    fn redraw_repaints() {
        let mut a = app(vec![vec![Msg::key(Key::Char('r'))]]);
        a.run().unwrap();
        assert_eq!(a.driver().frames(), 2);
    }

    #[test]
    fn model_can_present_mid_update() {
        let mut a = app(vec![vec![Msg::key(Key::Char('!'))]]);
        a.run().unwrap();
        // Init frame plus one per animated step; the final draw matches the
        // last step and adds nothing.
        assert_eq!(a.driver().frames(), 4);
        assert_eq!(a.driver().screen().row_text(0), "3   ");
    }

    #[test]
    fn context_cancels_once() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_done());
        ctx.cancel();
        assert!(other.is_done());
    }
}
