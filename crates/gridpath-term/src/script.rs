//! A scripted [`Driver`] for driving an [`App`](crate::App) without a
//! terminal.
//!
//! Each waiting poll delivers the next batch of scripted messages; once the
//! script runs out it gets [`Msg::Quit`], so the loop always ends.
//! Non-blocking polls (zero timeout), made by a model busy inside `update`,
//! draw from a separate queue of interrupts instead. Flushed frames are
//! applied to an in-memory canvas that tests can read back.

use std::collections::VecDeque;
use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::app::{Context, Driver, DriverResult};
use crate::canvas::{Canvas, Frame};
use crate::input::Msg;

#[derive(Debug, Default)]
pub struct ScriptedDriver {
    script: VecDeque<Vec<Msg>>,
    interrupts: VecDeque<Vec<Msg>>,
    screen: Canvas,
    frames: usize,
    polls: usize,
    initialized: bool,
    closed: bool,
}

impl ScriptedDriver {
    /// A driver replaying `batches`, one per poll.
    pub fn new(batches: impl IntoIterator<Item = Vec<Msg>>) -> Self {
        Self {
            script: batches.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Input delivered, one batch per non-blocking poll, while the model
    /// is busy.
    pub fn with_interrupts(mut self, batches: impl IntoIterator<Item = Vec<Msg>>) -> Self {
        self.interrupts = batches.into_iter().collect();
        self
    }

    /// What the terminal would show after every flush so far.
    pub fn screen(&self) -> &Canvas {
        &self.screen
    }

    /// Number of frames flushed.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Number of polls made.
    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    pub fn closed(&self) -> bool {
        self.closed
    }
}

impl Driver for ScriptedDriver {
    fn init(&mut self) -> DriverResult {
        self.initialized = true;
        Ok(())
    }

    fn poll_msgs(&mut self, _ctx: &Context, tx: &Sender<Msg>, timeout: Duration) -> DriverResult {
        self.polls += 1;
        let batch = if timeout.is_zero() {
            self.interrupts.pop_front().unwrap_or_default()
        } else {
            self.script.pop_front().unwrap_or_else(|| vec![Msg::Quit])
        };
        for msg in batch {
            tx.send(msg)?;
        }
        Ok(())
    }

    fn flush(&mut self, frame: &Frame) -> DriverResult {
        if self.screen.width() != frame.width || self.screen.height() != frame.height {
            self.screen = Canvas::new(frame.width, frame.height);
        }
        for fc in &frame.cells {
            self.screen.set(fc.pos, fc.glyph);
        }
        self.frames += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::input::Key;

    fn poll(d: &mut ScriptedDriver, timeout: Duration) -> Vec<Msg> {
        let (tx, rx) = mpsc::channel();
        d.poll_msgs(&Context::new(), &tx, timeout).unwrap();
        rx.try_iter().collect()
    }

    #[test]
    fn waiting_polls_replay_then_quit() {
        let mut d = ScriptedDriver::new(vec![vec![Msg::key(Key::Enter)], vec![]]);
        let wait = Duration::from_millis(1);
        assert_eq!(poll(&mut d, wait), vec![Msg::key(Key::Enter)]);
        assert!(poll(&mut d, wait).is_empty());
        assert_eq!(poll(&mut d, wait), vec![Msg::Quit]);
        assert_eq!(d.polls(), 3);
    }

    #[test]
    fn busy_polls_only_see_interrupts() {
        let mut d = ScriptedDriver::new(vec![vec![Msg::key(Key::Enter)]])
            .with_interrupts(vec![vec![Msg::key(Key::Escape)]]);
        assert_eq!(poll(&mut d, Duration::ZERO), vec![Msg::key(Key::Escape)]);
        assert!(poll(&mut d, Duration::ZERO).is_empty());
        assert_eq!(poll(&mut d, Duration::from_millis(1)), vec![Msg::key(Key::Enter)]);
    }
}
