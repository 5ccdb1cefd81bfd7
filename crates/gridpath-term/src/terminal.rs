//! Crossterm back-end.
//!
//! [`CrosstermDriver`] puts the terminal in raw mode on the alternate
//! screen, translates crossterm events into [`Msg`]s and paints frames with
//! queued escape sequences.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::{debug, warn};

use crate::app::{Context, Driver, DriverResult};
use crate::canvas::{Frame, Point};
use crate::input::{Key, ModMask, Msg, MouseAction};
use crate::style::{AttrMask, Color, Style};

fn to_ct_color(c: Color) -> CtColor {
    match c.rgb() {
        Some((r, g, b)) => CtColor::Rgb { r, g, b },
        None => CtColor::Reset,
    }
}

fn to_mod_mask(mods: KeyModifiers) -> ModMask {
    let mut m = ModMask::NONE;
    if mods.contains(KeyModifiers::SHIFT) {
        m = m | ModMask::SHIFT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        m = m | ModMask::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        m = m | ModMask::ALT;
    }
    m
}

fn to_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        _ => return None,
    };
    Some(key)
}

fn to_mouse_action(kind: MouseEventKind) -> Option<MouseAction> {
    let action = match kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            MouseAction::Main
        }
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            MouseAction::Secondary
        }
        MouseEventKind::Down(MouseButton::Middle) => MouseAction::Auxiliary,
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Moved => MouseAction::Move,
        MouseEventKind::ScrollUp => MouseAction::WheelUp,
        MouseEventKind::ScrollDown => MouseAction::WheelDown,
        _ => return None,
    };
    Some(action)
}

/// Translate one crossterm event; `None` for events the loop ignores.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            // Only presses; some platforms also report releases and repeats.
            if kind != KeyEventKind::Press {
                return None;
            }
            to_key(code).map(|key| Msg::KeyDown {
                key,
                modifiers: to_mod_mask(modifiers),
            })
        }
        Event::Mouse(me) => to_mouse_action(me.kind).map(|action| Msg::Mouse {
            action,
            pos: Point::new(i32::from(me.column), i32::from(me.row)),
            modifiers: to_mod_mask(me.modifiers),
        }),
        Event::Resize(w, h) => Some(Msg::Screen {
            width: i32::from(w),
            height: i32::from(h),
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
#[derive(Debug)]
pub struct CrosstermDriver {
    mouse_enabled: bool,
}

impl CrosstermDriver {
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn queue_style(out: &mut impl Write, style: Style) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(to_ct_color(style.fg)),
        SetBackgroundColor(to_ct_color(style.bg))
    )?;
    let attrs = style.attrs;
    if attrs.contains(AttrMask::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if attrs.contains(AttrMask::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if attrs.contains(AttrMask::REVERSE) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    if attrs.contains(AttrMask::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> DriverResult {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        debug!("terminal initialised (mouse: {})", self.mouse_enabled);
        Ok(())
    }

    fn poll_msgs(&mut self, ctx: &Context, tx: &Sender<Msg>, timeout: Duration) -> DriverResult {
        if !event::poll(timeout)? {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }
            if let Some(msg) = to_msg(event::read()?) {
                tx.send(msg)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self, frame: &Frame) -> DriverResult {
        let mut out = io::stdout().lock();
        let mut last_style = None;
        let mut cursor_at = None;
        for fc in &frame.cells {
            let p = fc.pos;
            if cursor_at != Some(p) {
                queue!(out, cursor::MoveTo(p.x as u16, p.y as u16))?;
            }
            if last_style != Some(fc.glyph.style) {
                queue_style(&mut out, fc.glyph.style)?;
                last_style = Some(fc.glyph.style);
            }
            queue!(out, Print(fc.glyph.ch))?;
            cursor_at = Some(Point::new(p.x + 1, p.y));
        }
        queue!(out, SetAttribute(Attribute::Reset))?;
        out.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("could not leave raw mode: {e}");
        }
    }
}
