//! Interactive terminal loop: raw-mode session, event polling with a
//! fixed tick, and diffed frame painting.

use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TerminalEvent,
    KeyCode as TerminalKeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use planview_core::plan_source::load_tokens;
use planview_core::prefs::{load_prefs_file, save_prefs_file};
use planview_term::input::{
    InputEvent, Key, KeyEvent, Modifiers, MouseEvent, MouseWheelDirection, ResizeEvent,
};
use planview_term::render::{CellStyle, FrameSize, RenderFrame, TermColor};
use planview_term::style::ThemeSpec;

use crate::view_model::{ViewCommand, ViewModel};

const REFRESH_INTERVAL: Duration = Duration::from_millis(900);

/// Load the plan and preferences, enter the terminal session, and run
/// the event loop until quit or interrupt.
pub fn run(plan_path: &Path, prefs_path: &Path, theme: ThemeSpec) -> Result<(), String> {
    let tokens = load_tokens(plan_path)?;
    let plan_label = plan_label(plan_path);

    let outcome = load_prefs_file(prefs_path, Utc::now());
    if outcome.first_visit || outcome.migrated {
        save_prefs_file(prefs_path, &outcome.store)?;
    }
    let mut vm = ViewModel::new(tokens, plan_label, outcome.store);
    if !outcome.warnings.is_empty() {
        vm.set_notice(outcome.warnings.join("; "));
    }

    let mut session =
        TerminalSession::enter().map_err(|err| format!("enter terminal mode: {err}"))?;
    let (mut width, mut height) =
        terminal_size().map_err(|err| format!("read terminal size: {err}"))?;

    let mut painter = FrameDiffPainter::default();
    let mut dirty = true;
    let mut next_refresh = Instant::now() + REFRESH_INTERVAL;

    loop {
        if dirty {
            let mut frame = RenderFrame::new(FrameSize { width, height }, theme);
            vm.render(&mut frame);
            painter
                .paint(&mut session.stdout, &frame)
                .map_err(|err| format!("render frame: {err}"))?;
            dirty = false;
        }

        let now = Instant::now();
        if now >= next_refresh {
            vm.update_at(&InputEvent::Tick, Utc::now());
            dirty = true;
            next_refresh = Instant::now() + REFRESH_INTERVAL;
            continue;
        }

        let timeout = next_refresh.saturating_duration_since(now);
        let has_event =
            event::poll(timeout).map_err(|err| format!("poll terminal event: {err}"))?;
        if !has_event {
            continue;
        }

        let terminal_event = event::read().map_err(|err| format!("read terminal event: {err}"))?;
        if is_interrupt(&terminal_event) {
            break;
        }
        if let TerminalEvent::Resize(new_width, new_height) = terminal_event {
            width = usize::from(new_width);
            height = usize::from(new_height);
        }

        if let Some(input) = map_terminal_event(terminal_event) {
            let command = vm.update_at(&input, Utc::now());
            dirty = true;
            match command {
                ViewCommand::None => {}
                ViewCommand::Persist => {
                    if let Err(err) = save_prefs_file(prefs_path, vm.store()) {
                        vm.set_notice(format!("save preferences failed: {err}"));
                    }
                }
                ViewCommand::Quit => break,
            }
        }
    }

    Ok(())
}

fn plan_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

fn terminal_size() -> io::Result<(usize, usize)> {
    let (width, height) = terminal::size()?;
    Ok((usize::from(width), usize::from(height)))
}

fn map_terminal_event(terminal_event: TerminalEvent) -> Option<InputEvent> {
    match terminal_event {
        TerminalEvent::Resize(width, height) => Some(InputEvent::Resize(ResizeEvent {
            width: usize::from(width),
            height: usize::from(height),
        })),
        TerminalEvent::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(InputEvent::Mouse(MouseEvent {
                wheel: Some(MouseWheelDirection::Up),
            })),
            MouseEventKind::ScrollDown => Some(InputEvent::Mouse(MouseEvent {
                wheel: Some(MouseWheelDirection::Down),
            })),
            _ => None,
        },
        TerminalEvent::Key(key_event) => {
            if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                return None;
            }

            let key = match key_event.code {
                TerminalKeyCode::Char(ch) => Key::Char(ch),
                TerminalKeyCode::Enter => Key::Enter,
                TerminalKeyCode::Esc => Key::Escape,
                TerminalKeyCode::Tab => Key::Tab,
                TerminalKeyCode::BackTab => Key::Tab,
                TerminalKeyCode::Backspace => Key::Backspace,
                TerminalKeyCode::Up => Key::Up,
                TerminalKeyCode::Down => Key::Down,
                TerminalKeyCode::Left => Key::Left,
                TerminalKeyCode::Right => Key::Right,
                _ => return None,
            };

            let mut modifiers = Modifiers {
                shift: key_event.modifiers.contains(KeyModifiers::SHIFT),
                ctrl: key_event.modifiers.contains(KeyModifiers::CONTROL),
                alt: key_event.modifiers.contains(KeyModifiers::ALT),
            };
            if matches!(key_event.code, TerminalKeyCode::BackTab) {
                modifiers.shift = true;
            }

            Some(InputEvent::Key(KeyEvent { key, modifiers }))
        }
        _ => None,
    }
}

fn is_interrupt(terminal_event: &TerminalEvent) -> bool {
    let TerminalEvent::Key(key_event) = terminal_event else {
        return false;
    };

    if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return false;
    }

    matches!(key_event.code, TerminalKeyCode::Char('c'))
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

/// Paints frames, redrawing only rows that changed since the last
/// paint. A size change forces a full clear and repaint.
#[derive(Debug, Default)]
pub struct FrameDiffPainter {
    previous: Option<RenderFrame>,
}

impl FrameDiffPainter {
    /// Returns `Ok(false)` when the frame is identical to the previous
    /// one and nothing was written.
    pub fn paint<W: Write>(&mut self, out: &mut W, frame: &RenderFrame) -> io::Result<bool> {
        if self.previous.as_ref() == Some(frame) {
            return Ok(false);
        }

        let full = match &self.previous {
            Some(previous) => previous.size() != frame.size(),
            None => true,
        };
        let size = frame.size();
        if full {
            queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
            for y in 0..size.height {
                paint_row(out, frame, y)?;
            }
        } else if let Some(previous) = &self.previous {
            for y in 0..size.height {
                if row_changed(previous, frame, y) {
                    paint_row(out, frame, y)?;
                }
            }
        }

        queue!(
            out,
            SetAttribute(Attribute::Reset),
            MoveTo(0, to_u16(size.height))
        )?;
        out.flush()?;
        self.previous = Some(frame.clone());
        Ok(true)
    }
}

fn row_changed(previous: &RenderFrame, frame: &RenderFrame, y: usize) -> bool {
    (0..frame.size().width).any(|x| previous.cell(x, y) != frame.cell(x, y))
}

fn paint_row<W: Write>(out: &mut W, frame: &RenderFrame, y: usize) -> io::Result<()> {
    queue!(out, MoveTo(0, to_u16(y)))?;
    let mut style = None;
    for x in 0..frame.size().width {
        if let Some(cell) = frame.cell(x, y) {
            if style != Some(cell.style) {
                queue_style(out, cell.style)?;
                style = Some(cell.style);
            }
            queue!(out, Print(cell.glyph))?;
        }
    }
    Ok(())
}

fn term_color_to_crossterm(tc: TermColor) -> Color {
    match tc {
        TermColor::Ansi256(idx) => Color::AnsiValue(idx),
        TermColor::Rgb(r, g, b) => Color::Rgb { r, g, b },
    }
}

fn queue_style<W: Write>(out: &mut W, style: CellStyle) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(term_color_to_crossterm(style.fg)),
        SetBackgroundColor(term_color_to_crossterm(style.bg)),
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    } else if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    } else {
        queue!(out, SetAttribute(Attribute::NormalIntensity))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    } else {
        queue!(out, SetAttribute(Attribute::NoUnderline))?;
    }
    Ok(())
}

fn to_u16(value: usize) -> u16 {
    value.min(usize::from(u16::MAX)) as u16
}

struct TerminalSession {
    stdout: io::Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        Ok(Self { stdout })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show,
            MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}
