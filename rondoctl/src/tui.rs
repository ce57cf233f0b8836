//! Interactive crossterm demo for the carousel engine.
//!
//! Arrow keys step the carousel, mouse drags map to pointer gestures,
//! hovering the strip pauses autoplay, and terminal resizes re-derive the
//! visible slot count. All terminal hooks (raw mode, alternate screen,
//! mouse capture) are released on every exit path.

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode,
        KeyEventKind, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use rondo_core::{
    CarouselEngine, CarouselMessage, constants::timing::TICK_MS,
    handle_message,
};
use rondo_model::{Breakpoints, CarouselConfig};

/// Column tiers standing in for the web-pixel breakpoints: a terminal
/// 120 columns wide shows three cards, 80 shows two.
const TWO_UP_MIN_COLS: f32 = 80.0;
const THREE_UP_MIN_COLS: f32 = 120.0;

const EVENT_LOG_CAP: usize = 8;

#[derive(Debug)]
pub struct Options {
    pub titles: Vec<String>,
    pub config: CarouselConfig,
    /// Keep file-provided breakpoints instead of the column remap.
    pub breakpoints_overridden: bool,
}

pub fn run(opts: Options) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, opts);
    // Detach hooks even when the loop errored.
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    opts: Options,
) -> Result<()> {
    let mut config = opts.config;
    if !opts.breakpoints_overridden {
        config.breakpoints =
            Breakpoints::new(TWO_UP_MIN_COLS, THREE_UP_MIN_COLS);
    }

    let size = terminal.size()?;
    let mut engine = CarouselEngine::new(
        config,
        opts.titles.len(),
        size.width as f32,
        Instant::now(),
    )?;

    let mut log: VecDeque<String> = VecDeque::new();
    let mut hovering = false;

    loop {
        terminal.draw(|frame| draw(frame, &engine, &opts.titles, &log))?;

        let mut messages: Vec<CarouselMessage> = Vec::new();
        if event::poll(Duration::from_millis(TICK_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Left => messages.push(CarouselMessage::Prev),
                        KeyCode::Right => messages.push(CarouselMessage::Next),
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => {
                    let strip = strip_area(terminal.size()?);
                    handle_mouse(mouse, strip, &mut hovering, &mut messages);
                }
                Event::Resize(width, _) => messages
                    .push(CarouselMessage::ViewportResized(width as f32)),
                _ => {}
            }
        }
        messages.push(CarouselMessage::Tick);

        for msg in messages {
            for event in handle_message(&mut engine, msg, Instant::now()) {
                if log.len() == EVENT_LOG_CAP {
                    log.pop_front();
                }
                log.push_back(format!("{event:?}"));
            }
        }
    }
}

fn handle_mouse(
    mouse: MouseEvent,
    strip: Rect,
    hovering: &mut bool,
    messages: &mut Vec<CarouselMessage>,
) {
    let over_strip = mouse.row >= strip.y && mouse.row < strip.y + strip.height;
    match mouse.kind {
        MouseEventKind::Down(_) if over_strip => {
            messages.push(CarouselMessage::GestureStarted {
                kind: rondo_model::GestureKind::Pointer,
                x: f32::from(mouse.column),
            });
        }
        MouseEventKind::Drag(_) => {
            messages.push(CarouselMessage::GestureMoved {
                x: f32::from(mouse.column),
            });
        }
        MouseEventKind::Up(_) => {
            messages.push(CarouselMessage::GestureEnded);
        }
        MouseEventKind::Moved => {
            if over_strip && !*hovering {
                *hovering = true;
                messages.push(CarouselMessage::PointerEntered);
            } else if !over_strip && *hovering {
                *hovering = false;
                messages.push(CarouselMessage::PointerExited);
            }
        }
        _ => {}
    }
}

fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(EVENT_LOG_CAP as u16 + 2),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn strip_area(area: Rect) -> Rect {
    layout(area)[0]
}

fn draw(
    frame: &mut Frame,
    engine: &CarouselEngine,
    titles: &[String],
    log: &VecDeque<String>,
) {
    let [strip, status, events] = layout(frame.size());

    draw_strip(frame, strip, engine, titles);
    draw_status(frame, status, engine);
    draw_events(frame, events, log);
}

fn draw_strip(
    frame: &mut Frame,
    area: Rect,
    engine: &CarouselEngine,
    titles: &[String],
) {
    let window = engine.visible_window();
    if window.is_empty() {
        let empty = Paragraph::new("no items")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("rondo"));
        frame.render_widget(empty, area);
        return;
    }

    let constraints: Vec<Constraint> = window
        .iter()
        .map(|_| Constraint::Ratio(1, window.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (cell, &item) in cells.iter().zip(window) {
        let title = titles.get(item).map(String::as_str).unwrap_or("?");
        let card = Paragraph::new(title)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", item + 1))
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(card, *cell);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, engine: &CarouselEngine) {
    let autoplay = if engine.autoplay_armed() {
        "on"
    } else if engine.is_paused() {
        "paused"
    } else {
        "off"
    };
    let arrows = if engine.arrows_visible() {
        "\u{2190} \u{2192} navigate \u{00b7} "
    } else {
        ""
    };
    let status = Paragraph::new(format!(
        "index {}  offset {:.1}%  per_view {}  autoplay {}   {}drag to swipe \u{00b7} q quits",
        engine.track_index(),
        engine.render_offset_percent(),
        engine.per_view(),
        autoplay,
        arrows,
    ))
    .style(Style::default().add_modifier(Modifier::DIM))
    .block(Block::default().borders(Borders::ALL).title(" status "));
    frame.render_widget(status, area);
}

fn draw_events(frame: &mut Frame, area: Rect, log: &VecDeque<String>) {
    let items: Vec<ListItem> =
        log.iter().map(|line| ListItem::new(line.as_str())).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" events "));
    frame.render_widget(list, area);
}
