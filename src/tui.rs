//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `Guessing`: every printable key is a guess, ESC quits
//! - `RoundOver`: Y starts a new round, any other key quits

use crate::error::HangmanError;
use crate::game_state::{GameInterface, UserAction};
use crate::session::{Cell, GuessOutcome, GuessReport, Session};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const REVEALED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const MASKED_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Guessing,
    RoundOver { progress: usize },
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    state: TuiState,
    round: usize,
    cells: &'a [Cell],
    hits: &'a [char],
    misses: &'a [char],
    feedback: Option<(&'a str, GuessOutcome)>,
    progress: usize,
    target: usize,
    attempts: usize,
    status: &'a str,
}

/// One tile per position of the word, with a gap after each.
fn word_spans(cells: &[Cell]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for cell in cells {
        let span = match *cell {
            Cell::Shown(c) if c.is_whitespace() => Span::raw("   "),
            Cell::Shown(c) => Span::styled(format!(" {c} "), REVEALED_STYLE),
            Cell::Masked => Span::styled(" _ ", MASKED_STYLE),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    spans
}

/// Map a key press at the guess prompt to an action.
fn key_to_action(key: KeyEvent) -> Option<UserAction> {
    let has_modifier =
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(UserAction::Exit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UserAction::Exit)
        }
        KeyCode::Char(_) if has_modifier => None,
        // Replacement and control characters show up from escape sequences when alt-tabbing
        KeyCode::Char(c) if c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD => None,
        KeyCode::Char(c) => Some(UserAction::Guess(c)),
        _ => None,
    }
}

/// Map a key press at the play-again prompt to an answer.
fn key_to_reply(key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('y' | 'Y') => Some(true),
        KeyCode::Modifier(_) => None,
        _ => Some(false),
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    round: usize,
    cells: Vec<Cell>,
    hits: Vec<char>,
    misses: Vec<char>,
    feedback: Option<(String, GuessOutcome)>,
    progress: usize,
    target: usize,
    attempts: usize,
    status: String,
}

impl TuiInterface {
    /// # Errors
    /// Fails if the terminal cannot be switched to raw mode or the alternate screen.
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            state: TuiState::Guessing,
            round: 0,
            cells: Vec::new(),
            hits: Vec::new(),
            misses: Vec::new(),
            feedback: None,
            progress: 0,
            target: 0,
            attempts: 0,
            status: "Ready to start".to_string(),
        })
    }

    /// # Errors
    /// Fails if the terminal cannot be restored.
    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            state: self.state,
            round: self.round,
            cells: &self.cells,
            hits: &self.hits,
            misses: &self.misses,
            feedback: self
                .feedback
                .as_ref()
                .map(|(text, outcome)| (text.as_str(), *outcome)),
            progress: self.progress,
            target: self.target,
            attempts: self.attempts,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Block until a key press arrives, ignoring releases and non-key events.
    fn next_key(&mut self) -> Result<KeyEvent, io::Error> {
        loop {
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    debug_log!(
                        "next_key() - code={:?}, modifiers={:?}",
                        key.code,
                        key.modifiers
                    );
                    return Ok(key);
                }
                Event::Resize(_, _) => self.draw()?,
                other => {
                    debug_log!("next_key() - Ignoring event: {:?}", other);
                }
            }
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Word
                Constraint::Min(6),    // Info panel (takes remaining space)
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.round);
        Self::render_word(f, chunks[1], ctx.cells);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, round: usize) {
        let title = Paragraph::new(format!("HANGMAN - Round {round}"))
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_word(f: &mut Frame, area: Rect, cells: &[Cell]) {
        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(word_spans(cells))])
            .alignment(Alignment::Center)
            .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn letters_line<'a>(label: &'a str, letters: &[char], style: Style) -> Line<'a> {
        let joined = letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Line::from(vec![Span::styled(label, INFO_STYLE), Span::styled(joined, style)])
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = vec![
            Line::from(format!(
                "Found {}/{} characters in {} guesses",
                ctx.progress, ctx.target, ctx.attempts
            )),
            Line::from(""),
            Self::letters_line("Correct: ", ctx.hits, SUCCESS_STYLE),
            Self::letters_line("Missed:  ", ctx.misses, ERROR_STYLE),
            Line::from(""),
        ];

        if let Some((text, outcome)) = ctx.feedback {
            let style = match outcome {
                GuessOutcome::Correct => SUCCESS_STYLE,
                GuessOutcome::Incorrect => ERROR_STYLE,
                GuessOutcome::AlreadyPicked => INFO_STYLE,
            };
            lines.push(Line::from(vec![Span::styled(text, style)]));
        }

        if let TuiState::RoundOver { progress } = ctx.state {
            lines.push(Line::from(vec![Span::styled(
                format!("You tried {progress} times. Would you like to play again?"),
                HEADER_STYLE,
            )]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Guessing => "Type a character to guess | ESC: Quit",
            TuiState::RoundOver { .. } => "Y: Play again | Any other key: Quit",
        };
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Instructions"));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let paragraph = Paragraph::new(status)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }
}

impl GameInterface for TuiInterface {
    fn display_round_start(&mut self, session: &Session) -> io::Result<()> {
        self.round += 1;
        self.state = TuiState::Guessing;
        self.cells = session.cells();
        self.hits.clear();
        self.misses.clear();
        self.feedback = None;
        self.progress = 0;
        self.target = session.target();
        self.attempts = 0;
        self.status = format!("New round - {} characters to find", self.target);
        self.draw()
    }

    fn read_guess(&mut self) -> Result<UserAction, HangmanError> {
        self.draw()?;
        loop {
            let key = self.next_key()?;
            if let Some(action) = key_to_action(key) {
                info_log!("read_guess() - Action received: {:?}", action);
                return Ok(action);
            }
        }
    }

    fn display_guess_result(&mut self, report: &GuessReport) -> io::Result<()> {
        self.cells.clone_from(&report.cells);
        self.progress = report.progress;
        self.attempts += 1;
        match report.outcome {
            GuessOutcome::Correct => self.hits.push(report.guess),
            GuessOutcome::Incorrect => self.misses.push(report.guess),
            GuessOutcome::AlreadyPicked => {}
        }
        self.feedback = Some((report.feedback(), report.outcome));
        self.status = format!("{} guesses so far", self.attempts);
        self.draw()
    }

    fn read_play_again(&mut self, progress: usize) -> Result<bool, HangmanError> {
        self.state = TuiState::RoundOver { progress };
        self.status = "Round complete!".to_string();
        self.draw()?;
        loop {
            let key = self.next_key()?;
            if let Some(answer) = key_to_reply(key) {
                info_log!("read_play_again() - Answer: {}", answer);
                return Ok(answer);
            }
        }
    }

    fn display_exit_message(&mut self) -> io::Result<()> {
        self.status = "Exiting...".to_string();
        self.draw()
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
