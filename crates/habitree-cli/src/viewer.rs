use std::io::{Stdout, stdout};
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use habitree_engine::{NoteFile, Segment, TtlCache, io, render_book_links};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

struct App {
    notes_path: PathBuf,
    files: Vec<NoteFile>,
    file_list_state: ListState,
    /// Note contents by relative path, so moving back and forth does not
    /// reread files.
    contents: TtlCache<String>,
    current_content: Vec<Line<'static>>,
    current_link_count: usize,
}

impl App {
    fn new(notes_path: PathBuf, cache: TtlCache<String>) -> Result<Self> {
        let files = io::scan_note_files(&notes_path)?;
        log::info!("loaded {} notes from {}", files.len(), notes_path.display());

        let mut app = Self {
            notes_path,
            files,
            file_list_state: ListState::default(),
            contents: cache,
            current_content: Vec::new(),
            current_link_count: 0,
        };

        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return;
        };

        let key = file.relative_path().as_str();
        let content = match self.contents.get(key) {
            Some(content) => Ok(content),
            None => io::read_note(file.relative_path(), &self.notes_path).inspect(|content| {
                self.contents.set(key, content.clone());
            }),
        };

        match content {
            Ok(content) => {
                self.current_link_count = render_book_links(&content)
                    .iter()
                    .filter(|s| s.is_link())
                    .count();
                self.current_content = note_lines(&content);
            }
            Err(e) => {
                log::warn!("failed to read {}: {e}", file.relative_path());
                self.current_content = vec![Line::from(format!("Error reading file: {e}"))];
                self.current_link_count = 0;
            }
        }
    }

    fn content_title(&self) -> String {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return "Note".to_string();
        };
        let title = file.title();
        match title.subtitle {
            Some(subtitle) => format!("{} | {subtitle}", title.main_title),
            None => title.main_title,
        }
    }
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
}

/// Lays out a note as terminal lines, styling book links.
fn note_lines(content: &str) -> Vec<Line<'static>> {
    let mut lines = vec![];
    let mut spans: Vec<Span<'static>> = vec![];

    for segment in render_book_links(content) {
        let style = match segment {
            Segment::Text(_) => Style::default(),
            Segment::Link { .. } => link_style(),
        };
        let mut parts = segment.display_text().split('\n');
        if let Some(first) = parts.next()
            && !first.is_empty()
        {
            spans.push(Span::styled(first.to_string(), style));
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut spans)));
            if !part.is_empty() {
                spans.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(Line::from(spans));
    lines
}

pub fn run(notes_path: PathBuf, cache: TtlCache<String>) -> Result<()> {
    let mut app = App::new(notes_path, cache)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Char('r') => {
                    app.contents.clear();
                    app.update_content_for_selection();
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Note list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| {
            let title = file.title();
            let mut spans = vec![Span::raw(title.main_title)];
            if let Some(subtitle) = title.subtitle {
                spans.push(Span::styled(
                    format!("  {subtitle}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Notes"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text = if app.files.is_empty() {
        vec![Line::from("No notes found")]
    } else {
        app.current_content.clone()
    };

    let title = format!(
        "{} ({} book links)",
        app.content_title(),
        app.current_link_count
    );
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("r: Reload"),
    ]));
    f.render_widget(help, rows[1]);
}
