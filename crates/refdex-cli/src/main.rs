use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use refdex_config::Config;
use refdex_engine::{Document, ReferenceFile, io, render};
use relative_path::RelativePath;
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    docs_path: PathBuf,
    files: Vec<ReferenceFile>,
    file_list_state: ListState,
    current_content: Vec<String>,
}

impl App {
    fn new(docs_path: PathBuf) -> Result<Self> {
        let files = io::list_reference_files(&docs_path)?;

        let mut app = Self {
            docs_path,
            files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first file if available
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
            Some(i) => {
                if i == 0 {
                    self.files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(file) = self.files.get(index)
        {
            match io::load_document(file.relative_path(), &self.docs_path) {
                Ok(document) => {
                    self.current_content = self.render_document_content(&document);
                }
                Err(e) => {
                    self.current_content = vec![format!("Error loading document: {e:#}")];
                }
            }
        }
    }

    fn render_document_content(&self, document: &Document) -> Vec<String> {
        let mut lines = Vec::new();

        let toc = render::render_toc(document);
        if !toc.is_empty() {
            lines.push("Contents".to_string());
            lines.push(String::new());
            lines.extend(toc.lines().map(|s| s.to_string()));
            lines.push(String::new());
        }

        lines.extend(render::render_markdown(document).lines().map(|s| s.to_string()));

        lines
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    // Optional one-shot mode: render a single document and exit
    let (path_arg, output_mode) = match args.len() {
        1 => (None, None),
        2 => (Some(args[1].clone()), None),
        4 if args[2] == "--toc" || args[2] == "--json" => (
            Some(args[1].clone()),
            Some((args[2].clone(), args[3].clone())),
        ),
        _ => {
            eprintln!(
                "Usage: {} [docs-folder-path] [--toc <file> | --json <file>]",
                args[0]
            );
            process::exit(1);
        }
    };

    let docs_path;
    let from_config;

    if let Some(path) = path_arg {
        docs_path = PathBuf::from(path);
        from_config = false;
    } else {
        match Config::load() {
            Ok(Some(config)) => {
                docs_path = config.docs_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No docs path provided and no config file found");
                eprintln!("Usage: {} <docs-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <docs-folder-path>", args[0]);
                process::exit(1);
            }
        }
    }

    // Validate docs directory using engine
    if let Err(e) = io::validate_docs_dir(&docs_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Docs path '{}'{} is invalid: {e}",
            docs_path.display(),
            source
        );
        process::exit(1);
    }

    if let Some((mode, file)) = output_mode {
        let document = io::load_document(RelativePath::new(&file), &docs_path)?;
        match mode.as_str() {
            "--toc" => print!("{}", render::render_toc(&document)),
            _ => println!("{}", render::render_json(&document)?),
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(docs_path)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(vec![Line::from(vec![Span::raw(file.display_name())])]))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("References"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a reference document to view")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(vec![Span::raw(line.clone())]))
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Contents"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
