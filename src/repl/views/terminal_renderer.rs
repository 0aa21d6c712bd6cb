//! # View Layer
//!
//! Views are responsible for rendering and handling terminal display.
//! They react to view events and redraw the smallest region that covers them.
//!
//! ```text
//! row 0             header
//! row 1             search bar
//! row 2             separator
//! rows 3..          main area (hint / loading / empty / error / card grid)
//!                   modal box drawn on top of the main area when open
//! height - 3        pagination
//! height - 2        toast line
//! height - 1        status bar
//! ```

use crate::repl::events::{Focus, ViewEvent};
use crate::repl::geometry::{ScreenLayout, CARD_HEIGHT, CARD_WIDTH};
use crate::repl::io::RenderStream;
use crate::repl::models::{
    max_requestable_page, page_items, DisplayState, Movie, MovieSearchResponse, PageItem,
    ToastKind, MARGIN_PAGES_DISPLAYED, PAGE_RANGE_DISPLAYED,
};
use crate::repl::view_models::ViewModel;
use crate::repl::views::text_layout::{
    display_width, pad_to_width, tail_to_width, truncate_to_width, wrap_text,
};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! queue_term {
    ($($arg:expr),* $(,)?) => {
        queue!($($arg),*).map_err(anyhow::Error::from)
    };
}

pub const APP_TITLE: &str = "CineSearch";
pub const SEARCH_LABEL: &str = " Search › ";
pub const NEUTRAL_HINT: &str = "Type a movie title and press Enter to search.";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_RESULTS_TEXT: &str = "Nothing to show here.";
pub const ERROR_VIEW_TEXT: &str = "Whoops, something went wrong! Please try again.";

/// Width of a card's text, leaving a gap to the next card
const CARD_TEXT_WIDTH: usize = CARD_WIDTH as usize - 2;

const MODAL_MAX_WIDTH: u16 = 72;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Initialize the terminal for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the full application state
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the search input line
    fn render_search_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the main area, the pagination line and the modal if open
    fn render_results(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the toast line
    fn render_toasts(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render status bar
    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Handle view events
    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()>;

    /// Cleanup terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Terminal-based view renderer writing through a [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer that owns `render_stream`
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    /// Access the underlying stream (tests inspect the mock through this)
    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    /// Update terminal size
    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Get current terminal size
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.terminal_size.0, self.terminal_size.1)
    }

    fn width(&self) -> usize {
        self.terminal_size.0 as usize
    }

    /// Clear a row and print `text` on it, cut to the terminal width
    fn print_row(&mut self, row: u16, text: &str) -> Result<()> {
        let text = truncate_to_width(text, self.width());
        queue_term!(
            self.render_stream,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(text)
        )
    }

    fn render_header(&mut self, view_model: &ViewModel) -> Result<()> {
        let row = self.layout().header_row();
        let hint = if view_model.selection().is_open() {
            "Esc close"
        } else {
            match view_model.focus() {
                Focus::SearchBar => "Enter search · Tab results · Ctrl+C quit",
                Focus::Grid => "Enter details · n/p page · / search · q quit",
            }
        };

        let title = format!(" {APP_TITLE}");
        let gap = self
            .width()
            .saturating_sub(display_width(&title) + display_width(hint) + 1);

        queue_term!(
            self.render_stream,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Yellow),
            Print(&title),
            ResetColor,
            SetAttribute(Attribute::Reset)
        )?;
        if gap > 0 {
            queue_term!(
                self.render_stream,
                Print(" ".repeat(gap)),
                SetForegroundColor(Color::DarkGrey),
                Print(hint),
                ResetColor
            )?;
        }
        Ok(())
    }

    fn render_separator(&mut self) -> Result<()> {
        let row = self.layout().separator_row();
        let width = self.width();
        queue_term!(
            self.render_stream,
            MoveTo(0, row),
            SetForegroundColor(Color::Blue),
            Print("─".repeat(width)),
            ResetColor
        )
    }

    fn clear_main_area(&mut self) -> Result<()> {
        let layout = self.layout();
        for row in layout.main_top()..layout.pagination_row() {
            queue_term!(
                self.render_stream,
                MoveTo(0, row),
                Clear(ClearType::CurrentLine)
            )?;
        }
        Ok(())
    }

    /// One line of text centred in the main area
    fn render_centered_message(&mut self, text: &str, color: Color) -> Result<()> {
        let layout = self.layout();
        let row = layout.main_top() + layout.main_height() / 2;
        let text = truncate_to_width(text, self.width());
        let column = self.width().saturating_sub(display_width(&text)) / 2;
        queue_term!(
            self.render_stream,
            MoveTo(column as u16, row),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )
    }

    fn render_cards(
        &mut self,
        view_model: &ViewModel,
        response: &MovieSearchResponse,
        placeholder: bool,
    ) -> Result<()> {
        let layout = self.layout();
        let grid = layout.grid();
        let bottom = layout.pagination_row();
        let cursor = view_model.card_cursor();
        let highlight_cursor = view_model.focus() == Focus::Grid;
        let first_row = grid.first_visible_row(cursor);

        for (index, movie) in response.results.iter().enumerate() {
            let grid_row = grid.row_of(index);
            if grid_row < first_row || grid_row >= first_row + grid.visible_rows {
                continue;
            }
            let x = ((index % grid.columns) as u16) * CARD_WIDTH;
            let y = layout.main_top() + ((grid_row - first_row) as u16) * CARD_HEIGHT;
            if y >= bottom {
                continue;
            }
            let selected = highlight_cursor && index == cursor;
            self.render_card(x, y, bottom, movie, selected, placeholder)?;
        }
        Ok(())
    }

    fn render_card(
        &mut self,
        x: u16,
        y: u16,
        bottom: u16,
        movie: &Movie,
        selected: bool,
        dimmed: bool,
    ) -> Result<()> {
        let title = pad_to_width(&movie.title, CARD_TEXT_WIDTH);
        let details = format!(
            "{} · ★ {}",
            movie.release_year().unwrap_or("----"),
            movie.rating_label()
        );

        queue_term!(self.render_stream, MoveTo(x, y))?;
        if dimmed {
            queue_term!(self.render_stream, SetForegroundColor(Color::DarkGrey))?;
        }
        if selected {
            queue_term!(self.render_stream, SetAttribute(Attribute::Reverse))?;
        } else {
            queue_term!(self.render_stream, SetAttribute(Attribute::Bold))?;
        }
        queue_term!(
            self.render_stream,
            Print(title),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;

        if y + 1 < bottom {
            queue_term!(
                self.render_stream,
                MoveTo(x, y + 1),
                SetForegroundColor(Color::DarkGrey),
                Print(truncate_to_width(&details, CARD_TEXT_WIDTH)),
                ResetColor
            )?;
        }
        Ok(())
    }

    fn render_pagination(&mut self, view_model: &ViewModel) -> Result<()> {
        let row = self.layout().pagination_row();
        queue_term!(
            self.render_stream,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine)
        )?;

        let total_pages = match view_model.display_state() {
            DisplayState::Results { response, .. } => response.total_pages,
            _ => return Ok(()),
        };
        if total_pages <= 1 {
            return Ok(());
        }

        let page_count = max_requestable_page(total_pages);
        let current = view_model.search_state().page();
        let segments = pagination_segments(page_count, current);
        let line_width = segments
            .iter()
            .map(|(text, _)| display_width(text))
            .sum::<usize>();
        let column = self.width().saturating_sub(line_width) / 2;

        queue_term!(self.render_stream, MoveTo(column as u16, row))?;
        for (text, style) in segments {
            match style {
                SegmentStyle::Active => queue_term!(
                    self.render_stream,
                    SetAttribute(Attribute::Reverse),
                    Print(text),
                    SetAttribute(Attribute::Reset)
                )?,
                SegmentStyle::Disabled => queue_term!(
                    self.render_stream,
                    SetForegroundColor(Color::DarkGrey),
                    Print(text),
                    ResetColor
                )?,
                SegmentStyle::Normal => queue_term!(self.render_stream, Print(text))?,
            }
        }
        Ok(())
    }

    fn render_modal(&mut self, movie: &Movie) -> Result<()> {
        let layout = self.layout();
        let box_width = layout.width.saturating_sub(4).min(MODAL_MAX_WIDTH).max(10);
        let inner_width = box_width.saturating_sub(4) as usize;
        let max_height = layout.main_height();
        if max_height < 3 {
            return Ok(());
        }

        let mut lines = modal_lines(movie, inner_width);
        let max_inner_lines = (max_height - 2) as usize;
        if lines.len() > max_inner_lines {
            lines.truncate(max_inner_lines);
            if let Some(last) = lines.last_mut() {
                last.text = truncate_to_width(&format!("{}…", last.text), inner_width);
            }
        }

        let box_height = lines.len() as u16 + 2;
        let left = layout.width.saturating_sub(box_width) / 2;
        let top = layout.main_top() + (max_height - box_height) / 2;
        let horizontal = "─".repeat(box_width.saturating_sub(2) as usize);

        queue_term!(
            self.render_stream,
            MoveTo(left, top),
            SetForegroundColor(Color::Cyan),
            Print(format!("┌{horizontal}┐")),
            ResetColor
        )?;

        for (offset, line) in lines.iter().enumerate() {
            let row = top + 1 + offset as u16;
            queue_term!(
                self.render_stream,
                MoveTo(left, row),
                SetForegroundColor(Color::Cyan),
                Print("│ "),
                ResetColor
            )?;
            if line.emphasis {
                queue_term!(self.render_stream, SetAttribute(Attribute::Bold))?;
            }
            queue_term!(
                self.render_stream,
                Print(pad_to_width(&line.text, inner_width)),
                SetAttribute(Attribute::Reset),
                SetForegroundColor(Color::Cyan),
                Print(" │"),
                ResetColor
            )?;
        }

        let footer = " Esc close ";
        let footer_fill = "─".repeat(
            (box_width as usize)
                .saturating_sub(2)
                .saturating_sub(display_width(footer)),
        );
        queue_term!(
            self.render_stream,
            MoveTo(left, top + box_height - 1),
            SetForegroundColor(Color::Cyan),
            Print(format!("└{footer_fill}{footer}┘")),
            ResetColor
        )
    }

    /// Show the text cursor at the end of the search input when it has focus
    fn place_cursor(&mut self, view_model: &ViewModel) -> Result<()> {
        if view_model.focus() == Focus::SearchBar && !view_model.selection().is_open() {
            let row = self.layout().search_row();
            let input = self.visible_search_input(view_model.search_input());
            let column = (display_width(SEARCH_LABEL) + display_width(input))
                .min(self.width().saturating_sub(1));
            queue_term!(self.render_stream, MoveTo(column as u16, row), Show)
        } else {
            queue_term!(self.render_stream, Hide)
        }
    }

    fn visible_search_input<'a>(&self, input: &'a str) -> &'a str {
        let room = self
            .width()
            .saturating_sub(display_width(SEARCH_LABEL) + 1);
        tail_to_width(input, room)
    }

    fn flush(&mut self) -> Result<()> {
        self.render_stream.flush().map_err(anyhow::Error::from)
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        queue_term!(self.render_stream, Hide)?;
        self.render_stream.clear_screen()?;

        self.render_header(view_model)?;
        self.render_search_bar(view_model)?;
        self.render_separator()?;
        self.render_results(view_model)?;
        self.render_toasts(view_model)?;
        self.render_status_bar(view_model)?;

        self.place_cursor(view_model)?;
        self.flush()
    }

    fn render_search_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let row = self.layout().search_row();
        let label_color = match view_model.focus() {
            Focus::SearchBar => Color::Yellow,
            Focus::Grid => Color::DarkGrey,
        };
        let input = self.visible_search_input(view_model.search_input()).to_string();

        queue_term!(
            self.render_stream,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(label_color),
            Print(SEARCH_LABEL),
            ResetColor,
            Print(input)
        )
    }

    fn render_results(&mut self, view_model: &ViewModel) -> Result<()> {
        self.clear_main_area()?;

        match view_model.display_state() {
            DisplayState::Neutral => self.render_centered_message(NEUTRAL_HINT, Color::DarkGrey)?,
            DisplayState::Loading => self.render_centered_message(LOADING_TEXT, Color::Yellow)?,
            DisplayState::Empty => {
                self.render_centered_message(EMPTY_RESULTS_TEXT, Color::DarkGrey)?
            }
            DisplayState::Error(_) => self.render_centered_message(ERROR_VIEW_TEXT, Color::Red)?,
            DisplayState::Results {
                response,
                placeholder,
            } => self.render_cards(view_model, &response, placeholder)?,
        }

        self.render_pagination(view_model)?;

        if let Some(movie) = view_model.selection().selected() {
            self.render_modal(movie)?;
        }
        Ok(())
    }

    fn render_toasts(&mut self, view_model: &ViewModel) -> Result<()> {
        let row = self.layout().toast_row();
        queue_term!(
            self.render_stream,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine)
        )?;

        let Some(toast) = view_model.toasts().latest() else {
            return Ok(());
        };
        let (icon, color) = match toast.kind {
            ToastKind::Info => ("ℹ", Color::Cyan),
            ToastKind::Error => ("✖", Color::Red),
        };
        let hidden = view_model.toasts().visible().len().saturating_sub(1);
        let mut text = format!(" {icon} {}", toast.message);
        if hidden > 0 {
            text.push_str(&format!(" (+{hidden})"));
        }

        let width = self.width();
        queue_term!(
            self.render_stream,
            SetForegroundColor(color),
            Print(truncate_to_width(&text, width)),
            ResetColor
        )
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let row = self.layout().status_row();
        let text = status_line(view_model);
        let width = self.width();

        queue_term!(
            self.render_stream,
            MoveTo(0, row),
            SetAttribute(Attribute::Reverse),
            Print(pad_to_width(&text, width)),
            SetAttribute(Attribute::Reset)
        )
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => return self.render_full(view_model),
            ViewEvent::ResultsRedrawRequired => self.render_results(view_model)?,
            ViewEvent::SearchBarUpdateRequired => {
                self.render_header(view_model)?;
                self.render_search_bar(view_model)?;
            }
            ViewEvent::ToastsUpdateRequired => self.render_toasts(view_model)?,
            ViewEvent::StatusBarUpdateRequired => self.render_status_bar(view_model)?,
        }
        self.place_cursor(view_model)?;
        self.flush()
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentStyle {
    Normal,
    Active,
    Disabled,
}

/// Pagination line as styled text pieces: `← 1 … 4 5 [6] 7 8 … 20 →`
fn pagination_segments(page_count: u32, current: u32) -> Vec<(String, SegmentStyle)> {
    let arrow_style = |enabled: bool| {
        if enabled {
            SegmentStyle::Normal
        } else {
            SegmentStyle::Disabled
        }
    };

    let mut segments = vec![("←".to_string(), arrow_style(current > 1))];
    for item in page_items(
        page_count,
        current,
        PAGE_RANGE_DISPLAYED,
        MARGIN_PAGES_DISPLAYED,
    ) {
        segments.push((" ".to_string(), SegmentStyle::Normal));
        match item {
            PageItem::Page(page) if page == current => {
                segments.push((format!(" {page} "), SegmentStyle::Active))
            }
            PageItem::Page(page) => segments.push((page.to_string(), SegmentStyle::Normal)),
            PageItem::Break => segments.push(("…".to_string(), SegmentStyle::Disabled)),
        }
    }
    segments.push((" ".to_string(), SegmentStyle::Normal));
    segments.push(("→".to_string(), arrow_style(current < page_count)));
    segments
}

fn status_line(view_model: &ViewModel) -> String {
    let focus = if view_model.selection().is_open() {
        "DETAIL"
    } else {
        match view_model.focus() {
            Focus::SearchBar => "SEARCH",
            Focus::Grid => "RESULTS",
        }
    };

    let mut parts = vec![format!(" {focus}")];

    let state = view_model.search_state();
    if !state.query().is_empty() {
        parts.push(format!("\"{}\"", state.query()));
        let max_page = view_model
            .max_page()
            .map(|page| page.to_string())
            .unwrap_or_else(|| "-".to_string());
        parts.push(format!("Page {}/{}", state.page(), max_page));
    }

    if let Some(response) = view_model.results().data_for_query(state.query()) {
        parts.push(format!("{} results", response.total_results));
    }

    if view_model.results().is_fetching() {
        parts.push("● Fetching...".to_string());
    }

    parts.join(" | ")
}

struct ModalLine {
    text: String,
    emphasis: bool,
}

impl ModalLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }
}

fn modal_lines(movie: &Movie, width: usize) -> Vec<ModalLine> {
    let mut lines = vec![ModalLine {
        text: truncate_to_width(&movie.title, width),
        emphasis: true,
    }];

    let released = if movie.release_date.is_empty() {
        "Unknown"
    } else {
        movie.release_date.as_str()
    };
    lines.push(ModalLine::plain(format!("Release date: {released}")));
    lines.push(ModalLine::plain(format!("Rating: {}", movie.rating_label())));
    lines.push(ModalLine::plain(""));

    if movie.overview.trim().is_empty() {
        lines.push(ModalLine::plain("No overview available."));
    } else {
        lines.extend(wrap_text(&movie.overview, width).into_iter().map(ModalLine::plain));
    }

    lines.push(ModalLine::plain(""));
    let poster = movie
        .poster_url()
        .unwrap_or_else(|| "No poster available".to_string());
    lines.push(ModalLine::plain(truncate_to_width(
        &format!("Poster: {poster}"),
        width,
    )));
    lines
}
