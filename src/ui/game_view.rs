use crate::game::{Cell, GameStatus, Grid, Player, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Characters per board cell
const CELL_WIDTH: u16 = 3;
/// "  ║" in front of the first cell
const BOARD_PREFIX: u16 = 3;
/// " ║" after the last cell
const BOARD_SUFFIX: u16 = 2;
const RESET_WIDTH: u16 = 13;

/// Screen regions for one frame. Drawing and mouse hit-testing share it so a
/// click always lands on what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub header: Rect,
    /// Column tops, framed grid and cursor line
    pub board: Rect,
    pub status: Rect,
    pub controls: Rect,
    pub reset: Rect,
    columns: usize,
    rows: usize,
}

impl ViewLayout {
    pub fn new(area: Rect, columns: usize, rows: usize) -> Self {
        let board_height = rows as u16 + 4;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),         // Header
                Constraint::Min(board_height), // Board
                Constraint::Length(3),         // Status
                Constraint::Length(3),         // Controls + reset
            ])
            .split(area);

        let board_width = BOARD_PREFIX + CELL_WIDTH * columns as u16 + BOARD_SUFFIX;
        let board_area = chunks[1];
        let board = Rect {
            x: board_area.x + board_area.width.saturating_sub(board_width) / 2,
            y: board_area.y,
            width: board_width.min(board_area.width),
            height: board_height.min(board_area.height),
        };

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(RESET_WIDTH)])
            .split(chunks[3]);

        ViewLayout {
            header: chunks[0],
            board,
            status: chunks[2],
            controls: bottom[0],
            reset: bottom[1],
            columns,
            rows,
        }
    }

    /// Column under a click on the column tops or the grid cells
    pub fn column_at(&self, x: u16, y: u16) -> Option<usize> {
        // column-top line, top border, then one line per row
        let last_line = self.board.y + 2 + self.rows as u16;
        if y < self.board.y || y >= last_line || y >= self.board.y + self.board.height {
            return None;
        }
        let first_cell = self.board.x + BOARD_PREFIX;
        if x < first_cell || x >= self.board.x + self.board.width {
            return None;
        }
        let col = ((x - first_cell) / CELL_WIDTH) as usize;
        (col < self.columns).then_some(col)
    }

    /// Whether a click hit the reset toggle
    pub fn is_reset(&self, x: u16, y: u16) -> bool {
        let r = self.reset;
        x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
    }
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

pub fn render(frame: &mut Frame, grid: &Grid, status: &GameStatus, selected_column: usize) {
    let layout = ViewLayout::new(frame.area(), grid.width(), grid.height());

    render_header(frame, layout.header);
    render_board(frame, grid, status, selected_column, layout.board);
    render_status(frame, status, layout.status);
    render_controls(frame, grid.width(), layout.controls);
    render_reset(frame, layout.reset);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let legend = Line::from(vec![
        Span::styled("●", Style::default().fg(player_color(Player::One))),
        Span::raw(format!(" {}   ", Player::One.name())),
        Span::styled("●", Style::default().fg(player_color(Player::Two))),
        Span::raw(format!(" {}", Player::Two.name())),
    ]);

    let header = Paragraph::new(legend)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    grid: &Grid,
    status: &GameStatus,
    selected_column: usize,
    area: Rect,
) {
    let playing = !status.is_terminal();
    let winning_line = match status {
        GameStatus::Won(line) => Some(*line),
        _ => None,
    };
    let mut lines = Vec::new();

    // Column tops with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..grid.width() {
        let label = format!("{:^3}", col + 1);
        if playing && col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    lines.push(Line::from(col_line));

    let rule = "═".repeat(grid.width() * CELL_WIDTH as usize + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..grid.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..grid.width() {
            let pos = Position::new(row, col);
            let mut style = match grid.get(pos) {
                Cell::Empty => Style::default().fg(Color::DarkGray),
                Cell::Player1 => Style::default().fg(player_color(Player::One)),
                Cell::Player2 => Style::default().fg(player_color(Player::Two)),
            };
            if winning_line.is_some_and(|line| line.contains(pos)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            let symbol = if grid.get(pos) == Cell::Empty { " . " } else { " ● " };
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    if playing {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..grid.width() {
            if col == selected_column {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        lines.push(Line::from(indicator_line));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, status: &GameStatus, area: Rect) {
    let style = match status {
        GameStatus::InProgress(player) => Style::default().fg(player_color(*player)),
        GameStatus::Won(line) => Style::default()
            .fg(player_color(line.player))
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        GameStatus::Tied => Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
    };

    let widget = Paragraph::new(status.message())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, columns: usize, area: Rect) {
    let text = format!(
        "←/→ Move | Enter Drop | 1-{} Column | R Restart | Q Quit",
        columns.min(9)
    );
    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

fn render_reset(frame: &mut Frame, area: Rect) {
    let toggle = Paragraph::new("⟲ Reset")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(toggle, area);
}
