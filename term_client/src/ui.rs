//! Terminal rendering of the match: a shared UI state the session's
//! frontend writes into, and a ratatui draw pass that reads it back out.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use match_core::Winner;
use match_session::{FrameSnapshot, Frontend};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Everything the draw pass needs, filled in by `TermFrontend`
#[derive(Default)]
pub struct UiState {
    pub frame: Option<FrameSnapshot>,
    pub score_line: String,
    pub clock_line: String,
    pub result_line: Option<String>,
}

pub type SharedUiState = Rc<RefCell<UiState>>;

/// `Frontend` writing into the shared UI state. Sounds become the terminal
/// bell; a write failure there is simply dropped.
pub struct TermFrontend {
    state: SharedUiState,
}

impl TermFrontend {
    pub fn new(state: SharedUiState) -> Self {
        Self { state }
    }

    fn ring_bell(&self) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

impl Frontend for TermFrontend {
    fn draw_frame(&mut self, frame: &FrameSnapshot) {
        self.state.borrow_mut().frame = Some(*frame);
    }

    fn play_touch_sound(&mut self) {
        self.ring_bell();
    }

    fn play_win_sound(&mut self) {
        self.ring_bell();
    }

    fn update_score(&mut self, left: u32, right: u32) {
        self.state.borrow_mut().score_line = format!("{} : {}", left, right);
    }

    fn update_clock(&mut self, text: &str) {
        self.state.borrow_mut().clock_line = text.to_string();
    }

    fn report_match_result(&mut self, winner: Winner) {
        let message = match winner {
            Winner::Left => "Time's Up! Left Player Wins!",
            Winner::Right => "Time's Up! Right Player Wins!",
            Winner::Draw => "Time's Up! It's a Draw!",
        };
        self.state.borrow_mut().result_line = Some(message.to_string());
    }
}

/// Map a field coordinate onto a cell offset within `cells` columns/rows
pub fn cell_for(field: f32, field_extent: f32, cells: u16) -> u16 {
    if field_extent <= 0.0 || cells == 0 {
        return 0;
    }
    let scaled = (field / field_extent * cells as f32).floor();
    let clamped = scaled.max(0.0) as u16;
    clamped.min(cells - 1)
}

/// Cell height of a paddle scaled into `cells` rows (at least one cell)
pub fn paddle_cells(paddle_height: f32, field_height: f32, cells: u16) -> u16 {
    if field_height <= 0.0 || cells == 0 {
        return 1;
    }
    let scaled = (paddle_height / field_height * cells as f32).round() as u16;
    scaled.clamp(1, cells)
}

pub fn draw(frame: &mut ratatui::Frame, ui: &UiState) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let Some(snapshot) = &ui.frame else {
        draw_instructions(frame, area);
        return;
    };

    // Status line on top, board below
    let status = format!("{}    {}", ui.score_line, ui.clock_line);
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let board = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );
    if board.width < 4 || board.height < 4 {
        return;
    }
    frame.render_widget(Block::default().borders(Borders::ALL), board);
    let inner = Rect::new(
        board.x + 1,
        board.y + 1,
        board.width - 2,
        board.height - 2,
    );

    // Dashed center line
    let mid_x = inner.x + inner.width / 2;
    for row in 0..inner.height {
        if row % 2 == 0 {
            frame.render_widget(Paragraph::new("|"), Rect::new(mid_x, inner.y + row, 1, 1));
        }
    }

    // Paddles
    let paddle_h = paddle_cells(snapshot.paddle_height, snapshot.field_height, inner.height);
    let left_row = cell_for(snapshot.left_paddle_y, snapshot.field_height, inner.height);
    let right_row = cell_for(snapshot.right_paddle_y, snapshot.field_height, inner.height);
    draw_paddle(frame, inner, inner.x, left_row, paddle_h, Color::LightBlue);
    draw_paddle(
        frame,
        inner,
        inner.x + inner.width - 1,
        right_row,
        paddle_h,
        Color::Red,
    );

    // Ball
    let ball_col = cell_for(snapshot.ball_x, snapshot.field_width, inner.width);
    let ball_row = cell_for(snapshot.ball_y, snapshot.field_height, inner.height);
    frame.render_widget(
        Paragraph::new("O").style(Style::default().fg(Color::Yellow)),
        Rect::new(inner.x + ball_col, inner.y + ball_row, 1, 1),
    );

    // Winner banner once the match is over
    if let Some(result) = &ui.result_line {
        let banner_y = inner.y + inner.height / 2;
        frame.render_widget(
            Paragraph::new(result.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Green)),
            Rect::new(inner.x, banner_y, inner.width, 1),
        );
    }
}

fn draw_paddle(
    frame: &mut ratatui::Frame,
    inner: Rect,
    col: u16,
    top_row: u16,
    height: u16,
    color: Color,
) {
    for row in 0..height {
        let y = inner.y + top_row + row;
        if y >= inner.y + inner.height {
            break;
        }
        frame.render_widget(
            Paragraph::new("█").style(Style::default().fg(color)),
            Rect::new(col, y, 1, 1),
        );
    }
}

fn draw_instructions(frame: &mut ratatui::Frame, area: Rect) {
    let text = [
        "PONG",
        "",
        "Left player:  W / S",
        "Right player: Up / Down",
        "",
        "Space or Enter - start",
        "R - reset match",
        "Q or Esc - quit",
    ]
    .join("\n");
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
