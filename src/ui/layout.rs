use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by one vehicle card in the grid.
pub const CARD_HEIGHT: u16 = 9;

/// Split the screen into header, hero, grid and footer.
pub fn page_regions(area: Rect, is_compact: bool) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let hero_height = if is_compact { 14 } else { 10 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(hero_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Hero splits into highlights and slide: side by side (40/60) when wide,
/// stacked when compact.
pub fn hero_regions(area: Rect, is_compact: bool) -> (Rect, Rect) {
    let (direction, constraints) = if is_compact {
        (
            Direction::Vertical,
            [Constraint::Length(6), Constraint::Min(0)],
        )
    } else {
        (
            Direction::Horizontal,
            [Constraint::Percentage(40), Constraint::Percentage(60)],
        )
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    (chunks[0], chunks[1])
}

/// Cards per grid row: one when compact, three when wide.
pub fn grid_columns(is_compact: bool) -> usize {
    if is_compact {
        1
    } else {
        3
    }
}

/// Number of grid rows needed for `items` cards.
pub fn grid_rows(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}

/// Card rectangles for the visible part of the grid, paired with the
/// item index each one shows.
pub fn grid_cells(area: Rect, items: usize, columns: usize, first_row: usize) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    let visible_rows = usize::from(area.height / CARD_HEIGHT);
    let mut cells = Vec::new();
    if area.width == 0 || visible_rows == 0 {
        return cells;
    }

    let col_width = area.width / columns as u16;
    for row in 0..visible_rows {
        let grid_row = first_row + row;
        for col in 0..columns {
            let index = grid_row * columns + col;
            if index >= items {
                return cells;
            }
            cells.push((
                index,
                Rect {
                    x: area.x + col as u16 * col_width,
                    y: area.y + row as u16 * CARD_HEIGHT,
                    width: col_width,
                    height: CARD_HEIGHT,
                },
            ));
        }
    }
    cells
}
