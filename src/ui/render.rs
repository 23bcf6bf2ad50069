use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::ContactConfig;
use crate::model::Vehicle;
use crate::ui::app::App;
use crate::ui::layout::{grid_cells, grid_columns, grid_rows, hero_regions, page_regions};
use crate::ui::theme::{
    BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, HIGHLIGHT_CHECK, MUTED_TEXT, SLIDER_ARROW,
    WHATSAPP_GREEN,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let compact = app.is_compact();
    let (header, hero, grid, footer) = page_regions(area, compact);

    frame.render_widget(header_widget(&app.page().title), header);
    frame.render_widget(footer_widget(), footer);

    if app.is_loading() {
        frame.render_widget(Clear, hero);
        frame.render_widget(skeleton_widget(), hero.union(grid));
        return;
    }

    draw_hero(frame, app, hero, compact);
    draw_grid(frame, app, grid, compact);
}

fn header_widget(title: &str) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            title.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn footer_widget() -> Paragraph<'static> {
    let hints = format!(" ←/→: Slide │ ↑/↓: Scroll │ q: Quit │ v{}", VERSION);
    Paragraph::new(hints)
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn skeleton_widget() -> Paragraph<'static> {
    let bar = Style::default().fg(GLOBAL_BORDER);
    Paragraph::new(vec![
        Line::from(Span::styled("Loading vehicles…", Style::default().fg(MUTED_TEXT))),
        Line::from(""),
        Line::from(Span::styled("████████████████████", bar)),
        Line::from(Span::styled("██████████████", bar)),
        Line::from(Span::styled("█████████████████", bar)),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(bar))
}

fn draw_hero(frame: &mut Frame<'_>, app: &App, area: Rect, compact: bool) {
    let (highlights_area, slide_area) = hero_regions(area, compact);
    let alignment = if compact {
        Alignment::Center
    } else {
        Alignment::Left
    };

    let mut lines = vec![Line::from(Span::styled(
        app.page().title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(app.page().highlights.iter().map(|h| {
        Line::from(vec![
            Span::styled("✔ ", Style::default().fg(HIGHLIGHT_CHECK)),
            Span::raw(h.clone()),
        ])
    }));
    frame.render_widget(
        Paragraph::new(lines).alignment(alignment),
        highlights_area,
    );

    // Nothing to index into without vehicles: no slider at all.
    let Some(vehicle) = app.gallery().current() else {
        return;
    };
    let position = format!(
        "{}/{}",
        app.current_index().map_or(0, |i| i + 1),
        app.items().len()
    );
    let arrow = Style::default().fg(SLIDER_ARROW).add_modifier(Modifier::BOLD);
    let slide = vec![
        Line::from(vec![
            Span::styled("‹  ", arrow),
            Span::styled(
                vehicle.model.clone(),
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ›", arrow),
        ]),
        Line::from(Span::styled(
            vehicle.image_url.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(format!("{} · {} · {}", vehicle.fuel, vehicle.transmission, vehicle.year)),
        Line::from(Span::styled(position, Style::default().fg(MUTED_TEXT))),
    ];
    frame.render_widget(
        Paragraph::new(slide)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        slide_area,
    );
}

fn draw_grid(frame: &mut Frame<'_>, app: &App, area: Rect, compact: bool) {
    if area.height == 0 {
        return;
    }
    let tagline_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            app.page().tagline.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        tagline_area,
    );

    let cards_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };
    let items = app.items();
    let columns = grid_columns(compact);
    let first_row = app
        .grid_scroll()
        .min(grid_rows(items.len(), columns).saturating_sub(1));

    for (index, cell) in grid_cells(cards_area, items.len(), columns, first_row) {
        frame.render_widget(card_widget(&items[index], app.contact()), cell);
    }
}

fn card_widget(vehicle: &Vehicle, contact: &ContactConfig) -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            vehicle.model.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("⛽ {}", vehicle.fuel)),
        Line::from(format!("⚙ {}", vehicle.transmission)),
        Line::from(format!("📅 {}", vehicle.year)),
        Line::from(vec![
            Span::styled("☎ Ara ", Style::default().fg(BRAND_BLUE)),
            Span::styled(contact.phone_uri(), Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("✆ WhatsApp ", Style::default().fg(WHATSAPP_GREEN)),
            Span::styled(contact.whatsapp_uri(), Style::default().fg(MUTED_TEXT)),
        ]),
    ];
    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// Plain-text rendition of the vehicle list, for non-interactive output.
pub fn plain_listing(vehicles: &[Vehicle], contact: &ContactConfig) -> String {
    let mut out = String::new();
    for vehicle in vehicles {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            vehicle.id,
            vehicle.model,
            vehicle.fuel,
            vehicle.transmission,
            vehicle.year,
            vehicle.image_url
        ));
    }
    out.push_str(&format!(
        "contact\t{}\t{}\n",
        contact.phone_uri(),
        contact.whatsapp_uri()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_has_one_line_per_vehicle_plus_contact() {
        let vehicles = vec![Vehicle {
            id: "egea".to_string(),
            model: "Fiat Egea".to_string(),
            fuel: "Dizel".to_string(),
            transmission: "Manuel".to_string(),
            year: 2021,
            image_url: "https://cdn.example.com/egea.png".to_string(),
        }];
        let listing = plain_listing(&vehicles, &ContactConfig::default());
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("egea\tFiat Egea\tDizel"));
        assert_eq!(
            lines[1],
            "contact\ttel:05522523997\thttps://wa.me/905522523997"
        );
    }
}
