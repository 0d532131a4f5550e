//! UI Components for the terminal interface

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use super::shell::{ShellState, Tab};
use crate::actions::feed::{feed_items, filter_feed, format_age, FeedCategory, Severity};
use crate::actions::format_credits;
use crate::actions::missions::Risk;
use crate::actions::shipyard::{upgrade_cost, ShipStat};
use crate::actions::trade::COMMODITIES;
use crate::model::{sector_number, Faction, ShipStatus};
use crate::session::Session;
use crate::storage::KeyValueStore;

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Blue))
}

fn highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Header with location, turns and credits
pub fn render_status<S: KeyValueStore>(frame: &mut Frame, area: Rect, session: &Session<S>) {
    let game = &session.game;
    let pilot = session
        .identity
        .user()
        .map(|u| u.display_name.as_str())
        .unwrap_or("Guest");

    let location = match game.current_sector() {
        Some(sector) => Line::from(vec![
            Span::styled(
                format!(" {} ", sector.region),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                sector.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(" Loading sector data..."),
    };

    let turns_style = if game.turns() == 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let bank = game.player().map(|p| p.bank).unwrap_or(0);

    let counters = Line::from(vec![
        Span::raw(" Turns "),
        Span::styled(game.turns().to_string(), turns_style),
        Span::raw("   Credits "),
        Span::styled(
            format!("{} CR", format_credits(game.credits())),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   Bank "),
        Span::styled(
            format!("{} CR", format_credits(bank)),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph =
        Paragraph::new(vec![location, counters]).block(panel(&format!("Stardock - {}", pilot)));
    frame.render_widget(paragraph, area);
}

pub fn render_tabs(frame: &mut Frame, area: Rect, current: Tab) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(current.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

/// Content of the selected tab plus its key hints
pub fn render_screen<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    state: &ShellState,
    session: &Session<S>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    match state.tab() {
        Tab::Map => render_map(frame, chunks[0], state, session),
        Tab::Actions => render_actions(frame, chunks[0], state, session),
        Tab::Ship => render_ship(frame, chunks[0], state, session),
        Tab::Missions => render_missions(frame, chunks[0], state),
        Tab::Feed => render_feed(frame, chunks[0], state.feed_filter()),
    }

    let help = Paragraph::new(format!(" {}  Tab: switch  q: quit", state.tab().help()))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[1]);
}

fn render_selectable(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    selected: usize,
) {
    let list = List::new(items)
        .block(panel(title))
        .highlight_style(highlight())
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_map<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    state: &ShellState,
    session: &Session<S>,
) {
    let Some(sector) = session.game.current_sector() else {
        let empty = Paragraph::new(" No game in progress.").block(panel("Map"));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut features = Vec::new();
    if sector.has_port {
        let style = Style::default().fg(Color::Green);
        features.push(Line::from(Span::styled(" Port", style)));
    }
    if sector.has_planet {
        let style = Style::default().fg(Color::Magenta);
        features.push(Line::from(Span::styled(" Planet", style)));
    }
    if sector.players > 0 {
        let plural = if sector.players > 1 { "s" } else { "" };
        features.push(Line::from(format!(" {} Player{}", sector.players, plural)));
    }
    if session.game.turns() == 0 {
        features.push(Line::from(""));
        features.push(Line::from(Span::styled(
            " Out of turns! Turns reset daily at 00:00 UTC.",
            Style::default().fg(Color::Red),
        )));
    }
    frame.render_widget(
        Paragraph::new(features)
            .wrap(Wrap { trim: true })
            .block(panel("Sector")),
        chunks[0],
    );

    let disabled = session.game.turns() == 0;
    let items: Vec<ListItem> = sector
        .connected_sectors
        .iter()
        .map(|id| {
            let style = if disabled {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(format!("Sector {}", sector_number(id)), style))
        })
        .collect();
    render_selectable(frame, chunks[1], "Connected Sectors", items, state.selected());
}

fn render_actions<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    state: &ShellState,
    session: &Session<S>,
) {
    let has_port = session
        .game
        .current_sector()
        .map(|s| s.has_port)
        .unwrap_or(false);
    if !has_port {
        let text = " You need to be at a port to access trading and banking services.";
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(panel("No Port Available")),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = COMMODITIES
        .iter()
        .map(|c| {
            ListItem::new(format!(
                "{:<10} {:>4} CR  sells {:>3} CR  stock {}",
                c.name,
                c.price,
                c.sale_price(),
                format_credits(c.stock)
            ))
        })
        .collect();
    render_selectable(frame, area, "Trade", items, state.selected());
}

fn render_ship<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    state: &ShellState,
    session: &Session<S>,
) {
    let Some(ship) = session.game.ship() else {
        let empty = Paragraph::new(" No ship data available.").block(panel("Ship"));
        frame.render_widget(empty, area);
        return;
    };

    let status_style = match ship.status {
        ShipStatus::Ok => Style::default().fg(Color::Green),
        ShipStatus::Disabled => Style::default().fg(Color::Red),
    };
    let title = format!("{} - {} [{}]", ship.name, ship.class_label(), ship.status);

    let items: Vec<ListItem> = ShipStat::ALL
        .iter()
        .map(|stat| {
            let level = stat.value(ship);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<12} {:>4}", stat.label(), level)),
                Span::styled(
                    format!("   upgrade {} CR", format_credits(upgrade_cost(level))),
                    status_style,
                ),
            ]))
        })
        .collect();
    render_selectable(frame, area, &title, items, state.selected());
}

fn render_missions(frame: &mut Frame, area: Rect, state: &ShellState) {
    let tab = state.mission_tab();
    let missions = state.missions().missions(tab);
    let title = format!("Missions - {}", tab.label());

    if missions.is_empty() {
        let empty = Paragraph::new(format!(" {}", tab.empty_message())).block(panel(&title));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = missions
        .iter()
        .map(|m| {
            let faction_color = match m.faction {
                Faction::Federation => Color::Blue,
                Faction::Pirate => Color::Red,
                Faction::Neutral => Color::Gray,
            };
            let tier_color = match m.tier.risk() {
                Risk::Low => Color::Green,
                Risk::Moderate => Color::Yellow,
                Risk::High => Color::Red,
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(m.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {}", m.faction), Style::default().fg(faction_color)),
                    Span::styled(
                        format!("  Tier {}", m.tier.as_str()),
                        Style::default().fg(tier_color),
                    ),
                    Span::raw(format!("  {} | {} | {} min", m.kind, m.region, m.time_limit)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", m.description),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(format!("  {}", m.reward_summary())),
            ])
        })
        .collect();
    render_selectable(frame, area, &title, items, state.selected());
}

fn render_feed(frame: &mut Frame, area: Rect, filter: Option<FeedCategory>) {
    let items = feed_items();
    let title = format!("Feed - {}", filter.map_or("All", |c| c.label()));

    let entries: Vec<ListItem> = filter_feed(&items, filter)
        .into_iter()
        .map(|item| {
            let severity_color = match item.severity {
                Severity::Critical => Color::Red,
                Severity::Major => Color::Yellow,
                Severity::Standard => Color::Cyan,
                Severity::Minor => Color::DarkGray,
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:<9}", item.category.label()),
                        Style::default().fg(severity_color),
                    ),
                    Span::styled(
                        format!(" {}  {}", item.region, format_age(item.minutes_ago)),
                        Style::default().fg(Color::Gray),
                    ),
                ]),
                Line::from(format!("  {}", item.message)),
            ])
        })
        .collect();

    frame.render_widget(List::new(entries).block(panel(&title)), area);
}

/// Log panel showing scrollable history
pub struct LogPanel {
    entries: Vec<String>,
    max_entries: usize,
}

impl LogPanel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: 100,
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = panel("Activity");

        // Calculate how many items we can show
        let visible_height = area.height.saturating_sub(2) as usize; // -2 for borders
        let start = self.entries.len().saturating_sub(visible_height);

        let items: Vec<ListItem> = self.entries[start..]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.entries.len() - start - 1 {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Span::styled(format!(" {}", entry), style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::new()
    }
}
