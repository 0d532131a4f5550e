//! Interactive shell state and key handling, kept apart from drawing so it
//! can be driven without a terminal

use crossterm::event::KeyCode;

use super::components::LogPanel;
use super::Ui;
use crate::actions::feed::FeedCategory;
use crate::actions::missions::{MissionBoard, MissionTab};
use crate::actions::shipyard::ShipStat;
use crate::actions::trade::COMMODITIES;
use crate::actions::{bank, navigation, shipyard, trade, ActionError, Notice};
use crate::session::Session;
use crate::storage::KeyValueStore;

/// Credits moved per bank keypress
pub const BANK_STEP: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Map,
    Actions,
    Ship,
    Missions,
    Feed,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Map, Tab::Actions, Tab::Ship, Tab::Missions, Tab::Feed];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Map => "Map",
            Tab::Actions => "Actions",
            Tab::Ship => "Ship",
            Tab::Missions => "Missions",
            Tab::Feed => "Feed",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Key hints shown under the screen
    pub fn help(&self) -> &'static str {
        match self {
            Tab::Map => "Enter: move  s: scan  d: dock",
            Tab::Actions => "b: buy  s: sell  +: deposit 1,000  -: withdraw 1,000",
            Tab::Ship => "Enter/u: upgrade",
            Tab::Missions => "m: switch list  Enter/a: accept",
            Tab::Feed => "f: cycle filter",
        }
    }
}

pub struct ShellState {
    tab: Tab,
    selected: usize,
    missions: MissionBoard,
    mission_tab: MissionTab,
    feed_filter: Option<FeedCategory>,
    log: LogPanel,
    should_quit: bool,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            tab: Tab::Map,
            selected: 0,
            missions: MissionBoard::new(),
            mission_tab: MissionTab::Offers,
            feed_filter: None,
            log: LogPanel::new(),
            should_quit: false,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn missions(&self) -> &MissionBoard {
        &self.missions
    }

    pub fn mission_tab(&self) -> MissionTab {
        self.mission_tab
    }

    pub fn feed_filter(&self) -> Option<FeedCategory> {
        self.feed_filter
    }

    pub fn log_panel(&self) -> &LogPanel {
        &self.log
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key<S: KeyValueStore>(&mut self, key: KeyCode, session: &mut Session<S>) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.switch_tab(self.tab.next()),
            KeyCode::BackTab | KeyCode::Left => self.switch_tab(self.tab.prev()),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                let rows = self.row_count(session);
                if self.selected + 1 < rows {
                    self.selected += 1;
                }
            }
            other => self.handle_screen_key(other, session),
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.selected = 0;
    }

    fn row_count<S: KeyValueStore>(&self, session: &Session<S>) -> usize {
        match self.tab {
            Tab::Map => session
                .game
                .current_sector()
                .map(|s| s.connected_sectors.len())
                .unwrap_or(0),
            Tab::Actions => COMMODITIES.len(),
            Tab::Ship => ShipStat::ALL.len(),
            Tab::Missions => self.missions.missions(self.mission_tab).len(),
            Tab::Feed => 0,
        }
    }

    fn handle_screen_key<S: KeyValueStore>(&mut self, key: KeyCode, session: &mut Session<S>) {
        let game = &mut session.game;
        let result = match (self.tab, key) {
            (Tab::Map, KeyCode::Enter) => {
                let target = game
                    .current_sector()
                    .and_then(|s| s.connected_sectors.get(self.selected))
                    .cloned();
                match target {
                    Some(target) => {
                        self.selected = 0;
                        navigation::warp(game, &target)
                    }
                    None => Err(ActionError::NotInitialized),
                }
            }
            (Tab::Map, KeyCode::Char('s')) => navigation::scan(game),
            (Tab::Map, KeyCode::Char('d')) => navigation::dock(game),
            (Tab::Actions, KeyCode::Char('b')) => trade::buy(game, COMMODITIES[self.selected].name),
            (Tab::Actions, KeyCode::Char('s')) => {
                trade::sell(game, COMMODITIES[self.selected].name)
            }
            (Tab::Actions, KeyCode::Char('+')) => bank::deposit(game, &BANK_STEP.to_string()),
            (Tab::Actions, KeyCode::Char('-')) => bank::withdraw(game, &BANK_STEP.to_string()),
            (Tab::Ship, KeyCode::Enter | KeyCode::Char('u')) => {
                shipyard::upgrade_stat(game, ShipStat::ALL[self.selected])
            }
            (Tab::Missions, KeyCode::Char('m')) => {
                let next = (MissionTab::ALL
                    .iter()
                    .position(|t| *t == self.mission_tab)
                    .unwrap_or(0)
                    + 1)
                    % MissionTab::ALL.len();
                self.mission_tab = MissionTab::ALL[next];
                self.selected = 0;
                return;
            }
            (Tab::Missions, KeyCode::Enter | KeyCode::Char('a')) => {
                if self.mission_tab != MissionTab::Offers {
                    return;
                }
                let Some(mission) = self.missions.missions(MissionTab::Offers).get(self.selected)
                else {
                    return;
                };
                let id = mission.id;
                self.selected = 0;
                self.missions.accept(id)
            }
            (Tab::Feed, KeyCode::Char('f')) => {
                self.feed_filter = next_filter(self.feed_filter);
                let label = self.feed_filter.map_or("All", |c| c.label());
                self.log(format!("Feed filter: {}", label));
                return;
            }
            _ => return,
        };

        self.report(&result);
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for ShellState {
    fn notify(&mut self, notice: &Notice) {
        self.log.add(format!("✓ {}: {}", notice.title, notice.message));
    }

    fn reject(&mut self, error: &ActionError) {
        self.log.add(format!("✗ {}: {}", error.title(), error));
    }

    fn log(&mut self, message: impl Into<String>) {
        self.log.add(message);
    }
}

/// All -> each filter in order -> All
fn next_filter(current: Option<FeedCategory>) -> Option<FeedCategory> {
    match current {
        None => Some(FeedCategory::FILTERS[0]),
        Some(category) => {
            let pos = FeedCategory::FILTERS.iter().position(|c| *c == category);
            pos.and_then(|i| FeedCategory::FILTERS.get(i + 1).copied())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SharedStore};

    fn playing() -> Session<SharedStore<MemoryStore>> {
        let mut session = Session::open_seeded(SharedStore::new(MemoryStore::new()), 12);
        session.identity.sign_in("nova@example.com", "pw");
        session.game.initialize_game();
        session
    }

    #[test]
    fn test_tabs_wrap_around() {
        let mut session = playing();
        let mut shell = ShellState::new();
        shell.handle_key(KeyCode::BackTab, &mut session);
        assert_eq!(shell.tab(), Tab::Feed);
        shell.handle_key(KeyCode::Tab, &mut session);
        assert_eq!(shell.tab(), Tab::Map);
    }

    #[test]
    fn test_enter_on_map_moves_to_selected_sector() {
        let mut session = playing();
        let mut shell = ShellState::new();
        shell.handle_key(KeyCode::Down, &mut session);
        shell.handle_key(KeyCode::Enter, &mut session);

        assert_eq!(session.game.current_sector().unwrap().id, "sector_3");
        assert_eq!(session.game.turns(), 249);
        assert!(shell.log_panel().entries().last().unwrap().contains("Moved"));
    }

    #[test]
    fn test_buy_selected_commodity() {
        let mut session = playing();
        let mut shell = ShellState::new();
        shell.handle_key(KeyCode::Tab, &mut session);
        shell.handle_key(KeyCode::Down, &mut session);
        shell.handle_key(KeyCode::Char('b'), &mut session);
        assert_eq!(session.game.credits(), 10_000 - 18);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut session = playing();
        let mut shell = ShellState::new();
        shell.handle_key(KeyCode::Tab, &mut session);
        for _ in 0..10 {
            shell.handle_key(KeyCode::Down, &mut session);
        }
        assert_eq!(shell.selected(), COMMODITIES.len() - 1);
        shell.handle_key(KeyCode::Char('s'), &mut session);
        assert_eq!(session.game.credits(), 10_000 + 28);
    }

    #[test]
    fn test_rejections_are_logged() {
        let mut session = playing();
        session.game.update_turns(-250);
        let mut shell = ShellState::new();
        shell.handle_key(KeyCode::Char('s'), &mut session);
        let last = shell.log_panel().entries().last().unwrap();
        assert!(last.contains("No Turns"), "{}", last);
    }

    #[test]
    fn test_accept_mission_from_offers() {
        let mut session = playing();
        let mut shell = ShellState::new();
        for _ in 0..3 {
            shell.handle_key(KeyCode::Tab, &mut session);
        }
        assert_eq!(shell.tab(), Tab::Missions);
        shell.handle_key(KeyCode::Enter, &mut session);
        assert_eq!(shell.missions().missions(MissionTab::Active).len(), 1);

        shell.handle_key(KeyCode::Char('m'), &mut session);
        assert_eq!(shell.mission_tab(), MissionTab::Active);
    }

    #[test]
    fn test_feed_filter_cycles_back_to_all() {
        let mut session = playing();
        let mut shell = ShellState::new();
        shell.handle_key(KeyCode::BackTab, &mut session);
        for _ in 0..FeedCategory::FILTERS.len() {
            shell.handle_key(KeyCode::Char('f'), &mut session);
            assert!(shell.feed_filter().is_some());
        }
        shell.handle_key(KeyCode::Char('f'), &mut session);
        assert!(shell.feed_filter().is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut session = playing();
        let mut shell = ShellState::new();
        shell.handle_key(KeyCode::Char('q'), &mut session);
        assert!(shell.should_quit());
    }
}
