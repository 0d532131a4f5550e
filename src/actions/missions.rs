//! Mission board
//!
//! Offers are a fixed list. Accepting one moves it to the active tab for the
//! rest of the session; the board itself is not persisted.

use super::{format_credits, ActionError, ActionResult, Notice};
use crate::model::Faction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    I,
    II,
    III,
    IV,
    V,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::I => "I",
            Tier::II => "II",
            Tier::III => "III",
            Tier::IV => "IV",
            Tier::V => "V",
        }
    }

    /// Tiers I-II are easy, III is moderate, IV-V are hard
    pub fn risk(&self) -> Risk {
        match self {
            Tier::I | Tier::II => Risk::Low,
            Tier::III => Risk::Moderate,
            Tier::IV | Tier::V => Risk::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionStatus {
    Offered,
    Accepted,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewards {
    pub credits: u64,
    pub rep_xp: u32,
    pub alignment: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub id: &'static str,
    pub title: &'static str,
    pub faction: Faction,
    pub tier: Tier,
    pub kind: &'static str,
    pub description: &'static str,
    pub region: &'static str,
    pub rewards: Rewards,
    /// Minutes allowed once accepted
    pub time_limit: u32,
    pub status: MissionStatus,
}

impl Mission {
    /// One-line reward summary, e.g. `5,000 CR | 200 XP | +15 Align`
    pub fn reward_summary(&self) -> String {
        let mut summary = format!(
            "{} CR | {} XP",
            format_credits(self.rewards.credits),
            self.rewards.rep_xp
        );
        if self.rewards.alignment != 0 {
            summary.push_str(&format!(" | {:+} Align", self.rewards.alignment));
        }
        summary
    }
}

/// Missions currently on offer
pub fn mission_offers() -> Vec<Mission> {
    vec![
        Mission {
            id: "mission_1",
            title: "Relief Shipment",
            faction: Faction::Federation,
            tier: Tier::II,
            kind: "Delivery",
            description: "Deliver aid crates to a colony in the Frontier Cluster.",
            region: "Frontier Cluster",
            rewards: Rewards {
                credits: 5000,
                rep_xp: 200,
                alignment: 15,
            },
            time_limit: 120,
            status: MissionStatus::Offered,
        },
        Mission {
            id: "mission_2",
            title: "Black Line Run",
            faction: Faction::Pirate,
            tier: Tier::I,
            kind: "Smuggle",
            description: "Move contraband between two outlaw markets.",
            region: "Pirate Reaches",
            rewards: Rewards {
                credits: 8000,
                rep_xp: 150,
                alignment: -10,
            },
            time_limit: 90,
            status: MissionStatus::Offered,
        },
        Mission {
            id: "mission_3",
            title: "Recon Sweep",
            faction: Faction::Neutral,
            tier: Tier::I,
            kind: "Recon",
            description: "Scan and report anomalies in the Core Ring.",
            region: "Core Ring",
            rewards: Rewards {
                credits: 3000,
                rep_xp: 120,
                alignment: 0,
            },
            time_limit: 60,
            status: MissionStatus::Offered,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionTab {
    Offers,
    Active,
    History,
}

impl MissionTab {
    pub const ALL: [MissionTab; 3] = [MissionTab::Offers, MissionTab::Active, MissionTab::History];

    pub fn label(&self) -> &'static str {
        match self {
            MissionTab::Offers => "Offers",
            MissionTab::Active => "Active",
            MissionTab::History => "History",
        }
    }

    /// Empty-tab hint
    pub fn empty_message(&self) -> &'static str {
        match self {
            MissionTab::Offers => "No missions on offer right now.",
            MissionTab::Active => "No active missions. Accept an offer to get started.",
            MissionTab::History => "No completed missions yet.",
        }
    }
}

pub struct MissionBoard {
    offers: Vec<Mission>,
    active: Vec<Mission>,
    history: Vec<Mission>,
}

impl MissionBoard {
    pub fn new() -> Self {
        Self {
            offers: mission_offers(),
            active: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn missions(&self, tab: MissionTab) -> &[Mission] {
        match tab {
            MissionTab::Offers => &self.offers,
            MissionTab::Active => &self.active,
            MissionTab::History => &self.history,
        }
    }

    /// Take an offer by id
    pub fn accept(&mut self, mission_id: &str) -> ActionResult {
        let pos = self
            .offers
            .iter()
            .position(|m| m.id == mission_id)
            .ok_or_else(|| ActionError::UnknownMission(mission_id.to_string()))?;

        let mut mission = self.offers.remove(pos);
        mission.status = MissionStatus::Accepted;
        let notice = Notice::new(
            "Mission Accepted",
            format!(
                "You have accepted \"{}\". You have {} minutes. Good luck!",
                mission.title, mission.time_limit
            ),
        );
        self.active.push(mission);
        Ok(notice)
    }
}

impl Default for MissionBoard {
    fn default() -> Self {
        Self::new()
    }
}
