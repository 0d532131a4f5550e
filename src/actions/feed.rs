//! Galaxy news feed

use std::str::FromStr;

use super::ActionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCategory {
    Combat,
    Economy,
    Mission,
    Planet,
    Season,
    System,
}

impl FeedCategory {
    /// Categories offered as filters, in display order
    pub const FILTERS: [FeedCategory; 5] = [
        FeedCategory::Combat,
        FeedCategory::Economy,
        FeedCategory::Mission,
        FeedCategory::Planet,
        FeedCategory::System,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeedCategory::Combat => "Combat",
            FeedCategory::Economy => "Economy",
            FeedCategory::Mission => "Missions",
            FeedCategory::Planet => "Planets",
            FeedCategory::Season => "Season",
            FeedCategory::System => "System",
        }
    }

}

impl FromStr for FeedCategory {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "combat" => Ok(FeedCategory::Combat),
            "economy" => Ok(FeedCategory::Economy),
            "mission" | "missions" => Ok(FeedCategory::Mission),
            "planet" | "planets" => Ok(FeedCategory::Planet),
            "season" => Ok(FeedCategory::Season),
            "system" => Ok(FeedCategory::System),
            _ => Err(ActionError::UnknownFeedCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Minor,
    Standard,
    Major,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Standard => "standard",
            Severity::Major => "major",
            Severity::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: &'static str,
    pub category: FeedCategory,
    pub region: &'static str,
    pub message: &'static str,
    pub minutes_ago: u64,
    pub severity: Severity,
}

/// Latest headlines, newest first
pub fn feed_items() -> Vec<FeedItem> {
    vec![
        FeedItem {
            id: "feed_1",
            category: FeedCategory::Combat,
            region: "Outer Rim",
            message: "A decisive clash echoed through the Outer Rim.",
            minutes_ago: 5,
            severity: Severity::Major,
        },
        FeedItem {
            id: "feed_2",
            category: FeedCategory::Economy,
            region: "Inner Belt",
            message: "Equipment demand surged across the Inner Belt.",
            minutes_ago: 15,
            severity: Severity::Standard,
        },
        FeedItem {
            id: "feed_3",
            category: FeedCategory::Mission,
            region: "Frontier Cluster",
            message: "A convoy reached safe harbor despite pirate pressure.",
            minutes_ago: 32,
            severity: Severity::Standard,
        },
        FeedItem {
            id: "feed_4",
            category: FeedCategory::Planet,
            region: "Deep Space",
            message: "A new world was charted in Deep Space.",
            minutes_ago: 45,
            severity: Severity::Major,
        },
        FeedItem {
            id: "feed_5",
            category: FeedCategory::Economy,
            region: "Pirate Reaches",
            message: "A Black Market in the Pirate Reaches opened for business.",
            minutes_ago: 67,
            severity: Severity::Minor,
        },
        FeedItem {
            id: "feed_6",
            category: FeedCategory::System,
            region: "Galaxy-wide",
            message: "Turns will reset at 00:00 UTC.",
            minutes_ago: 120,
            severity: Severity::Critical,
        },
    ]
}

/// Items in `category`, or everything when `None`
pub fn filter_feed(items: &[FeedItem], category: Option<FeedCategory>) -> Vec<&FeedItem> {
    items
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .collect()
}

pub fn format_age(minutes: u64) -> String {
    let hours = minutes / 60;
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(0), "Just now");
        assert_eq!(format_age(5), "5m ago");
        assert_eq!(format_age(67), "1h ago");
        assert_eq!(format_age(60 * 50), "2d ago");
    }

    #[test]
    fn test_filter_by_category() {
        let items = feed_items();
        let economy = filter_feed(&items, Some(FeedCategory::Economy));
        assert_eq!(economy.len(), 2);
        assert!(economy.iter().all(|i| i.category == FeedCategory::Economy));
        assert_eq!(filter_feed(&items, None).len(), items.len());
        assert!(filter_feed(&items, Some(FeedCategory::Season)).is_empty());
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!("Missions".parse::<FeedCategory>(), Ok(FeedCategory::Mission));
        assert_eq!(
            "weather".parse::<FeedCategory>(),
            Err(ActionError::UnknownFeedCategory("weather".to_string()))
        );
    }
}
