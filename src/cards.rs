use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an optional dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardId {
    #[serde(rename = "card-visits-chart")]
    VisitsChart,
    #[serde(rename = "card-quick-actions")]
    QuickActions,
    #[serde(rename = "card-weekly-stats")]
    WeeklyStats,
    #[serde(rename = "card-active-campaigns")]
    ActiveCampaigns,
    #[serde(rename = "card-churn-alert")]
    ChurnAlert,
    #[serde(rename = "card-trial-progress")]
    TrialProgress,
}

impl CardId {
    /// Every known card, in the order the settings page lists them.
    pub const ALL: [CardId; 6] = [
        CardId::VisitsChart,
        CardId::QuickActions,
        CardId::WeeklyStats,
        CardId::ActiveCampaigns,
        CardId::ChurnAlert,
        CardId::TrialProgress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardId::VisitsChart => "card-visits-chart",
            CardId::QuickActions => "card-quick-actions",
            CardId::WeeklyStats => "card-weekly-stats",
            CardId::ActiveCampaigns => "card-active-campaigns",
            CardId::ChurnAlert => "card-churn-alert",
            CardId::TrialProgress => "card-trial-progress",
        }
    }

    pub fn descriptor(&self) -> &'static DashboardCard {
        // DASHBOARD_CARDS is declared in the same order as ALL.
        &DASHBOARD_CARDS[*self as usize]
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCard(pub String);

impl fmt::Display for UnknownCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dashboard card '{}'", self.0)
    }
}

impl std::error::Error for UnknownCard {}

impl FromStr for CardId {
    type Err = UnknownCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownCard(s.to_string()))
    }
}

/// Settings page entry for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCard {
    pub id: CardId,
    pub name: &'static str,
    pub description: Option<&'static str>,
}

pub static DASHBOARD_CARDS: [DashboardCard; 6] = [
    DashboardCard {
        id: CardId::VisitsChart,
        name: "Ziyaret İstatistikleri",
        description: Some("Günlük, haftalık ve aylık ziyaret grafikleri"),
    },
    DashboardCard {
        id: CardId::QuickActions,
        name: "Bugünün Özeti",
        description: Some("Hızlı özet ve işlemler"),
    },
    DashboardCard {
        id: CardId::WeeklyStats,
        name: "Haftalık İstatistikler",
        description: Some("Tahmin edilen ziyaretler ve istatistikler"),
    },
    DashboardCard {
        id: CardId::ActiveCampaigns,
        name: "Aktif Kampanyalar",
        description: Some("Aktif kampanyalar ve performansları"),
    },
    DashboardCard {
        id: CardId::ChurnAlert,
        name: "Müşteri Kaybı Uyarısı",
        description: Some("Kayıp müşteri uyarıları"),
    },
    DashboardCard {
        id: CardId::TrialProgress,
        name: "Deneme İlerlemesi",
        description: Some("Premium deneme süresi takibi"),
    },
];
