use crate::cards::CardId;
use crate::preferences::CardVisibility;

/// Subscription state that decides how some cards render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub premium: bool,
    pub trial_used: u32,
    pub trial_limit: u32,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            premium: false,
            trial_used: 47,
            trial_limit: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Main,
    Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    VisitsChart,
    /// Rendered next to the live feed.
    ActiveCampaigns,
    ChurnAlert { locked: bool },
    TrialProgress { used: u32, limit: u32 },
    QuickActions,
    WeeklyStats,
}

impl CardSlot {
    pub fn card(&self) -> CardId {
        match self {
            CardSlot::VisitsChart => CardId::VisitsChart,
            CardSlot::ActiveCampaigns => CardId::ActiveCampaigns,
            CardSlot::ChurnAlert { .. } => CardId::ChurnAlert,
            CardSlot::TrialProgress { .. } => CardId::TrialProgress,
            CardSlot::QuickActions => CardId::QuickActions,
            CardSlot::WeeklyStats => CardId::WeeklyStats,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedCard {
    pub column: Column,
    pub slot: CardSlot,
}

/// Cards to render, main column first, in display order.
pub fn plan_cards(visibility: &CardVisibility, plan: &Plan) -> Vec<PlannedCard> {
    let main = [
        CardSlot::VisitsChart,
        CardSlot::ActiveCampaigns,
        CardSlot::ChurnAlert {
            locked: !plan.premium,
        },
    ];
    let mut sidebar = Vec::with_capacity(3);
    if !plan.premium {
        sidebar.push(CardSlot::TrialProgress {
            used: plan.trial_used,
            limit: plan.trial_limit,
        });
    }
    sidebar.push(CardSlot::QuickActions);
    sidebar.push(CardSlot::WeeklyStats);

    main.into_iter()
        .map(|slot| PlannedCard {
            column: Column::Main,
            slot,
        })
        .chain(sidebar.into_iter().map(|slot| PlannedCard {
            column: Column::Sidebar,
            slot,
        }))
        .filter(|planned| visibility.get(planned.slot.card()))
        .collect()
}
