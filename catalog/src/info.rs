//! Information-board items, tabs and static content.
//!
//! DESIGN
//! ======
//! The board mixes two backend collections (deals, inventory alerts) with
//! content that is never stored: house policies, the weekly event rota, the
//! upcoming events list and the festival banner. Every card and dialog works
//! on [`InfoItem`], a tagged union, so the dialog never has to guess a record's
//! kind from which fields happen to be present.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use crate::model::{Deal, Event, Festival, InformationBoard, InventoryAlert, Policy, WeeklyEvent};

// =============================================================================
// TABS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoTab {
    #[default]
    Deals,
    Events,
    Policies,
    Alerts,
}

impl InfoTab {
    pub const ALL: [Self; 4] = [Self::Deals, Self::Events, Self::Policies, Self::Alerts];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Deals => "deals",
            Self::Events => "events",
            Self::Policies => "policies",
            Self::Alerts => "alerts",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Deals => "Deals & Promotions",
            Self::Events => "Events",
            Self::Policies => "Policies",
            Self::Alerts => "Inventory Alerts",
        }
    }
}

// =============================================================================
// ITEMS
// =============================================================================

/// One card on the information board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoItem {
    Deal(Deal),
    Policy(Policy),
    Alert(InventoryAlert),
    Event(Event),
    Weekly(WeeklyEvent),
}

impl InfoItem {
    /// Card and dialog heading. Alerts are headed by the affected item.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Deal(d) => &d.title,
            Self::Policy(p) => &p.title,
            Self::Alert(a) => &a.item_name,
            Self::Event(e) => &e.title,
            Self::Weekly(w) => &w.title,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Deal(d) => &d.description,
            Self::Policy(p) => &p.description,
            Self::Alert(a) => &a.message,
            Self::Event(e) => &e.description,
            Self::Weekly(w) => &w.description,
        }
    }

    #[must_use]
    pub fn time(&self) -> Option<&str> {
        match self {
            Self::Event(e) => Some(&e.time),
            Self::Weekly(w) => Some(&w.time),
            Self::Deal(_) | Self::Policy(_) | Self::Alert(_) => None,
        }
    }

    #[must_use]
    pub fn day(&self) -> Option<&str> {
        match self {
            Self::Deal(d) if !d.day.is_empty() => Some(&d.day),
            Self::Weekly(w) => Some(&w.day),
            _ => None,
        }
    }

    /// Stable key for keyed list rendering.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Deal(d) => format!("deal-{}", d.id),
            Self::Policy(p) => format!("policy-{}", p.title),
            Self::Alert(a) => format!("alert-{}", a.id),
            Self::Event(e) => format!("event-{}", e.id),
            Self::Weekly(w) => format!("weekly-{}-{}", w.day, w.title),
        }
    }

    /// Icon family shown on the card header.
    #[must_use]
    pub fn icon(&self) -> InfoIcon {
        match self {
            Self::Deal(_) | Self::Weekly(_) => InfoIcon::Calendar,
            Self::Alert(_) => InfoIcon::Alert,
            Self::Policy(_) => InfoIcon::Info,
            Self::Event(e) => match event_kind_key(&e.kind) {
                "live-music" | "dj" => InfoIcon::Music,
                _ => InfoIcon::Calendar,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoIcon {
    Calendar,
    Music,
    Alert,
    Info,
}

impl InformationBoard {
    /// Cards for `tab`. The events tab lists weekly events before upcoming ones.
    #[must_use]
    pub fn items(&self, tab: InfoTab) -> Vec<InfoItem> {
        match tab {
            InfoTab::Deals => self.deals.iter().cloned().map(InfoItem::Deal).collect(),
            InfoTab::Policies => self.policies.iter().cloned().map(InfoItem::Policy).collect(),
            InfoTab::Alerts => self.alerts.iter().cloned().map(InfoItem::Alert).collect(),
            InfoTab::Events => {
                let mut items = self.weekly_items();
                items.extend(self.special_items());
                items
            }
        }
    }

    #[must_use]
    pub fn weekly_items(&self) -> Vec<InfoItem> {
        self.weekly_events.iter().cloned().map(InfoItem::Weekly).collect()
    }

    #[must_use]
    pub fn special_items(&self) -> Vec<InfoItem> {
        self.upcoming_events.iter().cloned().map(InfoItem::Event).collect()
    }
}

// =============================================================================
// PRESENTATION KEYS
// =============================================================================

/// CSS modifier for a weekday badge. Unknown days fall back to `neutral`.
#[must_use]
pub fn day_key(day: &str) -> &'static str {
    match day.trim().to_lowercase().as_str() {
        "monday" => "monday",
        "tuesday" => "tuesday",
        "wednesday" => "wednesday",
        "thursday" => "thursday",
        "friday" => "friday",
        "saturday" => "saturday",
        "sunday" => "sunday",
        "all days" => "all-days",
        _ => "neutral",
    }
}

/// CSS modifier for an event type badge.
#[must_use]
pub fn event_kind_key(kind: &str) -> &'static str {
    match kind.trim().to_lowercase().as_str() {
        "live music" => "live-music",
        "dj" => "dj",
        "activity" => "activity",
        _ => "neutral",
    }
}

/// Grid column class for a list of `count` cards.
#[must_use]
pub fn grid_class(count: usize) -> &'static str {
    match count {
        1 => "grid grid-1",
        2 => "grid grid-2",
        _ => "grid grid-3",
    }
}

// =============================================================================
// STATIC CONTENT
// =============================================================================

fn policy(title: &str, description: &str) -> Policy {
    Policy {
        title: title.to_owned(),
        description: description.to_owned(),
    }
}

fn weekly(day: &str, title: &str, time: &str, description: &str) -> WeeklyEvent {
    WeeklyEvent {
        day: day.to_owned(),
        title: title.to_owned(),
        time: time.to_owned(),
        description: description.to_owned(),
    }
}

fn event(id: &str, title: &str, description: &str, date: &str, time: &str, kind: &str, price: Option<&str>) -> Event {
    Event {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        date: date.to_owned(),
        time: time.to_owned(),
        kind: kind.to_owned(),
        ticketed: price.is_some(),
        price: price.map(str::to_owned),
    }
}

#[must_use]
pub fn house_policies() -> Vec<Policy> {
    vec![
        policy(
            "Student Discount",
            "Show your valid student ID to get special student prices on selected items.",
        ),
        policy(
            "Darts Borrowing",
            "Students can borrow darts by temporarily leaving their ID at the bar.",
        ),
        policy("Last Orders", "Last orders are called 30 minutes before closing time."),
        policy(
            "Dress Code",
            "Smart casual dress code applies after 8pm on Fridays and Saturdays.",
        ),
        policy(
            "Large Groups",
            "For groups of 8 or more, please book in advance to ensure seating.",
        ),
    ]
}

#[must_use]
pub fn weekly_events() -> Vec<WeeklyEvent> {
    vec![
        weekly(
            "Monday",
            "Bar One Big Quiz",
            "7:00PM - 9:00PM",
            "Test your knowledge with our weekly pub quiz. Prizes for the winners!",
        ),
        weekly(
            "Tuesday",
            "Soul Jam by Tuesday Club",
            "10:00PM - 1:00AM",
            "Join us for an evening of soulful music and great vibes with Tuesday Club's resident DJs.",
        ),
        weekly(
            "Wednesday",
            "Roar Pre-Bar",
            "10:00PM - 12:30AM",
            "Get ready for a night out with our pre-bar event featuring drink specials.",
        ),
        weekly(
            "Thursday",
            "Yo! Karaoke",
            "8:30PM - 1:00AM",
            "Show off your singing skills with our popular karaoke night.",
        ),
        weekly(
            "Friday",
            "Bar One Lates",
            "ALL DAY",
            "2 for 1 Cocktails all day long to kick off your weekend right.",
        ),
        weekly(
            "Saturday",
            "Pop Tarts Pre-Bar",
            "10:00PM - 1:00AM",
            "Dance to the best pop hits before heading out for the night.",
        ),
    ]
}

#[must_use]
pub fn upcoming_events() -> Vec<Event> {
    vec![
        event(
            "1",
            "Sheff Uni Big Band @ Beer Fest",
            "Live performance by the Sheffield University Big Band as part of our Beer Festival.",
            "Fri 2nd",
            "6:00PM - 8:00PM",
            "Live Music",
            None,
        ),
        event(
            "2",
            "DJs @ Beer Fest",
            "Various DJs spinning tunes all night long during our Beer Festival.",
            "Sat 3rd",
            "4:00PM - 1:00AM",
            "DJ",
            None,
        ),
        event(
            "3",
            "Tuesday Club Reggae Takeover @ Beer Fest",
            "Special reggae edition of our Tuesday Club taking over the Beer Festival.",
            "Sun 4th",
            "2:00PM - LATE",
            "Live Music",
            None,
        ),
        event(
            "4",
            "Offbeat Indie Night",
            "A night dedicated to the best indie tracks you don't hear everywhere else.",
            "Fri 9th",
            "9:00PM - 1:00AM",
            "DJ",
            Some("£5"),
        ),
        event(
            "5",
            "Sip & Paint",
            "Create your own masterpiece while enjoying your favorite drinks.",
            "Tue 13th",
            "7:00PM - 9:30PM",
            "Activity",
            Some("£25"),
        ),
        event(
            "6",
            "Bar One Live Lounge",
            "Intimate acoustic performances from local musicians.",
            "Tue 20th",
            "7:30PM - 10:00PM",
            "Live Music",
            None,
        ),
        event(
            "7",
            "Bar One Boogie in the Gardens",
            "Outdoor dance party with Lionel Vinyl spinning classic disco and funk.",
            "Fri 23rd",
            "5:00PM - 9:00PM",
            "DJ",
            None,
        ),
        event(
            "8",
            "Footprints in the Gardens",
            "Footprints Jazz Club presents a special outdoor jazz session in our beer garden.",
            "Sun 25th",
            "2:00PM - LATE",
            "Live Music",
            None,
        ),
    ]
}

#[must_use]
pub fn beer_festival() -> Festival {
    Festival {
        title: "BEER & CIDER FESTIVAL".to_owned(),
        dates: "FRI 2ND - SUN 5TH MAY".to_owned(),
        description: "Over 100 Beers & Ciders, Street Food, Live Music, DJs, Cocktails".to_owned(),
    }
}

/// Merge fetched deals and alerts with the static content.
///
/// `unavailable` names the collections whose fetch failed; their lists are
/// expected to be empty.
#[must_use]
pub fn build_board(deals: Vec<Deal>, alerts: Vec<InventoryAlert>, unavailable: Vec<String>) -> InformationBoard {
    InformationBoard {
        deals,
        alerts,
        policies: house_policies(),
        weekly_events: weekly_events(),
        upcoming_events: upcoming_events(),
        festival: beer_festival(),
        unavailable,
    }
}
