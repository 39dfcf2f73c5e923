//! Field selection for detail dialogs.
//!
//! Each browser opens one modal for the selected record. The modal layout is
//! shared; what varies per record kind is which fields appear, in what order
//! and with which labels. That selection lives here so it is testable without
//! a DOM.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::info::{InfoItem, day_key, event_kind_key};
use crate::model::{MenuItem, Recipe};

/// Format a price in pounds with two decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("£{price:.2}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Tag,
    Warning,
    /// Weekday badge; carries the CSS modifier from [`day_key`].
    Day(&'static str),
    /// Event type badge; carries the CSS modifier from [`event_kind_key`].
    Kind(&'static str),
    Count,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: BadgeTone,
}

impl Badge {
    fn new(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }

    /// CSS class for the badge.
    #[must_use]
    pub fn class(&self) -> String {
        match self.tone {
            BadgeTone::Tag => "badge badge-tag".to_owned(),
            BadgeTone::Warning => "badge badge-warning".to_owned(),
            BadgeTone::Count => "badge badge-count".to_owned(),
            BadgeTone::Day(key) => format!("badge badge-day-{key}"),
            BadgeTone::Kind(key) => format!("badge badge-kind-{key}"),
        }
    }
}

/// A headed list inside a dialog, such as ingredients or method steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: &'static str,
    /// Right-aligned count, e.g. "3 items".
    pub summary: String,
    pub entries: Vec<String>,
    pub ordered: bool,
}

/// Everything a detail dialog renders for one record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailView {
    pub title: String,
    pub description: String,
    pub rows: Vec<DetailRow>,
    pub sections: Vec<DetailSection>,
    pub badges: Vec<Badge>,
}

impl DetailView {
    fn row(&mut self, label: &'static str, value: impl Into<String>) {
        self.rows.push(DetailRow {
            label,
            value: value.into(),
        });
    }

    fn tags(&mut self, tags: &[String]) {
        self.badges.extend(tags.iter().map(|t| Badge::new(t.clone(), BadgeTone::Tag)));
    }
}

#[must_use]
pub fn menu_item_detail(item: &MenuItem) -> DetailView {
    let mut view = DetailView {
        title: item.name.clone(),
        description: item.description.clone(),
        ..Default::default()
    };
    view.row("Price", format_price(item.price));
    if let Some(student) = item.student_price {
        view.row("Student", format_price(student));
    }
    view.tags(&item.tags);
    if !item.is_available {
        view.badges.push(Badge::new("Out of Stock", BadgeTone::Warning));
    }
    view
}

#[must_use]
pub fn recipe_detail(recipe: &Recipe) -> DetailView {
    let mut view = DetailView {
        title: recipe.menu_item.name.clone(),
        description: recipe.menu_item.description.clone(),
        ..Default::default()
    };
    view.sections.push(DetailSection {
        heading: "Ingredients",
        summary: format!("{} items", recipe.ingredients.len()),
        entries: recipe.ingredients.clone(),
        ordered: false,
    });
    view.sections.push(DetailSection {
        heading: "Instructions",
        summary: format!("{} steps", recipe.instructions.len()),
        entries: recipe.instructions.clone(),
        ordered: true,
    });
    if let Some(glass) = recipe.glass_type.as_deref().filter(|g| !g.is_empty()) {
        view.row("Glass", glass);
    }
    if let Some(garnish) = recipe.garnish.as_deref().filter(|g| !g.is_empty()) {
        view.row("Garnish", garnish);
    }
    view.tags(&recipe.menu_item.tags);
    view
}

/// Card footer badge counting a recipe's ingredients.
#[must_use]
pub fn ingredient_badge(recipe: &Recipe) -> Badge {
    Badge::new(format!("{} ingredients", recipe.ingredients.len()), BadgeTone::Count)
}

#[must_use]
pub fn info_detail(item: &InfoItem) -> DetailView {
    let mut view = DetailView {
        title: item.title().to_owned(),
        description: item.description().to_owned(),
        ..Default::default()
    };
    if let Some(time) = item.time() {
        view.row("Time", time);
    }
    match item {
        InfoItem::Alert(alert) => {
            view.row("From", alert.start_date.clone());
            if let Some(end) = alert.end_date.as_deref().filter(|e| !e.is_empty()) {
                view.row("To", end);
            }
        }
        InfoItem::Event(event) => {
            view.row("Date", event.date.clone());
            view.badges.push(Badge::new(event.kind.clone(), BadgeTone::Kind(event_kind_key(&event.kind))));
            if event.ticketed {
                view.row("Tickets", event.price.clone().unwrap_or_else(|| "Ticketed Event".to_owned()));
            }
        }
        InfoItem::Deal(_) | InfoItem::Weekly(_) | InfoItem::Policy(_) => {}
    }
    if let Some(day) = item.day() {
        view.badges.push(Badge::new(day, BadgeTone::Day(day_key(day))));
    }
    view
}
