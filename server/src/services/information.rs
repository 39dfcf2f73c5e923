//! Information board assembly.
//!
//! Deals and inventory alerts are independent collections. A failure in one
//! is logged and reported through `InformationBoard::unavailable` while the
//! other still renders; static content is always present.

#[cfg(test)]
#[path = "information_test.rs"]
mod information_test;

use catalog::info::build_board;
use catalog::{Deal, InformationBoard, InventoryAlert};

use super::collections::{DAILY_DEALS, INVENTORY_ALERTS};
use crate::backend::{Backend, BackendError, Select, fetch};

fn deals_query() -> Select {
    Select::from(DAILY_DEALS).eq("is_active", true).order("day")
}

fn alerts_query() -> Select {
    Select::from(INVENTORY_ALERTS).eq("is_active", true).order_desc("start_date")
}

fn or_empty<T>(result: Result<Vec<T>, BackendError>, collection: &str, unavailable: &mut Vec<String>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(collection, error = %e, "information collection unavailable");
            unavailable.push(collection.to_owned());
            Vec::new()
        }
    }
}

/// Load active deals and alerts and merge them with the static board content.
pub async fn load_board(backend: &dyn Backend) -> InformationBoard {
    let deals_q = deals_query();
    let alerts_q = alerts_query();
    let (deals, alerts) = tokio::join!(
        fetch::<Deal>(backend, &deals_q),
        fetch::<InventoryAlert>(backend, &alerts_q),
    );
    let mut unavailable = Vec::new();
    let deals = or_empty(deals, DAILY_DEALS, &mut unavailable);
    let alerts = or_empty(alerts, INVENTORY_ALERTS, &mut unavailable);
    build_board(deals, alerts, unavailable)
}
