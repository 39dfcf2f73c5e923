//! Per-page view state.
//!
//! DESIGN
//! ======
//! Each data page owns one plain state struct held in an `RwSignal`. Fetch
//! lifecycle, tab selection and the open dialog live here; deciding what to
//! render from that state is a pure function so it can be tested natively.

pub mod bar_map;
pub mod information;
pub mod menu;
pub mod recipes;
pub mod stats;

/// What a collection page should render right now.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView<T> {
    Loading,
    Failed(String),
    /// The backend returned nothing at all.
    Empty,
    /// Records exist but the active criteria exclude all of them.
    NoMatches,
    Ready(Vec<T>),
}

impl<T> ListView<T> {
    /// Pick the view for a page given its fetch state, the full collection
    /// size and the records surviving the active criteria.
    #[must_use]
    pub fn resolve(loading: bool, error: Option<&str>, total: usize, visible: Vec<T>) -> Self {
        if loading {
            Self::Loading
        } else if let Some(error) = error {
            Self::Failed(error.to_owned())
        } else if total == 0 {
            Self::Empty
        } else if visible.is_empty() {
            Self::NoMatches
        } else {
            Self::Ready(visible)
        }
    }
}
