//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, cards, dialogs and charts. Pages own the
//! state signals and pass plain values or callbacks down.

pub mod charts;
pub mod detail_dialog;
pub mod festival_banner;
pub mod filter_sheet;
pub mod footer;
pub mod info_card;
pub mod menu_card;
pub mod navbar;
pub mod notice;
pub mod recipe_card;
pub mod seating_canvas;
pub mod tab_bar;
pub mod table_dialog;
