//! Seating-map engine for the bar floor plan.
//!
//! This crate owns everything about the bar map that is not DOM plumbing:
//! generating the table layout for each location, the pan/zoom camera, the
//! drag gesture state machine and table selection. The host UI forwards
//! pointer and button events to [`engine::EngineCore`] and re-renders from
//! the [`engine::Action`] it returns. Nothing here touches the browser, so
//! the whole interaction model is tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] and the actions it emits |
//! | [`layout`] | Tables, locations, landmarks and seeded generation |
//! | [`camera`] | Pan/zoom camera and the CSS transform it produces |
//! | [`input`] | The drag gesture state machine |
//! | [`consts`] | Zoom limits, canvas sizes and availability odds |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod input;
pub mod layout;
