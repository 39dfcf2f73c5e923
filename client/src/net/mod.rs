//! Network layer for the hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! All data comes from the server's JSON API; the browser never talks to the
//! backend directly.

pub mod api;
