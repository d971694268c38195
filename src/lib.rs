//! Real-time chat relay library.
//!
//! This library implements a WebSocket chat relay server: clients announce an
//! identity, join named rooms, exchange group and private messages and receive
//! transient typing notifications.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
