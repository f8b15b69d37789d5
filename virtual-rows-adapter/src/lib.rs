//! Adapter utilities for the `virtual-rows` crate.
//!
//! The `virtual-rows` crate is UI-agnostic and focuses on the binding window and the row pool.
//! This crate provides small, framework-neutral pieces commonly needed by adapters:
//!
//! - A headless [`ScrollView`] implementing `virtual_rows::Viewport`, with notifying and
//!   notify-free scroll writes
//! - A [`ListView`] that forwards scroll notifications to the controller
//! - Tween-based smooth scroll-to-item (optional; adapter-driven)
//! - Drag sessions that drive the controller's drag-end hook
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod list_view;
mod scroll_view;
mod tween;


pub use list_view::ListView;
pub use scroll_view::{RowElement, ScrollView};
pub use tween::{Easing, Tween};
