//! A headless controller for virtualized lists of fixed-height rows.
//!
//! The controller keeps a small, bounded set of reusable row instances bound to the slice of a
//! large collection that intersects the viewport, and updates it incrementally as the viewport
//! scrolls or resizes:
//! - index ↔ pixel mapping for fixed-height rows
//! - minimal-churn reconciliation: rows scrolled out of one end of the window move to the
//!   other end instead of being destroyed
//! - a bounded recycling pool for row instances
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide a [`Viewport`] (content height,
//! padding, notify-free scroll writes, row binding) and to forward resize/scroll events.
//!
//! For a headless scroll view, smooth scroll-to-item and drag sessions, see the
//! `virtual-rows-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod options;
mod pixel;
mod pool;
mod state;
mod types;
mod viewport;


pub use controller::VirtualizationController;
pub use options::{ControllerOptions, DEFAULT_OVERSCAN, ItemHeightResolver};
pub use pixel::pixel_align;
pub use pool::{CreateFn, DEFAULT_POOL_LIMIT, LinkedSlot, PoolIter, RecyclingPool, ResetFn};
pub use state::{FrameState, ScrollState, ViewportState};
pub use types::{Row, RowId, ScrollTarget};
pub use viewport::Viewport;
