//! Adapter utilities for the `grid-table` crate.
//!
//! `grid-table` is UI-agnostic and covers layout, windowing and scroll sync. This crate adds
//! small, framework-neutral helpers that UI bindings commonly need:
//!
//! - scroll anchoring by row key, so replacing or prepending data does not make content jump;
//! - tween-driven smooth scrolling, advanced from the adapter's frame loop.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod tween;


pub use anchor::{ScrollAnchor, apply_anchor, capture_anchor_at, capture_first_visible_anchor};
pub use controller::TableController;
pub use tween::{Easing, Tween};
