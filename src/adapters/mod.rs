//! Adapters: outer ring of the hexagonal architecture.
//!
//! Implements the port traits from [`crate::app::ports`] for the concrete
//! drivers in [`crate::drivers`].

pub mod hardware;
