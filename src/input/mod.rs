//! Input adapters for the explorer.
//!
//! Each adapter receives input from one source and turns it into calls on
//! the interactive session.

pub mod gui;
