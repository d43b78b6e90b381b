#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod command;
pub mod config;
pub mod error;
pub mod network;
pub mod registration;
pub mod state;
pub mod timer;
mod urc_handler;

#[cfg(test)]
mod test_helpers;

pub use atat;
pub use network::Network;
