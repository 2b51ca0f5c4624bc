//! TripSplit - shared trip expense splitter
//!
//! This library provides the core of the TripSplit command-line tool. A
//! fixed roster of participants records shared expenses; the library works
//! out each participant's net balance and advises how to settle up.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, participants, expenses)
//! - `storage`: JSON file storage and the expense store
//! - `services`: Balance calculation, settlement advice, expense management
//! - `display`: Terminal table rendering
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the binary
//! - `logging`: Subscriber setup for `tracing`
//!
//! # Example
//!
//! ```rust,ignore
//! use tripsplit::models::{Participant, Roster};
//! use tripsplit::services::{compute_balances, advise_settlement};
//!
//! let roster = Roster::new(vec![Participant::new("A", "Andy"), Participant::new("B", "Coco")])?;
//! let sheet = compute_balances(&expenses, &roster)?;
//! let outcome = advise_settlement(&sheet)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SplitError, SplitResult};
