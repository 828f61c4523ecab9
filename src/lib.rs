//! FieldVolt - field service job tracker for electrical technicians
//!
//! This crate records jobs, photos, parts, time logs, safety checklists,
//! and AI-assisted diagnostic notes, persisting everything to local
//! on-device JSON documents. The one external call is a Gemini-backed
//! diagnostic analysis of a technician's problem description.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases, the app store, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, JSON files, stdin dictation)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
