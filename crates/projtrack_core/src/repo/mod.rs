//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for reporting.
//! - Isolate SQLite query details from service/CLI orchestration.
//!
//! # Invariants
//! - Repositories only accept connections with fully applied migrations.
//! - Repository reads are stateless with respect to one another; the current
//!   date is always an explicit parameter.

pub mod report_repo;
