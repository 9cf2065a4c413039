//! Citation formatting for Hospitium RIS manuscripts.
//!
//! This crate takes:
//! - [`CitationRecord`]s fetched for a manuscript by the data-access layer
//! - A [`CitationConfig`] (style, ordering, source selection)
//!
//! And produces either one inline citation string or an assembled
//! bibliography as plain text.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  processor      filter by selection, stable sort                 │
//! └───────────────────────────────┬──────────────────────────────────┘
//!                                 ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  format         per-style inline / bibliography rendering        │
//! │    names          author names and author lists                  │
//! │    clause         optional venue clauses                         │
//! └───────────────────────────────┬──────────────────────────────────┘
//!                                 ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  bibliography   header + entries                                 │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything in the pipeline is pure apart from the MLA access date, which
//! is read from a [`Clock`].
//!
//! # Example
//!
//! ```rust,ignore
//! use hospitium_cite::{CitationConfig, CitationRecord, SystemClock, render_bibliography};
//!
//! let records = CitationRecord::from_json_str(json)?;
//! let config = CitationConfig::from_yaml_str("citationStyle: MLA")?;
//! let text = render_bibliography(&records, &config, &SystemClock)?;
//! ```

pub mod bibliography;
pub mod clause;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod names;
pub mod processor;
pub mod record;
pub mod style;

pub use bibliography::{assemble, render_bibliography};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CitationConfig;
pub use error::{Error, Result};
pub use format::{format, format_inline_for, format_with_clock};
pub use processor::{ProcessConfig, SortOrder, process};
pub use record::CitationRecord;
pub use style::{CitationStyle, FormatMode};
