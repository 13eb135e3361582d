//! Stopword-filtered word-frequency counting with CSV report output.
//!
//! The pipeline is linear: build a [`StopwordSet`] from a stopword source,
//! run [`freq::count_words`] over the input stream, then render the table
//! with [`report::write_report`] in either the plain or the tagul.com
//! schema.

pub mod freq;
pub mod report;
pub mod stopwords;
pub mod tokenizer;

pub use freq::WordCounts;
pub use report::{ReportStyle, Rgb};
pub use stopwords::StopwordSet;
