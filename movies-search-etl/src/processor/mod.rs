//! Processor module for the movies indexing pipeline.
//!
//! Transforms source rows into search documents.

mod movie_processor;
mod person;
mod sentinel;
mod writer_field;

pub use movie_processor::{MovieProcessor, TransformBatch};
pub use person::PersonTable;
pub use sentinel::{normalize_sentinel, NOT_AVAILABLE};
pub use writer_field::{parse_id_list, WriterField};
