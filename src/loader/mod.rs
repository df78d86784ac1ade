//! Discovery and parsing of asset documents

mod document;
mod file_scanner;

pub use document::{Document, DocumentFormat, Payload, json_type_name};
pub use file_scanner::FileScanner;
