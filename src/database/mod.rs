pub mod client;
pub mod doc_collection;
