pub mod doc_collection;
