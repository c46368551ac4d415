pub mod article;

pub use article::{document_to_json, ARTICLES_COLLECTION, PUBLICATION_DATE};
