pub mod admin_docs;
pub mod application_docs;
pub mod cat_docs;
pub mod favorite_docs;
pub mod session_docs;
