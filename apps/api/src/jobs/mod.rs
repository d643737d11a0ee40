// Job postings: the record type, the repository the matcher reads from,
// and the listing endpoint.

pub mod handlers;
pub mod models;
pub mod repository;
