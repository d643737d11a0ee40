// Skill matching: catalog, extraction, scoring, and the service that ranks
// stored jobs against a resume.

pub mod catalog;
pub mod extractor;
pub mod handlers;
pub mod scorer;
pub mod service;
