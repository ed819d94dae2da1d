pub mod assessment;
pub mod auth;
pub mod insights;
pub mod instrument;
pub mod journal;
pub mod models;
pub mod mood;
pub mod therapy;
