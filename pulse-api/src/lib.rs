pub mod config;
pub mod dispatcher;
pub mod form;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod routes;

pub use dispatcher::FeedbackDispatcher;
