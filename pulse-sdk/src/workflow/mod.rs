pub mod client;

pub use client::{WorkflowClient, WorkflowReceipt};
