//! Small helpers shared by services and adapters.

pub mod data_url;

pub use data_url::inline_base64_payload;
