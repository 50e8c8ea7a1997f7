pub mod http;

pub use http::{HttpFetcher, RetryPolicy};
