pub mod request;
pub mod store;
