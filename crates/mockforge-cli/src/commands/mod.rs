pub mod download;
pub mod mock;
