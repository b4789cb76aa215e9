pub mod auth;
pub mod data_source;
pub mod facade;
pub mod fixtures;
pub mod live;
pub mod mock;
