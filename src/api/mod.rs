pub mod dtos;
pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod router;
