pub mod compression;
pub mod cors;

pub use compression::create_compression_middleware;
pub use cors::create_cors_middleware;
