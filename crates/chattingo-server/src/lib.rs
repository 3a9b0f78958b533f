// Library exports for chattingo-server
pub mod api;

pub use api::create_router;
