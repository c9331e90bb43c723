mod api_routes;
mod server;

pub use api_routes::api_routes;
pub use server::WebUI;
