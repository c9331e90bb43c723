pub mod generator;
pub mod html;

pub use generator::{build_sitemap, run, PrerenderOptions};
