//! Static site builder for the errror site.
//!
//! Renders registered page templates inside a shared base layout and copies
//! the static assets next to them.

pub mod assets;
pub mod builder;
pub mod compose;
pub mod discover;
pub mod error;
pub mod registry;
pub mod render;

pub use assets::{copy_assets, AssetError};
pub use builder::{BuildConfig, BuildResult, SkippedPage, StaticBuilder};
pub use compose::{BaseLayout, ComposedTemplate, BASE_TEMPLATE, PAGE_TEMPLATE};
pub use discover::{discover_pages, DiscoveredPage, Discovery};
pub use error::{BuildError, PageError};
pub use registry::{PageConfig, PageRegistry};
pub use render::Renderer;
