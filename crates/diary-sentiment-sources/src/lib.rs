pub mod error;
pub mod traits;
pub mod feed;
pub mod file;
pub mod factory;

pub use error::FetchError;
pub use traits::DiarySource;
pub use feed::FeedClient;
pub use file::FileSource;
pub use factory::{create_source, SourceSelection};
