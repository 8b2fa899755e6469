pub mod crawler;
pub mod error;
pub mod extract;
pub mod markup;
pub mod rank;
pub mod score;
pub mod scorer;
pub mod store;

pub use crawler::Crawler;
pub use error::SiftError;
pub use markup::MarkupView;
pub use score::{PageScore, ScoredDocument};
pub use store::{DocumentSource, DocumentStore, FsStore, HttpStore};
