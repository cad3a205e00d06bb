//! Content module: everything between the remote content API and the
//! canonical [`Article`] value
//!
//! - Issuing queries against the API
//! - Decoding the response envelope and both record shapes
//! - Normalizing records and deriving read time
//! - Providing the embedded fallback dataset

mod article;
mod client;
mod fallback;
mod normalize;
mod query;

pub use article::{
    ApiAttributes, ApiRecord, Article, ArticleEnvelope, ArticleId, FlatRecord, ImageRelation,
    RawArticle,
};
pub use client::ContentClient;
pub use fallback::{fallback_articles, fallback_records, FALLBACK_JSON};
pub use normalize::{read_time, word_count, ArticleNormalizer, WORDS_PER_MINUTE};
pub use query::{ArticleQuery, SortMode};
