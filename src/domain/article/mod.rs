// src/domain/article/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;
pub mod version;

pub use entity::{Article, ArticleListing, ArticleUpdate, NewArticle};
pub use repository::{
    ArticleFilter, ArticleReadRepository, ArticleVersionRepository, ArticleWriteRepository,
    NewArticleVersion,
};
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle};
pub use version::{ArticleVersion, ArticleVersionListing};
