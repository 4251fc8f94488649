// src/domain/article/mod.rs
pub mod entity;
pub mod events;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleRecord, ArticleUpdate, NewArticle};
pub use events::ArticleEvent;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
