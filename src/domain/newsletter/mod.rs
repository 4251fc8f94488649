// src/domain/newsletter/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewNewsletter, Newsletter, NewsletterRecord, NewsletterUpdate};
pub use repository::{NewsletterReadRepository, NewsletterWriteRepository};
pub use value_objects::{NewsletterDescription, NewsletterId, NewsletterTitle};
