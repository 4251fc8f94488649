// src/domain/article/specifications.rs
use std::collections::HashSet;

use crate::domain::access::{OwnedResourceSpec, has_capability};
use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Capability, UserId};

pub struct CanUpdateArticleSpec<'a> {
    inner: OwnedResourceSpec<'a>,
}

impl<'a> CanUpdateArticleSpec<'a> {
    pub const fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            inner: OwnedResourceSpec::new(capabilities, "articles", "update", article.author_id, user_id),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.inner.is_satisfied()
    }
}

pub struct CanDeleteArticleSpec<'a> {
    inner: OwnedResourceSpec<'a>,
}

impl<'a> CanDeleteArticleSpec<'a> {
    pub const fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            inner: OwnedResourceSpec::new(capabilities, "articles", "delete", article.author_id, user_id),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.inner.is_satisfied()
    }
}

/// Approved articles are public. Pending ones are visible to their author
/// and to holders of `articles:view:pending`.
pub struct CanViewArticleSpec<'a> {
    article: &'a Article,
    viewer: Option<(&'a HashSet<Capability>, UserId)>,
}

impl<'a> CanViewArticleSpec<'a> {
    pub const fn new(article: &'a Article, viewer: Option<(&'a HashSet<Capability>, UserId)>) -> Self {
        Self { article, viewer }
    }

    pub fn is_satisfied(&self) -> bool {
        if self.article.approved {
            return true;
        }
        self.viewer.is_some_and(|(capabilities, id)| {
            id == self.article.author_id || has_capability(capabilities, "articles", "view:pending")
        })
    }
}
