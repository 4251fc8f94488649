// src/domain/newsletter/specifications.rs
use std::collections::HashSet;

use crate::domain::access::OwnedResourceSpec;
use crate::domain::newsletter::entity::Newsletter;
use crate::domain::user::value_objects::{Capability, UserId};

pub struct CanUpdateNewsletterSpec<'a> {
    inner: OwnedResourceSpec<'a>,
}

impl<'a> CanUpdateNewsletterSpec<'a> {
    pub const fn new(
        capabilities: &'a HashSet<Capability>,
        newsletter: &'a Newsletter,
        user_id: UserId,
    ) -> Self {
        Self {
            inner: OwnedResourceSpec::new(
                capabilities,
                "newsletters",
                "update",
                newsletter.author_id,
                user_id,
            ),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.inner.is_satisfied()
    }
}

pub struct CanDeleteNewsletterSpec<'a> {
    inner: OwnedResourceSpec<'a>,
}

impl<'a> CanDeleteNewsletterSpec<'a> {
    pub const fn new(
        capabilities: &'a HashSet<Capability>,
        newsletter: &'a Newsletter,
        user_id: UserId,
    ) -> Self {
        Self {
            inner: OwnedResourceSpec::new(
                capabilities,
                "newsletters",
                "delete",
                newsletter.author_id,
                user_id,
            ),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.inner.is_satisfied()
    }
}
