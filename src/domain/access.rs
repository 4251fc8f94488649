// src/domain/access.rs
use std::collections::HashSet;

use crate::domain::user::value_objects::{Capability, UserId};

pub fn has_capability(capabilities: &HashSet<Capability>, resource: &str, action: &str) -> bool {
    capabilities
        .iter()
        .any(|cap| cap.matches(resource, action))
}

/// Grants `verb` on an authored resource when the actor holds `verb:any`, or
/// holds `verb:own` and wrote the resource.
pub struct OwnedResourceSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    resource: &'static str,
    verb: &'static str,
    owner: UserId,
    actor: UserId,
}

impl<'a> OwnedResourceSpec<'a> {
    pub const fn new(
        capabilities: &'a HashSet<Capability>,
        resource: &'static str,
        verb: &'static str,
        owner: UserId,
        actor: UserId,
    ) -> Self {
        Self {
            capabilities,
            resource,
            verb,
            owner,
            actor,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        let any = format!("{}:any", self.verb);
        let own = format!("{}:own", self.verb);
        has_capability(self.capabilities, self.resource, &any)
            || (has_capability(self.capabilities, self.resource, &own) && self.owner == self.actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Role;

    #[test]
    fn own_capability_requires_ownership() {
        let caps = Role::Journalist.default_capabilities();
        let author = UserId(1);
        let other = UserId(2);
        assert!(OwnedResourceSpec::new(&caps, "articles", "update", author, author).is_satisfied());
        assert!(!OwnedResourceSpec::new(&caps, "articles", "update", other, author).is_satisfied());
    }

    #[test]
    fn any_capability_ignores_ownership() {
        let caps = Role::Editor.default_capabilities();
        assert!(
            OwnedResourceSpec::new(&caps, "newsletters", "delete", UserId(7), UserId(3))
                .is_satisfied()
        );
    }

    #[test]
    fn readers_are_never_owners() {
        let caps = Role::Reader.default_capabilities();
        assert!(!OwnedResourceSpec::new(&caps, "articles", "delete", UserId(1), UserId(1)).is_satisfied());
    }
}
