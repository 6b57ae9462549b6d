//! Name resolution: human-readable names and hex oids to a concrete oid.

use git_hash::ObjectId;
use git_ref::RefName;

use crate::{RepoError, Repository};

impl Repository {
    /// Resolve `name` to an oid, trying in order: the literal ref name,
    /// `refs/<name>`, `refs/tags/<name>`, `refs/heads/<name>`. `@` is
    /// rewritten to `HEAD` first. Failing all of those, a 40-character hex
    /// string is accepted verbatim as an oid.
    pub fn resolve_name(&self, name: &str) -> Result<ObjectId, RepoError> {
        let name = if name == "@" { "HEAD" } else { name };

        for candidate in [
            name.to_string(),
            format!("refs/{name}"),
            format!("refs/tags/{name}"),
            format!("refs/heads/{name}"),
        ] {
            let Ok(ref_name) = RefName::new(candidate) else {
                continue;
            };
            if let Some(oid) = self.refs.get_oid(&ref_name, true)? {
                return Ok(oid);
            }
        }

        if ObjectId::looks_like_oid(name) {
            return Ok(ObjectId::from_hex(name)?);
        }

        Err(RepoError::UnknownName(name.to_string()))
    }
}
