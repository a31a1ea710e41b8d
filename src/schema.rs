//! Versioned metadata for the sample domain.
//!
//! The version policy for [`User`]:
//!
//! | version | `Name` | `Age` | `Contacts`                 |
//! |---------|--------|-------|----------------------------|
//! | 1       | yes    | no    | the email, as one string   |
//! | 2       | yes    | yes   | the email, as one string   |
//! | 3+      | yes    | yes   | `{ Email, PhoneNumber }`   |
//!
//! Below version 3 the contacts are flattened: [`VersionedContactsMetadata`]
//! dispatches on [`StringMetadata`] and wraps the visitor in an
//! [`AdapterVisitor`] that maps `Contacts` onto its email. Visitors written
//! against the flat schema keep working on the newer data unchanged.

use tracing::debug;
use typewalk_core::{
    compose, field, AdapterVisitor, Getter, Identity, IntMetadata, SchemaVersion, StringMetadata,
    StructMetadata, StructVisitor, TypeMetadata, TypeVisitor,
};

use crate::types::{Contacts, User};

/// The newest schema version.
pub const LATEST_VERSION: SchemaVersion = SchemaVersion::new(3);

/// Every version the schema defines, oldest first.
pub const VERSIONS: [SchemaVersion; 3] = [
    SchemaVersion::new(1),
    SchemaVersion::new(2),
    LATEST_VERSION,
];

/// Returns whether `User.Age` is part of the schema at `version`.
#[must_use]
pub fn includes_age(version: SchemaVersion) -> bool {
    version.at_least(2)
}

/// Returns whether `Contacts` is exposed as a struct at `version`.
///
/// Older versions see only the email, as a plain string.
#[must_use]
pub fn exposes_contacts_struct(version: SchemaVersion) -> bool {
    version.at_least(3)
}

/// Metadata for [`User`] at a given schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserMetadata {
    version: SchemaVersion,
}

impl UserMetadata {
    /// Metadata for `User` as it looks at `version`.
    pub fn new(version: SchemaVersion) -> Self {
        Self { version }
    }

    /// The version this metadata selects fields for.
    pub fn version(&self) -> SchemaVersion {
        self.version
    }
}

impl TypeMetadata<User> for UserMetadata {
    fn accept<P, G, V>(&self, get: G, visitor: V) -> Result<(), V::Error>
    where
        G: Getter<P, User>,
        V: TypeVisitor<P>,
    {
        visitor.visit_struct(get, self)
    }
}

impl StructMetadata<User> for UserMetadata {
    fn accept_fields<V>(&self, visitor: &mut V) -> Result<(), V::Error>
    where
        V: StructVisitor<User>,
    {
        visitor.visit_field("Name", field!(User, name: String), &StringMetadata)?;
        if includes_age(self.version) {
            visitor.visit_field("Age", field!(User, age: i32), &IntMetadata)?;
        }
        visitor.visit_field(
            "Contacts",
            field!(User, contacts: Contacts),
            &VersionedContactsMetadata::new(self.version),
        )
    }
}

/// Metadata for [`Contacts`] as a full struct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactsMetadata;

impl TypeMetadata<Contacts> for ContactsMetadata {
    fn accept<P, G, V>(&self, get: G, visitor: V) -> Result<(), V::Error>
    where
        G: Getter<P, Contacts>,
        V: TypeVisitor<P>,
    {
        visitor.visit_struct(get, self)
    }
}

impl StructMetadata<Contacts> for ContactsMetadata {
    fn accept_fields<V>(&self, visitor: &mut V) -> Result<(), V::Error>
    where
        V: StructVisitor<Contacts>,
    {
        visitor.visit_field("Email", field!(Contacts, email: String), &StringMetadata)?;
        visitor.visit_field(
            "PhoneNumber",
            field!(Contacts, phone_number: String),
            &StringMetadata,
        )
    }
}

/// Metadata for [`Contacts`] whose representation depends on the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedContactsMetadata {
    version: SchemaVersion,
}

impl VersionedContactsMetadata {
    /// Metadata for `Contacts` as it looks at `version`.
    pub fn new(version: SchemaVersion) -> Self {
        Self { version }
    }
}

impl TypeMetadata<Contacts> for VersionedContactsMetadata {
    fn accept<P, G, V>(&self, get: G, visitor: V) -> Result<(), V::Error>
    where
        G: Getter<P, Contacts>,
        V: TypeVisitor<P>,
    {
        if exposes_contacts_struct(self.version) {
            debug!(version = %self.version, "contacts exposed as struct");
            ContactsMetadata.accept(get, visitor)
        } else {
            debug!(version = %self.version, "contacts flattened to email");
            let to_email = compose(get, field!(Contacts, email: String));
            StringMetadata.accept(Identity, AdapterVisitor::<_, _, P>::new(visitor, to_email))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sample_user;
    use typewalk_core::{classify, collect_leaves, field_names, Kind, LeafValue};

    #[test]
    fn test_policy_thresholds() {
        assert!(!includes_age(SchemaVersion::new(1)));
        assert!(includes_age(SchemaVersion::new(2)));
        assert!(!exposes_contacts_struct(SchemaVersion::new(2)));
        assert!(exposes_contacts_struct(SchemaVersion::new(3)));
        assert!(exposes_contacts_struct(SchemaVersion::new(4)));
    }

    #[test]
    fn test_user_fields_per_version() {
        let fields = |v: u32| field_names(&UserMetadata::new(SchemaVersion::new(v)));
        assert_eq!(fields(1), vec!["Name", "Contacts"]);
        assert_eq!(fields(2), vec!["Name", "Age", "Contacts"]);
        assert_eq!(fields(3), vec!["Name", "Age", "Contacts"]);
    }

    #[test]
    fn test_contacts_classification_per_version() {
        for version in VERSIONS {
            let expected = if version == LATEST_VERSION {
                Kind::Struct
            } else {
                Kind::String
            };
            assert_eq!(
                classify(&VersionedContactsMetadata::new(version)),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_flattened_contacts_read_the_email() {
        let user = sample_user();
        let leaves = collect_leaves(&user, &UserMetadata::new(SchemaVersion::new(1)));
        assert_eq!(leaves.len(), 2);
        assert_eq!(leaves[1].path, "Contacts");
        assert_eq!(
            leaves[1].value,
            LeafValue::String("peter.parker@example.org".to_string())
        );
    }

    #[test]
    fn test_latest_contacts_expose_both_fields() {
        let user = sample_user();
        let leaves = collect_leaves(&user, &UserMetadata::new(LATEST_VERSION));
        let paths: Vec<&str> = leaves.iter().map(|leaf| leaf.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["Name", "Age", "Contacts.Email", "Contacts.PhoneNumber"]
        );
    }

    #[test]
    fn test_metadata_keeps_its_version() {
        assert_eq!(UserMetadata::new(LATEST_VERSION).version(), LATEST_VERSION);
    }
}
