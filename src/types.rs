//! Sample domain types visited by the demo.
//!
//! These are plain data. Their shape is described separately, in
//! [`crate::schema`], so nothing here knows about visitors.

use serde::{Deserialize, Serialize};

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub age: i32,
    pub contacts: Contacts,
}

/// Contact details of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contacts {
    pub email: String,
    pub phone_number: String,
}

/// The user every demo run starts from unless another is loaded.
pub fn sample_user() -> User {
    User {
        name: "Peter Parker".to_string(),
        age: 28,
        contacts: Contacts {
            email: "peter.parker@example.org".to_string(),
            phone_number: "+1 (311) 555-2368".to_string(),
        },
    }
}
