//! Mapping from the external identity provider's output onto the data model.
//!
//! Authentication itself is an external collaborator: this crate trusts the
//! `{id, name, email, role}` it is handed and performs no authorization.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::{Address, Person};

/// The three actor roles of the system.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    Sender,
    Receiver,
    PostOffice,
}

/// What the identity provider supplies for the current actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// An address with every field empty, marking a person derived from an
/// authenticated identity rather than an address form.
pub fn placeholder_address() -> Address {
    Address::default()
}

/// Map an authenticated identity to a [`Person`].
///
/// The identity provider carries no postal data, so the resulting person gets
/// [`placeholder_address`] and an empty phone. Downstream consumers must not
/// treat these placeholder fields as real contact data; a deliverable address
/// only exists once the person is registered through the address form path.
pub fn person_from_identity(identity: &Identity) -> Person {
    Person {
        id: identity.id.clone(),
        name: identity.name.clone(),
        email: identity.email.clone(),
        phone: String::new(),
        address: placeholder_address(),
    }
}
