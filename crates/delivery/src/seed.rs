//! Demo data for the coordination demo: three persons, three parcels in the
//! three lifecycle states, and acceptance history for each receiver. Applied
//! through the public store operations so every invariant holds.

use chrono::Utc;

use crate::error::DeliveryError;
use crate::recommend::next_occurrence;
use crate::slots::slot_at;
use crate::store::{DeliveryStore, NewParcel};
use crate::types::{Address, Dimensions, ParcelStatus, Person};

fn demo_person(id: &str, name: &str, phone: &str, address: Address) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.split(' ').next().unwrap_or(id).to_lowercase()),
        phone: phone.to_string(),
        address,
    }
}

fn demo_address(street: &str, city: &str, state: &str, postal_code: &str) -> Address {
    Address {
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        postal_code: postal_code.to_string(),
        country: "USA".to_string(),
    }
}

/// Populate an empty store with the demo dataset.
pub fn seed_demo_data(store: &mut DeliveryStore) -> Result<(), DeliveryError> {
    let john = demo_person(
        "user1",
        "John Doe",
        "555-1234",
        demo_address("123 Main St", "New York", "NY", "10001"),
    );
    let jane = demo_person(
        "user2",
        "Jane Smith",
        "555-5678",
        demo_address("456 Elm St", "Boston", "MA", "02108"),
    );
    let robert = demo_person(
        "user3",
        "Robert Johnson",
        "555-9012",
        demo_address("789 Oak St", "Chicago", "IL", "60007"),
    );
    for person in [&john, &jane, &robert] {
        store.add_person(person.clone())?;
    }

    // Acceptance history per receiver: (weekday 0=Sunday, hour, count).
    let history: &[(&str, &[(u32, u32, u32)])] = &[
        ("user1", &[(1, 10, 5), (3, 14, 8), (5, 16, 3)]),
        ("user2", &[(2, 9, 7), (4, 13, 4), (6, 11, 6)]),
        ("user3", &[(1, 15, 2), (2, 17, 9), (5, 10, 4)]),
    ];
    for (receiver, tuples) in history {
        for (weekday, hour, count) in tuples.iter() {
            store.add_preference_history(receiver, *weekday, *hour, *count)?;
        }
    }

    let pending = store.create_parcel(NewParcel {
        sender: john.clone(),
        receiver: jane.clone(),
        weight: 2.5,
        dimensions: Dimensions {
            length: 10.0,
            width: 15.0,
            height: 5.0,
        },
        description: "Books and documents".to_string(),
    })?;
    tracing::debug!(parcel_id = %pending.id, "seeded pending parcel");

    let in_transit = store.create_parcel(NewParcel {
        sender: jane.clone(),
        receiver: robert.clone(),
        weight: 5.2,
        dimensions: Dimensions {
            length: 20.0,
            width: 25.0,
            height: 15.0,
        },
        description: "Electronic equipment".to_string(),
    })?;
    store.set_status(&in_transit.id, ParcelStatus::InTransit)?;

    let delivered = store.create_parcel(NewParcel {
        sender: robert,
        receiver: john,
        weight: 1.1,
        dimensions: Dimensions {
            length: 8.0,
            width: 10.0,
            height: 3.0,
        },
        description: "Clothing items".to_string(),
    })?;
    // Accepted a Wednesday 14-16 window, then ran through the full chain.
    let today = Utc::now().date_naive();
    if let Some(slot) = slot_at(next_occurrence(today, 3), 14) {
        store.assign_delivery_slot(&delivered.id, slot)?;
    }
    store.set_status(&delivered.id, ParcelStatus::InTransit)?;
    store.set_status(&delivered.id, ParcelStatus::Delivered)?;

    tracing::info!(
        persons = store.persons().len(),
        parcels = store.parcels().len(),
        "demo data seeded"
    );
    Ok(())
}
