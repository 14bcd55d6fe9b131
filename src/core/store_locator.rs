//! Store listings shown by the store-locator panel, and the local text
//! filter over them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: String,
}

impl Store {
    fn new(id: &str, name: &str, address: &str, status: &str, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            status: status.to_string(),
            image: image.to_string(),
        }
    }

    /// Case-insensitive substring match over name and address.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.address.to_lowercase().contains(&needle)
    }
}

/// Listings used when the content document does not supply `stores`.
pub fn default_stores() -> Vec<Store> {
    vec![
        Store::new(
            "1",
            "Apple Broadway Plaza",
            "1200 S. Main Street, Walnut Creek, CA 94596",
            "Opens at 10:00 a.m.",
            "R014.png",
        ),
        Store::new(
            "2",
            "Apple Cherry Creek",
            "3000 E 1st Avenue, Denver, CO 80206",
            "Opens at 10:00 a.m.",
            "R047.png",
        ),
        Store::new(
            "3",
            "Apple Chandler Fashion Center",
            "3111 W Chandler Boulevard, Chandler, AZ 85226",
            "Opens at 10:00 a.m.",
            "R026.png",
        ),
    ]
}

/// Stores matching `query`, in listing order. A blank query matches all.
pub fn filter_stores<'a>(stores: &'a [Store], query: &str) -> Vec<&'a Store> {
    stores.iter().filter(|store| store.matches(query)).collect()
}
