//! The fixed set of MultiVA validation locations shown on the globe.
//!
//! Marker data is static and immutable; the details overlay renders the
//! optional datacenter attributes of whichever marker is selected.

#[cfg(test)]
#[path = "locations_test.rs"]
mod locations_test;

/// Index of a location in [`LOCATIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(pub usize);

/// Datacenter attributes attached to a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Datacenter {
    pub id: &'static str,
    pub owner: &'static str,
    pub replica_nodes: u32,
    pub boundary_nodes: u32,
    pub total_nodes: u32,
    pub node_providers: u32,
    pub subnets: u32,
}

/// A marker location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    /// Label drawn next to the marker, e.g. `"USA (New York)"`.
    pub name: &'static str,
    /// Short country label used by the decentralization card.
    pub country: &'static str,
    pub datacenter: Option<Datacenter>,
}

pub static LOCATIONS: [Location; 5] = [
    Location {
        lat: 40.7128,
        lng: -74.0060,
        name: "USA (New York)",
        country: "USA",
        datacenter: Some(Datacenter {
            id: "ny1",
            owner: "Flexential",
            replica_nodes: 26,
            boundary_nodes: 2,
            total_nodes: 28,
            node_providers: 4,
            subnets: 3,
        }),
    },
    Location {
        lat: 52.5200,
        lng: 13.4050,
        name: "Germany (Berlin)",
        country: "Germany",
        datacenter: Some(Datacenter {
            id: "ber1",
            owner: "Equinix",
            replica_nodes: 18,
            boundary_nodes: 2,
            total_nodes: 20,
            node_providers: 3,
            subnets: 2,
        }),
    },
    Location {
        lat: 35.6895,
        lng: 139.6917,
        name: "Japan (Tokyo)",
        country: "Japan",
        datacenter: Some(Datacenter {
            id: "tyo1",
            owner: "Digital Realty",
            replica_nodes: 13,
            boundary_nodes: 1,
            total_nodes: 14,
            node_providers: 2,
            subnets: 2,
        }),
    },
    Location {
        lat: -22.9068,
        lng: -43.1729,
        name: "Brazil (Rio de Janeiro)",
        country: "Brazil",
        datacenter: None,
    },
    Location {
        lat: 28.6139,
        lng: 77.2090,
        name: "India (New Delhi)",
        country: "India",
        datacenter: Some(Datacenter {
            id: "del1",
            owner: "Yotta",
            replica_nodes: 9,
            boundary_nodes: 1,
            total_nodes: 10,
            node_providers: 2,
            subnets: 1,
        }),
    },
];

/// Every location with its id, in marker order.
pub fn all() -> impl Iterator<Item = (LocationId, &'static Location)> {
    LOCATIONS.iter().enumerate().map(|(idx, loc)| (LocationId(idx), loc))
}

/// Look up a location by id.
#[must_use]
pub fn get(id: LocationId) -> Option<&'static Location> {
    LOCATIONS.get(id.0)
}

/// Number of distinct countries covered by the markers.
#[must_use]
pub fn country_count() -> usize {
    let mut seen: Vec<&str> = Vec::with_capacity(LOCATIONS.len());
    for loc in &LOCATIONS {
        if !seen.contains(&loc.country) {
            seen.push(loc.country);
        }
    }
    seen.len()
}
