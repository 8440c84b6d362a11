// The listing store: the immutable dataset the whole site filters over.
// Loaded exactly once at startup, either from a configured JSON file or
// from the copy bundled into the binary, and invariant-checked before the
// server starts serving.

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::VehicleListing;

static BUNDLED_JSON: &str = include_str!("../data/cars.json");

// Parsed and validated once, shared by every load_bundled call.
static BUNDLED: Lazy<Result<Vec<VehicleListing>, InventoryError>> = Lazy::new(|| {
    let listings: Vec<VehicleListing> = serde_json::from_str(BUNDLED_JSON)
        .map_err(|e| InventoryError::Parse(e.to_string()))?;
    validate(&listings)?;
    Ok(listings)
});

#[derive(Debug, Clone, Error)]
pub enum InventoryError {
    #[error("failed to read inventory file '{path}': {reason}")]
    Read { path: String, reason: String },
    #[error("failed to parse inventory JSON: {0}")]
    Parse(String),
    #[error("listing {id} violates the dataset invariant: {reason}")]
    InvalidListing { id: u32, reason: &'static str },
}

/// Every listing must carry a non-empty make and model and a price string
/// that parses to a non-negative number. A dataset that breaks this is a
/// data bug and is rejected outright at load time.
fn validate(listings: &[VehicleListing]) -> Result<(), InventoryError> {
    for listing in listings {
        if listing.make.is_empty() {
            return Err(InventoryError::InvalidListing {
                id: listing.id,
                reason: "empty make",
            });
        }
        if listing.model.is_empty() {
            return Err(InventoryError::InvalidListing {
                id: listing.id,
                reason: "empty model",
            });
        }
        if listing.numeric_price().is_none() {
            return Err(InventoryError::InvalidListing {
                id: listing.id,
                reason: "price does not parse to a non-negative number",
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Inventory {
    listings: Vec<VehicleListing>,
}

impl Inventory {
    /// The dataset compiled into the binary.
    pub fn load_bundled() -> Result<Self, InventoryError> {
        BUNDLED.clone().map(|listings| Self { listings })
    }

    /// A dataset read from disk, for deployments that override the bundled
    /// stock list.
    pub fn from_file(path: &str) -> Result<Self, InventoryError> {
        let contents = std::fs::read_to_string(path).map_err(|e| InventoryError::Read {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        let listings: Vec<VehicleListing> =
            serde_json::from_str(json).map_err(|e| InventoryError::Parse(e.to_string()))?;
        validate(&listings)?;
        Ok(Self { listings })
    }

    #[cfg(test)]
    pub(crate) fn from_listings(listings: Vec<VehicleListing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[VehicleListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
