//! Listing data extracted from a Property response.

use serde::{Deserialize, Serialize};

use crate::extract::{ExtractError, FieldReader};

/// The subset of Property fields this crate reads from the listing API.
///
/// Created fresh per invocation and discarded after encoding. Individual
/// fields are optional because the API omits fields per listing and each
/// encoding only requires its own subset; the typed views below turn a
/// missing required field into an explicit error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Street address as served (`UnparsedAddress`).
    pub address: Option<String>,

    /// Construction year (`YearBuilt`).
    pub year_built: Option<u64>,

    /// Lot size in square feet (`LotSizeSquareFeet`).
    pub lot_size_square_feet: Option<u64>,

    /// Interior living area in square feet (`LivingArea`).
    pub living_area: Option<u64>,

    /// Bedroom count (`BedroomsTotal`).
    pub bedrooms_total: Option<u64>,

    /// Current list price (`ListPrice`).
    pub list_price: Option<u64>,

    /// Original list price (`OriginalListPrice`).
    pub original_list_price: Option<u64>,

    /// Tax-assessed value (`TaxAssessedValue`).
    pub tax_assessed_value: Option<u64>,
}

impl ListingRecord {
    /// Extracts the record from a parsed Property response body.
    ///
    /// Absent fields stay `None`; a field that is present but fails its
    /// typed parse is an error.
    pub fn from_response(body: &serde_json::Value) -> Result<Self, ExtractError> {
        let fields = FieldReader::new(body)?;

        Ok(Self {
            address: fields.string("UnparsedAddress")?,
            year_built: fields.uint("YearBuilt")?,
            lot_size_square_feet: fields.uint("LotSizeSquareFeet")?,
            living_area: fields.uint("LivingArea")?,
            bedrooms_total: fields.uint("BedroomsTotal")?,
            list_price: fields.uint("ListPrice")?,
            original_list_price: fields.uint("OriginalListPrice")?,
            tax_assessed_value: fields.uint("TaxAssessedValue")?,
        })
    }
}

fn require<T>(field: Option<T>, name: &str) -> Result<T, ExtractError> {
    field.ok_or_else(|| ExtractError::MissingField(name.to_string()))
}

/// The listing fields backing the metadata encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFields {
    /// Street address of the listing.
    pub address: String,
    /// Construction year.
    pub year_built: u64,
    /// Lot size in square feet.
    pub lot_size_square_feet: u64,
    /// Interior living area in square feet.
    pub living_area: u64,
    /// Bedroom count.
    pub bedrooms_total: u64,
}

impl TryFrom<&ListingRecord> for MetadataFields {
    type Error = ExtractError;

    fn try_from(record: &ListingRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            address: require(record.address.clone(), "UnparsedAddress")?,
            year_built: require(record.year_built, "YearBuilt")?,
            lot_size_square_feet: require(record.lot_size_square_feet, "LotSizeSquareFeet")?,
            living_area: require(record.living_area, "LivingArea")?,
            bedrooms_total: require(record.bedrooms_total, "BedroomsTotal")?,
        })
    }
}

/// The price fields backing the valuation tuple encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuationFields {
    /// Current list price.
    pub list_price: u64,
    /// Original list price.
    pub original_list_price: u64,
    /// Tax-assessed value.
    pub tax_assessed_value: u64,
}

impl TryFrom<&ListingRecord> for ValuationFields {
    type Error = ExtractError;

    fn try_from(record: &ListingRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            list_price: require(record.list_price, "ListPrice")?,
            original_list_price: require(record.original_list_price, "OriginalListPrice")?,
            tax_assessed_value: require(record.tax_assessed_value, "TaxAssessedValue")?,
        })
    }
}
