//! The fetch-transform-encode pipeline.
//!
//! One run per invocation: fetch the Property record, extract the fields
//! the request's encoding needs, encode, and hand back the payload together
//! with the diagnostic lines a terminal harness would capture.

use alloy::{dyn_abi::DynSolValue, primitives::U256};
use thiserror::Error;

use crate::{
    encoder::{self, EncodeError, EncodedResult, TupleEncoder},
    extract::ExtractError,
    models::{EncodingKind, ListingRecord, MetadataFields, RequestConfig, ValuationFields},
    providers::traits::{DataSourceError, ListingDataSource},
};

/// Declared type list for the valuation tuple:
/// `(tokenId, listPrice, originalListPrice, taxAssessedValue)`.
const VALUATION_TUPLE_TYPES: [&str; 4] = ["uint256", "uint256", "uint256", "uint256"];

/// Errors that can abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The listing fetch failed.
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),

    /// Field extraction failed.
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Payload encoding failed.
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// A tuple request needs `args[0]` as its token id.
    #[error("Tuple request is missing its token id argument")]
    MissingTokenId,

    /// `args[0]` did not parse as an unsigned integer.
    #[error("Invalid token id argument: {0:?}")]
    InvalidTokenId(String),
}

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The encoded payload for the execution harness.
    pub result: EncodedResult,
    /// Diagnostic lines the run prints to the terminal.
    pub logs: Vec<String>,
}

/// One fetch-transform-encode pass over a Property record.
pub struct Pipeline<D> {
    source: D,
    property_id: String,
}

impl<D: ListingDataSource> Pipeline<D> {
    /// Creates a pipeline over the given data source and Property id.
    pub fn new(source: D, property_id: impl Into<String>) -> Self {
        Self { source, property_id: property_id.into() }
    }

    /// Runs the request end to end.
    #[tracing::instrument(skip(self, request), fields(request = %request.name), level = "info")]
    pub async fn run(&self, request: &RequestConfig) -> Result<RunOutput, PipelineError> {
        let body = self.source.fetch_listing(&self.property_id).await?;
        let record = ListingRecord::from_response(&body)?;

        match request.encoding {
            EncodingKind::Metadata => self.encode_metadata(&record),
            EncodingKind::Tuple => self.encode_valuation(&record, request),
        }
    }

    fn encode_metadata(&self, record: &ListingRecord) -> Result<RunOutput, PipelineError> {
        let fields = MetadataFields::try_from(record)?;
        let encoded = encoder::encode_metadata(&fields)?;

        tracing::debug!(cid = %encoded.cid, "Derived metadata content identifier.");
        let logs = vec![encoded.cid.clone()];

        Ok(RunOutput { result: EncodedResult::Text(encoded.uri), logs })
    }

    fn encode_valuation(
        &self,
        record: &ListingRecord,
        request: &RequestConfig,
    ) -> Result<RunOutput, PipelineError> {
        let raw_token_id = request.args.first().ok_or(PipelineError::MissingTokenId)?;
        let token_id: U256 = raw_token_id
            .parse()
            .map_err(|_| PipelineError::InvalidTokenId(raw_token_id.clone()))?;

        let fields = ValuationFields::try_from(record)?;
        let logs = vec![
            format!("List Price: {}", fields.list_price),
            format!("Original List Price: {}", fields.original_list_price),
            format!("Tax Assessed Value: {}", fields.tax_assessed_value),
        ];

        let tuple = TupleEncoder::parse(&VALUATION_TUPLE_TYPES)?;
        let values = [
            DynSolValue::Uint(token_id, 256),
            DynSolValue::Uint(U256::from(fields.list_price), 256),
            DynSolValue::Uint(U256::from(fields.original_list_price), 256),
            DynSolValue::Uint(U256::from(fields.tax_assessed_value), 256),
        ];
        let bytes = tuple.encode(&values)?;

        tracing::debug!(len = bytes.len(), "Encoded valuation tuple.");

        Ok(RunOutput { result: EncodedResult::Bytes(bytes), logs })
    }
}
