use serde::{Deserialize, Serialize};

/// Exchange rate between two currencies, as returned by the service.
///
/// Every field is a string on the wire; missing fields are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRate {
    /// Amount of the source currency that was converted.
    pub money: String,
    /// Display name of the target currency.
    pub to_name: String,
    /// Source currency code, for example `CNY`.
    pub from: String,
    /// Rate from the source to the target currency.
    pub exchange: String,
    /// Target currency code, for example `USD`.
    pub to: String,
    /// Display name of the source currency.
    pub from_name: String,
    /// Time the rate was last updated.
    pub updatetime: String,
}

/// Envelope of an exchange rate query response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExchangeRateResponse {
    /// The queried rate, absent on failure.
    pub data: Option<ExchangeRate>,
    /// Message from the service, the failure reason when `success` is false.
    pub msg: String,
    /// Whether the query succeeded.
    pub success: bool,
    /// Service status code.
    pub code: i64,
    /// Identifier of the query on the service side.
    pub task_no: String,
}
