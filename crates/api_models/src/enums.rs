use serde::{Deserialize, Serialize};

/// Settlement currencies the storefront can charge in.
///
/// The shop sells in the eurozone only; modeling this as an enum keeps an
/// unsupported currency unrepresentable rather than a runtime check.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Currency {
    #[default]
    Eur,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    CashOnDelivery,
}

/// How a product preview should be produced.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PreviewVariant {
    /// Render a fresh product shot from a text prompt.
    #[default]
    Generate,
    /// Edit the reference product photo, changing only the rendered name.
    Edit,
}
