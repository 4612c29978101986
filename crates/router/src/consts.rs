/// Product this storefront sells; denormalized into payment metadata and
/// order records for later reconciliation.
pub(crate) const PRODUCT_NAME: &str = "Porta-Dardos Diana";

/// Placeholder recorded when the customer leaves the personalization empty.
pub(crate) const DEFAULT_PERSONALIZATION: &str = "Sin personalización";

/// Prefix of cash-on-delivery order references.
pub(crate) const ORDER_ID_PREFIX: &str = "COD";

pub(crate) const NO_ERROR_CODE: &str = "No error code";
pub(crate) const NO_ERROR_MESSAGE: &str = "No error message";

pub(crate) const BASE64_ENGINE: base64::engine::GeneralPurpose =
    base64::engine::general_purpose::STANDARD;
