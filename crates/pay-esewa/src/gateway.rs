//! # eSewa Payment Initiation
//!
//! Turns a validated payment request into the signed form the browser
//! posts to eSewa. The browser is redirected to `payment_url` carrying `params`.

use crate::config::EsewaConfig;
use crate::signature::{generate_signature, SigningMessage, SIGNED_FIELD_NAMES};
use pay_core::{
    calculate, BoxedTransactionIdSource, CallbackUrls, PaymentRequest, PaymentResult, TaxRate,
    UuidV4Source,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Surcharges are not supported, so these fields are always zero
const ZERO_CHARGE: &str = "0.00";

/// Form URL plus the parameters to post to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInitiation {
    #[serde(rename = "paymentUrl")]
    pub payment_url: String,
    pub params: EsewaFormParams,
}

/// ePay v2 form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsewaFormParams {
    pub amount: String,
    pub tax_amount: String,
    pub total_amount: String,
    pub product_service_charge: String,
    pub product_delivery_charge: String,
    pub transaction_uuid: String,
    pub product_code: String,
    pub signature: String,
    pub success_url: String,
    pub failure_url: String,
    pub signed_field_names: String,
}

/// eSewa initiation flow
///
/// Holds everything it needs up front, so every call is a pure function of
/// the request and the next transaction id.
#[derive(Clone)]
pub struct EsewaGateway {
    config: EsewaConfig,
    urls: CallbackUrls,
    tax_rate: TaxRate,
    ids: BoxedTransactionIdSource,
}

impl EsewaGateway {
    /// Create a gateway with VAT and random UUID transaction ids
    pub fn new(config: EsewaConfig, urls: CallbackUrls) -> Self {
        Self {
            config,
            urls,
            tax_rate: TaxRate::VAT,
            ids: Arc::new(UuidV4Source),
        }
    }

    /// Create from environment variables
    pub fn from_env(urls: CallbackUrls) -> Self {
        Self::new(EsewaConfig::from_env(), urls)
    }

    /// Builder: replace the transaction id source
    pub fn with_id_source(mut self, ids: BoxedTransactionIdSource) -> Self {
        self.ids = ids;
        self
    }

    pub fn config(&self) -> &EsewaConfig {
        &self.config
    }

    pub fn urls(&self) -> &CallbackUrls {
        &self.urls
    }

    pub fn provider_name(&self) -> &'static str {
        "esewa"
    }

    /// Validate `request` and build the signed form for it.
    ///
    /// Nothing past validation runs for an invalid request, and no payload is
    /// produced when signing fails.
    #[instrument(skip(self, request))]
    pub fn initiate(&self, request: &PaymentRequest) -> PaymentResult<PaymentInitiation> {
        let payment = request.validate()?;
        let amounts = calculate(payment.amount, self.tax_rate)?;

        let transaction_uuid = self.ids.next_id();
        let message = SigningMessage::new(
            amounts.total.to_string(),
            transaction_uuid.as_str(),
            self.config.product_code.as_str(),
        );
        let signature = generate_signature(&self.config, &message.canonical())?;

        debug!(
            "Signed eSewa form: transaction={}, total={}",
            transaction_uuid, amounts.total
        );

        Ok(PaymentInitiation {
            payment_url: self.config.form_url(),
            params: EsewaFormParams {
                amount: amounts.base.to_string(),
                tax_amount: amounts.tax.to_string(),
                total_amount: amounts.total.to_string(),
                product_service_charge: ZERO_CHARGE.to_string(),
                product_delivery_charge: ZERO_CHARGE.to_string(),
                transaction_uuid,
                product_code: self.config.product_code.clone(),
                signature,
                success_url: self.urls.success_url(),
                failure_url: self.urls.failure_url(),
                signed_field_names: SIGNED_FIELD_NAMES.to_string(),
            },
        })
    }
}

impl EsewaFormParams {
    /// Rebuild the canonical message from the form's own fields
    pub fn signing_message(&self) -> SigningMessage {
        SigningMessage::new(
            self.total_amount.as_str(),
            self.transaction_uuid.as_str(),
            self.product_code.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::compute_hmac_sha256_base64;
    use pay_core::{PaymentError, TransactionIdSource, INVALID_AMOUNT, MISSING_FIELDS};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TEST_UUID: &str = "00000000-0000-4000-8000-000000000001";

    struct FixedIds;

    impl TransactionIdSource for FixedIds {
        fn next_id(&self) -> String {
            TEST_UUID.to_string()
        }
    }

    struct CountingIds(AtomicUsize);

    impl TransactionIdSource for CountingIds {
        fn next_id(&self) -> String {
            let n = self.0.fetch_add(1, Ordering::SeqCst);
            format!("00000000-0000-4000-8000-{:012}", n)
        }
    }

    fn gateway() -> EsewaGateway {
        EsewaGateway::new(
            EsewaConfig::new("https://rc-epay.esewa.com.np", "EPAYTEST", "secret"),
            CallbackUrls::new("https://shop.example.com"),
        )
        .with_id_source(Arc::new(FixedIds))
    }

    #[test]
    fn test_initiate_happy_path() {
        let result = gateway()
            .initiate(&PaymentRequest::new(100, "A", "a@b.com"))
            .unwrap();

        assert_eq!(
            result.payment_url,
            "https://rc-epay.esewa.com.np/api/epay/main/v2/form"
        );

        let p = &result.params;
        assert_eq!(p.amount, "100.00");
        assert_eq!(p.tax_amount, "13.00");
        assert_eq!(p.total_amount, "113.00");
        assert_eq!(p.product_service_charge, "0.00");
        assert_eq!(p.product_delivery_charge, "0.00");
        assert_eq!(p.transaction_uuid, TEST_UUID);
        assert_eq!(p.product_code, "EPAYTEST");
        assert_eq!(p.signature, "ZrHfXcHlYW6Oh5zXsjrrLbUArTaJH+ljA1of5XfOd54=");
        assert_eq!(p.success_url, "https://shop.example.com/success");
        assert_eq!(p.failure_url, "https://shop.example.com/failure");
        assert_eq!(p.signed_field_names, "total_amount,transaction_uuid,product_code");
    }

    #[test]
    fn test_signature_covers_form_fields() {
        let result = gateway()
            .initiate(&PaymentRequest::new("250.5", "A", "a@b.com"))
            .unwrap();

        let expected = compute_hmac_sha256_base64(
            b"secret",
            result.params.signing_message().canonical().as_bytes(),
        )
        .unwrap();
        assert_eq!(result.params.signature, expected);
        assert_eq!(result.params.total_amount, "283.06");
    }

    #[test]
    fn test_fresh_id_per_call() {
        let gateway = gateway().with_id_source(Arc::new(CountingIds(AtomicUsize::new(0))));
        let request = PaymentRequest::new(100, "A", "a@b.com");

        let first = gateway.initiate(&request).unwrap();
        let second = gateway.initiate(&request).unwrap();

        assert_ne!(first.params.transaction_uuid, second.params.transaction_uuid);
        assert_ne!(first.params.signature, second.params.signature);
        assert_eq!(first.params.total_amount, second.params.total_amount);
    }

    #[test]
    fn test_callback_urls_exposed() {
        let gateway = gateway();
        assert_eq!(gateway.urls().success_url(), "https://shop.example.com/success");
        assert_eq!(gateway.provider_name(), "esewa");
    }

    #[test]
    fn test_validation_errors() {
        let err = gateway()
            .initiate(&PaymentRequest::new(100, "A", serde_json::Value::Null))
            .unwrap_err();
        assert_eq!(err, PaymentError::validation(MISSING_FIELDS));

        let err = gateway()
            .initiate(&PaymentRequest::new(0.5, "A", "a@b.com"))
            .unwrap_err();
        assert_eq!(err, PaymentError::validation(INVALID_AMOUNT));
    }

    #[test]
    fn test_validation_runs_before_id_minting() {
        let ids = Arc::new(CountingIds(AtomicUsize::new(0)));
        let gateway = gateway().with_id_source(ids.clone());

        let _ = gateway.initiate(&PaymentRequest::new("abc", "A", "a@b.com"));
        assert_eq!(ids.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_secret() {
        let gateway = EsewaGateway::new(
            EsewaConfig::new("https://gw", "EPAYTEST", "secret").without_secret_key(),
            CallbackUrls::default(),
        );

        let err = gateway
            .initiate(&PaymentRequest::new(100, "A", "a@b.com"))
            .unwrap_err();
        assert!(matches!(err, PaymentError::Configuration(_)));
        assert!(!err.to_string().contains("secret"));
    }

    #[test]
    fn test_serialized_shape() {
        let result = gateway()
            .initiate(&PaymentRequest::new(100, "A", "a@b.com"))
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("paymentUrl").is_some());
        let params = json["params"].as_object().unwrap();
        assert_eq!(params.len(), 11);
        assert_eq!(params["total_amount"], "113.00");
    }
}
