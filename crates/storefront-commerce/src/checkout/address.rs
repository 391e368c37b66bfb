//! Shipping address draft.

use serde::{Deserialize, Serialize};

/// A shipping address as typed into the checkout form.
///
/// No field is validated here; the form layer owns validation. The cart
/// stores whatever was last saved, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Country.
    pub country: String,
    /// Postal (PIN) code.
    pub pin_code: String,
}

impl ShippingInfo {
    /// Create a new shipping address.
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        pin_code: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            pin_code: pin_code.into(),
        }
    }

    /// Check whether every field is blank.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.trim().is_empty())
    }

    /// Check whether every field has a value.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.trim().is_empty())
    }

    /// Format as single line, skipping blank fields.
    pub fn one_line(&self) -> String {
        self.fields()
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn fields(&self) -> [&str; 5] {
        [
            &self.address,
            &self.city,
            &self.state,
            &self.country,
            &self.pin_code,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShippingInfo {
        ShippingInfo::new("12 MG Road", "Bengaluru", "Karnataka", "India", "560001")
    }

    #[test]
    fn test_default_is_empty() {
        let info = ShippingInfo::default();
        assert!(info.is_empty());
        assert!(!info.is_complete());
        assert_eq!(info.one_line(), "");
    }

    #[test]
    fn test_one_line() {
        assert_eq!(
            sample().one_line(),
            "12 MG Road, Bengaluru, Karnataka, India, 560001"
        );

        let partial = ShippingInfo {
            city: "Pune".to_string(),
            country: "India".to_string(),
            ..Default::default()
        };
        assert_eq!(partial.one_line(), "Pune, India");
        assert!(!partial.is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["pinCode"], "560001");
        assert_eq!(value["address"], "12 MG Road");
        assert!(value.get("pin_code").is_none());
    }
}
