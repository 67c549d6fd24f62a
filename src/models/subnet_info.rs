//! Computed description of one network.

use super::Family;
use num_bigint::BigUint;
use serde::{Serialize, Serializer};

/// A value shown next to a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Count(BigUint),
}

/// Everything printed for a network. Built by [`crate::calculate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetInfo {
    pub version: Family,
    pub input_cidr: String,
    pub network_address: String,
    /// IPv4 only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_address: Option<String>,
    pub first_usable_address: String,
    pub last_usable_address: String,
    #[serde(serialize_with = "serialize_decimal")]
    pub total_addresses: BigUint,
}

fn serialize_decimal<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_str_radix(10))
}

impl SubnetInfo {
    /// Labelled fields in display order. `version` is not part of the set.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let mut fields = vec![
            ("Input CIDR", FieldValue::Text(self.input_cidr.clone())),
            (
                "Network Address",
                FieldValue::Text(self.network_address.clone()),
            ),
        ];
        if let Some(broadcast) = &self.broadcast_address {
            fields.push(("Broadcast Address", FieldValue::Text(broadcast.clone())));
        }
        fields.push((
            "First usable Address",
            FieldValue::Text(self.first_usable_address.clone()),
        ));
        fields.push((
            "Last usable Address",
            FieldValue::Text(self.last_usable_address.clone()),
        ));
        fields.push((
            "Total Addresses",
            FieldValue::Count(self.total_addresses.clone()),
        ));
        fields
    }
}
