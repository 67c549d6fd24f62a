//! JSON output for scripting.

use crate::models::SubnetInfo;

/// Pretty JSON object with the fields of `info` in display order.
pub fn subnet_json(info: &SubnetInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(info)
}
