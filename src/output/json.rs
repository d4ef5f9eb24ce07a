//! JSON output.
//!
//! Results drop the `kind` tag, and the comment when it is empty. Keys keep
//! the order of the terminal output.

use crate::models::SubnetResult;
use serde_json::{json, Map, Value};

pub fn result_to_json(res: &SubnetResult) -> Value {
    let mut map: Map<String, Value> = res
        .fields()
        .iter()
        .map(|(key, value)| (key.to_string(), Value::from(*value)))
        .collect();
    if !res.comment.is_empty() {
        map.insert("comment".to_string(), Value::from(res.comment.as_str()));
    }
    Value::Object(map)
}

pub fn interface_to_json(address: &str, prefix: u8) -> Value {
    json!({
        "address": address,
        "prefix": format!("/{prefix}"),
    })
}

pub fn netmask_table_to_json(table: &[(u8, String)]) -> Value {
    Value::Array(
        table
            .iter()
            .map(|(prefix, mask)| json!({ "prefix": format!("/{prefix}"), "netmask": mask }))
            .collect(),
    )
}
