//! Broker-ready job descriptor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::args::{Args, Kwargs};
use super::errors::RelayError;
use super::ids::TaskId;

/// One job as handed to a broker: name, arguments and resolved routing.
///
/// Unlike [`ExecutionOptions`](super::ExecutionOptions), every routing field
/// here is already resolved (queue defaulted, countdown turned into `eta`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskMessage {
    pub id: TaskId,
    pub task: String,
    pub args: Args,
    pub kwargs: Kwargs,
    pub queue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TaskMessage {
    pub fn to_json(&self) -> Result<Vec<u8>, RelayError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, RelayError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use ulid::Ulid;

    #[test]
    fn optional_routing_fields_are_omitted() {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let msg = TaskMessage {
            id: TaskId::from_ulid(Ulid::new()),
            task: "task.add".to_string(),
            args: vec![json!(1), json!(2)].into(),
            kwargs: Kwargs::new(),
            queue: "celery".to_string(),
            routing_key: None,
            priority: None,
            eta: None,
            expires: None,
            created_at,
        };

        let value = serde_json::to_value(&msg).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("eta"));
        assert!(!obj.contains_key("priority"));
        assert_eq!(obj["args"], json!([1, 2]));

        let decoded = TaskMessage::from_json(&msg.to_json().unwrap()).unwrap();
        assert_eq!(decoded, msg);
    }
}
