use serde::{Deserialize, Deserializer, Serialize};

// Custom deserializer to handle floating point to u32 conversion
fn deserialize_rounded_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                Ok(i.min(u32::MAX as u64) as u32)
            } else if let Some(f) = n.as_f64() {
                Ok(f.max(0.0).ceil() as u32)
            } else {
                Ok(0)
            }
        }
        _ => Ok(0),
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Activity {
    pub name: String,
    pub duration_hours: f32,
    #[serde(deserialize_with = "deserialize_rounded_u32", default)]
    pub base_cost: u32,
}
