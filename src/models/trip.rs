use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeCategory {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "premium")]
    Premium,
}

impl EmployeeCategory {
    /// Parse the category label sent by the front-end radio buttons.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "standard" => Some(EmployeeCategory::Standard),
            "premium" => Some(EmployeeCategory::Premium),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeCategory::Standard => "standard",
            EmployeeCategory::Premium => "premium",
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct TripConfig {
    pub duration_cap_hours: f32,
    pub employee_count: u32,
    pub employee_category: EmployeeCategory,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            // 0 means no duration limit was picked yet
            duration_cap_hours: 0.0,
            employee_count: 1,
            employee_category: EmployeeCategory::Standard,
        }
    }
}
