//! Employee identity model.
//!
//! The engine does not interpret employee attributes; it carries identity
//! fields from the upstream payload through to the report unchanged.

use serde::{Deserialize, Serialize};

/// Employee identity passthrough fields.
///
/// # Example
///
/// ```
/// use hours_engine::models::EmployeeInfo;
///
/// let employee = EmployeeInfo {
///     id: "12345".to_string(),
///     first_name: "María".to_string(),
///     last_name: "García".to_string(),
///     department: Some("Producción".to_string()),
///     job_title: None,
/// };
/// assert_eq!(employee.full_name(), "María García");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// The internal employee identifier from the upstream system.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's department, if known.
    #[serde(default)]
    pub department: Option<String>,
    /// The employee's job title, if known.
    #[serde(default)]
    pub job_title: Option<String>,
}

impl EmployeeInfo {
    /// Returns the employee's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
