//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workforce role. HR is the privileged role authorized to approve leave,
/// edit employment fields, and trigger payroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum Role {
    Employee,
    #[serde(rename = "HR")]
    #[cfg_attr(feature = "db", sqlx(rename = "HR"))]
    Hr,
}

impl Role {
    pub fn is_hr(&self) -> bool {
        matches!(self, Self::Hr)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employee => write!(f, "Employee"),
            Self::Hr => write!(f, "HR"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employee" => Ok(Self::Employee),
            "HR" => Ok(Self::Hr),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display_roundtrip() {
        for role in [Role::Employee, Role::Hr] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_serde_uses_hr_spelling() {
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"HR\"");
        let role: Role = serde_json::from_str("\"HR\"").unwrap();
        assert!(role.is_hr());
    }
}
