//! Employee Model

use super::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A document attached to an employee profile. The `url` is an opaque
/// reference into an external object store; the core never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,
    pub url: String,
}

/// Employee profile record.
///
/// `role` and `employee_code` are immutable after registration. Employment
/// and compensation fields are HR-mutable only; contact fields are mutable
/// by the owning employee (see [`ProfileUpdate`] / [`EmploymentUpdate`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    /// Login credential, unique
    pub email: String,
    #[serde(skip_serializing, default)]
    pub hash_pass: String,
    pub full_name: String,
    /// Human-facing employee code, unique
    pub employee_code: String,
    pub role: Role,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub joining_date: Option<NaiveDate>,
    pub base_salary: f64,
    pub hra: f64,
    pub allowances: f64,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    /// Document references, stored as a JSON array
    #[cfg_attr(feature = "db", sqlx(json))]
    pub documents: Vec<DocumentRef>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Employee {
    /// Sum of all compensation components (what the profile page shows
    /// as the monthly total; the payroll formula decides what is disbursed)
    pub fn total_monthly(&self) -> f64 {
        self.base_salary + self.hra + self.allowances
    }

    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Employee list entry (directory view, no credential material)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeSummary {
    pub id: i64,
    pub full_name: String,
    pub employee_code: String,
    pub role: Role,
    pub department: Option<String>,
    pub designation: Option<String>,
}

/// Self-service profile update. Restricted to contact fields; anything
/// outside this allow-list is not representable in the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// HR-only employment update. Restricted to job and compensation fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmploymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hra: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowances: Option<f64>,
}

impl EmploymentUpdate {
    /// Salary fields present in this update, paired with their names
    /// for validation messages
    pub fn salary_fields(&self) -> [(&'static str, Option<f64>); 3] {
        [
            ("base_salary", self.base_salary),
            ("hra", self.hra),
            ("allowances", self.allowances),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: 1,
            email: "ana@example.com".into(),
            hash_pass: String::new(),
            full_name: "Ana Pereira".into(),
            employee_code: "EMP-001".into(),
            role: Role::Employee,
            department: Some("Engineering".into()),
            designation: Some("Developer".into()),
            joining_date: None,
            base_salary: 50000.0,
            hra: 10000.0,
            allowances: 5000.0,
            address: None,
            phone: None,
            avatar_url: None,
            documents: vec![],
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_total_monthly() {
        assert_eq!(sample_employee().total_monthly(), 65000.0);
    }

    #[test]
    fn test_password_hash_and_verify() {
        let mut emp = sample_employee();
        emp.hash_pass = Employee::hash_password("s3cret").unwrap();
        assert!(emp.verify_password("s3cret").unwrap());
        assert!(!emp.verify_password("wrong").unwrap());
    }

    #[test]
    fn test_hash_pass_never_serialized() {
        let mut emp = sample_employee();
        emp.hash_pass = "argon2-material".into();
        let json = serde_json::to_string(&emp).unwrap();
        assert!(!json.contains("argon2-material"));
        assert!(!json.contains("hash_pass"));
    }
}
