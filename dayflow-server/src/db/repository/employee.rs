//! Employee Repository (Directory Service storage)

use super::{RepoError, RepoResult};
use shared::client::RegisterRequest;
use shared::models::{Employee, EmployeeSummary, EmploymentUpdate, ProfileUpdate, Role};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, email, hash_pass, full_name, employee_code, role, department, designation, joining_date, base_salary, hra, allowances, address, phone, avatar_url, documents, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee WHERE email = ? LIMIT 1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn find_by_code(pool: &SqlitePool, employee_code: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee WHERE employee_code = ? LIMIT 1"
    ))
    .bind(employee_code)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Directory listing, optionally filtered by role, ordered by name
pub async fn list(pool: &SqlitePool, role: Option<Role>) -> RepoResult<Vec<EmployeeSummary>> {
    let employees = match role {
        Some(role) => {
            sqlx::query_as::<_, EmployeeSummary>(
                "SELECT id, full_name, employee_code, role, department, designation FROM employee WHERE role = ? ORDER BY full_name",
            )
            .bind(role)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, EmployeeSummary>(
                "SELECT id, full_name, employee_code, role, department, designation FROM employee ORDER BY full_name",
            )
            .fetch_all(pool)
            .await?
        }
    };
    Ok(employees)
}

/// Create a new employee from a registration request
pub async fn create(pool: &SqlitePool, data: RegisterRequest) -> RepoResult<Employee> {
    // Check duplicate email and employee code
    if find_by_email(pool, &data.email).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Email '{}' already registered",
            data.email
        )));
    }
    if find_by_code(pool, &data.employee_code).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Employee code '{}' already exists",
            data.employee_code
        )));
    }

    let hash_pass = Employee::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO employee (id, email, hash_pass, full_name, employee_code, role, documents, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, '[]', ?, ?)",
    )
    .bind(id)
    .bind(&data.email)
    .bind(&hash_pass)
    .bind(&data.full_name)
    .bind(&data.employee_code)
    .bind(data.role)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Self-service contact update. Only the fields in [`ProfileUpdate`] can
/// ever reach this statement.
pub async fn update_contact(
    pool: &SqlitePool,
    id: i64,
    data: ProfileUpdate,
) -> RepoResult<Employee> {
    let now = now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET full_name = COALESCE(?1, full_name), phone = COALESCE(?2, phone), address = COALESCE(?3, address), avatar_url = COALESCE(?4, avatar_url), updated_at = ?5 WHERE id = ?6",
    )
    .bind(data.full_name)
    .bind(data.phone)
    .bind(data.address)
    .bind(data.avatar_url)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// HR employment update. Only the fields in [`EmploymentUpdate`] can ever
/// reach this statement; role and employee_code stay immutable.
pub async fn update_employment(
    pool: &SqlitePool,
    id: i64,
    data: EmploymentUpdate,
) -> RepoResult<Employee> {
    let now = now_millis();
    let rows = sqlx::query(
        "UPDATE employee SET department = COALESCE(?1, department), designation = COALESCE(?2, designation), joining_date = COALESCE(?3, joining_date), base_salary = COALESCE(?4, base_salary), hra = COALESCE(?5, hra), allowances = COALESCE(?6, allowances), updated_at = ?7 WHERE id = ?8",
    )
    .bind(data.department)
    .bind(data.designation)
    .bind(data.joining_date)
    .bind(data.base_salary)
    .bind(data.hra)
    .bind(data.allowances)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}
