//! Employee records for projection tests.
//!
//! # Example
//!
//! ```ignore
//! use rangeforge_test::employee::employees;
//!
//! let staff = employees();
//! assert_eq!(staff[0].name, "Dana");
//! ```

/// A record with a borrowed-field key (`name`) and copyable keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub department: String,
    pub age: u32,
}

impl Employee {
    /// Creates a new employee.
    pub fn new(id: u32, name: &str, department: &str, age: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            department: department.to_string(),
            age,
        }
    }
}

/// Returns a small staff list with duplicate ages and departments.
pub fn employees() -> Vec<Employee> {
    vec![
        Employee::new(4, "Dana", "Ops", 41),
        Employee::new(1, "Ari", "Eng", 29),
        Employee::new(3, "Cy", "Eng", 35),
        Employee::new(5, "Eve", "Ops", 29),
        Employee::new(2, "Bo", "Sales", 52),
    ]
}
