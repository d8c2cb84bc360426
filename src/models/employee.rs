use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub position: String,
    pub salary: String,
}

/// Fields for an employee that has not been assigned an id yet.
#[derive(Debug, Deserialize, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub salary: String,
}

/// Partial update: `None` leaves the stored value as it is.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
}

impl Employee {
    pub fn apply(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(salary) = update.salary {
            self.salary = salary;
        }
    }
}
