use std::path::PathBuf;
use crate::errors::{StoreError, StoreResult};
use crate::models::{Employee, EmployeeUpdate, NewEmployee};
use super::{FlatFile, LineRecord};

impl LineRecord for Employee {
    type Key = u64;

    const DELIMITER: char = ',';
    const FIELDS: &'static [&'static str] = &["id", "name", "position", "salary"];

    fn key(&self) -> u64 {
        self.id
    }

    fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let id = fields[0]
            .parse()
            .map_err(|_| format!("employee id '{}' is not a number", fields[0]))?;
        Ok(Employee {
            id,
            name: fields[1].to_string(),
            position: fields[2].to_string(),
            salary: fields[3].to_string(),
        })
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.position.clone(),
            self.salary.clone(),
        ]
    }
}

/// Employees keyed by id, persisted as `id,name,position,salary`.
pub struct EmployeeStore {
    file: FlatFile<Employee>,
    next_id: u64,
}

impl EmployeeStore {
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let file = FlatFile::<Employee>::load(path)?;
        let next_id = match file.keys().max() {
            None => 1,
            Some(&last) => last.checked_add(1).ok_or_else(|| StoreError::IdsExhausted {
                path: file.path().to_path_buf(),
                last,
            })?,
        };
        tracing::info!(
            "Loaded {} employees from {}, next id {}",
            file.len(),
            file.path().display(),
            next_id
        );
        Ok(Self { file, next_id })
    }

    /// Assigns the next id, stores the employee and persists.
    /// `u64::MAX` is never handed out, so a reload can always pick a successor.
    pub fn add(&mut self, new: NewEmployee) -> StoreResult<Employee> {
        let following = self.next_id.checked_add(1).ok_or_else(|| StoreError::IdsExhausted {
            path: self.file.path().to_path_buf(),
            last: self.next_id - 1,
        })?;
        let employee = Employee {
            id: self.next_id,
            name: new.name,
            position: new.position,
            salary: new.salary,
        };
        self.file.upsert(employee.clone())?;
        self.next_id = following;
        Ok(employee)
    }

    pub fn get(&self, id: u64) -> Option<&Employee> {
        self.file.get(&id)
    }

    /// All employees in id order.
    pub fn list(&self) -> Vec<Employee> {
        self.file.values().cloned().collect()
    }

    /// Applies the supplied fields only. `Ok(None)` when the id is unknown.
    pub fn update(&mut self, id: u64, update: EmployeeUpdate) -> StoreResult<Option<Employee>> {
        let Some(current) = self.file.get(&id) else {
            return Ok(None);
        };
        let mut employee = current.clone();
        employee.apply(update);
        self.file.upsert(employee.clone())?;
        Ok(Some(employee))
    }

    pub fn delete(&mut self, id: u64) -> StoreResult<Option<Employee>> {
        self.file.remove(&id)
    }
}
