//! Employee management use cases

use crate::domain::{Employee, EmployeeId, IdGenerator, TimestampIdGenerator};
use crate::error::Result;
use crate::infrastructure::{EmployeeRepository, FileStore, KeyValueStore};

/// Field values submitted by a caller for create or update
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeDraft {
    /// Ignored on create; selects the record to replace on update
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub experience: f64,
    pub age: i64,
    pub address: String,
}

impl EmployeeDraft {
    /// Build the record this draft describes under the given id
    pub fn into_employee(self, id: Option<EmployeeId>) -> Employee {
        Employee::new(
            id,
            self.first_name,
            self.last_name,
            self.experience,
            self.age,
            self.address,
        )
    }
}

impl From<Employee> for EmployeeDraft {
    fn from(employee: Employee) -> Self {
        EmployeeDraft {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            experience: employee.experience,
            age: employee.age,
            address: employee.address,
        }
    }
}

/// Validation gate in front of the employee repository
pub struct EmployeeService<S: KeyValueStore, G: IdGenerator = TimestampIdGenerator> {
    repository: EmployeeRepository<S>,
    ids: G,
}

impl<S: KeyValueStore> EmployeeService<S> {
    /// Create a service that stamps new employees with timestamp ids
    pub fn new(repository: EmployeeRepository<S>) -> Self {
        EmployeeService::with_id_generator(repository, TimestampIdGenerator::new())
    }
}

impl EmployeeService<FileStore> {
    /// Load the roster's config, then initialize its employee list
    pub fn open(store: FileStore) -> Result<Self> {
        let config = store.load_config()?;
        let mut repository = EmployeeRepository::from_config(store, &config);
        repository.initialize()?;
        Ok(EmployeeService::new(repository))
    }
}

impl<S: KeyValueStore, G: IdGenerator> EmployeeService<S, G> {
    pub fn with_id_generator(repository: EmployeeRepository<S>, ids: G) -> Self {
        EmployeeService { repository, ids }
    }

    pub fn repository(&self) -> &EmployeeRepository<S> {
        &self.repository
    }

    /// Mutable access for subscribing to changes
    pub fn repository_mut(&mut self) -> &mut EmployeeRepository<S> {
        &mut self.repository
    }

    pub fn into_repository(self) -> EmployeeRepository<S> {
        self.repository
    }

    pub fn list_employees(&self) -> &[Employee] {
        self.repository.list()
    }

    /// Copy of the stored employee, safe to edit before `update_employee`
    pub fn find_employee(&self, id: &EmployeeId) -> Option<Employee> {
        self.repository.find(id).cloned()
    }

    /// Add a new employee under a fresh id. Returns false and stores
    /// nothing when the data is invalid.
    pub fn create_employee(&mut self, draft: EmployeeDraft) -> bool {
        let employee = draft.into_employee(Some(self.ids.next_id()));

        if !employee.is_valid() {
            return false;
        }

        self.repository.add(employee);
        true
    }

    /// Replace the employee with the draft's id. Returns false when the data
    /// is invalid; returns true for valid data even if no id matched.
    pub fn update_employee(&mut self, draft: EmployeeDraft) -> bool {
        let id = draft.id.clone();
        let employee = draft.into_employee(id);

        if !employee.is_valid() {
            return false;
        }

        self.repository.update(employee);
        true
    }

    pub fn delete_employee(&mut self, id: &EmployeeId) {
        self.repository.delete(id);
    }

    /// Starting point for a new-employee form; not valid until filled in.
    /// Touches neither the list nor the store.
    pub fn create_blank_employee(&self) -> Employee {
        Employee::blank()
    }
}
