//! Demo records written on first run

use crate::domain::{Employee, EmployeeId};

/// The three demo employees, in display order
pub fn demo_employees() -> Vec<Employee> {
    vec![
        Employee::new(
            Some(EmployeeId::Number(1)),
            "Иван",
            "Иванов",
            5.0,
            30,
            "ул. Ленина, д. 10",
        ),
        Employee::new(
            Some(EmployeeId::Number(2)),
            "Мария",
            "Петрова",
            8.0,
            35,
            "ул. Центральная, д. 25",
        ),
        Employee::new(
            Some(EmployeeId::Number(3)),
            "Алексей",
            "Сидоров",
            3.0,
            28,
            "ул. Садовая, д. 15",
        ),
    ]
}
