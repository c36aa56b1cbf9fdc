//! Output formatting utilities

use crate::domain::{Employee, ValidationIssue};

const HEADERS: [&str; 5] = ["ID", "NAME", "EXPERIENCE", "AGE", "ADDRESS"];

/// Format employees as an aligned table
pub fn format_employee_list(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees found".to_string();
    }

    let rows: Vec<[String; 5]> = employees
        .iter()
        .map(|e| {
            [
                e.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                e.full_name(),
                e.experience.to_string(),
                e.age.to_string(),
                e.address.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_row(&mut output, row, &widths);
    }
    output
}

fn push_row(output: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    output.push_str(line.trim_end());
    output.push('\n');
}

/// Format a single employee as `field: value` lines
pub fn format_employee(employee: &Employee) -> String {
    format!(
        "id: {}\nfirst name: {}\nlast name: {}\nexperience: {}\nage: {}\naddress: {}\n",
        employee
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string()),
        employee.first_name,
        employee.last_name,
        employee.experience,
        employee.age,
        employee.address
    )
}

/// Join validation issues into one line
pub fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{demo_employees, EmployeeId};

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_employee_list(&[]), "No employees found");
    }

    #[test]
    fn test_format_employee_list() {
        let output = format_employee_list(&demo_employees());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  NAME"));
        assert!(lines[1].starts_with("1   Иван Иванов"));
        assert!(lines[2].contains("Мария Петрова"));
        assert!(lines[3].ends_with("ул. Садовая, д. 15"));
    }

    #[test]
    fn test_columns_align_on_characters() {
        let output = format_employee_list(&demo_employees());
        let positions: Vec<usize> = output
            .lines()
            .map(|line| {
                let chars: Vec<char> = line.chars().collect();
                chars
                    .windows(4)
                    .position(|w| w.iter().collect::<String>() == "ул. ")
                    .unwrap_or(usize::MAX)
            })
            .skip(1)
            .collect();

        assert!(positions.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_format_employee_without_id() {
        let e = Employee::new(None, "", "", 0.0, 25, "");
        let output = format_employee(&e);
        assert!(output.starts_with("id: -\n"));
        assert!(output.contains("age: 25"));
    }

    #[test]
    fn test_format_employee() {
        let e = Employee::new(Some(EmployeeId::Number(9)), "A", "B", 1.0, 30, "X");
        assert_eq!(
            format_employee(&e),
            "id: 9\nfirst name: A\nlast name: B\nexperience: 1\nage: 30\naddress: X\n"
        );
    }

    #[test]
    fn test_format_issues() {
        let issues = [
            ValidationIssue::EmptyFirstName,
            ValidationIssue::AgeOutOfRange,
        ];
        assert_eq!(
            format_issues(&issues),
            "first name is empty, age must be between 18 and 100"
        );
    }
}
