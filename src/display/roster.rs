//! Roster display formatting
//!
//! Formats students, guardians and staff as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Guardian, Staff, Student};

#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Registration")]
    registration: String,
    #[tabled(rename = "Grade")]
    grade: String,
}

#[derive(Tabled)]
struct GuardianRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "CPF")]
    national_id: String,
    #[tabled(rename = "WhatsApp")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
}

#[derive(Tabled)]
struct StaffRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Registration")]
    registration: String,
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "App Authorized")]
    app_authorized: &'static str,
}

pub(crate) fn render<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format the students as a table
pub fn format_student_list(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students registered yet.".to_string();
    }

    render(
        students
            .iter()
            .map(|s| StudentRow {
                id: s.id.to_string(),
                name: s.name.clone(),
                registration: s.registration.clone(),
                grade: s.grade.clone(),
            })
            .collect(),
    )
}

/// Format the guardians as a table
pub fn format_guardian_list(guardians: &[Guardian]) -> String {
    if guardians.is_empty() {
        return "No guardians registered yet.".to_string();
    }

    render(
        guardians
            .iter()
            .map(|g| GuardianRow {
                id: g.id.to_string(),
                name: g.name.clone(),
                national_id: g.national_id.clone(),
                phone: g.phone.clone(),
                email: g.email.clone(),
            })
            .collect(),
    )
}

/// Format the staff as a table
pub fn format_staff_list(staff: &[Staff]) -> String {
    if staff.is_empty() {
        return "No staff registered yet.".to_string();
    }

    render(
        staff
            .iter()
            .map(|s| StaffRow {
                id: s.id.to_string(),
                name: s.name.clone(),
                registration: s.registration.clone(),
                role: s.role.label(),
                app_authorized: s.app_authorized_label(),
            })
            .collect(),
    )
}

/// Format one staff member's details, including the fields left out of the table
pub fn format_staff_details(staff: &Staff) -> String {
    let mut output = String::new();

    output.push_str(&format!("Staff member: {}\n", staff.name));
    output.push_str(&format!("  ID:             {}\n", staff.id));
    output.push_str(&format!("  CPF:            {}\n", staff.national_id));
    output.push_str(&format!("  WhatsApp:       {}\n", staff.phone));
    output.push_str(&format!("  Email:          {}\n", staff.email));
    output.push_str(&format!("  Registration:   {}\n", staff.registration));
    output.push_str(&format!("  Role:           {}\n", staff.role));
    if !staff.duty.is_empty() {
        output.push_str(&format!("  Duty:           {}\n", staff.duty));
    }
    output.push_str(&format!(
        "  App Authorized: {}\n",
        staff.app_authorized_label()
    ));
    output.push_str(&format!(
        "  Child Enrolled: {}\n",
        if staff.has_child_enrolled { "Yes" } else { "No" }
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewStaff, NewStudent, StaffId, StudentId};

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_student_list(&[]), "No students registered yet.");
        assert_eq!(format_guardian_list(&[]), "No guardians registered yet.");
        assert_eq!(format_staff_list(&[]), "No staff registered yet.");
    }

    #[test]
    fn test_student_table() {
        let student = NewStudent::new("Ana", "2024001", "5A")
            .into_student(StudentId::new(1))
            .unwrap();
        let output = format_student_list(&[student]);

        assert!(output.contains("Registration"));
        assert!(output.contains("stu-1"));
        assert!(output.contains("2024001"));
    }

    #[test]
    fn test_staff_table_uses_labels() {
        let staff = NewStaff {
            name: "Carlos".into(),
            national_id: "22222222222".into(),
            phone: "11911112222".into(),
            email: "carlos@escola.com".into(),
            registration: "FUNC001".into(),
            role: "secretario".into(),
            app_authorized: true,
            ..Default::default()
        }
        .into_staff(StaffId::new(3))
        .unwrap();

        let output = format_staff_list(std::slice::from_ref(&staff));
        assert!(output.contains("Secretário(a)"));
        assert!(output.contains("Sim"));

        let details = format_staff_details(&staff);
        assert!(details.contains("CPF:            222.222.222-22"));
        assert!(!details.contains("Duty"));
    }
}
