//! CSV export of the onboarding session
//!
//! Produces the single wide document the school-management importer expects:
//! a fixed header, then one row per guardian, student and staff member.

use tracing::debug;

use super::context::ExportContext;
use super::layout::{is_json_column, COLUMNS};
use super::row::{collect_rows, FlatRecord};
use crate::error::OnboardResult;
use crate::session::Session;

/// Escape a cell for CSV output
///
/// JSON-array cells are always quoted. Other cells are quoted only when they
/// contain a comma, a double quote or a newline.
pub fn escape_cell(column: &str, value: &str) -> String {
    let force = is_json_column(column) && value.starts_with('[');
    if force || value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// The header line
pub fn header_line() -> String {
    COLUMNS.join(",")
}

fn record_line(record: &FlatRecord) -> String {
    COLUMNS
        .iter()
        .zip(record.cells())
        .map(|(column, value)| escape_cell(column, value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the whole document as text
///
/// Lines are joined with `\n` and there is no trailing newline; an empty
/// session yields the header line alone.
pub fn render_csv(session: &Session, ctx: &ExportContext) -> OnboardResult<String> {
    let rows = collect_rows(session);
    debug!(rows = rows.len(), batch_id = %ctx.batch_id(), "rendering onboarding CSV");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header_line());
    for row in &rows {
        lines.push(record_line(&row.flatten(ctx)?));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::layout::COLUMN_COUNT;
    use crate::models::{LinkKind, NewGuardian, NewLink, NewStaff, NewStudent};
    use chrono::NaiveDate;

    fn ctx() -> ExportContext {
        ExportContext::on_date("35012345", NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()).unwrap()
    }

    fn guardian(name: &str, cpf: &str) -> NewGuardian {
        NewGuardian {
            name: name.into(),
            national_id: cpf.into(),
            phone: "11987654321".into(),
            email: "responsavel@example.com".into(),
        }
    }

    fn parse(text: &str) -> Vec<::csv::StringRecord> {
        ::csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(text.as_bytes())
            .records()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_escape_plain_and_special() {
        assert_eq!(escape_cell("cargo", "professor"), "professor");
        assert_eq!(escape_cell("cargo", "a,b"), "\"a,b\"");
        assert_eq!(escape_cell("cargo", "say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_cell("cargo", "two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_escape_json_column_always_quoted() {
        assert_eq!(escape_cell("alunos_funcionario", "[1]"), "\"[1]\"");
        assert_eq!(escape_cell("alunos_funcionario", ""), "");
        // Only JSON columns are forced
        assert_eq!(escape_cell("nome_estudante", "[1]"), "[1]");
    }

    #[test]
    fn test_empty_session_is_header_only() {
        let text = render_csv(&Session::new(), &ctx()).unwrap();
        assert_eq!(text, header_line());
        assert_eq!(text.split(',').count(), COLUMN_COUNT);
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_single_guardian_link_is_bit_exact() {
        let session = Session::new();
        let (session, s) = session
            .add_student(NewStudent::new("Ana", "2024001", "5A"))
            .unwrap();
        let (session, g) = session.add_guardian(guardian("Maria", "11111111111")).unwrap();
        let (session, _) = session
            .add_link(NewLink::new(LinkKind::Guardian, g.to_reference(), s.to_reference(), "pai"))
            .unwrap();

        let text = render_csv(&session, &ctx()).unwrap();
        let student_line = text.lines().nth(2).unwrap();

        assert!(student_line
            .contains(r#",Ana,2024001,5A,"[{""cpf"":""111.111.111-11"",""parentesco"":""Pai""}]",,"#));
        assert!(student_line.ends_with(",Sistema Web"));
    }

    #[test]
    fn test_mother_link_label_round_trips() {
        let session = Session::new();
        let (session, s) = session
            .add_student(NewStudent::new("Ana", "2024001", "5A"))
            .unwrap();
        let (session, g) = session.add_guardian(guardian("Maria", "12345678901")).unwrap();
        let (session, _) = session
            .add_link(NewLink::new(LinkKind::Guardian, g.to_reference(), s.to_reference(), "mae"))
            .unwrap();

        let records = parse(&render_csv(&session, &ctx()).unwrap());
        let student = &records[2];
        assert_eq!(&student[2], "ESTUDANTE");

        let guardians: serde_json::Value = serde_json::from_str(&student[6]).unwrap();
        assert_eq!(guardians[0]["cpf"], "123.456.789-01");
        assert_eq!(guardians[0]["parentesco"], "Mãe");
    }

    #[test]
    fn test_comma_value_round_trips() {
        let session = Session::new();
        let (session, _) = session
            .add_staff(NewStaff {
                name: "Ana Costa".into(),
                national_id: "22222222222".into(),
                phone: "11912345678".into(),
                email: "ana@escola.com".into(),
                registration: "FUNC001".into(),
                role: "professor".into(),
                duty: "Professor, turno tarde".into(),
                app_authorized: true,
                has_child_enrolled: false,
            })
            .unwrap();

        let text = render_csv(&session, &ctx()).unwrap();
        assert!(text.contains("\"Professor, turno tarde\""));

        let records = parse(&text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].len(), COLUMN_COUNT);
        assert_eq!(&records[1][18], "Professor, turno tarde");
        assert_eq!(&records[1][19], "Sim");
        assert_eq!(&records[1][20], "FALSE");
        assert_eq!(&records[1][21], "");
    }

    #[test]
    fn test_rows_share_batch_and_process_ids() {
        let session = Session::new();
        let (session, _) = session
            .add_student(NewStudent::new("Ana", "2024001", "5A"))
            .unwrap();
        let (session, _) = session.add_guardian(guardian("Maria", "11111111111")).unwrap();
        let ctx = ctx();

        let records = parse(&render_csv(&session, &ctx).unwrap());
        assert_eq!(records.len(), 3);
        for record in &records[1..] {
            assert_eq!(&record[0], ctx.batch_id().to_string());
            assert_eq!(&record[1], "IMPORTACAO-2025-02-03-35012345");
        }
        assert_eq!(&records[1][2], "RESPONSAVEL");
        assert_eq!(&records[2][2], "ESTUDANTE");
    }

    #[test]
    fn test_removed_student_not_referenced() {
        let session = Session::new();
        let (session, s1) = session
            .add_student(NewStudent::new("Ana", "2024001", "5A"))
            .unwrap();
        let (session, s2) = session
            .add_student(NewStudent::new("Bia", "2024002", "5A"))
            .unwrap();
        let (session, g) = session.add_guardian(guardian("Maria", "11111111111")).unwrap();
        let (session, _) = session
            .add_link(NewLink::new(LinkKind::Guardian, g.to_reference(), s1.to_reference(), "mae"))
            .unwrap();
        let (session, _) = session
            .add_link(NewLink::new(LinkKind::Guardian, g.to_reference(), s2.to_reference(), "mae"))
            .unwrap();

        let (session, _) = session.remove_student(s1).unwrap();
        let text = render_csv(&session, &ctx()).unwrap();

        let records = parse(&text);
        assert_eq!(records.len(), 3);
        assert_eq!(&records[1][11], r#"[{"matricula":"2024002"}]"#);
        // Column 0 is the random batch id
        assert!(records[1..]
            .iter()
            .all(|r| r.iter().skip(1).all(|cell| !cell.contains("2024001"))));
        assert!(!text.contains("Ana"));
    }

    #[test]
    fn test_removed_guardian_not_listed_by_student() {
        let session = Session::new();
        let (session, s) = session
            .add_student(NewStudent::new("Ana", "2024001", "5A"))
            .unwrap();
        let (session, g1) = session.add_guardian(guardian("Maria", "11111111111")).unwrap();
        let (session, g2) = session.add_guardian(guardian("João", "99999999999")).unwrap();
        let (session, _) = session
            .add_link(NewLink::new(LinkKind::Guardian, g1.to_reference(), s.to_reference(), "mae"))
            .unwrap();
        let (session, _) = session
            .add_link(NewLink::new(LinkKind::Guardian, g2.to_reference(), s.to_reference(), "pai"))
            .unwrap();

        let (session, cascaded) = session.remove_guardian(g1).unwrap();
        assert_eq!(cascaded.len(), 1);

        let records = parse(&render_csv(&session, &ctx()).unwrap());
        let student = records.iter().find(|r| &r[2] == "ESTUDANTE").unwrap();
        assert_eq!(
            &student[6],
            r#"[{"cpf":"999.999.999-99","parentesco":"Pai"}]"#
        );
    }
}
