//! Fixed column layout expected by the school-management importer
//!
//! Column names, their order and the literal values below are dictated by
//! the importer and must be reproduced byte for byte.

/// Number of columns in every exported row
pub const COLUMN_COUNT: usize = 23;

/// Header row, in output order
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "lote_id",
    "processo_id",
    "categoria_entrada",
    "nome_estudante",
    "matricula_estudante",
    "serie_turma",
    "responsaveis_do_aluno",
    "nome_responsavel",
    "cpf_responsavel",
    "whatsapp_responsavel",
    "email_responsavel",
    "vinculos_responsavel_alunos",
    "nome_funcionario",
    "cpf_funcionario",
    "whatsapp_funcionario",
    "email_funcionario",
    "matricula_servidor",
    "cargo",
    "atribuicao_cargo",
    "app_autorizado",
    "funcionario_tambem_responsavel",
    "alunos_funcionario",
    "origem_dados",
];

/// Columns carrying an embedded JSON array
pub const JSON_COLUMNS: [&str; 3] = [
    "responsaveis_do_aluno",
    "vinculos_responsavel_alunos",
    "alunos_funcionario",
];

pub const CATEGORY_GUARDIAN: &str = "RESPONSAVEL";
pub const CATEGORY_STUDENT: &str = "ESTUDANTE";
pub const CATEGORY_STAFF: &str = "FUNCIONARIO";

/// Prefix of the per-export process id
pub const PROCESS_PREFIX: &str = "IMPORTACAO";

/// Value of the data-origin column on every row
pub const DATA_ORIGIN: &str = "Sistema Web";

/// Prefix of the downloaded file name
pub const FILE_PREFIX: &str = "onboarding_preenchido_";

/// Media type the file is labelled with
pub const CONTENT_TYPE: &str = "text/csv;charset=utf-8;";

/// UTF-8 byte-order mark prepended to the document
pub const BOM: &str = "\u{FEFF}";

/// Whether `column` is one of the embedded-JSON columns
pub fn is_json_column(column: &str) -> bool {
    JSON_COLUMNS.contains(&column)
}
