//! Masking and label helpers for the presentation layer.
//!
//! All functions are total: input that does not match the expected shape is
//! returned unchanged rather than rejected, so callers can feed raw backend
//! strings straight into the grid.

/// Keep only ASCII digits.
fn digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask a CPF as `000.000.000-00`. Anything that is not 11 digits is
/// returned unchanged.
pub fn mask_cpf(input: &str) -> String {
    let d = digits(input);
    if d.len() != 11 {
        return input.to_string();
    }
    format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
}

/// Mask a CNPJ as `00.000.000/0000-00`. Anything that is not 14 digits is
/// returned unchanged.
pub fn mask_cnpj(input: &str) -> String {
    let d = digits(input);
    if d.len() != 14 {
        return input.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[0..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..14]
    )
}

/// Mask a CPF or CNPJ depending on digit count.
pub fn mask_person_document(input: &str) -> String {
    match digits(input).len() {
        11 => mask_cpf(input),
        14 => mask_cnpj(input),
        _ => input.to_string(),
    }
}

/// Mask a Brazilian phone number, landline `(00) 0000-0000` or mobile
/// `(00) 00000-0000`.
pub fn mask_phone(input: &str) -> String {
    let d = digits(input);
    match d.len() {
        10 => format!("({}) {}-{}", &d[0..2], &d[2..6], &d[6..10]),
        11 => format!("({}) {}-{}", &d[0..2], &d[2..7], &d[7..11]),
        _ => input.to_string(),
    }
}

/// Portuguese label for a backend document status code. Unknown codes pass
/// through untouched so new backend statuses still render.
pub fn status_label(status: &str) -> String {
    match status {
        "generated" => "Gerado".to_string(),
        "pending_revision" => "Aguardando revisão".to_string(),
        "under_revision" => "Em revisão".to_string(),
        "approved" => "Aprovado".to_string(),
        "awaiting_signature" => "Aguardando assinatura".to_string(),
        "signed" => "Assinado".to_string(),
        "finalized" => "Finalizado".to_string(),
        other => other.to_string(),
    }
}
