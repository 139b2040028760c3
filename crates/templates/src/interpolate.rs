use chrono::NaiveDateTime;

/// Field lookup for placeholder resolution. Implemented by the request's
/// field map in the engine crate.
pub trait FieldSource {
    fn get(&self, key: &str) -> Option<&str>;
}

impl FieldSource for &[(String, String)] {
    fn get(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Resolves `{key}` / `{key|default}` placeholders against `fields`.
///
/// A placeholder without a default falls back to `N/A`. The defaults
/// `@date` and `@datetime` expand to the render timestamp, which keeps
/// output reproducible when the caller pins the timestamp.
pub fn interpolate(template: &str, fields: &dyn FieldSource, now: NaiveDateTime) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let token = &after[..end];
                let (key, default) = match token.split_once('|') {
                    Some((key, default)) => (key, default),
                    None => (token, "N/A"),
                };
                match fields.get(key) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&resolve_default(default, now)),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn resolve_default(default: &str, now: NaiveDateTime) -> String {
    match default {
        "@date" => now.format("%Y-%m-%d").to_string(),
        "@datetime" => now.format("%Y-%m-%d %H:%M:%S").to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 23)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn fields() -> Vec<(String, String)> {
        vec![
            ("loan_id".to_string(), "L005".to_string()),
            ("prazo_meses".to_string(), "24".to_string()),
        ]
    }

    #[test]
    fn substitutes_present_fields() {
        let fields = fields();
        let out = interpolate(
            "Empréstimo {loan_id} em {prazo_meses} meses",
            &fields.as_slice(),
            now(),
        );
        assert_eq!(out, "Empréstimo L005 em 24 meses");
    }

    #[test]
    fn missing_field_uses_na_placeholder() {
        let fields = fields();
        let out = interpolate("Morada: {morada}", &fields.as_slice(), now());
        assert_eq!(out, "Morada: N/A");
    }

    #[test]
    fn explicit_defaults() {
        let fields = fields();
        assert_eq!(
            interpolate("{valor|0.00} EUR", &fields.as_slice(), now()),
            "0.00 EUR"
        );
        assert_eq!(interpolate("id={loan_id|}", &fields.as_slice(), now()), "id=L005");
        assert_eq!(interpolate("id={other|}", &fields.as_slice(), now()), "id=");
    }

    #[test]
    fn dynamic_date_defaults() {
        let fields = fields();
        assert_eq!(
            interpolate("Emissão: {data_emissao|@date}", &fields.as_slice(), now()),
            "Emissão: 2025-05-23"
        );
        assert_eq!(
            interpolate("{quando|@datetime}", &fields.as_slice(), now()),
            "2025-05-23 14:30:00"
        );
    }

    #[test]
    fn stray_brace_is_literal() {
        let fields = fields();
        assert_eq!(interpolate("a { b", &fields.as_slice(), now()), "a { b");
    }
}
