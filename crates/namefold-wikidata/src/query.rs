//! SPARQL query construction

/// Build the query selecting every label of the item whose label in
/// `language` is exactly `entity` and which is an instance of `instance_of`.
///
/// `entity` is escaped as a string literal; `language` and `instance_of`
/// must already be validated (see [`WikidataConfig::validate`](crate::WikidataConfig::validate)).
pub fn country_labels_query(entity: &str, language: &str, instance_of: &str) -> String {
    format!(
        r#"
SELECT DISTINCT ?label WHERE {{
  ?country rdfs:label "{}"@{} ;
           wdt:P31 wd:{} .
  ?country rdfs:label ?label .
}}"#,
        escape_literal(entity),
        language,
        instance_of
    )
}

/// Escape a value for use inside a double-quoted SPARQL string literal.
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            other => escaped.push(other),
        }
    }
    escaped
}
