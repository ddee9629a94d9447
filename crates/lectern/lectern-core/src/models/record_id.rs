/// Normalize a record id to the `table:key` form.
///
/// Bare ids (`"1"`) get the table prefix; ids already carrying it pass
/// through unchanged. Ids prefixed with a different table are left alone so
/// the lookup misses instead of silently crossing tables.
pub fn ensure_record_id(table: &str, id: &str) -> String {
    let id = id.trim();
    if id.contains(':') {
        id.to_string()
    } else {
        format!("{table}:{id}")
    }
}
