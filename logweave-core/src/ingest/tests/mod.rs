
/// A well-formed record line.
pub(crate) fn line(ts: &str, level: &str, component: &str, message: &str) -> String {
    serde_json::json!({
        "eventTimestamp": ts,
        "traceLevel": level,
        "component": component,
        "message": message,
    })
    .to_string()
}
