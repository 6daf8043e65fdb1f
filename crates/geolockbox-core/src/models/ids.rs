use uuid::Uuid;

/// Generate an opaque record identifier such as `TEL-1A2B3C4D`
pub fn generate_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, hex[..8].to_uppercase())
}
