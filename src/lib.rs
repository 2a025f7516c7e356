pub mod config;
pub mod diagnostic;
pub mod model;
pub mod sql;

use wasm_bindgen::prelude::*;

pub use diagnostic::{Diagnostic, DiagnosticCode, Position, Severity};
pub use model::{Field, ForeignKey, LinkError, LogicalType, Relationship, Schema, Table};
pub use sql::{
    Dialect, GenerateOptions, ParseMode, ParseOptions, ParseOutcome, SqlParseError,
    generate_sql, generate_sql_with, infer_relationships, map_data_type, parse_sql,
    parse_sql_with,
};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn to_js(json: serde_json::Result<String>) -> Result<JsValue, JsValue> {
    let json = json.map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Parse DDL into `{ schema, diagnostics }`. Strict mode rejects with the first error.
#[wasm_bindgen(js_name = "parseSql")]
pub fn parse_sql_js(sql: &str, strict: Option<bool>) -> Result<JsValue, JsValue> {
    let options = ParseOptions {
        mode: if strict.unwrap_or(false) {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        },
        ..ParseOptions::default()
    };
    let outcome = parse_sql_with(sql, &options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(serde_json::to_string(&outcome))
}

/// Render a schema object as CREATE TABLE statements for `dialect`.
#[wasm_bindgen(js_name = "generateSql")]
pub fn generate_sql_js(
    schema: JsValue,
    dialect: &str,
    with_defaults: Option<bool>,
) -> Result<String, JsValue> {
    let json: String = js_sys::JSON::stringify(&schema)?.into();
    let schema = Schema::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = GenerateOptions {
        with_defaults: with_defaults.unwrap_or(false),
    };
    Ok(generate_sql_with(&schema, Dialect::resolve(dialect), &options))
}

#[wasm_bindgen(js_name = "mapDataType")]
pub fn map_data_type_js(raw: &str, dialect: &str) -> String {
    map_data_type(raw, Dialect::resolve(dialect))
}

/// Canonical label for a dialect or hosting-provider name.
#[wasm_bindgen(js_name = "normalizeDialect")]
pub fn normalize_dialect(label: &str) -> String {
    Dialect::resolve(label).label().to_string()
}
