//! Mount options

use log::LevelFilter;
use wasm_bindgen::prelude::*;

use crate::constants::DEFAULT_CANVAS_ID;

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropOptions {
    pub canvas_id: String,
    pub condition: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.into(),
            condition: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl BackdropOptions {
    /// Accepts either a canvas id string or an options object
    /// `{ canvasId, condition, logLevel }`. Missing or mistyped fields keep
    /// their defaults.
    pub fn from_js(value: JsValue) -> Self {
        let mut options = Self::default();

        if !value.is_object() {
            if let Some(id) = value.as_string() {
                options.canvas_id = id;
            }
            return options;
        }

        let string_field = |key: &str| {
            js_sys::Reflect::get(&value, &key.into())
                .ok()
                .and_then(|v| v.as_string())
        };

        if let Some(id) = string_field("canvasId") {
            options.canvas_id = id;
        }
        options.condition = string_field("condition");
        if let Some(level) = string_field("logLevel") {
            options.log_level = parse_level(&level).unwrap_or(options.log_level);
        }

        options
    }
}

/// `"off"`, `"error"`, `"warn"`, `"info"`, `"debug"` or `"trace"`, any case.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}
