//! JS bindings for `vizij-motion-core`.
//!
//! Arguments are taken as raw `JsValue`s so that the positional defaults and
//! `parseFloat`-style coercion behave like a plain JS function:
//! `undefined` selects the default, `null` and garbage coerce to NaN.

use js_sys::{Reflect, JSON};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_motion_core::constants::{DEFAULT_MODE, DEFAULT_SIZE, DEFAULT_VERSION};
use vizij_motion_core::formulas::FormulaVersion;
use vizij_motion_core::{compute, compute_all, try_compute, MotionParams, MotionRequest};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// JS `parseFloat` applied to numbers and strings; other values become NaN.
fn coerce_number(v: &JsValue) -> f64 {
    if let Some(n) = v.as_f64() {
        return n;
    }
    match v.as_string() {
        Some(s) => js_sys::parse_float(&s),
        None => f64::NAN,
    }
}

fn size_arg(v: &JsValue) -> f64 {
    if v.is_undefined() {
        DEFAULT_SIZE
    } else {
        coerce_number(v)
    }
}

/// `undefined` -> "move", `null` -> no mode, numbers are stringified so they
/// echo in `meta.mode` without matching any mode.
fn mode_arg(v: &JsValue) -> Option<String> {
    if v.is_undefined() {
        return Some(DEFAULT_MODE.to_string());
    }
    if v.is_null() {
        return None;
    }
    v.as_string().or_else(|| v.as_f64().map(|n| n.to_string()))
}

/// Integral numbers select by tag; anything else takes the fallback set.
fn version_arg(v: &JsValue) -> i64 {
    if v.is_undefined() {
        return DEFAULT_VERSION;
    }
    match v.as_f64() {
        Some(n) if n.fract() == 0.0 && n.abs() <= i64::MAX as f64 => n as i64,
        _ => FormulaVersion::FALLBACK.tag(),
    }
}

/// Reads `params.sizeFactorAdjuster` without requiring a well-formed object.
fn params_arg(v: &JsValue) -> MotionParams {
    if jsvalue_is_undefined_or_null(v) {
        return MotionParams::default();
    }
    let adjuster = Reflect::get(v, &JsValue::from_str("sizeFactorAdjuster"))
        .ok()
        .filter(|a| !jsvalue_is_undefined_or_null(a))
        .map(|a| coerce_number(&a));
    MotionParams {
        size_factor_adjuster: adjuster,
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    // Flattened results serialize as maps; emit plain objects instead of `Map`.
    let serializer = swb::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("result error: {e}")))
}

/// Timing for one mode. Signature and defaults:
///   motionGenerator(distance, size = 20, mode = "move", version = 7, params = {})
/// Never throws for bad numeric input; fields become NaN instead.
#[wasm_bindgen(js_name = motionGenerator)]
pub fn motion_generator(
    distance: JsValue,
    size: JsValue,
    mode: JsValue,
    version: JsValue,
    params: JsValue,
) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    let mode = mode_arg(&mode);
    let result = compute(
        coerce_number(&distance),
        size_arg(&size),
        mode.as_deref(),
        version_arg(&version),
        &params_arg(&params),
    );
    to_js(&result)
}

/// Timing for move, scale and fade in one object.
#[wasm_bindgen(js_name = motionGeneratorAll)]
pub fn motion_generator_all(
    distance: JsValue,
    size: JsValue,
    version: JsValue,
    params: JsValue,
) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    let result = compute_all(
        coerce_number(&distance),
        size_arg(&size),
        version_arg(&version),
        &params_arg(&params),
    );
    to_js(&result)
}

/// Validated variant; throws with the validation message.
#[wasm_bindgen(js_name = motionGeneratorStrict)]
pub fn motion_generator_strict(
    distance: JsValue,
    size: JsValue,
    mode: JsValue,
    version: JsValue,
    params: JsValue,
) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    let mode = mode_arg(&mode);
    let result = try_compute(
        coerce_number(&distance),
        size_arg(&size),
        mode.as_deref(),
        version_arg(&version),
        &params_arg(&params),
    )
    .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&result)
}

/// Request-object form: `{ distance, size?, mode?, version?, params? }`.
#[wasm_bindgen(js_name = motionGeneratorJson)]
pub fn motion_generator_json(request: JsValue) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    if jsvalue_is_undefined_or_null(&request) {
        return Err(JsError::new("motionGeneratorJson: request is null/undefined"));
    }
    // Stringify so the core request parser (and its coercion) handles the shape
    let s = JSON::stringify(&request)
        .map_err(|e| JsError::new(&format!("request stringify error: {:?}", e)))?
        .as_string()
        .ok_or_else(|| JsError::new("motionGeneratorJson: stringify produced non-string"))?;
    let req = MotionRequest::from_json(&s).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&req.compute())
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
