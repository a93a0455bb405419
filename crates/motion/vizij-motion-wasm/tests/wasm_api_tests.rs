#![cfg(target_arch = "wasm32")]
use js_sys::Reflect;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use serde_wasm_bindgen as swb;
use vizij_motion_wasm::{
    abi_version, motion_generator, motion_generator_all, motion_generator_json,
    motion_generator_strict,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(obj: &JsValue, path: &[&str]) -> JsValue {
    path.iter().fold(obj.clone(), |acc, key| {
        Reflect::get(&acc, &JsValue::from_str(key)).unwrap()
    })
}

fn js_object(v: JsonValue) -> JsValue {
    v.serialize(&swb::Serializer::json_compatible()).unwrap()
}

fn num(v: f64) -> JsValue {
    JsValue::from_f64(v)
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn defaults_apply_for_undefined_arguments() {
    let out = motion_generator(
        num(100.0),
        JsValue::UNDEFINED,
        JsValue::UNDEFINED,
        JsValue::UNDEFINED,
        JsValue::UNDEFINED,
    )
    .unwrap();
    assert_eq!(get(&out, &["meta", "version"]).as_f64(), Some(7.0));
    assert_eq!(get(&out, &["meta", "mode"]).as_string().as_deref(), Some("move"));
    assert_eq!(get(&out, &["natural", "duration"]).as_f64(), Some(122.0));
    assert_eq!(get(&out, &["speedUnit"]).as_string().as_deref(), Some("px/s"));
    assert_eq!(
        get(&out, &["natural", "curves", "easeOut"]).as_string().as_deref(),
        Some("cubic-bezier(0, 0, 0.3, 1)")
    );
}

#[wasm_bindgen_test]
fn string_inputs_are_parsed_like_parse_float() {
    let params = js_object(json!({ "sizeFactorAdjuster": "2" }));
    let out = motion_generator(
        JsValue::from_str("100px"),
        JsValue::from_str("20"),
        JsValue::from_str("move"),
        num(7.0),
        params,
    )
    .unwrap();
    assert_eq!(get(&out, &["input", "distance"]).as_f64(), Some(100.0));
    assert_eq!(get(&out, &["input", "sizeFactorAdjuster"]).as_f64(), Some(2.0));
}

#[wasm_bindgen_test]
fn garbage_distance_yields_nan_not_error() {
    let out = motion_generator(
        JsValue::from_str("abc"),
        JsValue::UNDEFINED,
        JsValue::from_str("fade"),
        num(6.0),
        JsValue::NULL,
    )
    .unwrap();
    assert!(get(&out, &["natural", "speed"]).as_f64().unwrap().is_nan());
}

#[wasm_bindgen_test]
fn unknown_mode_has_only_meta_and_input() {
    let out = motion_generator(
        num(10.0),
        JsValue::UNDEFINED,
        JsValue::from_str("rotate"),
        JsValue::UNDEFINED,
        JsValue::UNDEFINED,
    )
    .unwrap();
    assert!(get(&out, &["natural"]).is_undefined());
    assert_eq!(get(&out, &["meta", "mode"]).as_string().as_deref(), Some("rotate"));
}

#[wasm_bindgen_test]
fn all_modes_and_json_request() {
    let all = motion_generator_all(num(64.0), num(20.0), num(6.0), JsValue::UNDEFINED).unwrap();
    assert_eq!(get(&all, &["move", "natural", "speed"]).as_f64(), Some(1392.0));
    assert!(get(&all, &["fade", "speedUnit"]).is_undefined());

    let req = js_object(json!({ "distance": 0, "mode": "fade" }));
    let out = motion_generator_json(req).unwrap();
    let as_json: JsonValue = swb::from_value(out).unwrap();
    assert_eq!(as_json["natural"]["speed"].as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn strict_variant_throws() {
    let err = motion_generator_strict(
        num(10.0),
        num(0.0),
        JsValue::from_str("move"),
        num(7.0),
        JsValue::UNDEFINED,
    );
    assert!(err.is_err());
}
