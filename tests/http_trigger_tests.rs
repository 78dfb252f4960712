use pretty_assertions::assert_eq;
use serde_json::json;

use cloudbind::annotation::AnnotationAttachment;
use cloudbind::ast::{self, Param};
use cloudbind::context::{BindingMode, GenerationContext};
use cloudbind::error::ErrorKind;
use cloudbind::handlers::http::HttpTriggerHandler;
use cloudbind::handlers::ParameterHandler;
use cloudbind::span::Span;
use cloudbind::types::{TypeEnv, TypeRef};

fn trigger(name: &str, ty: TypeRef) -> HttpTriggerHandler {
    HttpTriggerHandler::new(
        Param::new(name, ty, 0),
        AnnotationAttachment::new("HTTPTrigger", Span::default()),
    )
}

fn params_ref() -> ast::Expr {
    ast::variable_ref("params")
}

#[test]
fn pure_mode_request_object_extracts_from_params() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::PureHttp, "params");
    let mut handler = trigger("req", TypeRef::in_module("net/http", "Request"));

    let expr = handler.build_invocation_expression(&mut ctx).unwrap();
    assert_eq!(
        expr,
        ast::call(Some("cloudfn"), "getHTTPRequestFromParams", vec![params_ref()])
    );
}

#[test]
fn pure_mode_string_extracts_request_body() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::PureHttp, "params");
    let mut handler = trigger("body", TypeRef::builtin("string"));

    let expr = handler.build_invocation_expression(&mut ctx).unwrap();
    assert_eq!(
        expr,
        ast::call(Some("cloudfn"), "getStringFromHTTPReq", vec![params_ref()])
    );
}

#[test]
fn pure_mode_json_and_bytes_have_their_own_extractors() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::PureHttp, "params");

    let mut json_handler = trigger("payload", TypeRef::builtin("json"));
    assert_eq!(
        json_handler.build_invocation_expression(&mut ctx).unwrap(),
        ast::call(Some("cloudfn"), "getJsonFromHTTPReq", vec![params_ref()])
    );

    let mut bytes_handler = trigger("raw", TypeRef::builtin("byte[]"));
    assert_eq!(
        bytes_handler.build_invocation_expression(&mut ctx).unwrap(),
        ast::call(Some("cloudfn"), "getBinaryFromHTTPReq", vec![params_ref()])
    );
}

#[test]
fn pure_mode_rejects_unmapped_types() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::PureHttp, "params");
    let mut handler = trigger("count", TypeRef::builtin("int"));

    let error = handler.build_invocation_expression(&mut ctx).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnsupportedParameterType);
    assert_eq!(error.message, "Type 'int' is not supported");
}

#[test]
fn structured_mode_rejects_raw_request_object() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");
    let mut handler = trigger("req", TypeRef::in_module("net/http", "Request"));

    let error = handler.build_invocation_expression(&mut ctx).unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidBindingUsage);
    assert_eq!(
        error.message,
        "In a non-pure HTTP scenario, the parameter type cannot be 'net/http:Request'"
    );
}

#[test]
fn structured_mode_rejects_request_object_regardless_of_annotation_keys() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");
    let annotation = AnnotationAttachment::new("HTTPTrigger", Span::default())
        .with("authLevel", "anonymous")
        .with("route", "orders");
    let mut handler = HttpTriggerHandler::new(
        Param::new("req", TypeRef::in_module("net/http", "Request"), 0),
        annotation,
    );

    let error = handler.build_invocation_expression(&mut ctx).unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidBindingUsage);
}

#[test]
fn structured_mode_sdk_request_is_keyed_by_parameter_name() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");
    let mut handler = trigger("httpReq", TypeRef::in_module("cloud/functions", "HTTPRequest"));

    let expr = handler.build_invocation_expression(&mut ctx).unwrap();
    assert_eq!(
        expr,
        ast::call(
            Some("cloudfn"),
            "getHTTPRequestFromInputData",
            vec![params_ref(), ast::string_literal("httpReq")],
        )
    );
}

#[test]
fn structured_mode_string_reads_named_body() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");
    let mut handler = trigger("data", TypeRef::builtin("string"));

    let expr = handler.build_invocation_expression(&mut ctx).unwrap();
    assert_eq!(
        expr.to_string(),
        "cloudfn:getBodyFromHTTPInputData(params, \"data\")"
    );
}

#[test]
fn structured_mode_rejects_json_and_bytes() {
    // json and byte[] only have extraction mappings in pure mode.
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");

    for ty in [TypeRef::builtin("json"), TypeRef::builtin("byte[]")] {
        let symbol = ty.symbol.clone();
        let mut handler = trigger("payload", ty);
        let error = handler.build_invocation_expression(&mut ctx).unwrap_err();
        assert_eq!(error.kind, ErrorKind::UnsupportedParameterType);
        assert_eq!(error.message, format!("Type '{}' is not supported", symbol));
    }
}

#[test]
fn descriptor_copies_declared_keys_verbatim() {
    let annotation = AnnotationAttachment::new("HTTPTrigger", Span::default())
        .with("authLevel", "anonymous")
        .with("route", "orders/{id}");
    let handler = HttpTriggerHandler::new(
        Param::new("req", TypeRef::builtin("string"), 0),
        annotation,
    );

    assert_eq!(
        serde_json::to_value(handler.build_binding_descriptor()).unwrap(),
        json!({
            "type": "httpTrigger",
            "authLevel": "anonymous",
            "route": "orders/{id}",
            "methods": ["get", "post", "put", "delete"],
        })
    );
}

#[test]
fn descriptor_absent_keys_become_null_entries() {
    let handler = trigger("req", TypeRef::builtin("string"));
    let descriptor = handler.build_binding_descriptor();
    assert_eq!(descriptor.get("authLevel"), Some(&serde_json::Value::Null));
    assert_eq!(descriptor.get("route"), Some(&serde_json::Value::Null));
}

#[test]
fn descriptor_methods_list_ignores_annotation_content() {
    let annotation =
        AnnotationAttachment::new("HTTPTrigger", Span::default()).with("methods", "patch");
    let handler = HttpTriggerHandler::new(
        Param::new("req", TypeRef::builtin("string"), 0),
        annotation,
    );

    assert_eq!(
        handler.build_binding_descriptor().get("methods"),
        Some(&json!(["get", "post", "put", "delete"]))
    );
}

#[test]
fn descriptor_building_is_pure() {
    let annotation = AnnotationAttachment::new("HTTPTrigger", Span::default())
        .with("authLevel", "function");
    let handler = HttpTriggerHandler::new(
        Param::new("req", TypeRef::builtin("string"), 0),
        annotation,
    );

    assert_eq!(
        handler.build_binding_descriptor(),
        handler.build_binding_descriptor()
    );
}
