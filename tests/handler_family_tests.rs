use pretty_assertions::assert_eq;
use serde_json::json;

use cloudbind::annotation::AnnotationAttachment;
use cloudbind::ast::{self, Param, Stmt};
use cloudbind::context::{BindingMode, GenerationContext};
use cloudbind::error::ErrorKind;
use cloudbind::handlers::blob::BlobTriggerHandler;
use cloudbind::handlers::queue::{QueueOutputHandler, QueueTriggerHandler};
use cloudbind::handlers::timer::TimerTriggerHandler;
use cloudbind::handlers::ParameterHandler;
use cloudbind::span::Span;
use cloudbind::types::{TypeEnv, TypeRef};

fn annotation(tag: &str) -> AnnotationAttachment {
    AnnotationAttachment::new(tag, Span::default())
}

fn params_ref() -> ast::Expr {
    ast::variable_ref("params")
}

#[test]
fn queue_trigger_dispatches_on_string_then_json() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");

    let mut string_handler = QueueTriggerHandler::new(
        Param::new("msg", TypeRef::builtin("string"), 0),
        annotation("QueueTrigger"),
    );
    assert_eq!(
        string_handler.build_invocation_expression(&mut ctx).unwrap(),
        ast::call(
            Some("cloudfn"),
            "getStringFromInputData",
            vec![params_ref(), ast::string_literal("msg")],
        )
    );

    let mut json_handler = QueueTriggerHandler::new(
        Param::new("event", TypeRef::builtin("json"), 0),
        annotation("QueueTrigger"),
    );
    assert_eq!(
        json_handler.build_invocation_expression(&mut ctx).unwrap(),
        ast::call(
            Some("cloudfn"),
            "getJsonFromInputData",
            vec![params_ref(), ast::string_literal("event")],
        )
    );

    let mut bad_handler = QueueTriggerHandler::new(
        Param::new("raw", TypeRef::builtin("byte[]"), 0),
        annotation("QueueTrigger"),
    );
    let error = bad_handler.build_invocation_expression(&mut ctx).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnsupportedParameterType);
}

#[test]
fn queue_trigger_descriptor_defaults_the_connection() {
    let handler = QueueTriggerHandler::new(
        Param::new("msg", TypeRef::builtin("string"), 0),
        annotation("QueueTrigger").with("queueName", "orders"),
    );
    assert_eq!(
        serde_json::to_value(handler.build_binding_descriptor()).unwrap(),
        json!({
            "type": "queueTrigger",
            "queueName": "orders",
            "connection": "AzureWebJobsStorage",
        })
    );

    let custom = QueueTriggerHandler::new(
        Param::new("msg", TypeRef::builtin("string"), 0),
        annotation("QueueTrigger")
            .with("queueName", "orders")
            .with("connection", "OrdersStorage"),
    );
    assert_eq!(
        custom.build_binding_descriptor().get("connection"),
        Some(&json!("OrdersStorage"))
    );
}

#[test]
fn timer_trigger_accepts_only_json() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");

    let mut handler = TimerTriggerHandler::new(
        Param::new("status", TypeRef::builtin("json"), 0),
        annotation("TimerTrigger").with("schedule", "0 */5 * * * *"),
    );
    assert_eq!(
        handler.build_invocation_expression(&mut ctx).unwrap(),
        ast::call(
            Some("cloudfn"),
            "getJsonFromInputData",
            vec![params_ref(), ast::string_literal("status")],
        )
    );
    assert_eq!(
        serde_json::to_value(handler.build_binding_descriptor()).unwrap(),
        json!({"type": "timerTrigger", "schedule": "0 */5 * * * *"})
    );

    let mut bad = TimerTriggerHandler::new(
        Param::new("status", TypeRef::builtin("string"), 0),
        annotation("TimerTrigger"),
    );
    let error = bad.build_invocation_expression(&mut ctx).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnsupportedParameterType);
    assert!(error.help.is_some());
}

#[test]
fn blob_trigger_prefers_bytes_over_string() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");

    let mut bytes_handler = BlobTriggerHandler::new(
        Param::new("content", TypeRef::builtin("byte[]"), 0),
        annotation("BlobTrigger").with("path", "uploads/{name}"),
    );
    assert_eq!(
        bytes_handler.build_invocation_expression(&mut ctx).unwrap(),
        ast::call(
            Some("cloudfn"),
            "getBinaryFromInputData",
            vec![params_ref(), ast::string_literal("content")],
        )
    );

    let mut string_handler = BlobTriggerHandler::new(
        Param::new("content", TypeRef::builtin("string"), 0),
        annotation("BlobTrigger"),
    );
    assert_eq!(
        string_handler
            .build_invocation_expression(&mut ctx)
            .unwrap()
            .to_string(),
        "cloudfn:getStringFromInputData(params, \"content\")"
    );

    let mut bad = BlobTriggerHandler::new(
        Param::new("content", TypeRef::builtin("json"), 0),
        annotation("BlobTrigger"),
    );
    let error = bad.build_invocation_expression(&mut ctx).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnsupportedParameterType);
}

#[test]
fn blob_trigger_descriptor_copies_path_and_defaults_connection() {
    let handler = BlobTriggerHandler::new(
        Param::new("content", TypeRef::builtin("byte[]"), 0),
        annotation("BlobTrigger").with("path", "uploads/{name}"),
    );
    assert_eq!(
        serde_json::to_value(handler.build_binding_descriptor()).unwrap(),
        json!({
            "type": "blobTrigger",
            "path": "uploads/{name}",
            "connection": "AzureWebJobsStorage",
        })
    );
}

#[test]
fn queue_output_creates_slot_and_flushes_after_the_call() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");
    let mut handler = QueueOutputHandler::new(
        Param::new("notification", TypeRef::builtin("string"), 0),
        annotation("QueueOutput").with("queueName", "notifications"),
    );

    let expr = handler.build_invocation_expression(&mut ctx).unwrap();
    assert_eq!(expr, ast::variable_ref("outputBinding0"));
    assert_eq!(
        ctx.setup,
        vec![Stmt::Let {
            name: "outputBinding0".to_string(),
            init: ast::call(Some("cloudfn"), "createStringOutputBinding", vec![]),
        }]
    );

    handler.post_invocation_process(&mut ctx);
    assert_eq!(
        ctx.flush,
        vec![Stmt::Expression(ast::call(
            Some("cloudfn"),
            "setStringOutput",
            vec![
                params_ref(),
                ast::string_literal("notification"),
                ast::variable_ref("outputBinding0"),
            ],
        ))]
    );
}

#[test]
fn queue_output_rejects_non_string_types() {
    let types = TypeEnv::default();
    let mut ctx = GenerationContext::new(&types, BindingMode::Structured, "params");
    let mut handler = QueueOutputHandler::new(
        Param::new("notification", TypeRef::builtin("json"), 0),
        annotation("QueueOutput"),
    );

    let error = handler.build_invocation_expression(&mut ctx).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnsupportedParameterType);
    // A failed expression phase leaves no plumbing behind.
    assert!(ctx.setup.is_empty());
    assert!(ctx.flush.is_empty());
}

#[test]
fn queue_output_descriptor_marks_direction_out() {
    let handler = QueueOutputHandler::new(
        Param::new("notification", TypeRef::builtin("string"), 0),
        annotation("QueueOutput").with("queueName", "notifications"),
    );
    assert_eq!(
        serde_json::to_value(handler.build_binding_descriptor()).unwrap(),
        json!({
            "type": "queue",
            "direction": "out",
            "queueName": "notifications",
            "connection": "AzureWebJobsStorage",
        })
    );
}
