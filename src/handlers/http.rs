/*
 * ==========================================================================
 * CLOUDBIND - Serverless Binding Codegen
 * ==========================================================================
 *
 * This file is part of the Cloudbind compiler extension project.
 *
 * Cloudbind is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde_json::Value;

use crate::annotation::AnnotationAttachment;
use crate::ast::{self, Expr, Param, Stmt};
use crate::context::GenerationContext;
use crate::descriptor::BindingDescriptor;
use crate::error::CodegenError;
use crate::handlers::ParameterHandler;

/// HTTP methods the trigger accepts. Handler-constant, deliberately not
/// derived from annotation keys.
const ACCEPTED_METHODS: [&str; 4] = ["get", "post", "put", "delete"];

/// Handler for the input parameter annotation `@HTTPTrigger`.
///
/// Type checks run in a fixed order (request object, string, json, byte
/// array); the first match decides the extraction call.
#[derive(Debug)]
pub struct HttpTriggerHandler {
    param: Param,
    annotation: AnnotationAttachment,
}

impl HttpTriggerHandler {
    pub fn new(param: Param, annotation: AnnotationAttachment) -> Self {
        Self { param, annotation }
    }
}

impl ParameterHandler for HttpTriggerHandler {
    fn build_invocation_expression(
        &mut self,
        ctx: &mut GenerationContext,
    ) -> Result<Expr, CodegenError> {
        let ty = &self.param.declared_type;
        let http_request_type = ctx.types.is_http_request(ty);
        if ctx.is_pure_http() {
            if http_request_type {
                Ok(ctx.runtime_call("getHTTPRequestFromParams", vec![ctx.params_ref()]))
            } else if ctx.types.is_string(ty) {
                Ok(ctx.runtime_call("getStringFromHTTPReq", vec![ctx.params_ref()]))
            } else if ctx.types.is_json(ty) {
                Ok(ctx.runtime_call("getJsonFromHTTPReq", vec![ctx.params_ref()]))
            } else if ctx.types.is_byte_array(ty) {
                Ok(ctx.runtime_call("getBinaryFromHTTPReq", vec![ctx.params_ref()]))
            } else {
                Err(CodegenError::unsupported_parameter_type(&self.param))
            }
        } else if http_request_type {
            Err(CodegenError::invalid_binding_usage(
                format!(
                    "In a non-pure HTTP scenario, the parameter type cannot be '{}:Request'",
                    ctx.types.http_module()
                ),
                self.param.span,
            ))
        } else if ctx.types.is_runtime_type("HTTPRequest", ty) {
            Ok(ctx.runtime_call(
                "getHTTPRequestFromInputData",
                vec![ctx.params_ref(), ast::string_literal(&self.param.name)],
            ))
        } else if ctx.types.is_string(ty) {
            Ok(ctx.runtime_call(
                "getBodyFromHTTPInputData",
                vec![ctx.params_ref(), ast::string_literal(&self.param.name)],
            ))
        } else {
            Err(CodegenError::unsupported_parameter_type(&self.param))
        }
    }

    fn build_binding_descriptor(&self) -> BindingDescriptor {
        let mut binding = BindingDescriptor::new();
        binding.set("type", "httpTrigger");
        binding.set_optional("authLevel", self.annotation.get("authLevel"));
        binding.set_optional("route", self.annotation.get("route"));
        binding.set("methods", Value::from(ACCEPTED_METHODS.to_vec()));
        binding
    }
}

/// Handler for the output parameter annotation `@HTTPOutput`.
///
/// The parameter becomes a reference to a fresh output slot; the slot is
/// created before the user call and flushed back into the raw output data
/// after it.
#[derive(Debug)]
pub struct HttpOutputHandler {
    param: Param,
    #[allow(dead_code)] // no descriptor keys read from it yet
    annotation: AnnotationAttachment,
    slot: Option<String>,
}

impl HttpOutputHandler {
    pub fn new(param: Param, annotation: AnnotationAttachment) -> Self {
        Self {
            param,
            annotation,
            slot: None,
        }
    }
}

impl ParameterHandler for HttpOutputHandler {
    fn build_invocation_expression(
        &mut self,
        ctx: &mut GenerationContext,
    ) -> Result<Expr, CodegenError> {
        if !ctx.types.is_runtime_type("HTTPBinding", &self.param.declared_type) {
            return Err(CodegenError::unsupported_parameter_type(&self.param));
        }
        let slot = ctx.fresh_output_slot();
        let init = ctx.runtime_call("createHTTPOutputBinding", vec![]);
        ctx.push_setup(Stmt::Let {
            name: slot.clone(),
            init,
        });
        self.slot = Some(slot.clone());
        Ok(ast::variable_ref(&slot))
    }

    fn post_invocation_process(&mut self, ctx: &mut GenerationContext) {
        // Unreachable without a slot: the driver never runs this phase
        // when expression generation failed.
        if let Some(slot) = self.slot.clone() {
            let flush = ctx.runtime_call(
                "setHTTPOutput",
                vec![
                    ctx.params_ref(),
                    ast::string_literal(&self.param.name),
                    ast::variable_ref(&slot),
                ],
            );
            ctx.push_flush(Stmt::Expression(flush));
        }
    }

    fn build_binding_descriptor(&self) -> BindingDescriptor {
        let mut binding = BindingDescriptor::new();
        binding.set("type", "http");
        binding.set("direction", "out");
        binding
    }
}
