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

use crate::annotation::AnnotationAttachment;
use crate::ast::{self, Expr, Param, Stmt};
use crate::context::GenerationContext;
use crate::descriptor::BindingDescriptor;
use crate::error::CodegenError;
use crate::handlers::{ParameterHandler, DEFAULT_STORAGE_CONNECTION};

/// Handler for the input parameter annotation `@QueueTrigger`.
///
/// Queue payloads arrive in the named input-data slot, so extraction is
/// keyed by the parameter's source-level name.
#[derive(Debug)]
pub struct QueueTriggerHandler {
    param: Param,
    annotation: AnnotationAttachment,
}

impl QueueTriggerHandler {
    pub fn new(param: Param, annotation: AnnotationAttachment) -> Self {
        Self { param, annotation }
    }
}

impl ParameterHandler for QueueTriggerHandler {
    fn build_invocation_expression(
        &mut self,
        ctx: &mut GenerationContext,
    ) -> Result<Expr, CodegenError> {
        let ty = &self.param.declared_type;
        if ctx.types.is_string(ty) {
            Ok(ctx.runtime_call(
                "getStringFromInputData",
                vec![ctx.params_ref(), ast::string_literal(&self.param.name)],
            ))
        } else if ctx.types.is_json(ty) {
            Ok(ctx.runtime_call(
                "getJsonFromInputData",
                vec![ctx.params_ref(), ast::string_literal(&self.param.name)],
            ))
        } else {
            Err(CodegenError::unsupported_parameter_type(&self.param))
        }
    }

    fn build_binding_descriptor(&self) -> BindingDescriptor {
        let mut binding = BindingDescriptor::new();
        binding.set("type", "queueTrigger");
        binding.set_optional("queueName", self.annotation.get("queueName"));
        binding.set_or_default(
            "connection",
            self.annotation.get("connection"),
            DEFAULT_STORAGE_CONNECTION,
        );
        binding
    }
}

/// Handler for the output parameter annotation `@QueueOutput`.
#[derive(Debug)]
pub struct QueueOutputHandler {
    param: Param,
    annotation: AnnotationAttachment,
    slot: Option<String>,
}

impl QueueOutputHandler {
    pub fn new(param: Param, annotation: AnnotationAttachment) -> Self {
        Self {
            param,
            annotation,
            slot: None,
        }
    }
}

impl ParameterHandler for QueueOutputHandler {
    fn build_invocation_expression(
        &mut self,
        ctx: &mut GenerationContext,
    ) -> Result<Expr, CodegenError> {
        if !ctx.types.is_string(&self.param.declared_type) {
            return Err(CodegenError::unsupported_parameter_type(&self.param));
        }
        let slot = ctx.fresh_output_slot();
        let init = ctx.runtime_call("createStringOutputBinding", vec![]);
        ctx.push_setup(Stmt::Let {
            name: slot.clone(),
            init,
        });
        self.slot = Some(slot.clone());
        Ok(ast::variable_ref(&slot))
    }

    fn post_invocation_process(&mut self, ctx: &mut GenerationContext) {
        if let Some(slot) = self.slot.clone() {
            let flush = ctx.runtime_call(
                "setStringOutput",
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
        binding.set("type", "queue");
        binding.set("direction", "out");
        binding.set_optional("queueName", self.annotation.get("queueName"));
        binding.set_or_default(
            "connection",
            self.annotation.get("connection"),
            DEFAULT_STORAGE_CONNECTION,
        );
        binding
    }
}
