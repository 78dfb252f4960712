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
use crate::ast::{self, Expr, Param};
use crate::context::GenerationContext;
use crate::descriptor::BindingDescriptor;
use crate::error::CodegenError;
use crate::handlers::ParameterHandler;

/// Handler for the input parameter annotation `@TimerTrigger`.
///
/// The timer payload is a JSON status record; no other declared type has
/// an extraction mapping.
#[derive(Debug)]
pub struct TimerTriggerHandler {
    param: Param,
    annotation: AnnotationAttachment,
}

impl TimerTriggerHandler {
    pub fn new(param: Param, annotation: AnnotationAttachment) -> Self {
        Self { param, annotation }
    }
}

impl ParameterHandler for TimerTriggerHandler {
    fn build_invocation_expression(
        &mut self,
        ctx: &mut GenerationContext,
    ) -> Result<Expr, CodegenError> {
        if ctx.types.is_json(&self.param.declared_type) {
            Ok(ctx.runtime_call(
                "getJsonFromInputData",
                vec![ctx.params_ref(), ast::string_literal(&self.param.name)],
            ))
        } else {
            Err(CodegenError::unsupported_parameter_type(&self.param)
                .with_help("Declare the timer parameter as 'json'."))
        }
    }

    fn build_binding_descriptor(&self) -> BindingDescriptor {
        let mut binding = BindingDescriptor::new();
        binding.set("type", "timerTrigger");
        binding.set_optional("schedule", self.annotation.get("schedule"));
        binding
    }
}
