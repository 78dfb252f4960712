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
use crate::handlers::{ParameterHandler, DEFAULT_STORAGE_CONNECTION};

/// Handler for the input parameter annotation `@BlobTrigger`.
///
/// Blob content binds as raw bytes first, text second; the byte-array
/// check runs before the string check.
#[derive(Debug)]
pub struct BlobTriggerHandler {
    param: Param,
    annotation: AnnotationAttachment,
}

impl BlobTriggerHandler {
    pub fn new(param: Param, annotation: AnnotationAttachment) -> Self {
        Self { param, annotation }
    }
}

impl ParameterHandler for BlobTriggerHandler {
    fn build_invocation_expression(
        &mut self,
        ctx: &mut GenerationContext,
    ) -> Result<Expr, CodegenError> {
        let ty = &self.param.declared_type;
        if ctx.types.is_byte_array(ty) {
            Ok(ctx.runtime_call(
                "getBinaryFromInputData",
                vec![ctx.params_ref(), ast::string_literal(&self.param.name)],
            ))
        } else if ctx.types.is_string(ty) {
            Ok(ctx.runtime_call(
                "getStringFromInputData",
                vec![ctx.params_ref(), ast::string_literal(&self.param.name)],
            ))
        } else {
            Err(CodegenError::unsupported_parameter_type(&self.param))
        }
    }

    fn build_binding_descriptor(&self) -> BindingDescriptor {
        let mut binding = BindingDescriptor::new();
        binding.set("type", "blobTrigger");
        binding.set_optional("path", self.annotation.get("path"));
        binding.set_or_default(
            "connection",
            self.annotation.get("connection"),
            DEFAULT_STORAGE_CONNECTION,
        );
        binding
    }
}
