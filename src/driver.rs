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

use crate::ast::{Expr, FunctionDecl, Stmt};
use crate::context::GenerationContext;
use crate::descriptor::BindingDescriptor;
use crate::diagnostics::DiagnosticPrinter;
use crate::error::CodegenError;
use crate::handlers::{Handler, ParameterHandler};
use crate::types::TypeEnv;

/// Name of the runtime array variable the transformed function body reads
/// its raw input values from.
pub const HANDLER_PARAMS_VAR: &str = "params";

/// The extraction expression generated for one annotated parameter,
/// spliced in at the parameter's position by the surrounding generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedBinding {
    pub param_name: String,
    pub position: usize,
    pub expression: Expr,
}

/// Everything generation produced for one function: the per-parameter
/// extraction expressions, the plumbing statements around the user call,
/// and the descriptor list the packaging step serializes.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFunction {
    pub name: String,
    pub bindings: Vec<GeneratedBinding>,
    pub setup: Vec<Stmt>,
    pub flush: Vec<Stmt>,
    pub descriptors: Vec<BindingDescriptor>,
}

/// Runs the three-phase handler sequence over one function's parameters,
/// in declaration order.
///
/// Fail-fast: the first failing parameter aborts the whole function with
/// no partial output. Every annotated parameter that survives contributes
/// exactly one expression and exactly one descriptor.
pub fn generate_function(
    func: &FunctionDecl,
    types: &TypeEnv,
) -> Result<GeneratedFunction, CodegenError> {
    let mut ctx = GenerationContext::new(types, func.mode, HANDLER_PARAMS_VAR);
    let mut bindings = Vec::new();
    let mut descriptors = Vec::new();

    for annotated in &func.params {
        // Unannotated parameters are not part of binding generation.
        let Some(annotation) = &annotated.annotation else {
            continue;
        };

        let kind = annotation.kind().ok_or_else(|| {
            CodegenError::unrecognized_binding_kind(&annotation.tag, annotation.span)
                .in_function(&func.name)
        })?;

        let mut handler = Handler::for_kind(kind, annotated.param.clone(), annotation.clone());
        let expression = handler
            .build_invocation_expression(&mut ctx)
            .map_err(|e| e.in_function(&func.name))?;
        handler.post_invocation_process(&mut ctx);
        descriptors.push(handler.build_binding_descriptor());

        bindings.push(GeneratedBinding {
            param_name: annotated.param.name.clone(),
            position: annotated.param.position,
            expression,
        });
    }

    Ok(GeneratedFunction {
        name: func.name.clone(),
        bindings,
        setup: ctx.setup,
        flush: ctx.flush,
        descriptors,
    })
}

/// Outcome of generating every function in a compilation unit.
#[derive(Debug, Default)]
pub struct UnitOutcome {
    pub functions: Vec<GeneratedFunction>,
    pub errors: Vec<CodegenError>,
}

impl UnitOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Renders every collected error through the diagnostic sink.
    pub fn report(&self, printer: &DiagnosticPrinter) {
        for error in &self.errors {
            printer.print(error);
        }
    }
}

/// Generates each function of a compilation unit independently.
///
/// Failure isolation is at function granularity: a failing function adds
/// one diagnostic and suppresses only its own output; siblings still
/// generate normally.
pub fn generate_unit(funcs: &[FunctionDecl], types: &TypeEnv) -> UnitOutcome {
    let mut outcome = UnitOutcome::default();
    for func in funcs {
        match generate_function(func, types) {
            Ok(generated) => outcome.functions.push(generated),
            Err(error) => outcome.errors.push(error),
        }
    }
    outcome
}
