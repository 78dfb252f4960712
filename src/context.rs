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

use crate::ast::{self, Expr, Stmt};
use crate::types::TypeEnv;

/// Import prefix under which the serverless runtime SDK is visible in
/// generated code.
pub const RUNTIME_MODULE: &str = "cloudfn";

/// How the enclosing function's external contract is shaped.
///
/// Decided by the front end before generation starts; read-only to every
/// handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingMode {
    /// The function's sole contract is one HTTP request in, one HTTP
    /// response out.
    PureHttp,

    /// The function exposes one or more independently named bindings,
    /// HTTP possibly among them.
    Structured,
}

/// Per-function scratch state shared by every handler processing the
/// function's parameters.
///
/// Created fresh for each function being transformed, mutated by handlers
/// in parameter-declaration order, discarded once the transformed body is
/// emitted. Nothing in here crosses function boundaries.
#[derive(Debug)]
pub struct GenerationContext<'env> {
    /// Compiler-wide symbol/type environment.
    pub types: &'env TypeEnv,

    /// Binding mode of the enclosing function.
    pub mode: BindingMode,

    /// Name of the runtime array variable holding the raw input values.
    pub handler_params: String,

    /// Statements to emit before the user function call (output slot
    /// creation and similar plumbing).
    pub setup: Vec<Stmt>,

    /// Statements to emit after the user function call (output flushes).
    pub flush: Vec<Stmt>,

    next_output_slot: usize,
}

impl<'env> GenerationContext<'env> {
    pub fn new(types: &'env TypeEnv, mode: BindingMode, handler_params: impl Into<String>) -> Self {
        Self {
            types,
            mode,
            handler_params: handler_params.into(),
            setup: Vec::new(),
            flush: Vec::new(),
            next_output_slot: 0,
        }
    }

    pub fn is_pure_http(&self) -> bool {
        self.mode == BindingMode::PureHttp
    }

    /// A reference to the raw-input array variable.
    pub fn params_ref(&self) -> Expr {
        ast::variable_ref(&self.handler_params)
    }

    /// A call into the runtime SDK's extraction-function surface.
    pub fn runtime_call(&self, function: &str, arguments: Vec<Expr>) -> Expr {
        ast::call(Some(RUNTIME_MODULE), function, arguments)
    }

    pub fn push_setup(&mut self, stmt: Stmt) {
        self.setup.push(stmt);
    }

    pub fn push_flush(&mut self, stmt: Stmt) {
        self.flush.push(stmt);
    }

    /// A fresh variable name for an output-binding slot. Counter is
    /// per-function, so slot names are stable across runs.
    pub fn fresh_output_slot(&mut self) -> String {
        let slot = format!("outputBinding{}", self.next_output_slot);
        self.next_output_slot += 1;
        slot
    }
}
