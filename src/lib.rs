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

//! Cloudbind is the binding-generation core of a serverless compiler
//! extension: for every function parameter carrying a trigger or binding
//! annotation it decides the runtime extraction call that replaces the
//! parameter, and emits the deployment descriptor record the packaging
//! step serializes.
//!
//! The host compiler owns parsing, symbol tables and packaging; this
//! crate consumes them through the narrow surfaces in [`types`], [`ast`]
//! and [`annotation`], and produces [`driver::GeneratedFunction`] values.

/// Source positions carried by errors and annotations.
pub mod span;

/// Structured generation errors (unsupported type, invalid usage,
/// unrecognized kind).
pub mod error;

/// Compiler-style stderr rendering of generation errors.
pub mod diagnostics;

/// Declared-type classification against the compiler-wide symbol
/// environment.
pub mod types;

/// The AST slice the generator produces, plus construction primitives.
pub mod ast;

/// Binding annotations: kinds, roles, ordered key/values.
pub mod annotation;

/// Per-function generation scratch state.
pub mod context;

/// Deployment-metadata descriptor records.
pub mod descriptor;

/// The handler contract and the per-binding-kind handler family.
pub mod handlers;

/// The dispatch driver: per-function sequencing and per-unit aggregation.
pub mod driver;

pub use annotation::{AnnotationAttachment, BindingKind, BindingRole};
pub use ast::{AnnotatedParam, Expr, FunctionDecl, Param, Stmt};
pub use context::{BindingMode, GenerationContext};
pub use descriptor::BindingDescriptor;
pub use driver::{generate_function, generate_unit, GeneratedFunction, UnitOutcome};
pub use error::{CodegenError, ErrorKind};
pub use span::Span;
pub use types::{TypeEnv, TypeRef};
