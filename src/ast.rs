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

use std::fmt;

use crate::annotation::AnnotationAttachment;
use crate::context::BindingMode;
use crate::span::Span;
use crate::types::TypeRef;

/// The slice of the host AST the generator produces.
///
/// Only the node shapes needed for parameter rewriting exist here; the
/// surrounding code generator owns the full tree and splices these in.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    StringLiteral(String),
    VariableRef(String),

    Call {
        /// Import prefix of the called module, `None` for local calls.
        module: Option<String>,
        function: String,
        arguments: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let { name: String, init: Expr },
    Expression(Expr),
}

/// Construct a call-expression node.
pub fn call(module: Option<&str>, function: &str, arguments: Vec<Expr>) -> Expr {
    Expr::Call {
        module: module.map(str::to_string),
        function: function.to_string(),
        arguments,
    }
}

/// Construct a variable-reference node.
pub fn variable_ref(name: &str) -> Expr {
    Expr::VariableRef(name.to_string())
}

/// Construct a string-literal node.
pub fn string_literal(value: &str) -> Expr {
    Expr::StringLiteral(value.to_string())
}

/// Represents **one declared parameter** in a source function signature.
///
/// Immutable once captured; the generator only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name (identifier), used verbatim as the binding name.
    pub name: String,

    /// Declared type, resolved by the host compiler.
    pub declared_type: TypeRef,

    /// Ordinal position in the parameter list.
    pub position: usize,

    /// Source position, for diagnostics.
    pub span: Span,
}

impl Param {
    pub fn new(name: impl Into<String>, declared_type: TypeRef, position: usize) -> Self {
        Self {
            name: name.into(),
            declared_type,
            position,
            span: Span::default(),
        }
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// One parameter together with its binding annotation, if any.
/// Unannotated parameters pass through the generator untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedParam {
    pub param: Param,
    pub annotation: Option<AnnotationAttachment>,
}

/// A source function declaration, as handed over by the host compiler
/// front end. The binding mode is decided there and is read-only to the
/// generator.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<AnnotatedParam>,
    pub mode: BindingMode,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, mode: BindingMode) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            mode,
        }
    }

    /// Adds an annotated parameter (builder-style). Position is assigned
    /// from the current parameter count.
    pub fn with_param(mut self, name: &str, ty: TypeRef, annotation: AnnotationAttachment) -> Self {
        let position = self.params.len();
        self.params.push(AnnotatedParam {
            param: Param::new(name, ty, position),
            annotation: Some(annotation),
        });
        self
    }

    /// Adds a plain, unannotated parameter (builder-style).
    pub fn with_plain_param(mut self, name: &str, ty: TypeRef) -> Self {
        let position = self.params.len();
        self.params.push(AnnotatedParam {
            param: Param::new(name, ty, position),
            annotation: None,
        });
        self
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::StringLiteral(value) => write!(f, "\"{}\"", value),
            Expr::VariableRef(name) => write!(f, "{}", name),
            Expr::Call {
                module,
                function,
                arguments,
            } => {
                if let Some(module) = module {
                    write!(f, "{}:", module)?;
                }
                write!(f, "{}(", function)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, init } => write!(f, "let {} = {};", name, init),
            Stmt::Expression(expr) => write!(f, "{};", expr),
        }
    }
}
