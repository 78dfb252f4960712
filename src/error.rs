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

use crate::ast::Param;
use crate::span::Span;

/// The closed set of generation-time failures.
///
/// Every failure is detected while processing one annotated parameter and
/// is fatal for the enclosing function's generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The declared type has no extraction mapping for the active
    /// (binding kind, mode) pair.
    UnsupportedParameterType,

    /// The declared type is structurally disallowed in the current mode,
    /// even though it would be valid in another mode.
    InvalidBindingUsage,

    /// The annotation tag does not name any known binding kind.
    UnrecognizedBindingKind,
}

impl ErrorKind {
    /// Stable error code for diagnostics output.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::UnsupportedParameterType => "E_UNSUPPORTED_TYPE",
            ErrorKind::InvalidBindingUsage => "E_INVALID_BINDING",
            ErrorKind::UnrecognizedBindingKind => "E_UNKNOWN_BINDING",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CodegenError {
    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Name of the enclosing function, attached by the dispatch driver
    pub function: Option<String>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl CodegenError {
    /// Generic constructor
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            function: None,
            help: None,
        }
    }

    /// No extraction mapping exists for the parameter's declared type.
    /// The message names the offending type.
    pub fn unsupported_parameter_type(param: &Param) -> Self {
        Self::new(
            ErrorKind::UnsupportedParameterType,
            format!("Type '{}' is not supported", param.declared_type.symbol),
            param.span,
        )
    }

    /// The type would be valid in another mode but is disallowed here.
    pub fn invalid_binding_usage(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::InvalidBindingUsage, message, span)
    }

    /// The annotation tag matched no registered binding kind.
    pub fn unrecognized_binding_kind(tag: &str, span: Span) -> Self {
        Self::new(
            ErrorKind::UnrecognizedBindingKind,
            format!("Binding annotation '@{}' is not recognized", tag),
            span,
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Attach the enclosing function's name (builder-style).
    pub fn in_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.kind.code(), self.message)?;
        if let Some(function) = &self.function {
            write!(f, " (in function '{}')", function)?;
        }
        Ok(())
    }
}

impl std::error::Error for CodegenError {}
