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

/// An opaque reference to a declared type, as captured from the source
/// function signature by the host compiler.
///
/// The generator never inspects type structure; it only asks the
/// [`TypeEnv`] classification questions about a `TypeRef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Type symbol name, e.g. `string`, `json`, `byte[]`, `Request`.
    pub symbol: String,

    /// Path of the module that owns the symbol. `None` for language
    /// built-ins.
    pub module: Option<String>,
}

impl TypeRef {
    /// A language built-in type (`string`, `json`, `byte[]`, `int`, ...).
    pub fn builtin(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            module: None,
        }
    }

    /// A type owned by a named module, e.g. `net/http : Request`.
    pub fn in_module(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            module: Some(module.into()),
        }
    }
}

/// Answers semantic questions about declared parameter types against the
/// compiler-wide symbol environment.
///
/// Handlers evaluate these predicates in a fixed order; the first match
/// wins, so classification is deterministic even if a future type were to
/// satisfy more than one predicate.
#[derive(Debug, Clone)]
pub struct TypeEnv {
    /// Module path of the platform HTTP package (owner of `Request` /
    /// `Response`).
    http_module: String,

    /// Module path of the serverless runtime SDK (owner of `HTTPRequest`,
    /// `HTTPBinding`, ...).
    runtime_module: String,
}

impl TypeEnv {
    pub fn new(http_module: impl Into<String>, runtime_module: impl Into<String>) -> Self {
        Self {
            http_module: http_module.into(),
            runtime_module: runtime_module.into(),
        }
    }

    /// Is this the platform HTTP request object type (`net/http:Request`)?
    pub fn is_http_request(&self, ty: &TypeRef) -> bool {
        ty.module.as_deref() == Some(self.http_module.as_str()) && ty.symbol == "Request"
    }

    pub fn is_string(&self, ty: &TypeRef) -> bool {
        ty.module.is_none() && ty.symbol == "string"
    }

    pub fn is_json(&self, ty: &TypeRef) -> bool {
        ty.module.is_none() && ty.symbol == "json"
    }

    pub fn is_byte_array(&self, ty: &TypeRef) -> bool {
        ty.module.is_none() && ty.symbol == "byte[]"
    }

    /// Is this the named type from the serverless runtime SDK module?
    pub fn is_runtime_type(&self, symbol: &str, ty: &TypeRef) -> bool {
        ty.module.as_deref() == Some(self.runtime_module.as_str()) && ty.symbol == symbol
    }

    pub fn http_module(&self) -> &str {
        &self.http_module
    }
}

impl Default for TypeEnv {
    fn default() -> Self {
        Self::new("net/http", "cloud/functions")
    }
}
