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

use crate::span::Span;

/// Capability of a binding: does it fire the function, feed it data, or
/// receive data from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingRole {
    Trigger,
    Input,
    Output,
}

/// The closed set of binding kinds the generator knows how to handle.
///
/// One variant per binding annotation; dispatch over this enum is an
/// exhaustive match, so adding a variant forces every handler site to be
/// updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    HttpTrigger,
    QueueTrigger,
    TimerTrigger,
    BlobTrigger,
    QueueOutput,
    HttpOutput,
}

impl BindingKind {
    /// Resolves a source-level annotation tag to a binding kind.
    ///
    /// Returns `None` for tags with no registered handler; the dispatch
    /// driver turns that into an `UnrecognizedBindingKind` diagnostic.
    pub fn from_tag(tag: &str) -> Option<BindingKind> {
        match tag {
            "HTTPTrigger" => Some(BindingKind::HttpTrigger),
            "QueueTrigger" => Some(BindingKind::QueueTrigger),
            "TimerTrigger" => Some(BindingKind::TimerTrigger),
            "BlobTrigger" => Some(BindingKind::BlobTrigger),
            "QueueOutput" => Some(BindingKind::QueueOutput),
            "HTTPOutput" => Some(BindingKind::HttpOutput),
            _ => None,
        }
    }

    /// The source-level annotation tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            BindingKind::HttpTrigger => "HTTPTrigger",
            BindingKind::QueueTrigger => "QueueTrigger",
            BindingKind::TimerTrigger => "TimerTrigger",
            BindingKind::BlobTrigger => "BlobTrigger",
            BindingKind::QueueOutput => "QueueOutput",
            BindingKind::HttpOutput => "HTTPOutput",
        }
    }

    pub fn role(&self) -> BindingRole {
        match self {
            BindingKind::HttpTrigger
            | BindingKind::QueueTrigger
            | BindingKind::TimerTrigger
            | BindingKind::BlobTrigger => BindingRole::Trigger,
            BindingKind::QueueOutput | BindingKind::HttpOutput => BindingRole::Output,
        }
    }
}

/// One binding annotation attached to a function parameter, as delivered
/// by the host compiler's annotation front end.
///
/// Key/value pairs keep their declaration order; descriptors copy them
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationAttachment {
    /// Raw source-level tag (e.g. `HTTPTrigger`), not yet resolved to a
    /// [`BindingKind`].
    pub tag: String,

    /// Declared key/value pairs, in declaration order.
    key_values: Vec<(String, String)>,

    /// Source position of the annotation attachment.
    pub span: Span,
}

impl AnnotationAttachment {
    pub fn new(tag: impl Into<String>, span: Span) -> Self {
        Self {
            tag: tag.into(),
            key_values: Vec::new(),
            span,
        }
    }

    /// Adds a key/value pair (builder-style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.key_values.push((key.into(), value.into()));
        self
    }

    /// Resolves the raw tag against the registered binding kinds.
    pub fn kind(&self) -> Option<BindingKind> {
        BindingKind::from_tag(&self.tag)
    }

    /// Looks up a declared key's value. Absent keys are simply absent;
    /// handlers decide how absence maps into descriptors.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.key_values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All declared key/value pairs, in declaration order.
    pub fn key_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.key_values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
