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

use serde::Serialize;
use serde_json::{Map, Value};

/// One deployment-metadata record describing a binding to the external
/// packaging step.
///
/// Entries keep insertion order (the packaging document is diffed by
/// deployment tooling, so key order is part of the contract). Never
/// mutated after the handler that built it returns.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct BindingDescriptor {
    entries: Map<String, Value>,
}

impl BindingDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an entry. Later writes to the same key overwrite in place.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Sets an entry from an optional annotation value; absence becomes an
    /// explicit `null` entry, never a missing key.
    pub fn set_optional(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(v) => self.set(key, v),
            None => self.set(key, Value::Null),
        }
    }

    /// Sets an entry from an optional annotation value, falling back to a
    /// binding-kind-specific default.
    pub fn set_or_default(&mut self, key: &str, value: Option<&str>, default: &str) {
        self.set(key, value.unwrap_or(default));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}
