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

/// HTTP trigger + HTTP output handlers
pub mod http;

/// Queue trigger + queue output handlers
pub mod queue;

/// Timer trigger handler
pub mod timer;

/// Blob trigger handler
pub mod blob;

use crate::annotation::{AnnotationAttachment, BindingKind, BindingRole};
use crate::ast::{Expr, Param};
use crate::context::GenerationContext;
use crate::descriptor::BindingDescriptor;
use crate::error::CodegenError;

use self::blob::BlobTriggerHandler;
use self::http::{HttpOutputHandler, HttpTriggerHandler};
use self::queue::{QueueOutputHandler, QueueTriggerHandler};
use self::timer::TimerTriggerHandler;

/// The three-phase contract every binding handler implements.
///
/// Phases run strictly in this order per parameter; the second and third
/// are unreachable if the first fails:
///
/// 1. `build_invocation_expression` — decide the runtime extraction call
///    that replaces the parameter, or fail with an unsupported-type /
///    invalid-usage diagnostic.
/// 2. `post_invocation_process` — optional side effects on the shared
///    [`GenerationContext`] (output-binding plumbing). No-op is valid.
/// 3. `build_binding_descriptor` — pure function of the annotation's
///    key/value pairs plus kind-specific defaults; must not fail.
pub trait ParameterHandler {
    fn build_invocation_expression(
        &mut self,
        ctx: &mut GenerationContext,
    ) -> Result<Expr, CodegenError>;

    fn post_invocation_process(&mut self, ctx: &mut GenerationContext) {
        let _ = ctx;
    }

    fn build_binding_descriptor(&self) -> BindingDescriptor;
}

/// The fixed, closed set of handlers, one variant per [`BindingKind`].
///
/// The exhaustive match in [`Handler::for_kind`] is what guarantees every
/// registered kind has a handler; unknown annotation tags never reach this
/// type (the driver rejects them while resolving the tag).
#[derive(Debug)]
pub enum Handler {
    HttpTrigger(HttpTriggerHandler),
    QueueTrigger(QueueTriggerHandler),
    TimerTrigger(TimerTriggerHandler),
    BlobTrigger(BlobTriggerHandler),
    QueueOutput(QueueOutputHandler),
    HttpOutput(HttpOutputHandler),
}

impl Handler {
    /// Constructs the handler variant for a resolved binding kind.
    pub fn for_kind(kind: BindingKind, param: Param, annotation: AnnotationAttachment) -> Handler {
        match kind {
            BindingKind::HttpTrigger => {
                Handler::HttpTrigger(HttpTriggerHandler::new(param, annotation))
            }
            BindingKind::QueueTrigger => {
                Handler::QueueTrigger(QueueTriggerHandler::new(param, annotation))
            }
            BindingKind::TimerTrigger => {
                Handler::TimerTrigger(TimerTriggerHandler::new(param, annotation))
            }
            BindingKind::BlobTrigger => {
                Handler::BlobTrigger(BlobTriggerHandler::new(param, annotation))
            }
            BindingKind::QueueOutput => {
                Handler::QueueOutput(QueueOutputHandler::new(param, annotation))
            }
            BindingKind::HttpOutput => {
                Handler::HttpOutput(HttpOutputHandler::new(param, annotation))
            }
        }
    }

    pub fn role(&self) -> BindingRole {
        match self {
            Handler::HttpTrigger(_) => BindingKind::HttpTrigger.role(),
            Handler::QueueTrigger(_) => BindingKind::QueueTrigger.role(),
            Handler::TimerTrigger(_) => BindingKind::TimerTrigger.role(),
            Handler::BlobTrigger(_) => BindingKind::BlobTrigger.role(),
            Handler::QueueOutput(_) => BindingKind::QueueOutput.role(),
            Handler::HttpOutput(_) => BindingKind::HttpOutput.role(),
        }
    }
}

impl ParameterHandler for Handler {
    fn build_invocation_expression(
        &mut self,
        ctx: &mut GenerationContext,
    ) -> Result<Expr, CodegenError> {
        match self {
            Handler::HttpTrigger(h) => h.build_invocation_expression(ctx),
            Handler::QueueTrigger(h) => h.build_invocation_expression(ctx),
            Handler::TimerTrigger(h) => h.build_invocation_expression(ctx),
            Handler::BlobTrigger(h) => h.build_invocation_expression(ctx),
            Handler::QueueOutput(h) => h.build_invocation_expression(ctx),
            Handler::HttpOutput(h) => h.build_invocation_expression(ctx),
        }
    }

    fn post_invocation_process(&mut self, ctx: &mut GenerationContext) {
        match self {
            Handler::HttpTrigger(h) => h.post_invocation_process(ctx),
            Handler::QueueTrigger(h) => h.post_invocation_process(ctx),
            Handler::TimerTrigger(h) => h.post_invocation_process(ctx),
            Handler::BlobTrigger(h) => h.post_invocation_process(ctx),
            Handler::QueueOutput(h) => h.post_invocation_process(ctx),
            Handler::HttpOutput(h) => h.post_invocation_process(ctx),
        }
    }

    fn build_binding_descriptor(&self) -> BindingDescriptor {
        match self {
            Handler::HttpTrigger(h) => h.build_binding_descriptor(),
            Handler::QueueTrigger(h) => h.build_binding_descriptor(),
            Handler::TimerTrigger(h) => h.build_binding_descriptor(),
            Handler::BlobTrigger(h) => h.build_binding_descriptor(),
            Handler::QueueOutput(h) => h.build_binding_descriptor(),
            Handler::HttpOutput(h) => h.build_binding_descriptor(),
        }
    }
}

/// Default storage-account connection name shared by the storage-backed
/// binding kinds (queue, blob).
pub(crate) const DEFAULT_STORAGE_CONNECTION: &str = "AzureWebJobsStorage";
