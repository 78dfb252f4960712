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

use crate::error::CodegenError;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for generation
/// errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Names the enclosing function when the driver attached it
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file being transformed.
    source: String,

    /// Name of the source file, used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_UNSUPPORTED_TYPE]: Type 'int' is not supported
    ///   --> service.cb:12:10 (in function 'handleOrder')
    ///    |
    ///  12 | function handleOrder(@QueueTrigger int count) {
    ///    |          ^
    /// help: Declare the queue parameter as 'string' or 'json'.
    /// ```
    pub fn print(&self, error: &CodegenError) {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics; `saturating_sub` guards the
        // unknown-position span (0, 0).
        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        eprint!(
            "error[{}]: {}\n  --> {}:{}:{}",
            error.kind.code(),
            error.message,
            self.file_name,
            line,
            column + 1
        );
        match &error.function {
            Some(function) => eprintln!(" (in function '{}')", function),
            None => eprintln!(),
        }

        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);

        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');
        eprintln!("   | {}", underline);

        if let Some(help) = &error.help {
            eprintln!("\nhelp: {}", help);
        }
    }
}
