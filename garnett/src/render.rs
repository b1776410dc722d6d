//! Rendering of token listings.

use std::fmt::Write;

use garnetc_lex::{Token, TokenKind};
use serde::Serialize;

use crate::commands::common::OutputFormat;
use crate::error::Result;

/// The tokens of one source file.
#[derive(Debug, Clone, Serialize)]
pub struct FileTokens<'a> {
    /// Display name of the source.
    pub file: &'a str,

    /// Tokens in source order.
    pub tokens: Vec<Token<'a>>,
}

/// Renders the token listings of `files` in `format`.
pub fn render_tokens(format: OutputFormat, files: &[FileTokens<'_>]) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(files)?;
            out.push('\n');
        },
        OutputFormat::Pretty => {
            let with_headers = files.len() > 1;
            for (i, file) in files.iter().enumerate() {
                if with_headers {
                    if i > 0 {
                        out.push('\n');
                    }
                    let _ = writeln!(out, "==> {} <==", file.file);
                }
                for token in &file.tokens {
                    let _ = writeln!(out, "{{type: {:?}, value: {:?}}}", token.kind.as_str(), token.value);
                }
            }
        },
        OutputFormat::Plain => {
            let with_names = files.len() > 1;
            for file in files {
                for token in &file.tokens {
                    if with_names {
                        let _ = write!(out, "{}\t", file.file);
                    }
                    let _ = writeln!(out, "{}\t{}", token.kind, token.value);
                }
            }
        },
    }
    Ok(out)
}

#[derive(Serialize)]
struct KindEntry {
    #[serde(rename = "type")]
    kind: TokenKind,
    spelling: Option<&'static str>,
}

/// Renders the table of every token kind.
pub fn render_kinds(format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            let entries: Vec<KindEntry> = TokenKind::ALL
                .iter()
                .map(|kind| KindEntry {
                    kind: *kind,
                    spelling: kind.spelling(),
                })
                .collect();
            out = serde_json::to_string_pretty(&entries)?;
            out.push('\n');
        },
        OutputFormat::Pretty => {
            let width = TokenKind::ALL
                .iter()
                .map(|k| k.as_str().len())
                .max()
                .unwrap_or(0);
            for kind in TokenKind::ALL {
                let spelling = kind.spelling().unwrap_or("-");
                let _ = writeln!(out, "{:<width$}  {}", kind.as_str(), spelling, width = width);
            }
        },
        OutputFormat::Plain => {
            for kind in TokenKind::ALL {
                let _ = writeln!(out, "{}\t{}", kind, kind.spelling().unwrap_or(""));
            }
        },
    }
    Ok(out)
}
