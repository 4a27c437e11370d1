use std::io;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// User facing errors
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Could not read {path}")]
    #[diagnostic(code("E-001"))]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path} does not contain a valid syntax tree")]
    #[diagnostic(code("E-002"), help("Syntax trees are given in the JSON encoding of `Exp`"))]
    Decode {
        path: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },
    #[error("Could not encode the normal form")]
    #[diagnostic(code("E-003"))]
    Encode(#[source] serde_json::Error),
    #[error("Could not write to stdout")]
    #[diagnostic(code("E-004"))]
    Write(#[source] io::Error),
}

impl Error {
    pub fn decode(path: &str, src: String, err: serde_json::Error) -> Self {
        let offset = offset(&src, err.line(), err.column());
        // The location is shown by the label
        let message = match err.classify() {
            serde_json::error::Category::Eof => "unexpected end of input".to_owned(),
            _ => strip_location(&err.to_string()),
        };
        Error::Decode {
            path: path.to_owned(),
            src: NamedSource::new(path, src),
            span: SourceSpan::from(offset..offset),
            message,
        }
    }
}

/// The byte offset of a 1-based line and column as reported by serde_json
fn offset(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize =
        src.split_inclusive('\n').take(line.saturating_sub(1)).map(str::len).sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

fn strip_location(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_owned(),
        None => message.to_owned(),
    }
}
