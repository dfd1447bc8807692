//! quick-xml adapter producing [`Token`]s.

use std::collections::VecDeque;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

use super::token::{Attribute, Token};
use crate::error::{Error, Result};

/// Streaming tokenizer over an in-memory XML document.
///
/// End-tag name checking is switched off in quick-xml so that mismatched
/// and unbalanced closes reach the tree builder, which reports them with
/// its own error kinds.
pub struct Tokenizer<'a> {
    reader: Reader<&'a [u8]>,
    pending: VecDeque<Token>,
    text: String,
    has_text: bool,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(content: &'a str) -> Self {
        let mut reader = Reader::from_str(content);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        Self {
            reader,
            pending: VecDeque::new(),
            text: String::new(),
            has_text: false,
            done: false,
        }
    }

    /// Handle one quick-xml event, queueing any tokens it completes.
    fn push_event(&mut self, event: Event<'a>) -> Result<()> {
        match event {
            Event::Text(e) => {
                self.append_text(std::str::from_utf8(e.as_ref())?);
                return Ok(());
            }
            Event::CData(e) => {
                self.append_text(std::str::from_utf8(e.as_ref())?);
                return Ok(());
            }
            Event::GeneralRef(e) => {
                let entity = std::str::from_utf8(e.as_ref())?;
                let c =
                    resolve_entity(entity).ok_or_else(|| Error::UnknownEntity(entity.to_string()))?;
                self.append_text(c.encode_utf8(&mut [0; 4]));
                return Ok(());
            }
            _ => {}
        }

        self.flush_text();

        match event {
            Event::Start(e) => {
                let token = open_token(&e)?;
                self.pending.push_back(token);
            }
            Event::Empty(e) => {
                let token = open_token(&e)?;
                let name = element_name(e.name().as_ref())?;
                self.pending.push_back(token);
                self.pending.push_back(Token::Close { name });
            }
            Event::End(e) => {
                let name = element_name(e.name().as_ref())?;
                self.pending.push_back(Token::Close { name });
            }
            Event::Comment(e) => {
                let body = String::from_utf8_lossy(e.as_ref()).into_owned();
                self.pending.push_back(Token::Comment(body));
            }
            Event::PI(e) => {
                let body = String::from_utf8_lossy(e.as_ref()).into_owned();
                self.pending.push_back(Token::ProcessingInstruction(body));
            }
            Event::Decl(_) => {
                self.pending.push_back(Token::Directive("xml".to_string()));
            }
            Event::DocType(e) => {
                let body = String::from_utf8_lossy(e.as_ref()).into_owned();
                self.pending.push_back(Token::Directive(format!("DOCTYPE {}", body.trim())));
            }
            Event::Eof => {
                self.done = true;
            }
            _ => {}
        }

        Ok(())
    }

    fn append_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.has_text = true;
    }

    fn flush_text(&mut self) {
        if self.has_text {
            self.pending
                .push_back(Token::Text(std::mem::take(&mut self.text)));
            self.has_text = false;
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(?token, "token");
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }

            let step = self
                .reader
                .read_event()
                .map_err(Error::from)
                .and_then(|event| self.push_event(event));
            if let Err(e) = step {
                self.done = true;
                self.pending.clear();
                return Some(Err(e));
            }
        }
    }
}

fn open_token(e: &BytesStart<'_>) -> Result<Token> {
    let name = element_name(e.name().as_ref())?;
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(local_name(attr.key.as_ref()))?;
        let raw = std::str::from_utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(raw)?;
        attributes.push(Attribute::new(key, value.into_owned()));
    }
    Ok(Token::Open { name, attributes })
}

fn element_name(name: &[u8]) -> Result<String> {
    Ok(std::str::from_utf8(local_name(name))?.to_string())
}

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

/// Extract local name from namespaced XML name (e.g., "spdx:text" -> "text").
fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

/// Resolve a predefined or numeric entity reference.
fn resolve_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
