//! License collection reader.
//!
//! Maps the outer `<SPDXLicenseCollection>` / `<license>` records onto
//! [`License`] values and hands each markup body (`<text>`, `<notes>`,
//! `<standardLicenseHeader>`) to the tree builder.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::builder::build_document;
use crate::config::ParseConfig;
use crate::error::{Error, ParseError, Result};
use crate::markup::{BODY_TAG, NOTES_TAG, Tag, normalize_whitespace};
use crate::model::{Document, License, LicenseCollection};
use crate::util::decode_xml;
use crate::xml::{Attribute, Token, Tokenizer};

const COLLECTION_TAG: &str = "SPDXLicenseCollection";
const LICENSE_TAG: &str = "license";

/// Parse a license collection document.
///
/// Accepts either an `<SPDXLicenseCollection>` root or a single bare
/// `<license>` root. Elements other than `<license>` at collection level
/// (such as `<exception>`) are skipped.
pub fn read_collection(content: &str, config: &ParseConfig) -> Result<LicenseCollection> {
    let mut tokens = Tokenizer::new(content);
    let mut collection = LicenseCollection::default();

    while let Some(token) = tokens.next() {
        match token? {
            Token::Open { name, .. } if name == COLLECTION_TAG => {}
            Token::Open { name, attributes } if name == LICENSE_TAG => {
                let license = read_license(&attributes, &mut tokens, config)?;
                debug!(
                    license_id = %license.license_id,
                    nodes = license.text.len(),
                    "parsed license"
                );
                collection.licenses.push(license);
            }
            Token::Open { name, .. } => {
                debug!(element = %name, "skipping collection element");
                skip_element(&mut tokens, &name)?;
            }
            Token::Close { name } if name == COLLECTION_TAG => {}
            Token::Close { name } => {
                return Err(ParseError::UnbalancedClose { tag: name }.into());
            }
            Token::Text(_)
            | Token::Comment(_)
            | Token::Directive(_)
            | Token::ProcessingInstruction(_) => {}
        }
    }

    Ok(collection)
}

fn read_license<I>(attributes: &[Attribute], tokens: &mut I, config: &ParseConfig) -> Result<License>
where
    I: Iterator<Item = Result<Token>>,
{
    let mut license = License::default();
    for attr in attributes {
        match attr.name.as_str() {
            "isOsiApproved" => license.is_osi_approved = parse_bool(attr)?,
            "name" => license.name = attr.value.clone(),
            "licenseId" => license.license_id = attr.value.clone(),
            "listVersionAdded" => license.list_version_added = attr.value.clone(),
            "isDeprecated" => license.is_deprecated = parse_bool(attr)?,
            "deprecatedVersion" => license.deprecated_version = Some(attr.value.clone()),
            other => debug!(attribute = other, "ignoring license attribute"),
        }
    }

    let mut has_text = false;
    loop {
        let Some(token) = tokens.next() else {
            return Err(Error::MissingElement(format!("</{LICENSE_TAG}>")));
        };
        match token? {
            Token::Open { name, .. } if name == BODY_TAG => {
                license.text = read_body(tokens, BODY_TAG, &license, config)?;
                has_text = true;
            }
            Token::Open { name, .. } if name == NOTES_TAG => {
                license.notes = Some(read_body(tokens, NOTES_TAG, &license, config)?);
            }
            Token::Open { name, .. } if name == Tag::StandardLicenseHeader.name() => {
                let header = read_body(tokens, Tag::StandardLicenseHeader.name(), &license, config)?;
                license.standard_license_header = Some(header);
            }
            Token::Open { name, .. } if name == "crossRefs" => {
                license.cross_refs = read_values(tokens, "crossRefs")?;
            }
            Token::Open { name, .. } if name == "obsoletedBys" => {
                license.obsoleted_by = read_values(tokens, "obsoletedBys")?;
            }
            Token::Open { name, .. } => {
                debug!(element = %name, license_id = %license.license_id, "skipping license element");
                skip_element(tokens, &name)?;
            }
            Token::Close { name } if name == LICENSE_TAG => break,
            Token::Close { name } => {
                return Err(Error::License {
                    license_id: license.license_id,
                    source: ParseError::StructuralMismatch {
                        expected: LICENSE_TAG.to_string(),
                        found: name,
                    },
                });
            }
            Token::Text(_)
            | Token::Comment(_)
            | Token::Directive(_)
            | Token::ProcessingInstruction(_) => {}
        }
    }

    if !has_text {
        warn!(license_id = %license.license_id, "license has no <text> body");
    }
    Ok(license)
}

/// Build one body, tagging markup errors with the license they came from.
fn read_body<I>(
    tokens: &mut I,
    container: &str,
    license: &License,
    config: &ParseConfig,
) -> Result<Document>
where
    I: Iterator<Item = Result<Token>>,
{
    build_document(tokens, container, config).map_err(|e| match e {
        Error::Parse(source) => Error::License {
            license_id: license.license_id.clone(),
            source,
        },
        other => other,
    })
}

/// Collect the normalized text of each child of `container`.
fn read_values<I>(tokens: &mut I, container: &str) -> Result<Vec<String>>
where
    I: Iterator<Item = Result<Token>>,
{
    let mut values = Vec::new();
    let mut current: Option<String> = None;
    for token in tokens {
        match token? {
            Token::Open { .. } => current = Some(String::new()),
            Token::Text(text) => {
                if let Some(buf) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Token::Close { name } if name == container => return Ok(values),
            Token::Close { .. } => {
                if let Some(value) = current.take().as_deref().and_then(normalize_whitespace) {
                    values.push(value);
                }
            }
            Token::Comment(_) | Token::Directive(_) | Token::ProcessingInstruction(_) => {}
        }
    }
    Err(Error::MissingElement(format!("</{container}>")))
}

/// Consume tokens up to and including the close of `name`.
fn skip_element<I>(tokens: &mut I, name: &str) -> Result<()>
where
    I: Iterator<Item = Result<Token>>,
{
    let mut depth = 1usize;
    for token in tokens {
        match token? {
            Token::Open { .. } => depth += 1,
            Token::Close { .. } => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            _ => {}
        }
    }
    Err(Error::MissingElement(format!("</{name}>")))
}

fn parse_bool(attr: &Attribute) -> Result<bool> {
    match attr.value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(Error::InvalidAttribute {
            attribute: attr.name.clone(),
            value: attr.value.clone(),
        }),
    }
}

impl LicenseCollection {
    /// Read a license collection file with the default (strict) configuration.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &ParseConfig::default())
    }

    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &ParseConfig) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading license file");
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, config)
    }

    /// Decode raw file bytes (BOM, declared encoding) and parse them.
    pub fn from_bytes(bytes: &[u8], config: &ParseConfig) -> Result<Self> {
        let content = decode_xml(bytes);
        read_collection(&content, config)
    }
}

impl FromStr for LicenseCollection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        read_collection(s, &ParseConfig::default())
    }
}
