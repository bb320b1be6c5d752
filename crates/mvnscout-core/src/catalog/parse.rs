//! Tolerant event-driven decoding of `archetype-catalog.xml`.

use crate::catalog::{Archetype, ArchetypeCatalog};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;
use thiserror::Error;

/// Catalog decoding failure: ill-formed XML, or a document with no root
/// element at all. Schema looseness (missing fields, unknown elements, an
/// absent collection element) is tolerated and does not error.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid catalog XML")]
    Xml(#[from] quick_xml::Error),
    #[error("document contains no catalog root element")]
    MissingRoot,
}

/// Decodes an archetype catalog from `reader`.
///
/// Any root element name is accepted. Entries live under
/// `<archetypes><archetype>` nesting; a document without the collection
/// element decodes to zero entries.
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<ArchetypeCatalog, ParseError> {
    let mut xml = Reader::from_reader(reader);
    let mut buf = Vec::new();

    // Locate the root element; prolog, comments, and stray text may precede it.
    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(_) => break,
            Event::Empty(_) => return Ok(ArchetypeCatalog::default()),
            Event::Eof => return Err(ParseError::MissingRoot),
            _ => {}
        }
        buf.clear();
    }
    buf.clear();

    let mut catalog = ArchetypeCatalog::default();
    let mut skip = Vec::new();

    // Scan the root's children for the `archetypes` collection.
    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"archetypes" => {
                read_archetypes(&mut xml, &mut catalog)?;
            }
            Event::Start(e) => skip_element(&mut xml, &e, &mut skip)?,
            Event::End(_) | Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(catalog)
}

/// Reads `<archetype>` entries until the collection's end tag.
fn read_archetypes<R: BufRead>(
    xml: &mut Reader<R>,
    catalog: &mut ArchetypeCatalog,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut skip = Vec::new();
    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"archetype" => {
                catalog.archetypes.push(read_archetype(xml)?);
            }
            Event::Start(e) => skip_element(xml, &e, &mut skip)?,
            Event::Empty(e) if e.local_name().as_ref() == b"archetype" => {
                catalog.archetypes.push(Archetype::default());
            }
            Event::End(_) | Event::Eof => return Ok(()),
            _ => {}
        }
        buf.clear();
    }
}

/// Reads the known child elements of one `<archetype>`; unknown children
/// are skipped subtree-wise, missing ones leave empty strings.
fn read_archetype<R: BufRead>(xml: &mut Reader<R>) -> Result<Archetype, ParseError> {
    let mut entry = Archetype::default();
    let mut buf = Vec::new();
    let mut skip = Vec::new();
    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"groupId" => entry.group_id = read_text(xml)?,
                b"artifactId" => entry.artifact_id = read_text(xml)?,
                b"version" => entry.version = read_text(xml)?,
                b"repository" => entry.repository = read_text(xml)?,
                b"description" => entry.description = read_text(xml)?,
                _ => skip_element(xml, &e, &mut skip)?,
            },
            Event::End(_) | Event::Eof => return Ok(entry),
            _ => {}
        }
        buf.clear();
    }
}

/// Collects the text content of the current element up to its end tag.
/// Nested elements are consumed and their text discarded.
fn read_text<R: BufRead>(xml: &mut Reader<R>) -> Result<String, ParseError> {
    let mut out = String::new();
    let mut buf = Vec::new();
    let mut skip = Vec::new();
    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Text(t) => {
                let text = t.unescape().map_err(quick_xml::Error::from)?;
                out.push_str(&text);
            }
            Event::CData(t) => out.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::Start(e) => skip_element(xml, &e, &mut skip)?,
            Event::End(_) | Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(out.trim().to_string())
}

fn skip_element<R: BufRead>(
    xml: &mut Reader<R>,
    start: &BytesStart<'_>,
    skip: &mut Vec<u8>,
) -> Result<(), ParseError> {
    xml.read_to_end_into(start.name(), skip)?;
    Ok(())
}
