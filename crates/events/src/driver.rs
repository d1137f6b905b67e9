//! A "dumb" XML driver: pulls events from quick-xml and notifies a handler.
use crate::error::EventError;
use crate::event_model::{Attribute, DumpEvent, DumpEventHandler, QName};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::io::BufRead;

/// Drives a handler over an in-memory document.
pub fn drive_str<H: DumpEventHandler>(xml: &str, handler: &mut H) -> Result<(), H::Error> {
    let mut reader = Reader::from_str(xml);
    run_event_loop(&mut reader, handler)
}

/// Drives a handler over a buffered source, reading it incrementally.
pub fn drive_reader<R: BufRead, H: DumpEventHandler>(
    source: R,
    handler: &mut H,
) -> Result<(), H::Error> {
    let mut reader = Reader::from_reader(source);
    run_event_loop(&mut reader, handler)
}

/// Feeds pre-built events to a handler in order.
pub fn replay<I, H>(events: I, handler: &mut H) -> Result<(), H::Error>
where
    I: IntoIterator<Item = DumpEvent>,
    H: DumpEventHandler,
{
    for event in events {
        match event {
            DumpEvent::StartDocument => handler.start_document()?,
            DumpEvent::EndDocument => handler.end_document()?,
            DumpEvent::StartElement { name, attributes } => {
                handler.start_element(&name, &attributes)?
            }
            DumpEvent::EndElement { name } => handler.end_element(&name)?,
        }
    }
    Ok(())
}

fn run_event_loop<R: BufRead, H: DumpEventHandler>(
    reader: &mut Reader<R>,
    handler: &mut H,
) -> Result<(), H::Error> {
    let mut buf = Vec::new();
    let mut elements = 0usize;
    // Names of elements opened but not yet closed, innermost last.
    let mut open: Vec<String> = Vec::new();

    handler.start_document()?;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let (name, attributes) = element_parts(&e)?;
                handler.start_element(&name, &attributes)?;
                open.push(name.to_string());
                elements += 1;
            }
            Ok(Event::Empty(e)) => {
                let (name, attributes) = element_parts(&e)?;
                handler.start_element(&name, &attributes)?;
                handler.end_element(&name)?;
                elements += 1;
            }
            Ok(Event::End(e)) => {
                let name = qname(e.name())?;
                handler.end_element(&name)?;
                open.pop();
            }
            Ok(Event::Eof) => {
                if let Some(element) = open.pop() {
                    return Err(EventError::Unclosed {
                        element,
                        position: reader.buffer_position() as u64,
                    }
                    .into());
                }
                break;
            }
            Ok(_) => {}
            Err(e) => {
                return Err(EventError::xml(reader.buffer_position() as u64, e).into());
            }
        }
        buf.clear();
    }

    log::trace!("XML driver delivered {} element events", elements);
    handler.end_document()
}

fn element_parts(e: &BytesStart<'_>) -> Result<(QName, Vec<Attribute>), EventError> {
    let name = qname(e.name())?;
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let raw = std::str::from_utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(raw)?.into_owned();
        attributes.push(Attribute {
            name: qname(attr.key)?,
            value,
        });
    }
    Ok((name, attributes))
}

fn qname(name: quick_xml::name::QName<'_>) -> Result<QName, EventError> {
    let prefix = match name.prefix() {
        Some(p) => Some(std::str::from_utf8(p.as_ref())?.to_string()),
        None => None,
    };
    let local_name = std::str::from_utf8(name.local_name().as_ref())?.to_string();
    Ok(QName::with_prefix(prefix, local_name))
}
