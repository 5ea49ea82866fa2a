//! castxml declaration dump parser.
//!
//! This module reads the gccxml-compatible XML that
//! `castxml --castxml-gccxml` produces and collects the type, alias and
//! function elements into [`Declarations`].

use crate::error::ParseError;
use crate::types::{
    Alias, AliasKind, Declarations, EnumMember, FunctionDecl, Param, TypeDescriptor, TypeKind,
};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// Root element names accepted for a dump.
const ROOT_ELEMENTS: [&str; 2] = ["CastXML", "GCC_XML"];

/// Parses a castxml dump from a string.
///
/// # Arguments
/// * `xml` - castxml/gccxml XML output
///
/// # Returns
/// Declarations in document order.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, has no `CastXML` root, or
/// an element lacks an attribute the graph depends on.
pub fn parse_declarations(xml: &str) -> Result<Declarations, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        let root = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => Some((e.into_owned(), true)),
            Ok(Event::Empty(e)) => Some((e.into_owned(), false)),
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => None,
        };
        buf.clear();

        let Some((e, has_children)) = root else {
            continue;
        };
        let tag = element_name(&e)?;
        if !ROOT_ELEMENTS.contains(&tag.as_str()) {
            return Err(ParseError::structure(format!(
                "unexpected root element '{tag}', expected CastXML"
            )));
        }

        let mut decls = Declarations::default();
        if has_children {
            parse_root_children(&mut reader, &tag, &mut decls)?;
        }
        tracing::debug!(
            types = decls.types.len(),
            aliases = decls.aliases.len(),
            functions = decls.functions.len(),
            "parsed castxml dump"
        );
        return Ok(decls);
    }

    Err(ParseError::structure("No CastXML element found"))
}

/// Parses every child of the root element.
fn parse_root_children(
    reader: &mut Reader<&[u8]>,
    root: &str,
    decls: &mut Declarations,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        let element = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => Some((e.into_owned(), true)),
            Ok(Event::Empty(e)) => Some((e.into_owned(), false)),
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(truncated(root)),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => None,
        };
        buf.clear();

        if let Some((e, has_children)) = element {
            parse_element(reader, &e, has_children, decls)?;
        }
    }

    Ok(())
}

/// Parses one top-level element, consuming its children if it has any.
fn parse_element(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_children: bool,
    decls: &mut Declarations,
) -> Result<(), ParseError> {
    let tag = element_name(e)?;
    let attrs = read_attributes(e)?;

    match tag.as_str() {
        "Function" => {
            let mut func = FunctionDecl::new(
                required(&attrs, &tag, "name")?,
                required(&attrs, &tag, "returns")?,
            );
            if has_children {
                parse_function_body(reader, &mut func)?;
            }
            if func.variadic {
                tracing::warn!(
                    function = %func.name,
                    "variadic function, trailing arguments are not bound"
                );
            }
            decls.functions.push(func);
            return Ok(());
        }
        "Enumeration" => {
            let mut members = Vec::new();
            if has_children {
                parse_enum_values(reader, &mut members)?;
            }
            let kind = TypeKind::Enumeration {
                name: optional(&attrs, "name"),
                members,
            };
            decls
                .types
                .push(TypeDescriptor::new(required(&attrs, &tag, "id")?, kind));
            return Ok(());
        }
        "FundamentalType" => {
            let kind = TypeKind::Fundamental {
                name: required(&attrs, &tag, "name")?,
            };
            decls
                .types
                .push(TypeDescriptor::new(required(&attrs, &tag, "id")?, kind));
        }
        "Struct" | "Union" => {
            let name = optional(&attrs, "name");
            let kind = if tag == "Struct" {
                TypeKind::Struct { name }
            } else {
                TypeKind::Union { name }
            };
            decls
                .types
                .push(TypeDescriptor::new(required(&attrs, &tag, "id")?, kind));
        }
        "PointerType" => {
            let kind = TypeKind::Pointer {
                pointee: required(&attrs, &tag, "type")?,
            };
            decls
                .types
                .push(TypeDescriptor::new(required(&attrs, &tag, "id")?, kind));
        }
        "ArrayType" => {
            let kind = TypeKind::Array {
                element: required(&attrs, &tag, "type")?,
            };
            decls
                .types
                .push(TypeDescriptor::new(required(&attrs, &tag, "id")?, kind));
        }
        other => {
            if let Some(kind) = AliasKind::from_tag(other) {
                decls.aliases.push(Alias {
                    id: required(&attrs, other, "id")?,
                    target: required(&attrs, other, "type")?,
                    kind,
                });
            } else if let Some(id) = attrs.get("id") {
                decls.types.push(TypeDescriptor::new(
                    id.clone(),
                    TypeKind::Unclassified {
                        tag: other.to_string(),
                    },
                ));
            }
        }
    }

    if has_children {
        skip_to_end(reader, &tag)?;
    }

    Ok(())
}

/// Collects the arguments of a function element.
fn parse_function_body(
    reader: &mut Reader<&[u8]>,
    func: &mut FunctionDecl,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        let child = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => Some((e.into_owned(), true)),
            Ok(Event::Empty(e)) => Some((e.into_owned(), false)),
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(truncated("Function")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => None,
        };
        buf.clear();

        let Some((e, has_children)) = child else {
            continue;
        };
        let tag = element_name(&e)?;
        match tag.as_str() {
            "Argument" => {
                let attrs = read_attributes(&e)?;
                let type_id = required(&attrs, "Argument", "type")?;
                func.add_param(Param::new(attrs.get("name").cloned(), type_id));
            }
            "Ellipsis" => func.variadic = true,
            _ => {}
        }
        if has_children {
            skip_to_end(reader, &tag)?;
        }
    }

    Ok(())
}

/// Collects the members of an enumeration element.
fn parse_enum_values(
    reader: &mut Reader<&[u8]>,
    members: &mut Vec<EnumMember>,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        let child = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => Some((e.into_owned(), true)),
            Ok(Event::Empty(e)) => Some((e.into_owned(), false)),
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(truncated("Enumeration")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => None,
        };
        buf.clear();

        let Some((e, has_children)) = child else {
            continue;
        };
        let tag = element_name(&e)?;
        if tag == "EnumValue" {
            let attrs = read_attributes(&e)?;
            members.push(EnumMember::new(
                required(&attrs, "EnumValue", "name")?,
                required(&attrs, "EnumValue", "init")?,
            ));
        }
        if has_children {
            skip_to_end(reader, &tag)?;
        }
    }

    Ok(())
}

/// Returns the element's tag name.
fn element_name(e: &BytesStart<'_>) -> Result<String, ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    Ok(std::str::from_utf8(&name_bytes)?.to_string())
}

/// Reads all attributes of an element.
fn read_attributes(e: &BytesStart<'_>) -> Result<HashMap<String, String>, ParseError> {
    let mut attrs = HashMap::new();

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        attrs.insert(key.to_string(), value.into_owned());
    }

    Ok(attrs)
}

fn required(
    attrs: &HashMap<String, String>,
    element: &str,
    attribute: &str,
) -> Result<String, ParseError> {
    attrs
        .get(attribute)
        .cloned()
        .ok_or_else(|| ParseError::missing_attr(element, attribute))
}

fn optional(attrs: &HashMap<String, String>, attribute: &str) -> String {
    attrs.get(attribute).cloned().unwrap_or_default()
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>, tag: &str) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => return Err(truncated(tag)),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Error for a document that ends before `tag` is closed.
fn truncated(tag: &str) -> ParseError {
    ParseError::structure(format!("unexpected end of document inside <{tag}>"))
}
