use crate::oids;
use std::fmt;
use x509_parser::der_parser::asn1_rs::Tag;
use x509_parser::x509::{AttributeTypeAndValue, X509Name};

/// Renders a distinguished name as `ATTR = value` pairs separated by `, `.
///
/// Components appear in encoding order; multi-valued RDNs are flattened.
pub fn render_name(name: &X509Name<'_>) -> String {
    NamePrettyFormatter(name).to_string()
}

/// Renders a distinguished name as `/ATTR=value/ATTR=value`, the way directory names
/// show up inside general names.
pub fn render_name_oneline(name: &X509Name<'_>) -> String {
    render_attributes_oneline(name.iter_attributes())
}

pub(crate) fn render_attributes_oneline<'a, 'b: 'a>(
    attributes: impl Iterator<Item = &'a AttributeTypeAndValue<'b>>,
) -> String {
    attributes
        .map(|attr| format!("/{}={}", attribute_short_name(attr), attribute_value(attr)))
        .collect()
}

pub struct NamePrettyFormatter<'a, 'b>(pub &'a X509Name<'b>);

impl fmt::Display for NamePrettyFormatter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for attr in self.0.iter_attributes() {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }

            write!(f, "{} = {}", attribute_short_name(attr), attribute_value(attr))?;
        }
        Ok(())
    }
}

fn attribute_short_name(attr: &AttributeTypeAndValue<'_>) -> String {
    let oid = attr.attr_type().to_id_string();
    match oids::attribute_short_name(&oid) {
        Some(short_name) => short_name.to_owned(),
        None => oid,
    }
}

fn attribute_value(attr: &AttributeTypeAndValue<'_>) -> String {
    if let Ok(value) = attr.as_str() {
        return value.to_owned();
    }

    let data = attr.as_slice();
    match attr.attr_value().tag() {
        Tag::BmpString => {
            let units: Vec<u16> = data
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        Tag::UniversalString => data
            .chunks_exact(4)
            .map(|quad| {
                char::from_u32(u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]]))
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
            })
            .collect(),
        // Latin-1 maps one to one onto the first Unicode block
        Tag::T61String => data.iter().map(|&b| char::from(b)).collect(),
        _ => String::from_utf8_lossy(data).into_owned(),
    }
}
