#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Decoded content stream operations of one page.
pub fn page_operations(doc: &LopdfDocument, page_number: u32) -> Vec<Operation> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_number) else {
        return Vec::new();
    };
    doc.get_page_content(*page_id)
        .ok()
        .and_then(|bytes| Content::decode(&bytes).ok())
        .map(|content| content.operations)
        .unwrap_or_default()
}

/// Operands of every `Tj` on the page, in drawing order.
pub fn shown_strings(doc: &LopdfDocument, page_number: u32) -> Vec<String> {
    page_operations(doc, page_number)
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|obj| obj.as_str().ok())
        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
        .collect()
}

/// Text positions (`Td` operands) on the page, in drawing order.
pub fn text_positions(doc: &LopdfDocument, page_number: u32) -> Vec<(f32, f32)> {
    page_operations(doc, page_number)
        .iter()
        .filter(|op| op.operator == "Td" && op.operands.len() == 2)
        .filter_map(|op| Some((op.operands[0].as_float().ok()?, op.operands[1].as_float().ok()?)))
        .collect()
}

pub fn count_operator(doc: &LopdfDocument, page_number: u32, operator: &str) -> usize {
    page_operations(doc, page_number)
        .iter()
        .filter(|op| op.operator == operator)
        .count()
}

/// `[width, height]` of the page's MediaBox.
pub fn media_box(doc: &LopdfDocument, page_number: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_number)?;
    let page = doc.get_dictionary(page_id).ok()?;
    let bounds = page.get(b"MediaBox").and_then(Object::as_array).ok()?;
    Some((bounds.get(2)?.as_float().ok()?, bounds.get(3)?.as_float().ok()?))
}

/// BaseFont names of all font dictionaries in the document.
pub fn extract_font_names(doc: &LopdfDocument) -> BTreeSet<String> {
    doc.objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter(|dict| {
            dict.get(b"Type")
                .and_then(Object::as_name)
                .is_ok_and(|name| name == b"Font")
        })
        .filter_map(|dict| dict.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(|name| String::from_utf8_lossy(name).to_string())
        .collect()
}

/// The `/Title` entry of the document information dictionary.
pub fn document_title(doc: &LopdfDocument) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").and_then(Object::as_reference).ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    let title = info.get(b"Title").and_then(Object::as_str).ok()?;
    Some(String::from_utf8_lossy(title).to_string())
}
