//! Form XObject plumbing
//!
//! Source pages become Form XObjects in the output document so the
//! renderer can place them with an arbitrary transform. Resources are
//! deep-copied across documents with a cache keyed by source object id.

use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Fallback media box when a source page carries none (A4 portrait, points)
const FALLBACK_MEDIA_BOX: (f32, f32) = (595.0, 842.0);

/// Wrap a source page as a Form XObject in the output document.
pub fn page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page = source.get_dictionary(page_id)?;

    let media_box = page
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .ok()
        .cloned()
        .unwrap_or_else(|| {
            vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(FALLBACK_MEDIA_BOX.0),
                Object::Real(FALLBACK_MEDIA_BOX.1),
            ]
        });

    let content = page_content_bytes(source, page)?;

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Form".to_vec()));
    dict.set("FormType", Object::Integer(1));
    dict.set("BBox", Object::Array(media_box));

    if let Ok(resources) = page.get(b"Resources") {
        dict.set(
            "Resources",
            deep_copy_object(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(dict, content)))
}

/// Concatenated, decompressed content of a page. A page without content
/// is simply blank.
fn page_content_bytes(doc: &Document, page: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()),
    };

    let stream_ids: Vec<ObjectId> = match contents {
        Object::Reference(id) => vec![*id],
        Object::Array(arr) => arr.iter().filter_map(|o| o.as_reference().ok()).collect(),
        _ => Vec::new(),
    };

    let mut data = Vec::new();
    for id in stream_ids {
        if let Ok(stream) = doc.get_object(id)?.as_stream() {
            let bytes = stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone());
            data.extend_from_slice(&bytes);
            data.push(b'\n');
        }
    }
    Ok(data)
}

/// Deep copy an object graph from source to output, following
/// references. The cache keeps shared resources shared.
pub fn deep_copy_object(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }
            let referenced = source.get_object(*id)?;
            let copied = deep_copy_object(output, source, referenced, cache)?;
            let new_id = output.add_object(copied);
            cache.insert(*id, new_id);
            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut copied = Dictionary::new();
            for (key, value) in dict.iter() {
                copied.set(
                    key.clone(),
                    deep_copy_object(output, source, value, cache)?,
                );
            }
            Ok(Object::Dictionary(copied))
        }
        Object::Array(arr) => {
            let copied: Result<Vec<_>> = arr
                .iter()
                .map(|item| deep_copy_object(output, source, item, cache))
                .collect();
            Ok(Object::Array(copied?))
        }
        Object::Stream(stream) => {
            let mut dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                dict.set(key.clone(), deep_copy_object(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        _ => Ok(obj.clone()),
    }
}

/// Source page dimensions (width, height) in points
pub fn page_dimensions_pt(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let page = doc.get_dictionary(page_id)?;

    let dims = page
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .ok()
        .and_then(|mb| {
            let width = mb.get(2).and_then(as_number)?;
            let height = mb.get(3).and_then(as_number)?;
            Some((width, height))
        })
        .unwrap_or(FALLBACK_MEDIA_BOX);

    Ok(dims)
}

fn as_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
