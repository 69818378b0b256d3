//! Link annotations
//!
//! Navigation targets refer to pages by number, which only resolve to
//! page objects once the whole document exists. This pass runs on the
//! finished document and turns every layout link into a `/Link`
//! annotation with a `/Fit` destination.

use crate::primitive::{Link, PageLayout};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Attach the links of `pages` to the matching pages of `doc`.
///
/// Links whose source or target page does not exist in `doc` are skipped
/// with a warning. Returns the number of annotations added.
pub fn add_link_annotations(doc: &mut Document, pages: &[PageLayout]) -> Result<usize> {
    let page_ids = doc.get_pages();
    let mut added = 0;

    for layout in pages {
        if layout.links.is_empty() {
            continue;
        }

        let Some(&page_id) = page_ids.get(&(layout.spec.number as u32)) else {
            log::warn!("Page {} missing from document, links skipped", layout.spec.number);
            continue;
        };

        let mut annots = Vec::with_capacity(layout.links.len());
        for link in &layout.links {
            let Some(&target_id) = page_ids.get(&(link.target as u32)) else {
                log::warn!(
                    "Link on page {} targets missing page {}",
                    layout.spec.number,
                    link.target
                );
                continue;
            };
            let annot = link_annotation(link, target_id, layout.height);
            annots.push(Object::Reference(doc.add_object(annot)));
        }

        added += annots.len();
        append_annots(doc, page_id, annots)?;
    }

    Ok(added)
}

fn link_annotation(link: &Link, target: ObjectId, page_height: f32) -> Dictionary {
    let area = link.area;
    Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Annot".to_vec())),
        ("Subtype", Object::Name(b"Link".to_vec())),
        (
            "Rect",
            Object::Array(vec![
                Object::Real(area.left),
                Object::Real(page_height - area.bottom),
                Object::Real(area.right),
                Object::Real(page_height - area.top),
            ]),
        ),
        (
            "Border",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(0),
            ]),
        ),
        (
            "Dest",
            Object::Array(vec![
                Object::Reference(target),
                Object::Name(b"Fit".to_vec()),
            ]),
        ),
    ])
}

fn append_annots(doc: &mut Document, page_id: ObjectId, mut annots: Vec<Object>) -> Result<()> {
    let page = doc.get_object_mut(page_id)?.as_dict_mut()?;

    if let Ok(Object::Array(existing)) = page.get(b"Annots") {
        let mut merged = existing.clone();
        merged.append(&mut annots);
        annots = merged;
    }

    page.set("Annots", Object::Array(annots));
    Ok(())
}
