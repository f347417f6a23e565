//! Two-pass attribute extraction
//!
//! Rebuilds a flat room record from an unordered triple set. The first
//! pass classifies statements about the room itself and seeds an entry for
//! every feature subject; the second pass joins feature subjects to their
//! `rdfs:label`.
//!
//! Author: hephaex@gmail.com

use crate::model::{AttributeMap, Triple, CAPACITY_KEY, DEPICTION_KEY};
use crate::vocab::WellKnown;

/// Extract the attribute map for `room_subject` from `triples`
///
/// Total over any input: absent predicates leave their keys out.
pub fn extract(triples: &[Triple], room_subject: &str) -> AttributeMap {
    let seeded = classify(triples, room_subject);
    resolve_labels(seeded, triples)
}

/// Pass 1: classify and seed
///
/// Name fragments are appended in input order.
pub fn classify(triples: &[Triple], room_subject: &str) -> AttributeMap {
    let mut attributes = AttributeMap::new();

    for triple in triples {
        if WellKnown::from_iri(&triple.object) == Some(WellKnown::RoomFeatureClass) {
            attributes.insert(triple.subject.as_str(), "");
        }

        match WellKnown::from_iri(&triple.predicate) {
            Some(WellKnown::Capacity) => {
                attributes.insert(CAPACITY_KEY, triple.object.as_str());
            }
            // the image resource sits in subject position in this schema
            Some(WellKnown::Depiction) => {
                attributes.insert(DEPICTION_KEY, triple.subject.as_str());
            }
            Some(WellKnown::Label) if triple.subject == room_subject => {
                attributes.append_name(&triple.object);
            }
            Some(WellKnown::Label) | Some(WellKnown::RoomFeatureClass) | None => {}
        }
    }

    attributes
}

/// Pass 2: resolve feature labels
///
/// Only subjects already present in `seeded` are overwritten.
pub fn resolve_labels(mut seeded: AttributeMap, triples: &[Triple]) -> AttributeMap {
    for triple in triples {
        if WellKnown::from_iri(&triple.predicate) == Some(WellKnown::Label) {
            seeded.replace(&triple.subject, &triple.object);
        }
    }
    seeded
}
