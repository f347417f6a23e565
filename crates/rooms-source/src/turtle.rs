//! Turtle decoding into plain string triples

use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::Term;
use rooms_core::{Result, RoomsError, Triple};

/// Decode a Turtle document
///
/// Relative IRIs resolve against `base_iri` when given. The first syntax
/// error aborts decoding; a partial triple set is never returned.
pub fn parse_turtle(data: &[u8], base_iri: Option<&str>) -> Result<Vec<Triple>> {
    let mut parser = RdfParser::from_format(RdfFormat::Turtle);
    if let Some(base) = base_iri {
        parser = parser
            .with_base_iri(base)
            .map_err(|e| RoomsError::Decode(format!("Invalid base IRI {base}: {e}")))?;
    }

    parser
        .for_reader(data)
        .map(|quad| {
            let quad = quad.map_err(|e| RoomsError::Decode(format!("Invalid Turtle: {e}")))?;
            Ok(Triple::new(
                term_value(Term::from(quad.subject)),
                quad.predicate.into_string(),
                term_value(quad.object),
            ))
        })
        .collect()
}

/// Blank nodes keep their `_:` prefix so they never collide with the
/// reserved attribute keys.
fn term_value(term: Term) -> String {
    match term {
        Term::NamedNode(node) => node.into_string(),
        Term::BlankNode(node) => node.to_string(),
        Term::Literal(literal) => literal.value().to_string(),
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rooms_core::vocab::{CAPACITY, DEPICTION, LABEL, ROOM_FEATURE_CLASS};

    const ROOM_DOC: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix oo: <http://purl.org/openorg/> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix soton: <http://id.southampton.ac.uk/ns/> .

<http://id.southampton.ac.uk/room/32-3077>
    rdfs:label "Lecture Theatre A"@en ;
    oo:capacity "120"^^<http://www.w3.org/2001/XMLSchema#integer> .

<https://data.southampton.ac.uk/images/32-3077.jpg> foaf:depiction <http://id.southampton.ac.uk/room/32-3077> .

<http://id.southampton.ac.uk/room-feature/whiteboard>
    a soton:RoomFeatureClass ;
    rdfs:label "Whiteboard" .
"#;

    #[test]
    fn test_parse_room_document() {
        let triples = parse_turtle(ROOM_DOC.as_bytes(), None).unwrap();
        assert_eq!(triples.len(), 5);

        assert!(triples.contains(&Triple::new(
            "http://id.southampton.ac.uk/room/32-3077",
            LABEL,
            "Lecture Theatre A"
        )));
        assert!(triples.contains(&Triple::new(
            "http://id.southampton.ac.uk/room/32-3077",
            CAPACITY,
            "120"
        )));
        assert!(triples.contains(&Triple::new(
            "https://data.southampton.ac.uk/images/32-3077.jpg",
            DEPICTION,
            "http://id.southampton.ac.uk/room/32-3077"
        )));
        assert!(triples.contains(&Triple::new(
            "http://id.southampton.ac.uk/room-feature/whiteboard",
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
            ROOM_FEATURE_CLASS
        )));
        assert!(triples.contains(&Triple::new(
            "http://id.southampton.ac.uk/room-feature/whiteboard",
            LABEL,
            "Whiteboard"
        )));
    }

    #[test]
    fn test_blank_node_features_keep_reserved_keys() {
        let doc = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix soton: <http://id.southampton.ac.uk/ns/> .

<http://id.southampton.ac.uk/room/32-3077> rdfs:label "Lecture Theatre A" .
_:name a soton:RoomFeatureClass ; rdfs:label "Projector" .
_:capacity a soton:RoomFeatureClass ; rdfs:label "Whiteboard" .
"#;
        let triples = parse_turtle(doc.as_bytes(), None).unwrap();
        assert!(triples.iter().any(|t| t.subject.starts_with("_:")));

        let attrs = rooms_core::extract(&triples, "http://id.southampton.ac.uk/room/32-3077");
        assert_eq!(attrs.name(), Some("Lecture Theatre A"));
        assert_eq!(attrs.capacity(), None);

        let mut features: Vec<&str> = attrs
            .iter()
            .filter(|(key, _)| key.starts_with("_:"))
            .map(|(_, value)| value)
            .collect();
        features.sort_unstable();
        assert_eq!(features, vec!["Projector", "Whiteboard"]);
    }

    #[test]
    fn test_relative_iris_use_base() {
        let doc = "<32-3077> <http://www.w3.org/2000/01/rdf-schema#label> \"Room\" .";
        let triples =
            parse_turtle(doc.as_bytes(), Some("http://id.southampton.ac.uk/room/")).unwrap();

        assert_eq!(triples[0].subject, "http://id.southampton.ac.uk/room/32-3077");
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_turtle(b"", None).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let err = parse_turtle(b"<http://a> <http://b> .", None).unwrap_err();
        assert!(matches!(err, RoomsError::Decode(_)));

        let err = parse_turtle(b"<html><body>Not Found</body></html>", None).unwrap_err();
        assert!(matches!(err, RoomsError::Decode(_)));
    }
}
