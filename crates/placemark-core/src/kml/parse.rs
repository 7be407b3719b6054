// crates/placemark-core/src/kml/parse.rs

//! Event-driven KML reader.
//!
//! The tree is built with an explicit frame stack rather than recursive
//! descent, so document depth never turns into call-stack depth. Unknown
//! elements are skipped with a counter instead of frames.

use super::{Folder, KmlDocument, Placemark, Point};
use crate::error::{PlacemarkError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;

/// One open element on the path from `<kml>` to the current position.
#[derive(Debug)]
enum Frame {
    Root,
    Document,
    Folder(Folder),
    Placemark(Placemark),
    Point { point: Point, has_coordinates: bool },
    Coordinates(String),
}

impl Frame {
    fn tag(&self) -> &'static str {
        match self {
            Frame::Root => "kml",
            Frame::Document => "Document",
            Frame::Folder(_) => "Folder",
            Frame::Placemark(_) => "Placemark",
            Frame::Point { .. } => "Point",
            Frame::Coordinates(_) => "coordinates",
        }
    }
}

#[derive(Debug)]
struct TreeBuilder {
    doc: KmlDocument,
    stack: Vec<Frame>,
    /// Open elements inside a skipped subtree.
    skip_depth: usize,
    folder_depth: usize,
    max_depth: usize,
    root_seen: bool,
}

impl TreeBuilder {
    fn new(max_depth: usize) -> Self {
        Self {
            doc: KmlDocument::default(),
            stack: Vec::new(),
            skip_depth: 0,
            folder_depth: 0,
            max_depth,
            root_seen: false,
        }
    }

    fn open(&mut self, local_name: &[u8]) -> Result<()> {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return Ok(());
        }

        let frame = match (self.stack.last_mut(), local_name) {
            (None, b"kml") if !self.root_seen => {
                self.root_seen = true;
                Some(Frame::Root)
            }
            (None, other) => {
                return Err(PlacemarkError::MalformedDocument(format!(
                    "expected <kml> root element, found <{}>",
                    String::from_utf8_lossy(other)
                )));
            }
            (Some(Frame::Root), b"Document") => Some(Frame::Document),
            (Some(Frame::Document | Frame::Folder(_)), b"Placemark") => {
                Some(Frame::Placemark(Placemark::default()))
            }
            (Some(Frame::Document | Frame::Folder(_)), b"Folder") => {
                if self.folder_depth >= self.max_depth {
                    return Err(PlacemarkError::NestingTooDeep {
                        max: self.max_depth,
                    });
                }
                self.folder_depth += 1;
                Some(Frame::Folder(Folder::default()))
            }
            (Some(Frame::Placemark(p)), b"Point") if p.point.is_none() => Some(Frame::Point {
                point: Point::default(),
                has_coordinates: false,
            }),
            (
                Some(Frame::Point {
                    has_coordinates, ..
                }),
                b"coordinates",
            ) if !*has_coordinates => {
                *has_coordinates = true;
                Some(Frame::Coordinates(String::new()))
            }
            _ => None,
        };

        match frame {
            Some(frame) => self.stack.push(frame),
            None => self.skip_depth = 1,
        }
        Ok(())
    }

    /// Closes the innermost element. Returns `true` once `</kml>` is reached.
    fn close(&mut self) -> Result<bool> {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return Ok(false);
        }

        let frame = self.stack.pop().ok_or_else(|| {
            PlacemarkError::MalformedDocument("closing tag without matching open tag".into())
        })?;

        match (frame, self.stack.last_mut()) {
            (Frame::Root, _) => return Ok(true),
            (Frame::Document, _) => {}
            (Frame::Folder(folder), parent) => {
                self.folder_depth -= 1;
                match parent {
                    Some(Frame::Document) => self.doc.folders.push(folder),
                    Some(Frame::Folder(outer)) => outer.folders.push(folder),
                    _ => {}
                }
            }
            (Frame::Placemark(placemark), parent) => match parent {
                Some(Frame::Document) => self.doc.placemarks.push(placemark),
                Some(Frame::Folder(folder)) => folder.placemarks.push(placemark),
                _ => {}
            },
            (Frame::Point { point, .. }, Some(Frame::Placemark(placemark))) => {
                placemark.point = Some(point);
            }
            (Frame::Coordinates(text), Some(Frame::Point { point, .. })) => {
                point.coordinates = text;
            }
            _ => {}
        }
        Ok(false)
    }

    fn text(&mut self, text: &str) {
        if self.skip_depth > 0 {
            return;
        }
        if let Some(Frame::Coordinates(buf)) = self.stack.last_mut() {
            buf.push_str(text);
        }
    }
}

/// Parse a KML byte stream into a [`KmlDocument`].
///
/// `max_depth` caps `<Folder>` nesting; a folder directly under `<Document>`
/// is at depth 1.
///
/// # Errors
///
/// - [`PlacemarkError::MalformedDocument`] if the stream is not well-formed
///   XML, has no root element, or the root is not `<kml>`.
/// - [`PlacemarkError::NestingTooDeep`] if folders nest deeper than `max_depth`.
/// - [`PlacemarkError::Io`] if the underlying reader fails.
pub fn parse_document<R: BufRead>(input: R, max_depth: usize) -> Result<KmlDocument> {
    let mut reader = Reader::from_reader(input);
    reader.expand_empty_elements(true);
    reader.check_end_names(true);

    let mut builder = TreeBuilder::new(max_depth);
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_error(e, reader.buffer_position()))?;

        match event {
            Event::Start(e) => builder.open(e.local_name().as_ref())?,
            Event::End(_) => {
                if builder.close()? {
                    break;
                }
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|e| xml_error(e, reader.buffer_position()))?;
                builder.text(&text);
            }
            Event::CData(e) => {
                let text = std::str::from_utf8(&e).map_err(|e| {
                    PlacemarkError::MalformedDocument(format!("CDATA is not UTF-8: {e}"))
                })?;
                builder.text(text);
            }
            Event::Eof => {
                return Err(match builder.stack.last() {
                    None => PlacemarkError::MalformedDocument("document has no root element".into()),
                    Some(frame) => PlacemarkError::MalformedDocument(format!(
                        "unexpected end of document inside <{}>",
                        frame.tag()
                    )),
                });
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(builder.doc)
}

/// Convenience wrapper over [`parse_document`] for in-memory text.
pub fn parse_str(content: &str, max_depth: usize) -> Result<KmlDocument> {
    parse_document(content.as_bytes(), max_depth)
}

fn xml_error(err: quick_xml::Error, position: usize) -> PlacemarkError {
    match err {
        quick_xml::Error::Io(io) => PlacemarkError::Io(std::io::Error::new(io.kind(), io.to_string())),
        other => PlacemarkError::MalformedDocument(format!("{other} (at byte {position})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPTH: usize = 16;

    #[test]
    fn parses_root_placemarks_and_folders() {
        let doc = parse_str(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <kml xmlns="http://www.opengis.net/kml/2.2">
              <Document>
                <Placemark><Point><coordinates>114.1,22.3,0</coordinates></Point></Placemark>
                <Folder>
                  <Placemark><Point><coordinates> 114.2 , 22.4 </coordinates></Point></Placemark>
                </Folder>
              </Document>
            </kml>"#,
            DEPTH,
        )
        .unwrap();

        assert_eq!(doc.placemarks.len(), 1);
        assert_eq!(doc.placemarks[0].coordinates(), "114.1,22.3,0");
        assert_eq!(doc.folders.len(), 1);
        assert_eq!(doc.folders[0].placemarks[0].coordinates(), " 114.2 , 22.4 ");
    }

    #[test]
    fn ignores_unknown_elements_and_attributes() {
        let doc = parse_str(
            r#"<kml xmlns:gx="http://www.google.com/kml/ext/2.2">
              <Document id="d1">
                <name>Signs</name>
                <Style id="s"><IconStyle><Icon><href>x.png</href></Icon></IconStyle></Style>
                <Placemark id="p1">
                  <name>A <b>bold</b> name</name>
                  <ExtendedData><Data name="coordinates"><value>1,2</value></Data></ExtendedData>
                  <styleUrl>#s</styleUrl>
                  <Point><altitudeMode>clampToGround</altitudeMode><coordinates>1,2</coordinates></Point>
                </Placemark>
                <gx:Tour><Placemark><Point><coordinates>9,9</coordinates></Point></Placemark></gx:Tour>
              </Document>
            </kml>"#,
            DEPTH,
        )
        .unwrap();

        assert_eq!(doc.placemarks.len(), 1);
        assert_eq!(doc.placemarks[0].coordinates(), "1,2");
    }

    #[test]
    fn points_inside_multigeometry_are_not_meaningful() {
        let doc = parse_str(
            "<kml><Document><Placemark><MultiGeometry><Point><coordinates>1,2</coordinates></Point></MultiGeometry></Placemark></Document></kml>",
            DEPTH,
        )
        .unwrap();

        assert_eq!(doc.placemarks.len(), 1);
        assert!(doc.placemarks[0].point.is_none());
    }

    #[test]
    fn keeps_first_point_and_first_coordinates() {
        let doc = parse_str(
            "<kml><Document><Placemark>\
               <Point><coordinates>1,2</coordinates><coordinates>3,4</coordinates></Point>\
               <Point><coordinates>5,6</coordinates></Point>\
             </Placemark></Document></kml>",
            DEPTH,
        )
        .unwrap();

        assert_eq!(doc.placemarks[0].coordinates(), "1,2");
    }

    #[test]
    fn reads_cdata_and_entities() {
        let doc = parse_str(
            "<kml><Document>\
               <Placemark><Point><coordinates><![CDATA[7.5,8.5]]></coordinates></Point></Placemark>\
               <Placemark><Point><coordinates>&#32;3.5,4.5</coordinates></Point></Placemark>\
             </Document></kml>",
            DEPTH,
        )
        .unwrap();

        assert_eq!(doc.placemarks[0].coordinates(), "7.5,8.5");
        assert_eq!(doc.placemarks[1].coordinates(), " 3.5,4.5");
    }

    #[test]
    fn self_closing_elements_are_empty() {
        let doc = parse_str(
            "<kml><Document><Folder/><Placemark><Point/></Placemark><Placemark/></Document></kml>",
            DEPTH,
        )
        .unwrap();

        assert_eq!(doc.folders.len(), 1);
        assert_eq!(doc.placemarks.len(), 2);
        assert_eq!(doc.placemarks[0].point, Some(Point::default()));
        assert_eq!(doc.placemarks[1].point, None);
    }

    #[test]
    fn merges_multiple_documents() {
        let doc = parse_str(
            "<kml>\
               <Document><Placemark><Point><coordinates>1,1</coordinates></Point></Placemark></Document>\
               <Document><Placemark><Point><coordinates>2,2</coordinates></Point></Placemark></Document>\
             </kml>",
            DEPTH,
        )
        .unwrap();

        assert_eq!(doc.placemarks.len(), 2);
        assert_eq!(doc.placemarks[1].coordinates(), "2,2");
    }

    #[test]
    fn kml_without_document_is_empty() {
        let doc = parse_str("<kml><NetworkLink/></kml>", DEPTH).unwrap();
        assert_eq!(doc, KmlDocument::default());
    }

    #[test]
    fn rejects_wrong_root() {
        let err = parse_str("<gpx><Document/></gpx>", DEPTH).unwrap_err();
        assert!(matches!(err, PlacemarkError::MalformedDocument(_)), "{err}");
    }

    #[test]
    fn rejects_mismatched_tags() {
        let err = parse_str("<kml><Document></Folder></kml>", DEPTH).unwrap_err();
        assert!(matches!(err, PlacemarkError::MalformedDocument(_)), "{err}");
    }

    #[test]
    fn rejects_truncated_document() {
        let err = parse_str("<kml><Document><Placemark>", DEPTH).unwrap_err();
        match err {
            PlacemarkError::MalformedDocument(msg) => assert!(msg.contains("Placemark"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse_str("", DEPTH).unwrap_err();
        assert!(matches!(err, PlacemarkError::MalformedDocument(_)), "{err}");

        let err = parse_str("   just text   ", DEPTH).unwrap_err();
        assert!(matches!(err, PlacemarkError::MalformedDocument(_)), "{err}");
    }

    #[test]
    fn enforces_folder_depth_limit() {
        let nested = |levels: usize| {
            format!(
                "<kml><Document>{}{}</Document></kml>",
                "<Folder>".repeat(levels),
                "</Folder>".repeat(levels)
            )
        };

        assert!(parse_str(&nested(3), 3).is_ok());
        let err = parse_str(&nested(4), 3).unwrap_err();
        assert!(matches!(err, PlacemarkError::NestingTooDeep { max: 3 }), "{err}");
    }

    #[test]
    fn deep_unknown_elements_do_not_count_as_folders() {
        let xml = format!(
            "<kml><Document>{}{}<Placemark><Point><coordinates>1,2</coordinates></Point></Placemark></Document></kml>",
            "<x>".repeat(10_000),
            "</x>".repeat(10_000)
        );
        let doc = parse_str(&xml, 1).unwrap();
        assert_eq!(doc.placemarks.len(), 1);
    }
}
