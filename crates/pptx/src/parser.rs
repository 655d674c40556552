//! PPTX text extraction.
//!
//! Reads slides in the order `presentation.xml` lists them and reduces each
//! to its visible text: one line per paragraph, one line per table row with
//! cells joined by `" | "`. Lines are ordered by the position of the shape
//! they belong to.

use deck_core::{parse_slide_tag, Error, ExtractedSlide, Presentation, PresentationFormat, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Parser for PPTX (Office Open XML) files.
pub struct PptxParser;

impl PptxParser {
    /// Create a new PPTX parser.
    pub fn new() -> Self {
        Self
    }

    /// Open and parse a file from disk.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Presentation> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = File::open(path)?;
        self.parse(BufReader::new(file), &filename)
    }

    /// Parse a PPTX file from a reader.
    pub fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<Presentation> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut presentation = Presentation::new(filename, PresentationFormat::Pptx);

        let rels = self.read_relationships(&mut archive)?;
        let listing = self.read_presentation(&mut archive)?;
        presentation.slide_size = listing.slide_size;

        let slide_order = slide_order(&rels, &listing.slide_rel_ids);
        log::debug!("{filename}: {} slides", slide_order.len());

        for (idx, slide_path) in slide_order.iter().enumerate() {
            let slide = self.parse_slide(&mut archive, slide_path, idx + 1)?;
            presentation.add_slide(slide);
        }

        Ok(presentation)
    }

    /// Read the slide relationships of `presentation.xml`.
    fn read_relationships<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
    ) -> Result<Vec<SlideRel>> {
        let rels_content = self.read_file_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
        let mut slides = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if local_name(e.name().as_ref()) == b"Relationship" =>
                {
                    let rel_type = attribute(e, b"Type").unwrap_or_default();
                    let target = attribute(e, b"Target").unwrap_or_default();
                    let id = attribute(e, b"Id").unwrap_or_default();

                    if rel_type.ends_with("/slide") {
                        let path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push(SlideRel { id, path });
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        Ok(slides)
    }

    /// Read the slide id list and slide size from `presentation.xml`.
    fn read_presentation<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
    ) -> Result<PresentationListing> {
        let content = self.read_file_from_archive(archive, "ppt/presentation.xml")?;
        let mut listing = PresentationListing::default();

        let mut reader = Reader::from_str(&content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    match local_name(e.name().as_ref()) {
                        b"sldId" => {
                            if let Some(id) = attribute(e, b"r:id") {
                                listing.slide_rel_ids.push(id);
                            }
                        }
                        b"sldSz" => {
                            let cx = attribute(e, b"cx").and_then(|v| v.parse().ok());
                            let cy = attribute(e, b"cy").and_then(|v| v.parse().ok());
                            if let (Some(cx), Some(cy)) = (cx, cy) {
                                listing.slide_size = Some((cx, cy));
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing presentation.xml: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        Ok(listing)
    }

    /// Parse a single slide from the archive.
    fn parse_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
        slide_number: usize,
    ) -> Result<ExtractedSlide> {
        let content = self.read_file_from_archive(archive, slide_path)?;
        let mut slide = ExtractedSlide::new(slide_number);

        let contents = extract_slide_contents(&content)?;
        if let Some(tag) = contents.tag.as_deref() {
            let (segment, layout) = parse_slide_tag(tag);
            slide.segment = segment;
            slide.layout = layout;
        }

        for line in contents.lines {
            slide.add_line_with_position(line.text, line.y, line.x);
        }

        // Top-to-bottom, left-to-right
        slide.sort_by_position();

        Ok(slide)
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A slide relationship from `presentation.xml.rels`.
#[derive(Debug)]
struct SlideRel {
    id: String,
    path: String,
}

#[derive(Debug, Default)]
struct PresentationListing {
    slide_rel_ids: Vec<String>,
    slide_size: Option<(i64, i64)>,
}

/// Order slide parts by the `sldIdLst` of `presentation.xml`.
///
/// Packages without a usable id list fall back to the number in the
/// relationship id or part name.
fn slide_order(rels: &[SlideRel], listed: &[String]) -> Vec<String> {
    let by_id: HashMap<&str, &str> = rels
        .iter()
        .map(|r| (r.id.as_str(), r.path.as_str()))
        .collect();
    let ordered: Vec<String> = listed
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).map(|p| p.to_string()))
        .collect();
    if !ordered.is_empty() {
        return ordered;
    }

    let mut slides: Vec<(&str, Option<usize>)> = rels
        .iter()
        .map(|r| {
            let order = extract_slide_number(&r.id).or_else(|| extract_slide_number(&r.path));
            (r.path.as_str(), order)
        })
        .collect();
    slides.sort_by(|a, b| match (a.1, b.1) {
        (Some(na), Some(nb)) => na.cmp(&nb),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.0.cmp(b.0),
    });
    slides.into_iter().map(|(path, _)| path.to_string()).collect()
}

/// A text line with the offset of its shape.
#[derive(Debug, PartialEq)]
struct PositionedLine {
    text: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Default)]
struct SlideContents {
    tag: Option<String>,
    lines: Vec<PositionedLine>,
}

impl SlideContents {
    fn push_line(&mut self, shape: Option<(f64, f64)>, text: String) {
        let (x, y) = shape.unwrap_or_default();
        self.lines.push(PositionedLine { text, x, y });
    }
}

/// Walk a slide's XML and collect its tag and text lines.
///
/// Whitespace is kept as written, so runs such as `"Tenant: "` keep the
/// space before the next run.
fn extract_slide_contents(xml_content: &str) -> Result<SlideContents> {
    let mut contents = SlideContents::default();
    let mut reader = Reader::from_str(xml_content);

    // Offset of the current top-level shape, once seen.
    let mut shape: Option<(f64, f64)> = None;
    let mut in_shape = false;
    let mut paragraph: Option<String> = None;
    let mut in_text = false;
    let mut cell: Option<Vec<String>> = None;
    let mut row: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"cSld" => contents.tag = attribute(e, b"name"),
                b"sp" | b"graphicFrame" | b"pic" => {
                    in_shape = true;
                    shape = None;
                }
                b"off" if in_shape && shape.is_none() => shape = offset(e),
                b"tr" => row.clear(),
                b"tc" => cell = Some(Vec::new()),
                b"p" => paragraph = Some(String::new()),
                b"t" => in_text = true,
                b"br" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"off" if in_shape && shape.is_none() => shape = offset(e),
                b"br" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some(p) = paragraph.as_mut() {
                        let text = e
                            .unescape()
                            .map_err(|e| Error::XmlError(format!("Bad text in slide: {}", e)))?;
                        p.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(text) = paragraph.take() {
                        match cell.as_mut() {
                            Some(paragraphs) => paragraphs.push(text),
                            None => contents.push_line(shape, text),
                        }
                    }
                }
                b"tc" => {
                    if let Some(paragraphs) = cell.take() {
                        row.push(paragraphs.join("\n").trim().to_string());
                    }
                }
                b"tr" => {
                    let text = row.join(" | ");
                    row.clear();
                    contents.push_line(shape, text);
                }
                b"sp" | b"graphicFrame" | b"pic" => {
                    in_shape = false;
                    shape = None;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::PptxParseError(format!(
                    "Error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(contents)
}

/// The `x`/`y` attributes of an `a:off` element.
fn offset(e: &BytesStart) -> Option<(f64, f64)> {
    let x = attribute(e, b"x")?.parse().ok()?;
    let y = attribute(e, b"y")?.parse().ok()?;
    Some((x, y))
}

/// Value of an attribute, matched by its full (prefixed) name.
fn attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "rId2" or "slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Segment, SlideLayout};

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("rId1"), Some(1));
        assert_eq!(extract_slide_number("rId12"), Some(12));
        assert_eq!(extract_slide_number("slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slide123.xml"), Some(123));
        assert_eq!(extract_slide_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_slide_order_follows_id_list() {
        let rels = vec![
            SlideRel {
                id: "rId2".into(),
                path: "ppt/slides/slide1.xml".into(),
            },
            SlideRel {
                id: "rId3".into(),
                path: "ppt/slides/slide2.xml".into(),
            },
        ];
        let listed = vec!["rId3".to_string(), "rId2".to_string()];
        assert_eq!(
            slide_order(&rels, &listed),
            vec!["ppt/slides/slide2.xml", "ppt/slides/slide1.xml"]
        );
        // No id list: fall back to relationship numbering
        assert_eq!(
            slide_order(&rels, &[]),
            vec!["ppt/slides/slide1.xml", "ppt/slides/slide2.xml"]
        );
    }

    const SLIDE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="a" xmlns:p="p"><p:cSld name="identity/content"><p:spTree>
<p:grpSpPr><a:xfrm><a:off x="0" y="0"/></a:xfrm></p:grpSpPr>
<p:sp><p:spPr><a:xfrm><a:off x="457200" y="6400800"/></a:xfrm></p:spPr>
<p:txBody><a:p><a:r><a:t>Footer</a:t></a:r></a:p></p:txBody></p:sp>
<p:sp><p:spPr><a:xfrm><a:off x="457200" y="137160"/></a:xfrm></p:spPr>
<p:txBody><a:p><a:r><a:t>• Tenant: </a:t></a:r><a:r><a:t>A &amp; B</a:t></a:r></a:p>
<a:p><a:r><a:t>Line one</a:t></a:r><a:br/><a:r><a:t>line two</a:t></a:r></a:p><a:p/></p:txBody></p:sp>
<p:graphicFrame><p:xfrm><a:off x="457200" y="1371600"/></p:xfrm><a:graphic><a:graphicData><a:tbl>
<a:tr h="1"><a:tc><a:txBody><a:p><a:r><a:t>Need</a:t></a:r></a:p></a:txBody></a:tc>
<a:tc><a:txBody><a:p><a:r><a:t>Use</a:t></a:r></a:p></a:txBody></a:tc></a:tr>
<a:tr h="1"><a:tc><a:txBody><a:p><a:r><a:t> Hub </a:t></a:r></a:p></a:txBody></a:tc>
<a:tc><a:txBody><a:p><a:r><a:t>Spoke</a:t></a:r></a:p></a:txBody></a:tc></a:tr>
</a:tbl></a:graphicData></a:graphic></p:graphicFrame>
</p:spTree></p:cSld></p:sld>"#;

    #[test]
    fn test_extract_slide_contents() {
        let contents = extract_slide_contents(SLIDE).unwrap();
        assert_eq!(contents.tag.as_deref(), Some("identity/content"));
        let texts: Vec<&str> = contents.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Footer",
                "• Tenant: A & B",
                "Line one\nline two",
                "Need | Use",
                "Hub | Spoke"
            ]
        );
        assert_eq!(contents.lines[0].y, 6400800.0);
        assert_eq!(contents.lines[3].y, 1371600.0);
    }

    #[test]
    fn test_parse_slide_orders_by_position() {
        let contents = extract_slide_contents(SLIDE).unwrap();
        let mut slide = ExtractedSlide::new(1);
        let (segment, layout) = parse_slide_tag(contents.tag.as_deref().unwrap());
        slide.segment = segment;
        slide.layout = layout;
        for line in contents.lines {
            slide.add_line_with_position(line.text, line.y, line.x);
        }
        slide.sort_by_position();

        assert_eq!(slide.segment, Some(Segment::Identity));
        assert_eq!(slide.layout, Some(SlideLayout::Content));
        assert_eq!(slide.title(), "• Tenant: A & B");
        assert_eq!(slide.texts().last(), Some("Footer"));
        assert_eq!(slide.lines.len(), 5);
    }
}
