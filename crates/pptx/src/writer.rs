//! PPTX package writer.
//!
//! Serializes a [`Deck`] into a PresentationML package: one master, one
//! blank layout, a palette theme and one part per slide.

use deck_core::model::{
    Align, ContentBlock, Deck, Frame, Paragraph, Run, Shape, Slide, Table, TextFrame, TextStyle,
};
use deck_core::theme::Color;
use deck_core::{slide_tag, Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::templates::{self, Rel, NS_A, NS_P, NS_R};

fn xml_err(e: quick_xml::Error) -> Error {
    Error::XmlError(e.to_string())
}

fn zip_err(e: zip::result::ZipError) -> Error {
    Error::ZipError(e.to_string())
}

/// Thin event writer over an in-memory buffer.
struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_err)?;
        Ok(Self { writer })
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(tag)).map_err(xml_err)
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(tag)).map_err(xml_err)
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_err)
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

/// Writes decks as `.pptx` packages.
#[derive(Debug, Default, Clone)]
pub struct PptxWriter;

impl PptxWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the deck to a file, creating or truncating it.
    pub fn save(&self, deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut sink = self.write(deck, BufWriter::new(file))?;
        sink.flush()?;
        log::info!(
            "Wrote {} slides to {}",
            deck.slide_count(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Write the deck into any seekable sink and hand the sink back.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, sink: W) -> Result<W> {
        let mut zip = ZipWriter::new(sink);

        let count = deck.slide_count();
        add(&mut zip, "[Content_Types].xml", templates::content_types(count).as_bytes())?;
        add(&mut zip, "_rels/.rels", templates::root_relationships().as_bytes())?;
        add(&mut zip, "docProps/app.xml", templates::app_properties(count).as_bytes())?;
        add(&mut zip, "docProps/core.xml", templates::core_properties(&deck.title).as_bytes())?;

        add(&mut zip, "ppt/presentation.xml", &presentation_xml(deck)?)?;
        add(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            presentation_rels(count).as_bytes(),
        )?;
        add(&mut zip, "ppt/presProps.xml", templates::pres_props().as_bytes())?;
        add(&mut zip, "ppt/viewProps.xml", templates::view_props().as_bytes())?;
        add(&mut zip, "ppt/tableStyles.xml", templates::table_styles().as_bytes())?;
        add(&mut zip, "ppt/theme/theme1.xml", templates::theme().as_bytes())?;

        add(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            templates::slide_master().as_bytes(),
        )?;
        let master_rels = templates::relationships(&[
            Rel {
                id: "rId1".into(),
                rel_type: templates::REL_SLIDE_LAYOUT,
                target: "../slideLayouts/slideLayout1.xml".into(),
            },
            Rel {
                id: "rId2".into(),
                rel_type: templates::REL_THEME,
                target: "../theme/theme1.xml".into(),
            },
        ]);
        add(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            master_rels.as_bytes(),
        )?;

        add(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            templates::blank_layout().as_bytes(),
        )?;
        let layout_rels = templates::relationships(&[Rel {
            id: "rId1".into(),
            rel_type: templates::REL_SLIDE_MASTER,
            target: "../slideMasters/slideMaster1.xml".into(),
        }]);
        add(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            layout_rels.as_bytes(),
        )?;

        let slide_rels = templates::relationships(&[Rel {
            id: "rId1".into(),
            rel_type: templates::REL_SLIDE_LAYOUT,
            target: "../slideLayouts/slideLayout1.xml".into(),
        }]);
        for (idx, slide) in deck.slides.iter().enumerate() {
            let n = idx + 1;
            add(&mut zip, &format!("ppt/slides/slide{n}.xml"), &slide_xml(slide)?)?;
            add(
                &mut zip,
                &format!("ppt/slides/_rels/slide{n}.xml.rels"),
                slide_rels.as_bytes(),
            )?;
            log::debug!("Serialized slide {n} ({})", slide_tag(slide.segment, slide.layout));
        }

        zip.finish().map_err(zip_err)
    }
}

fn add<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, data: &[u8]) -> Result<()> {
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(name, options).map_err(zip_err)?;
    zip.write_all(data)?;
    Ok(())
}

/// Relationship id of slide `n` (1-based) in `presentation.xml.rels`.
/// `rId1` is the master; the property parts follow the slides.
fn slide_rel_id(n: usize) -> String {
    format!("rId{}", n + 1)
}

fn presentation_rels(slide_count: usize) -> String {
    let mut rels = vec![Rel {
        id: "rId1".into(),
        rel_type: templates::REL_SLIDE_MASTER,
        target: "slideMasters/slideMaster1.xml".into(),
    }];
    for n in 1..=slide_count {
        rels.push(Rel {
            id: slide_rel_id(n),
            rel_type: templates::REL_SLIDE,
            target: format!("slides/slide{n}.xml"),
        });
    }
    let parts = [
        ("presProps", "presProps.xml"),
        ("viewProps", "viewProps.xml"),
        ("theme", "theme/theme1.xml"),
        ("tableStyles", "tableStyles.xml"),
    ];
    let types: Vec<String> = parts.iter().map(|(kind, _)| templates::office_rel(kind)).collect();
    for (i, ((_, target), rel_type)) in parts.iter().zip(&types).enumerate() {
        rels.push(Rel {
            id: format!("rId{}", slide_count + 2 + i),
            rel_type,
            target: (*target).to_string(),
        });
    }
    templates::relationships(&rels)
}

fn presentation_xml(deck: &Deck) -> Result<Vec<u8>> {
    let mut out = XmlOut::new()?;
    out.start(
        "p:presentation",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;

    out.start("p:sldMasterIdLst", &[])?;
    out.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    out.end("p:sldMasterIdLst")?;

    if !deck.slides.is_empty() {
        out.start("p:sldIdLst", &[])?;
        for idx in 0..deck.slides.len() {
            let id = (256 + idx).to_string();
            out.empty("p:sldId", &[("id", &id), ("r:id", &slide_rel_id(idx + 1))])?;
        }
        out.end("p:sldIdLst")?;
    }

    out.empty(
        "p:sldSz",
        &[
            ("cx", &deck.width.value().to_string()),
            ("cy", &deck.height.value().to_string()),
        ],
    )?;
    out.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    out.end("p:presentation")?;
    Ok(out.finish())
}

fn slide_xml(slide: &Slide) -> Result<Vec<u8>> {
    let mut out = XmlOut::new()?;
    out.start(
        "p:sld",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    out.start("p:cSld", &[("name", &slide_tag(slide.segment, slide.layout))])?;
    out.start("p:spTree", &[])?;

    out.start("p:nvGrpSpPr", &[])?;
    out.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    out.empty("p:cNvGrpSpPr", &[])?;
    out.empty("p:nvPr", &[])?;
    out.end("p:nvGrpSpPr")?;
    out.start("p:grpSpPr", &[])?;
    out.start("a:xfrm", &[])?;
    out.empty("a:off", &[("x", "0"), ("y", "0")])?;
    out.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    out.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    out.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    out.end("a:xfrm")?;
    out.end("p:grpSpPr")?;

    // Id 1 is the group shape of the tree.
    let mut next_id = 2;
    for block in &slide.blocks {
        let id = next_id;
        next_id += 1;
        match block {
            ContentBlock::Text(tb) => write_text_shape(&mut out, id, tb.frame, &tb.text_frame())?,
            ContentBlock::Bullets(list) => {
                write_text_shape(&mut out, id, list.frame, &list.text_frame())?
            }
            ContentBlock::Review(review) => {
                write_text_shape(&mut out, id, review.frame, &review.text_frame())?
            }
            ContentBlock::Shape(shape) => write_auto_shape(&mut out, id, shape)?,
            ContentBlock::Table(table) => write_table(&mut out, id, table)?,
        }
    }

    out.end("p:spTree")?;
    out.end("p:cSld")?;
    out.start("p:clrMapOvr", &[])?;
    out.empty("a:masterClrMapping", &[])?;
    out.end("p:clrMapOvr")?;
    out.end("p:sld")?;
    Ok(out.finish())
}

fn write_xfrm(out: &mut XmlOut, ns: &str, frame: Frame) -> Result<()> {
    let tag = format!("{ns}:xfrm");
    out.start(&tag, &[])?;
    out.empty(
        "a:off",
        &[
            ("x", &frame.left.value().to_string()),
            ("y", &frame.top.value().to_string()),
        ],
    )?;
    out.empty(
        "a:ext",
        &[
            ("cx", &frame.width.value().to_string()),
            ("cy", &frame.height.value().to_string()),
        ],
    )?;
    out.end(&tag)
}

fn write_solid_fill(out: &mut XmlOut, color: Color) -> Result<()> {
    out.start("a:solidFill", &[])?;
    out.empty("a:srgbClr", &[("val", &color.hex())])?;
    out.end("a:solidFill")
}

fn write_text_shape(out: &mut XmlOut, id: usize, frame: Frame, body: &TextFrame) -> Result<()> {
    out.start("p:sp", &[])?;
    out.start("p:nvSpPr", &[])?;
    out.empty(
        "p:cNvPr",
        &[("id", &id.to_string()), ("name", &format!("TextBox {}", id - 1))],
    )?;
    out.empty("p:cNvSpPr", &[("txBox", "1")])?;
    out.empty("p:nvPr", &[])?;
    out.end("p:nvSpPr")?;

    out.start("p:spPr", &[])?;
    write_xfrm(out, "a", frame)?;
    out.start("a:prstGeom", &[("prst", "rect")])?;
    out.empty("a:avLst", &[])?;
    out.end("a:prstGeom")?;
    out.empty("a:noFill", &[])?;
    out.end("p:spPr")?;

    write_text_body(out, "p:txBody", body)?;
    out.end("p:sp")
}

fn write_auto_shape(out: &mut XmlOut, id: usize, shape: &Shape) -> Result<()> {
    out.start("p:sp", &[])?;
    out.start("p:nvSpPr", &[])?;
    out.empty(
        "p:cNvPr",
        &[("id", &id.to_string()), ("name", &format!("Shape {}", id - 1))],
    )?;
    out.empty("p:cNvSpPr", &[])?;
    out.empty("p:nvPr", &[])?;
    out.end("p:nvSpPr")?;

    out.start("p:spPr", &[])?;
    write_xfrm(out, "a", shape.frame)?;
    out.start("a:prstGeom", &[("prst", shape.kind.preset())])?;
    out.empty("a:avLst", &[])?;
    out.end("a:prstGeom")?;
    write_solid_fill(out, shape.fill)?;
    out.start("a:ln", &[])?;
    out.empty("a:noFill", &[])?;
    out.end("a:ln")?;
    out.end("p:spPr")?;

    if let Some(body) = &shape.text {
        write_text_body(out, "p:txBody", body)?;
    }
    out.end("p:sp")
}

fn write_text_body(out: &mut XmlOut, tag: &str, body: &TextFrame) -> Result<()> {
    out.start(tag, &[])?;
    let wrap = if body.word_wrap { "square" } else { "none" };
    out.empty("a:bodyPr", &[("wrap", wrap), ("rtlCol", "0")])?;
    out.empty("a:lstStyle", &[])?;
    for paragraph in &body.paragraphs {
        write_paragraph(out, paragraph)?;
    }
    out.end(tag)
}

fn align_attr(align: Align) -> &'static str {
    match align {
        Align::Left => "l",
        Align::Center => "ctr",
        Align::Right => "r",
    }
}

fn write_spacing(out: &mut XmlOut, tag: &str, points: Option<u32>) -> Result<()> {
    if let Some(pt) = points {
        out.start(tag, &[])?;
        out.empty("a:spcPts", &[("val", &(pt * 100).to_string())])?;
        out.end(tag)?;
    }
    Ok(())
}

fn write_paragraph(out: &mut XmlOut, paragraph: &Paragraph) -> Result<()> {
    out.start("a:p", &[])?;

    let attrs = [("algn", align_attr(paragraph.align))];
    if paragraph.space_before.is_some() || paragraph.space_after.is_some() {
        out.start("a:pPr", &attrs)?;
        write_spacing(out, "a:spcBef", paragraph.space_before)?;
        write_spacing(out, "a:spcAft", paragraph.space_after)?;
        out.end("a:pPr")?;
    } else {
        out.empty("a:pPr", &attrs)?;
    }

    for run in &paragraph.runs {
        write_run(out, run)?;
    }
    out.end("a:p")
}

fn write_run_props(out: &mut XmlOut, tag: &str, style: &TextStyle) -> Result<()> {
    let size = (style.size * 100).to_string();
    let mut attrs = vec![("lang", "en-US"), ("sz", size.as_str())];
    if style.bold {
        attrs.push(("b", "1"));
    }
    attrs.push(("dirty", "0"));
    out.start(tag, &attrs)?;
    write_solid_fill(out, style.color)?;
    out.empty("a:latin", &[("typeface", style.font.typeface())])?;
    out.end(tag)
}

/// Write a run, turning embedded newlines into `<a:br/>`.
fn write_run(out: &mut XmlOut, run: &Run) -> Result<()> {
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out.start("a:br", &[])?;
            write_run_props(out, "a:rPr", &run.style)?;
            out.end("a:br")?;
        }
        if line.is_empty() {
            continue;
        }
        out.start("a:r", &[])?;
        write_run_props(out, "a:rPr", &run.style)?;
        out.start("a:t", &[])?;
        out.text(line)?;
        out.end("a:t")?;
        out.end("a:r")?;
    }
    Ok(())
}

fn write_table(out: &mut XmlOut, id: usize, table: &Table) -> Result<()> {
    out.start("p:graphicFrame", &[])?;
    out.start("p:nvGraphicFramePr", &[])?;
    out.empty(
        "p:cNvPr",
        &[("id", &id.to_string()), ("name", &format!("Table {}", id - 1))],
    )?;
    out.start("p:cNvGraphicFramePr", &[])?;
    out.empty("a:graphicFrameLocks", &[("noGrp", "1")])?;
    out.end("p:cNvGraphicFramePr")?;
    out.empty("p:nvPr", &[])?;
    out.end("p:nvGraphicFramePr")?;
    write_xfrm(out, "p", table.frame())?;

    out.start("a:graphic", &[])?;
    out.start(
        "a:graphicData",
        &[("uri", "http://schemas.openxmlformats.org/drawingml/2006/table")],
    )?;
    out.start("a:tbl", &[])?;
    out.empty("a:tblPr", &[("firstRow", "1"), ("bandRow", "1")])?;
    out.start("a:tblGrid", &[])?;
    for width in &table.col_widths {
        out.empty("a:gridCol", &[("w", &width.value().to_string())])?;
    }
    out.end("a:tblGrid")?;

    let row_height = table.row_height.value().to_string();
    for (r, row) in table.rows.iter().enumerate() {
        out.start("a:tr", &[("h", &row_height)])?;
        let style = table.cell_style(r);
        for cell in row {
            out.start("a:tc", &[])?;
            let body = TextFrame::new(vec![
                Paragraph::single(cell.clone(), style).spacing(Some(2), Some(2))
            ]);
            write_text_body(out, "a:txBody", &body)?;
            out.start("a:tcPr", &[])?;
            write_solid_fill(out, table.row_fill(r))?;
            out.end("a:tcPr")?;
            out.end("a:tc")?;
        }
        out.end("a:tr")?;
    }

    out.end("a:tbl")?;
    out.end("a:graphicData")?;
    out.end("a:graphic")?;
    out.end("p:graphicFrame")
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::builder::DeckBuilder;
    use deck_core::model::{BulletList, TextBox};
    use deck_core::Segment;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn sample_deck() -> Deck {
        let mut deck = DeckBuilder::new("Sample & Co");
        deck.add_divider_slide("Networking\n& Migrations", "~18% of Exam", Segment::Networking);
        let slide = deck.add_content_slide("Options", Segment::Networking, Some("Pick one"));
        slide
            .add_table(Table::new(&[["Need", "Use"], ["Hub", "Spoke"]], &[3.0, 8.0]))
            .unwrap();
        slide.add_bullet_list(BulletList::new(["Key: <value>"]));
        slide.add_text(TextBox::new(Frame::inches(1.0, 1.0, 2.0, 1.0), "A & B"));
        deck.finish()
    }

    fn read_part(bytes: Vec<u8>, name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut xml = String::new();
        part.read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_package_contains_required_parts() {
        let bytes = PptxWriter::new()
            .write(&sample_deck(), Cursor::new(Vec::new()))
            .unwrap()
            .into_inner();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert!(names.contains(&part), "missing {part}");
        }
    }

    #[test]
    fn test_presentation_lists_slides_and_size() {
        let bytes = PptxWriter::new()
            .write(&sample_deck(), Cursor::new(Vec::new()))
            .unwrap()
            .into_inner();
        let xml = read_part(bytes, "ppt/presentation.xml");
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    }

    #[test]
    fn test_slide_carries_tag_breaks_and_escaped_text() {
        let deck = sample_deck();
        let divider = String::from_utf8(slide_xml(&deck.slides[0]).unwrap()).unwrap();
        assert!(divider.contains(r#"<p:cSld name="networking/divider">"#));
        assert!(divider.contains("<a:t>Networking</a:t></a:r><a:br>"));
        assert!(divider.contains(r#"prst="roundRect""#));

        let content = String::from_utf8(slide_xml(&deck.slides[1]).unwrap()).unwrap();
        assert!(content.contains("<a:t>A &amp; B</a:t>"));
        assert!(content.contains("<a:t>&lt;value&gt;</a:t>"));
        assert!(content.contains(r#"<a:gridCol w="2743200"/>"#));
        assert!(content.contains(r#"<a:srgbClr val="0078D4"/>"#));
    }

    #[test]
    fn test_footer_painted_above_full_slide_background() {
        let deck = deck_core::plan::build_az305_deck().unwrap();
        let background = r#"<a:off x="0" y="0"/><a:ext cx="12191695" cy="6858000"/>"#;
        let mut backed = 0;
        for slide in &deck.slides {
            let xml = String::from_utf8(slide_xml(slide).unwrap()).unwrap();
            let Some(bg) = xml.find(background) else {
                continue;
            };
            backed += 1;
            let number = xml.rfind(&format!("<a:t>{}</a:t>", slide.number)).unwrap();
            assert!(number > bg, "slide {} footer drawn under background", slide.number);
        }
        assert_eq!(backed, 12);
    }
}
