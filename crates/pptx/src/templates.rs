//! Fixed package parts: content types, relationships, master, layout, theme
//! and the property parts every presentation carries.

use deck_core::theme::{
    Color, Font, AZURE_BLUE, BLACK, DARK_BLUE, GOLD, GREEN, LIGHT_GRAY, MID_GRAY, PINK,
    PURPLE, WHITE,
};

pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
pub const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
pub const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
pub const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";

/// Relationship type URI of an office document part kind, e.g. `presProps`.
pub fn office_rel(kind: &str) -> String {
    format!("{REL_BASE}/{kind}")
}

/// One relationship of a part.
pub struct Rel<'a> {
    pub id: String,
    pub rel_type: &'a str,
    pub target: String,
}

/// Render a `.rels` part.
pub fn relationships(rels: &[Rel<'_>]) -> String {
    let mut xml = format!(r#"{XML_DECL}<Relationships xmlns="{NS_PKG_RELS}">"#);
    for rel in rels {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id, rel.rel_type, rel.target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

pub fn root_relationships() -> String {
    relationships(&[
        Rel {
            id: "rId1".into(),
            rel_type: &office_rel("officeDocument"),
            target: "ppt/presentation.xml".into(),
        },
        Rel {
            id: "rId2".into(),
            rel_type: "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            target: "docProps/core.xml".into(),
        },
        Rel {
            id: "rId3".into(),
            rel_type: &office_rel("extended-properties"),
            target: "docProps/app.xml".into(),
        },
    ])
}

pub fn content_types(slide_count: usize) -> String {
    let mut xml = format!(
        r#"{XML_DECL}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#
    );
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let overrides = [
        ("/ppt/presentation.xml", "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"),
        ("/ppt/slideMasters/slideMaster1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"),
        ("/ppt/slideLayouts/slideLayout1.xml", "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"),
        ("/ppt/theme/theme1.xml", "application/vnd.openxmlformats-officedocument.theme+xml"),
        ("/ppt/presProps.xml", "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"),
        ("/ppt/viewProps.xml", "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"),
        ("/ppt/tableStyles.xml", "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"),
        ("/docProps/core.xml", "application/vnd.openxmlformats-package.core-properties+xml"),
        ("/docProps/app.xml", "application/vnd.openxmlformats-officedocument.extended-properties+xml"),
    ];
    for (part, content_type) in overrides {
        xml.push_str(&format!(
            r#"<Override PartName="{part}" ContentType="{content_type}"/>"#
        ));
    }
    for n in 1..=slide_count {
        xml.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="{CT_SLIDE}"/>"#
        ));
    }
    xml.push_str("</Types>");
    xml
}

fn escape(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

pub fn core_properties(title: &str) -> String {
    format!(
        concat!(
            "{decl}<cp:coreProperties ",
            r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
            r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{title}</dc:title>",
            "<dc:creator>Tim Warner</dc:creator>",
            "<cp:lastModifiedBy>Tim Warner</cp:lastModifiedBy>",
            "<cp:revision>1</cp:revision>",
            "</cp:coreProperties>"
        ),
        decl = XML_DECL,
        title = escape(title),
    )
}

pub fn app_properties(slide_count: usize) -> String {
    format!(
        concat!(
            "{decl}<Properties ",
            r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{app}</Application>",
            "<PresentationFormat>Widescreen</PresentationFormat>",
            "<Slides>{slides}</Slides>",
            "</Properties>"
        ),
        decl = XML_DECL,
        app = env!("CARGO_PKG_NAME"),
        slides = slide_count,
    )
}

pub fn pres_props() -> String {
    format!(r#"{XML_DECL}<p:presentationPr xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"/>"#)
}

pub fn view_props() -> String {
    format!(
        concat!(
            r#"{decl}<p:viewPr xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">"#,
            r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
            r#"<p:gridSpacing cx="76200" cy="76200"/>"#,
            "</p:viewPr>"
        ),
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
    )
}

/// Medium Style 2 - Accent 1, the default table style.
pub fn table_styles() -> String {
    format!(
        r#"{XML_DECL}<a:tblStyleLst xmlns:a="{NS_A}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
    )
}

const EMPTY_TREE: &str = concat!(
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree>"#
);

fn level_style(tag: &str, size_pt: u32, font: &str) -> String {
    format!(
        r#"<p:{tag}><a:lvl1pPr><a:defRPr sz="{sz}"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="{font}"/></a:defRPr></a:lvl1pPr></p:{tag}>"#,
        sz = size_pt * 100,
    )
}

pub fn slide_master() -> String {
    format!(
        concat!(
            r#"{decl}<p:sldMaster xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}">"#,
            r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>{tree}</p:cSld>"#,
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
            "<p:txStyles>{title}{body}{other}</p:txStyles>",
            "</p:sldMaster>"
        ),
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        tree = EMPTY_TREE,
        title = level_style("titleStyle", 44, Font::Semibold.typeface()),
        body = level_style("bodyStyle", 18, Font::Regular.typeface()),
        other = level_style("otherStyle", 18, Font::Regular.typeface()),
    )
}

/// The single blank layout every slide uses.
pub fn blank_layout() -> String {
    format!(
        concat!(
            r#"{decl}<p:sldLayout xmlns:a="{a}" xmlns:r="{r}" xmlns:p="{p}" type="blank" preserve="1">"#,
            r#"<p:cSld name="Blank">{tree}</p:cSld>"#,
            "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
            "</p:sldLayout>"
        ),
        decl = XML_DECL,
        a = NS_A,
        r = NS_R,
        p = NS_P,
        tree = EMPTY_TREE,
    )
}

fn srgb(color: Color) -> String {
    format!(r#"<a:srgbClr val="{}"/>"#, color.hex())
}

/// Theme whose colour scheme is the deck palette.
pub fn theme() -> String {
    let scheme = [
        ("dk1", BLACK),
        ("lt1", WHITE),
        ("dk2", DARK_BLUE),
        ("lt2", LIGHT_GRAY),
        ("accent1", AZURE_BLUE),
        ("accent2", GREEN),
        ("accent3", PINK),
        ("accent4", PURPLE),
        ("accent5", GOLD),
        ("accent6", MID_GRAY),
        ("hlink", AZURE_BLUE),
        ("folHlink", PURPLE),
    ];
    let colors: String = scheme
        .iter()
        .map(|(slot, color)| format!("<a:{slot}>{}</a:{slot}>", srgb(*color)))
        .collect();

    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let fills = fill.repeat(3);
    let lines: String = [6350, 12700, 19050]
        .iter()
        .map(|w| format!(r#"<a:ln w="{w}"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#))
        .collect();
    let effects = "<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3);

    format!(
        concat!(
            r#"{decl}<a:theme xmlns:a="{a}" name="AZ-305">"#,
            "<a:themeElements>",
            r#"<a:clrScheme name="AZ-305">{colors}</a:clrScheme>"#,
            r#"<a:fontScheme name="Segoe UI">"#,
            r#"<a:majorFont><a:latin typeface="{major}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="{minor}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
            "</a:fontScheme>",
            r#"<a:fmtScheme name="AZ-305">"#,
            "<a:fillStyleLst>{fills}</a:fillStyleLst>",
            "<a:lnStyleLst>{lines}</a:lnStyleLst>",
            "<a:effectStyleLst>{effects}</a:effectStyleLst>",
            "<a:bgFillStyleLst>{fills}</a:bgFillStyleLst>",
            "</a:fmtScheme>",
            "</a:themeElements>",
            "</a:theme>"
        ),
        decl = XML_DECL,
        a = NS_A,
        colors = colors,
        major = Font::Semibold.typeface(),
        minor = Font::Regular.typeface(),
        fills = fills,
        lines = lines,
        effects = effects,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_list_every_slide() {
        let xml = content_types(3);
        assert!(xml.contains(r#"PartName="/ppt/slides/slide3.xml""#));
        assert!(!xml.contains("slide4.xml"));
        assert_eq!(xml.matches(CT_SLIDE).count(), 3);
    }

    #[test]
    fn test_theme_uses_palette() {
        let xml = theme();
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="0078D4"/></a:accent1>"#));
        assert!(xml.contains(r#"<a:dk2><a:srgbClr val="002050"/></a:dk2>"#));
        assert!(xml.contains(r#"typeface="Segoe UI Semibold""#));
    }

    #[test]
    fn test_core_properties_escape_title() {
        let xml = core_properties("Q&A <live>");
        assert!(xml.contains("<dc:title>Q&amp;A &lt;live&gt;</dc:title>"));
    }
}
