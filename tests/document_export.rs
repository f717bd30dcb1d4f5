//! End-to-end tests: build documents through the public API and check the
//! assembled HTML and the export sinks.

use blockdoc::document::{source::parse_document, Anchor, ImageSize, SourceFormat};
use blockdoc::export::{export_to_html_file, render_export};
use blockdoc::render::{extract, render};
use blockdoc::{
    assemble, create_block, upload_image, Block, BlockDraft, BlockType, ContentMode, Document,
    Error, Formatting, PageOptions, TableData,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

fn anchor(value: &str) -> Option<Anchor> {
    Some(Anchor::new(value).unwrap())
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn heading_and_paragraph_produce_navigation_and_content() {
    let doc = Document::from(vec![
        Block::heading(1, "Intro", anchor("intro")),
        Block::paragraph("Hello"),
    ]);

    let html = assemble(&doc, None, &PageOptions::default());

    assert_eq!(html.matches(r##"<a href="#intro" class="button">Intro</a>"##).count(), 1);
    assert!(html.contains("<h1 id=\"intro\">Intro</h1>\n    <p>Hello</p>"));
    assert!(!html.contains("nav-empty"));
}

#[test]
fn table_renders_header_row_and_body_rows_in_order() {
    let table = TableData::new(
        vec!["A".into(), "B".into()],
        vec![vec!["1".into(), "2".into()], vec!["3".into(), "4".into()]],
    )
    .unwrap();

    let fragment = render(&Block::table(table));

    assert_eq!(
        fragment,
        "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td></tr></tbody></table>"
    );
}

#[test]
fn empty_document_export_is_rejected_without_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.html");

    assert!(matches!(
        render_export(&Document::new(), None, &PageOptions::default()),
        Err(Error::EmptyDocument)
    ));
    assert!(matches!(
        export_to_html_file(&Document::new(), None, &PageOptions::default(), &path),
        Err(Error::EmptyDocument)
    ));
    assert!(!path.exists());
}

#[test]
fn separator_ignores_formatting_and_content() {
    let formatting = Formatting::default().bold().italic().color("#ff0000");
    let block = create_block(
        BlockType::Separator,
        "ignored",
        None,
        None,
        None,
        Some(formatting),
    );
    assert_eq!(render(&block), "<hr>");
}

// ─────────────────────────────────────────────────────────────────────────────
// Editing flow
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn draft_commits_build_an_ordered_document() {
    let mut doc = Document::new();
    let mut draft = BlockDraft::new(BlockType::H2);

    draft.set_content("Instalação");
    draft.set_anchor("instalacao").unwrap();
    assert!(draft.set_anchor("com espaço").is_err());
    assert_eq!(draft.anchor(), "instalacao");
    doc.append(draft.commit().unwrap());

    draft.set_type(BlockType::Paragraph);
    assert!(draft.commit().is_none());
    draft.set_content("Passo a passo");
    draft.set_formatting(Formatting::default().underline());
    doc.append(draft.commit().unwrap());

    draft.set_type(BlockType::ImageSmall);
    draft.set_image(upload_image(PNG_BYTES).unwrap());
    doc.append(draft.commit().unwrap());

    let html = assemble(&doc, None, &PageOptions::default());
    assert!(html.contains(r#"<h2 id="instalacao">Instalação</h2>"#));
    assert!(html.contains("<p><u>Passo a passo</u></p>"));
    assert!(html.contains(r#"class="img-small content-image""#));
    assert!(html.contains("src=\"data:image/png;base64,"));
}

#[test]
fn moves_and_removal_preserve_the_other_blocks() {
    let a = Block::paragraph("a");
    let b = Block::paragraph("b");
    let c = Block::paragraph("c");
    let (id_a, id_c) = (a.id(), c.id());
    let mut doc = Document::from(vec![a, b, c]);

    assert!(!doc.move_up(id_a));
    assert!(doc.move_up(id_c));
    assert!(doc.move_down(id_a));
    let order: Vec<&str> = doc.iter().map(|block| block.content()).collect();
    assert_eq!(order, vec!["c", "a", "b"]);

    let removed = doc.remove(id_a).unwrap();
    assert_eq!(removed.content(), "a");
    assert!(doc.remove(id_a).is_none());
    assert_eq!(doc.len(), 2);
}

#[test]
fn escaped_mode_neutralizes_markup() {
    let doc = Document::from(vec![Block::paragraph("<script>x</script>")]);

    let raw = assemble(&doc, None, &PageOptions::default());
    let escaped = assemble(
        &doc,
        None,
        &PageOptions::default().with_content_mode(ContentMode::Escaped),
    );

    assert!(raw.contains("<p><script>x</script></p>"));
    assert!(escaped.contains("<p>&lt;script&gt;x&lt;/script&gt;</p>"));
}

#[test]
fn assembly_is_deterministic_across_block_ids() {
    let build = || {
        Document::from(vec![
            Block::heading(1, "Intro", anchor("intro")),
            Block::image(ImageSize::Large, upload_image(PNG_BYTES).unwrap()),
            Block::separator(),
        ])
    };
    let page = PageOptions::default().with_footer("Rodapé");
    assert_eq!(assemble(&build(), None, &page), assemble(&build(), None, &page));
}

// ─────────────────────────────────────────────────────────────────────────────
// Description files
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn yaml_description_file_exports_to_html() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("logo.png"), PNG_BYTES).unwrap();

    let yaml = r##"
logo: logo.png
blocks:
  - type: h1
    content: Guia
    anchor: guia
  - type: list_item
    content: Primeiro item
    formatting:
      bold: true
      color: "#336699"
  - type: table
    table:
      headers: [Nome, Valor]
      rows:
        - [x, "1"]
"##;
    let loaded = parse_document(yaml, SourceFormat::Yaml, dir.path()).unwrap();
    assert_eq!(loaded.document.len(), 3);
    assert!(loaded.logo.is_some());

    let entries = extract(&loaded.document);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].anchor, "guia");

    let out = dir.path().join("guia.html");
    export_to_html_file(
        &loaded.document,
        loaded.logo.as_ref(),
        &PageOptions::default(),
        &out,
    )
    .unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</html>"));
    assert!(html.contains(r#"<img src="data:image/png;base64,"#));
    assert!(html.contains(r#"<ul><li><span style="color: #336699"><b>Primeiro item</b></span></li></ul>"#));
    assert!(html.contains("<th>Nome</th><th>Valor</th>"));
}

#[test]
fn description_with_missing_image_fails() {
    let json = r#"{"blocks": [{"type": "image_medium", "image": "absent.png"}]}"#;
    let result = parse_document(json, SourceFormat::Json, Path::new("/nonexistent"));
    assert!(result.is_err());
}

#[test]
fn description_with_remote_image_url_fails() {
    let json = r#"{"blocks": [{"type": "image_small", "content": "https://example.com/a.png"}]}"#;
    let err = parse_document(json, SourceFormat::Json, Path::new(".")).unwrap_err();
    assert!(matches!(err, Error::InvalidImageSource(_)));
}

#[test]
fn stats_of_loaded_description() {
    let toml = r#"
[[blocks]]
type = "h1"
content = "Guia"
anchor = "guia"

[[blocks]]
type = "h2"
content = "Detalhes"

[[blocks]]
type = "separator"
"#;
    let loaded = parse_document(toml, SourceFormat::Toml, Path::new(".")).unwrap();
    let stats = loaded.document.stats();
    assert_eq!(stats.blocks, 3);
    assert_eq!(stats.navigation, 1);
    assert_eq!(stats.headings, 2);
    assert_eq!(stats.images, 0);
}
