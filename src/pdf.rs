use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::fonts::{FontCatalog, to_winansi_bytes};
use crate::model::{Document, FontRole};

fn pdf_font_name(role: FontRole) -> &'static [u8] {
    match role {
        FontRole::Body => b"F1",
        FontRole::Bold | FontRole::Title => b"F2",
    }
}

/// Serialize the laid-out document into PDF bytes.
pub fn encode(doc: &Document, fonts: &FontCatalog) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    let body_ref = alloc();
    pdf.type1_font(body_ref)
        .base_font(Name(fonts.entry(FontRole::Body).base_font.as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    let bold_ref = alloc();
    pdf.type1_font(bold_ref)
        .base_font(Name(fonts.entry(FontRole::Bold).base_font.as_bytes()))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let n = doc.pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, page) in doc.pages.iter().enumerate() {
        let mut content = Content::new();

        if !page.runs.is_empty() {
            content.begin_text();
            let mut cur_color = [0.0f32; 3];
            let mut cur_font: Option<(&'static [u8], f32)> = None;
            let mut td = (0.0f32, 0.0f32);

            for run in &page.runs {
                if run.style.color != cur_color {
                    let [r, g, b] = run.style.color;
                    if run.style.color == [0.0, 0.0, 0.0] {
                        content.set_fill_gray(0.0);
                    } else {
                        content.set_fill_rgb(r, g, b);
                    }
                    cur_color = run.style.color;
                }

                let font = (pdf_font_name(run.style.role), run.style.size);
                if cur_font != Some(font) {
                    content.set_font(Name(font.0), font.1);
                    cur_font = Some(font);
                }

                content.next_line(run.x - td.0, run.y - td.1);
                td = (run.x, run.y);
                content.show(Str(&to_winansi_bytes(&run.content)));
            }
            content.end_text();
        }

        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    for (i, page) in doc.pages.iter().enumerate() {
        let mut page_dict = pdf.page(page_ids[i]);
        page_dict
            .media_box(Rect::new(0.0, 0.0, page.width, page.height))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page_dict.resources();
        let mut font_res = resources.fonts();
        font_res.pair(Name(b"F1"), body_ref);
        font_res.pair(Name(b"F2"), bold_ref);
    }

    pdf.finish()
}
