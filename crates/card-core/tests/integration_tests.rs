//! Integration tests for page merging

use card_core::pdf::merge_pages;
use image::{Rgba, RgbaImage};
use lopdf::Document;
use std::path::PathBuf;

fn write_page(dir: &std::path::Path, name: &str, width: u32, height: u32, fill: [u8; 4]) -> PathBuf {
    let image = RgbaImage::from_pixel(width, height, Rgba(fill));
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

#[test]
fn test_merge_three_pages() {
    let dir = tempfile::tempdir().unwrap();
    let pages = vec![
        write_page(dir.path(), "page_1.png", 640, 400, [255, 255, 255, 255]),
        write_page(dir.path(), "page_2.png", 640, 400, [200, 200, 200, 255]),
        write_page(dir.path(), "page_3.png", 640, 400, [128, 128, 128, 255]),
    ];
    let output = dir.path().join("merged.pdf");

    merge_pages(&pages, &output).unwrap();

    let doc = Document::load(&output).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
}

#[test]
fn test_merged_page_boxes_match_image_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let pages = vec![write_page(dir.path(), "page_1.png", 300, 180, [10, 20, 30, 255])];
    let output = dir.path().join("merged.pdf");

    merge_pages(&pages, &output).unwrap();

    let doc = Document::load(&output).unwrap();
    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();

    assert_eq!(media_box[2].as_i64().unwrap(), 300);
    assert_eq!(media_box[3].as_i64().unwrap(), 180);
}

#[test]
fn test_merge_normalizes_alpha_pages() {
    // Pages with transparency still merge; color model is normalized to RGB
    let dir = tempfile::tempdir().unwrap();
    let pages = vec![
        write_page(dir.path(), "page_1.png", 64, 64, [255, 0, 0, 128]),
        write_page(dir.path(), "page_2.png", 64, 64, [0, 255, 0, 0]),
    ];
    let output = dir.path().join("merged.pdf");

    merge_pages(&pages, &output).unwrap();

    let doc = Document::load(&output).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn test_merge_keeps_input_order() {
    let dir = tempfile::tempdir().unwrap();
    // Deliberately out of lexical order
    let pages = vec![
        write_page(dir.path(), "page_3.png", 32, 32, [1, 1, 1, 255]),
        write_page(dir.path(), "page_1.png", 48, 48, [2, 2, 2, 255]),
    ];
    let output = dir.path().join("merged.pdf");

    merge_pages(&pages, &output).unwrap();

    let doc = Document::load(&output).unwrap();
    let pages_map = doc.get_pages();
    let first = doc.get_dictionary(pages_map[&1]).unwrap();
    let media_box = first.get(b"MediaBox").unwrap().as_array().unwrap();

    // First PDF page is the first input path (32x32), not the lexically first
    assert_eq!(media_box[2].as_i64().unwrap(), 32);
}
