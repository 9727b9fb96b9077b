//! PDF assembly for multi-page documents
//!
//! Rendered page PNGs are reopened, normalized to 8-bit RGB, compressed with
//! FlateDecode and embedded as full-page image XObjects, one PDF page per
//! source image.

use crate::{CanvasError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A rendered page prepared for embedding
///
/// Pixel data is held RGB8, FlateDecode-compressed.
struct PageImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PageImage {
    /// Load a rendered page and normalize its color model to 8-bit RGB
    fn from_file(path: &Path) -> Result<Self> {
        let rgb = image::open(path)
            .map_err(|e| CanvasError::OpenError(format!("{}: {}", path.display(), e)))?
            .to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(rgb.as_raw())?;
        let data = encoder.finish()?;

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert to an image XObject stream
    fn to_xobject(&self) -> Stream {
        let dict = dictionary! {
            "Type" => Object::Name(b"XObject".to_vec()),
            "Subtype" => Object::Name(b"Image".to_vec()),
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => Object::Name(b"DeviceRGB".to_vec()),
            "BitsPerComponent" => 8,
            "Filter" => Object::Name(b"FlateDecode".to_vec()),
        };

        Stream::new(dict, self.data.clone()).with_compression(false)
    }
}

/// Generate operators drawing one image over the whole page
///
/// The unit image square is scaled to the page box:
/// q / `w 0 0 h 0 0 cm` / Do / Q.
fn page_operators(image_name: &str, width: f64, height: f64) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} 0 0 cm\n/{image_name} Do\nQ\n").into_bytes()
}

/// Merge rendered page images into a single PDF, in input order
///
/// Each source image becomes one PDF page whose media box matches the image
/// pixel dimensions. The output file is flushed before this returns, so
/// callers may delete the source pages as soon as it succeeds.
///
/// # Arguments
/// * `pages` - Paths of the rendered page images, in page order
/// * `output` - Path of the merged PDF
pub fn merge_pages(pages: &[PathBuf], output: &Path) -> Result<()> {
    if pages.is_empty() {
        return Err(CanvasError::MergeError("no pages to merge".to_string()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for (index, path) in pages.iter().enumerate() {
        let page = PageImage::from_file(path)?;
        let image_name = format!("Im{}", index + 1);

        let xobject_id = doc.add_object(page.to_xobject());
        let content = Stream::new(
            Dictionary::new(),
            page_operators(&image_name, page.width as f64, page.height as f64),
        );
        let content_id = doc.add_object(content);

        let mut xobjects = Dictionary::new();
        xobjects.set(image_name, Object::Reference(xobject_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                (page.width as i64).into(),
                (page.height as i64).into(),
            ],
            "Contents" => content_id,
            "Resources" => Object::Dictionary(resources),
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let file = std::fs::File::create(output)
        .map_err(|e| CanvasError::SaveError(format!("{}: {}", output.display(), e)))?;
    let mut writer = std::io::BufWriter::new(file);
    doc.save_to(&mut writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_operators() {
        let ops = String::from_utf8(page_operators("Im1", 640.0, 400.0)).unwrap();

        assert!(ops.starts_with("q\n"));
        assert!(ops.contains("640 0 0 400 0 0 cm"));
        assert!(ops.contains("/Im1 Do"));
        assert!(ops.ends_with("Q\n"));
    }

    #[test]
    fn test_xobject_dictionary() {
        let page = PageImage {
            width: 120,
            height: 80,
            data: vec![1, 2, 3],
        };

        let stream = page.to_xobject();
        let dict = stream.dict;

        assert_eq!(dict.get(b"Subtype").unwrap().as_name().unwrap(), b"Image");
        assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 120);
        assert_eq!(dict.get(b"Height").unwrap().as_i64().unwrap(), 80);
        assert_eq!(
            dict.get(b"ColorSpace").unwrap().as_name().unwrap(),
            b"DeviceRGB"
        );
        assert_eq!(
            dict.get(b"Filter").unwrap().as_name().unwrap(),
            b"FlateDecode"
        );
        assert_eq!(stream.content, vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_empty_page_list() {
        let dir = tempfile::tempdir().unwrap();
        let err = merge_pages(&[], &dir.path().join("out.pdf")).unwrap_err();
        assert!(matches!(err, CanvasError::MergeError(_)));
    }

    #[test]
    fn test_merge_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("page_1.png");
        let err = merge_pages(&[missing], &dir.path().join("out.pdf")).unwrap_err();
        assert!(matches!(err, CanvasError::OpenError(_)));
    }
}
