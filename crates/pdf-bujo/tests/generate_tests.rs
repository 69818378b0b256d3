use lopdf::{Dictionary, Document, Object};
use pdf_bujo::constants::*;
use pdf_bujo::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two distinct TrueType faces standing in for the regular and italic cuts
fn fixture_options(output: PathBuf) -> JournalOptions {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    JournalOptions {
        regular_font: fixtures.join("Tuffy.ttf"),
        italic_font: fixtures.join("RobotoMedium.ttf"),
        output,
        ..Default::default()
    }
}

/// Small PDF with `num_pages` US letter pages
fn write_letter_pdf(path: &Path, num_pages: usize) {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let kids = (0..num_pages)
        .map(|_| {
            Object::Reference(doc.add_object(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ]),
                ),
            ])))
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(num_pages as i64)),
        ])),
    );
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

#[test]
fn test_default_options() {
    let options = JournalOptions::default();
    assert_eq!(options.regular_font, PathBuf::from("fonts/EBGaramond-Regular.ttf"));
    assert_eq!(options.italic_font, PathBuf::from("fonts/EBGaramond-Italic.ttf"));
    assert_eq!(options.output, PathBuf::from("output/BulletJournal_rPPM.pdf"));
    assert!(!options.verify_output);
    assert!(options.reference.is_none());
    assert!(options.validate().is_ok());
}

#[test]
fn test_validate_rejects_same_font_twice() {
    let mut options = JournalOptions::default();
    options.italic_font = options.regular_font.clone();
    assert!(matches!(options.validate(), Err(JournalError::Config(_))));
}

#[test]
fn test_validate_rejects_empty_paths() {
    let options = JournalOptions {
        regular_font: PathBuf::new(),
        ..Default::default()
    };
    assert!(options.validate().is_err());

    let options = JournalOptions {
        output: PathBuf::new(),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.json");

    let options = JournalOptions {
        output: dir.path().join("out.pdf"),
        title: "My Journal".to_string(),
        verify_output: true,
        reference: Some(dir.path().join("reference.pdf")),
        ..JournalOptions::with_font_dir("/usr/share/fonts/garamond")
    };
    options.save(&path).await.unwrap();

    let loaded = JournalOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.json");
    std::fs::write(&path, r#"{ "title": "Notes" }"#).unwrap();

    let loaded = JournalOptions::load(&path).await.unwrap();
    assert_eq!(loaded.title, "Notes");
    assert_eq!(loaded.output, JournalOptions::default().output);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.json");
    std::fs::write(&path, "not json").unwrap();

    let result = JournalOptions::load(&path).await;
    assert!(matches!(result, Err(JournalError::Config(_))));
}

#[tokio::test]
async fn test_missing_font_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let options = JournalOptions {
        output: dir.path().join("out").join("journal.pdf"),
        ..JournalOptions::with_font_dir(dir.path().join("no-fonts"))
    };

    let result = generate(&options).await;

    match result {
        Err(JournalError::FontMissing { path }) => {
            assert_eq!(path, options.regular_font);
        }
        other => panic!("expected FontMissing, got {other:?}"),
    }
    assert!(!options.output.exists());
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_empty_font_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(REGULAR_FONT_FILE), b"").unwrap();
    std::fs::write(dir.path().join(ITALIC_FONT_FILE), b"").unwrap();
    let options = JournalOptions {
        output: dir.path().join("journal.pdf"),
        ..JournalOptions::with_font_dir(dir.path())
    };

    let result = generate(&options).await;

    assert!(matches!(result, Err(JournalError::Font(_))));
    assert!(!options.output.exists());
}

#[tokio::test]
async fn test_unparseable_font_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(REGULAR_FONT_FILE), b"not a font").unwrap();
    std::fs::write(dir.path().join(ITALIC_FONT_FILE), b"not a font").unwrap();
    let options = JournalOptions {
        output: dir.path().join("journal.pdf"),
        ..JournalOptions::with_font_dir(dir.path())
    };

    let result = generate(&options).await;

    assert!(matches!(result, Err(JournalError::Font(_))));
    assert!(!options.output.exists());
}

#[tokio::test]
async fn test_generate_full_journal() {
    let dir = TempDir::new().unwrap();
    let options = JournalOptions {
        verify_output: true,
        ..fixture_options(dir.path().join("out").join("journal.pdf"))
    };

    let report = generate(&options).await.unwrap();

    assert_eq!(report.pages, TOTAL_PAGES);
    assert_eq!(report.output, options.output);
    assert!(report.links > 0);
    assert!(report.parity.is_none());

    let bytes = std::fs::read(&options.output).unwrap();
    assert_eq!(bytes.len(), report.bytes);
    assert!(!dir.path().join("out").join(".journal.pdf.partial").exists());

    let summary = load_summary(&options.output).await.unwrap();
    assert_eq!(summary.page_count, TOTAL_PAGES);
    assert!(summary.mismatched_pages((PAGE_WIDTH, PAGE_HEIGHT)).is_empty());

    let doc = Document::load_mem(&bytes).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), TOTAL_PAGES);

    let daily = doc
        .get_object(pages[&(PAGE_DAILY_START as u32)])
        .unwrap()
        .as_dict()
        .unwrap();
    let annots = daily.get(b"Annots").unwrap().as_array().unwrap();
    assert!(!annots.is_empty());
}

#[tokio::test]
async fn test_unreadable_reference_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let options = JournalOptions {
        reference: Some(dir.path().join("missing.pdf")),
        ..fixture_options(dir.path().join("journal.pdf"))
    };

    let result = generate(&options).await;

    assert!(matches!(result, Err(JournalError::Io(_))));
    assert!(!options.output.exists());
}

#[tokio::test]
async fn test_reference_mismatch_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let reference = dir.path().join("reference.pdf");
    write_letter_pdf(&reference, 10);
    let options = JournalOptions {
        reference: Some(reference),
        ..fixture_options(dir.path().join("journal.pdf"))
    };

    let report = generate(&options).await.unwrap();

    let parity = report.parity.expect("reference was given");
    assert_eq!(parity.generated_pages, TOTAL_PAGES);
    assert_eq!(parity.reference_pages, 10);
    assert_eq!(parity.size_mismatches.len(), 10);
    assert!(!parity.matches());
    assert!(options.output.exists());
}
