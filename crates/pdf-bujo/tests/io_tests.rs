use lopdf::{Dictionary, Document, Object, Stream};
use pdf_bujo::constants::*;
use pdf_bujo::render::add_link_annotations;
use pdf_bujo::*;
use tempfile::TempDir;

fn create_test_pdf(num_pages: usize, width: i64, height: i64) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    // MediaBox is inherited from the page tree root
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(width),
                Object::Integer(height),
            ]),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

fn to_bytes(doc: &mut Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[tokio::test]
async fn test_persist_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("output").join("journal.pdf");

    persist(b"%PDF-1.7 test", &path).await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7 test");
    assert!(!dir.path().join("output").join(".journal.pdf.partial").exists());
}

#[tokio::test]
async fn test_persist_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.pdf");
    std::fs::write(&path, b"old").unwrap();

    persist(b"new", &path).await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"new");
}

#[tokio::test]
async fn test_persist_fails_when_parent_is_a_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let result = persist(b"data", blocker.join("journal.pdf")).await;

    assert!(matches!(result, Err(JournalError::Io(_))));
    assert_eq!(std::fs::read(&blocker).unwrap(), b"not a directory");
}

#[tokio::test]
async fn test_persist_fails_when_destination_is_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.pdf");
    std::fs::create_dir(&path).unwrap();

    let result = persist(b"data", &path).await;

    assert!(matches!(result, Err(JournalError::Io(_))));
    assert!(path.is_dir());
    assert!(!dir.path().join(".journal.pdf.partial").exists());
}

#[tokio::test]
async fn test_failed_persist_leaves_existing_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.pdf");
    std::fs::write(&path, b"previous journal").unwrap();

    // Occupy the temporary path so the write cannot happen
    std::fs::create_dir(dir.path().join(".journal.pdf.partial")).unwrap();

    let result = persist(b"replacement", &path).await;

    assert!(matches!(result, Err(JournalError::Io(_))));
    assert_eq!(std::fs::read(&path).unwrap(), b"previous journal");
}

#[test]
fn test_inspect_reads_inherited_media_box() {
    let bytes = to_bytes(&mut create_test_pdf(3, 954, 1696));

    let summary = inspect_pdf(&bytes).unwrap();

    assert_eq!(summary.page_count, 3);
    assert_eq!(summary.page_sizes, vec![(954.0, 1696.0); 3]);
}

#[test]
fn test_verify_rejects_wrong_page_count() {
    let bytes = to_bytes(&mut create_test_pdf(10, 954, 1696));

    let result = verify_document(&bytes);

    assert!(matches!(result, Err(JournalError::Verification(_))));
}

#[test]
fn test_verify_rejects_wrong_page_size() {
    let bytes = to_bytes(&mut create_test_pdf(TOTAL_PAGES, 612, 792));

    let result = verify_document(&bytes);

    assert!(matches!(result, Err(JournalError::Verification(_))));
}

#[test]
fn test_verify_accepts_journal_shape() {
    let bytes = to_bytes(&mut create_test_pdf(TOTAL_PAGES, 954, 1696));

    let summary = verify_document(&bytes).unwrap();

    assert_eq!(summary.page_count, TOTAL_PAGES);
    assert!(summary.mismatched_pages((PAGE_WIDTH, PAGE_HEIGHT)).is_empty());
}

#[tokio::test]
async fn test_reference_parity() {
    let dir = TempDir::new().unwrap();
    let generated = dir.path().join("generated.pdf");
    let reference = dir.path().join("reference.pdf");
    create_test_pdf(4, 954, 1696).save(&generated).unwrap();
    create_test_pdf(5, 954, 1696).save(&reference).unwrap();

    let report = ParityReport::compare(
        &load_summary(&generated).await.unwrap(),
        &load_summary(&reference).await.unwrap(),
    );

    assert_eq!(report.generated_pages, 4);
    assert_eq!(report.reference_pages, 5);
    assert!(report.size_mismatches.is_empty());
    assert!(!report.matches());
}

#[test]
fn test_link_annotations_point_at_target_pages() {
    let journal = assemble();
    let mut doc = create_test_pdf(TOTAL_PAGES, 954, 1696);

    let added = add_link_annotations(&mut doc, journal.pages()).unwrap();
    assert_eq!(added, journal.link_count());

    let pages = doc.get_pages();
    let daily = journal.page(PAGE_DAILY_START).unwrap();
    let page = doc
        .get_object(pages[&(PAGE_DAILY_START as u32)])
        .unwrap()
        .as_dict()
        .unwrap();
    let annots = page.get(b"Annots").unwrap().as_array().unwrap();
    assert_eq!(annots.len(), daily.links.len());

    let first = doc
        .get_object(annots[0].as_reference().unwrap())
        .unwrap()
        .as_dict()
        .unwrap();
    assert_eq!(first.get(b"Subtype").unwrap().as_name().unwrap(), b"Link");

    let dest = first.get(b"Dest").unwrap().as_array().unwrap();
    let target = daily.links[0].target as u32;
    assert_eq!(dest[0].as_reference().unwrap(), pages[&target]);
    assert_eq!(dest[1].as_name().unwrap(), b"Fit");

    // Link rectangles are flipped into PDF space
    let rect = first.get(b"Rect").unwrap().as_array().unwrap();
    let area = daily.links[0].area;
    assert_eq!(rect[1].as_float().unwrap(), PAGE_HEIGHT - area.bottom);
    assert_eq!(rect[3].as_float().unwrap(), PAGE_HEIGHT - area.top);
}

#[test]
fn test_links_to_missing_pages_are_skipped() {
    let journal = assemble();
    // Only the first five pages exist
    let mut doc = create_test_pdf(5, 954, 1696);

    let added = add_link_annotations(&mut doc, journal.pages()).unwrap();

    let expected: usize = journal.pages()[..5]
        .iter()
        .flat_map(|p| &p.links)
        .filter(|l| l.target <= 5)
        .count();
    assert_eq!(added, expected);
}
