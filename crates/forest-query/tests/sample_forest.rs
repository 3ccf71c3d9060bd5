mod common;

use common::sample_files;
use file_forest_common::init_logging;
use file_forest_query::{
    category_counts, k_largest_categories, largest_file_size, largest_file_size_with_config,
    leaf_files, root_subtree_totals, subtree_total, QueryConfig,
};

#[test]
fn leaf_files_sorted() {
    init_logging();
    let mut leaves = leaf_files(&sample_files());
    leaves.sort();
    assert_eq!(
        leaves,
        vec![
            "Audio.mp3",
            "Backup.zip",
            "Code.py",
            "Document.txt",
            "Image.jpg",
            "Presentation.pptx",
            "Spreadsheet.xlsx",
            "Spreadsheet2.xlsx",
            "Video.mp4",
        ]
    );
}

#[test]
fn leaf_files_keep_input_order() {
    let leaves = leaf_files(&sample_files());
    assert_eq!(leaves.first().map(String::as_str), Some("Document.txt"));
    assert_eq!(leaves.last().map(String::as_str), Some("Spreadsheet2.xlsx"));
}

#[test]
fn top_three_categories() {
    init_logging();
    let files = sample_files();
    assert_eq!(k_largest_categories(&files, 3), vec!["Documents", "Folder", "Media"]);
    assert_eq!(k_largest_categories(&files, 1), vec!["Documents"]);
    assert!(k_largest_categories(&files, 0).is_empty());
}

#[test]
fn category_table_counts() {
    let table = category_counts(&sample_files());
    let top: Vec<(&str, u64)> = table.iter().take(3).map(|c| (c.label.as_str(), c.count)).collect();
    assert_eq!(top, vec![("Documents", 4), ("Folder", 3), ("Media", 3)]);
    assert_eq!(table.len(), 10);
    assert_eq!(k_largest_categories(&sample_files(), 50).len(), 10);
}

#[test]
fn largest_subtree() {
    init_logging();
    let files = sample_files();
    assert_eq!(largest_file_size(&files), Ok(20992));
    assert_eq!(
        largest_file_size_with_config(&files, &QueryConfig::validated()),
        Ok(20992)
    );
}

#[test]
fn per_root_totals() {
    let files = sample_files();
    assert_eq!(root_subtree_totals(&files), vec![(3, 20992), (55, 1536), (233, 12288)]);
    assert_eq!(subtree_total(&files, 34), Ok(2048 + 6144 + 2560));
}

#[test]
fn empty_input() {
    assert!(leaf_files(&[]).is_empty());
    assert!(k_largest_categories(&[], 5).is_empty());
    assert_eq!(largest_file_size(&[]), Ok(0));
}
