use std::cmp::Ordering;
use std::collections::HashMap;

use file_forest_domain::{CategoryCount, File};

/// 排名顺序：次数降序，次数相同时按标签字典序升序
fn rank(a: &CategoryCount, b: &CategoryCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label))
}

/// 完整的分类频次表，已按排名排序。同一文件内的重复分类逐次计数
pub fn category_counts(files: &[File]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for category in files.iter().flat_map(File::categories) {
        *counts.entry(category.as_str()).or_insert(0) += 1;
    }

    let mut table: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    table.sort_by(rank);
    table
}

/// 前 k 个分类标签。k 超过不同标签数时返回全部标签，顺序同上
pub fn k_largest_categories(files: &[File], k: usize) -> Vec<String> {
    let table = category_counts(files);
    let distinct = table.len();
    let labels: Vec<String> = table.into_iter().take(k).map(|c| c.label).collect();
    log::debug!(
        "[category] files={} distinct={} k={} returned={}",
        files.len(),
        distinct,
        k,
        labels.len()
    );
    labels
}
