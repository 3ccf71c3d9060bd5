use std::collections::HashSet;

use file_forest_domain::{File, FileId};

/// id 未被任何文件引用为 parent 的文件，保持输入顺序
pub fn leaf_file_records(files: &[File]) -> Vec<&File> {
    let parents: HashSet<FileId> = files.iter().filter_map(File::parent).collect();
    files
        .iter()
        .filter(|f| !parents.contains(&f.id()))
        .collect()
}

/// 叶子文件名；重名文件各自保留
pub fn leaf_files(files: &[File]) -> Vec<String> {
    let names: Vec<String> = leaf_file_records(files)
        .into_iter()
        .map(|f| f.name().to_string())
        .collect();
    log::debug!("[leaf] files={} leaves={}", files.len(), names.len());
    names
}
