use std::collections::HashMap;

use file_forest_common::{FileQueryError, NoRootsPolicy, QueryConfig};
use file_forest_domain::{File, FileId};

use crate::index::ForestIndex;

/// 从 `starts` 出发的子树总大小（自身 + 全部子孙）。
/// 先按层展开得到父先子后的顺序，再逆序把每个节点的总量累加到父节点上，避免递归。
/// 起点的父节点不在展开范围内，累加时自然跳过。
fn subtree_totals(index: &ForestIndex<'_>, starts: &[FileId]) -> HashMap<FileId, u64> {
    let mut order: Vec<FileId> = starts.to_vec();
    let mut cursor = 0;
    while cursor < order.len() {
        let id = order[cursor];
        order.extend_from_slice(index.children(id));
        cursor += 1;
    }

    let mut totals: HashMap<FileId, u64> = order
        .iter()
        .map(|&id| (id, index.file(id).map_or(0, File::size)))
        .collect();

    for &id in order.iter().rev() {
        let Some(parent) = index.file(id).and_then(File::parent) else {
            continue;
        };
        let own = totals.get(&id).copied().unwrap_or(0);
        if let Some(total) = totals.get_mut(&parent) {
            *total += own;
        }
    }
    totals
}

/// 每个根文件的子树总大小，按输入顺序
pub fn root_subtree_totals(files: &[File]) -> Vec<(FileId, u64)> {
    let index = ForestIndex::build(files);
    let totals = subtree_totals(&index, index.roots());
    index
        .roots()
        .iter()
        .map(|id| (*id, totals.get(id).copied().unwrap_or(0)))
        .collect()
}

/// 任意文件的子树总大小
pub fn subtree_total(files: &[File], id: FileId) -> Result<u64, FileQueryError> {
    let index = ForestIndex::build(files);
    if index.file(id).is_none() {
        return Err(FileQueryError::UnknownId(id));
    }
    let totals = subtree_totals(&index, &[id]);
    Ok(totals.get(&id).copied().unwrap_or(0))
}

/// 所有根文件中最大的子树总大小，使用默认配置
pub fn largest_file_size(files: &[File]) -> Result<u64, FileQueryError> {
    largest_file_size_with_config(files, &QueryConfig::default())
}

/// 空输入返回 0；非空但没有根时按 `config.no_roots` 处理
pub fn largest_file_size_with_config(
    files: &[File],
    config: &QueryConfig,
) -> Result<u64, FileQueryError> {
    if files.is_empty() {
        return Ok(0);
    }

    let index = if config.validate_input {
        ForestIndex::build_checked(files)?
    } else {
        ForestIndex::build(files)
    };

    if index.roots().is_empty() {
        log::warn!("[subtree] no root among {} files", files.len());
        return match config.no_roots {
            NoRootsPolicy::Error => Err(FileQueryError::NoRoots {
                file_count: files.len(),
            }),
            NoRootsPolicy::Zero => Ok(0),
        };
    }

    let totals = subtree_totals(&index, index.roots());
    let largest = index
        .roots()
        .iter()
        .filter_map(|id| totals.get(id).copied())
        .max()
        .unwrap_or(0);
    log::debug!(
        "[subtree] files={} roots={} largest={}",
        files.len(),
        index.roots().len(),
        largest
    );
    Ok(largest)
}
