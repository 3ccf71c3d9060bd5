use std::collections::{HashMap, HashSet};

use file_forest_common::FileQueryError;
use file_forest_domain::{File, FileId};

/// 一次遍历建立的辅助索引：id -> 文件、id -> 子节点 id、根列表
#[derive(Debug)]
pub struct ForestIndex<'a> {
    by_id: HashMap<FileId, &'a File>,
    children: HashMap<FileId, Vec<FileId>>,
    roots: Vec<FileId>,
}

impl<'a> ForestIndex<'a> {
    /// 不做输入校验；重复 id 时以最后出现者为准
    pub fn build(files: &'a [File]) -> Self {
        let mut by_id = HashMap::with_capacity(files.len());
        let mut children: HashMap<FileId, Vec<FileId>> = HashMap::new();
        let mut roots = Vec::new();

        for file in files {
            by_id.insert(file.id(), file);
            match file.parent() {
                Some(parent) => children.entry(parent).or_default().push(file.id()),
                None => roots.push(file.id()),
            }
        }

        log::trace!(
            "[index] files={} roots={} parents={}",
            files.len(),
            roots.len(),
            children.len()
        );
        Self { by_id, children, roots }
    }

    /// 同 `build`，但拒绝重复 id 与指向不存在文件的 parent
    pub fn build_checked(files: &'a [File]) -> Result<Self, FileQueryError> {
        let index = Self::build(files);
        if index.by_id.len() != files.len() {
            let mut seen = HashSet::with_capacity(files.len());
            for file in files {
                if !seen.insert(file.id()) {
                    return Err(FileQueryError::DuplicateId(file.id()));
                }
            }
        }
        for file in files {
            if let Some(parent) = file.parent() {
                if !index.by_id.contains_key(&parent) {
                    return Err(FileQueryError::DanglingParent {
                        id: file.id(),
                        parent,
                    });
                }
            }
        }
        Ok(index)
    }

    pub fn file(&self, id: FileId) -> Option<&'a File> {
        self.by_id.get(&id).copied()
    }

    /// 直接子节点，按输入顺序
    pub fn children(&self, id: FileId) -> &[FileId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn roots(&self) -> &[FileId] {
        &self.roots
    }

    /// 是否被某个文件引用为 parent
    pub fn is_parent(&self, id: FileId) -> bool {
        self.children.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
