use serde::{Deserialize, Serialize};

/// 文件 id，同一输入内唯一，作为 parent 引用的目标
pub type FileId = i64;

/// 构造参数与序列化格式中表示「无父节点」的取值
pub const ROOT_SENTINEL: FileId = -1;

/// 文件记录，构造后只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    id: FileId,
    name: String,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(with = "parent_sentinel")]
    parent: Option<FileId>,
    size: u64,
}

impl File {
    /// `parent` 为 `ROOT_SENTINEL` 时表示根文件
    pub fn new<N, C, S>(id: FileId, name: N, categories: C, parent: FileId, size: u64) -> Self
    where
        N: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            parent: (parent != ROOT_SENTINEL).then_some(parent),
            size,
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn parent(&self) -> Option<FileId> {
        self.parent
    }

    /// 自身大小，不含子孙
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// `Option<FileId>` <-> 整数，`None` 写作 -1
mod parent_sentinel {
    use super::{FileId, ROOT_SENTINEL};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(parent: &Option<FileId>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(parent.unwrap_or(ROOT_SENTINEL))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<FileId>, D::Error> {
        let raw = FileId::deserialize(d)?;
        Ok((raw != ROOT_SENTINEL).then_some(raw))
    }
}
