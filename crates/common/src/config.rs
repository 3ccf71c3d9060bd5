/// 输入非空但没有任何根文件时的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoRootsPolicy {
    /// 返回 `FileQueryError::NoRoots`
    #[default]
    Error,
    /// 视为 0
    Zero,
}

/// 查询配置
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    pub no_roots: NoRootsPolicy,
    /// 构建索引时检查重复 id 与悬空的 parent
    pub validate_input: bool,
}

impl QueryConfig {
    pub fn validated() -> Self {
        Self {
            validate_input: true,
            ..Self::default()
        }
    }
}
