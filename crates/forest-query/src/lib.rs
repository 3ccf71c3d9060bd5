//! 基于扁平文件记录（parent 引用构成森林）的三类只读查询：
//! 叶子文件、前 k 个高频分类、以根为起点的最大子树大小。
pub mod index;
pub mod leaves;
pub mod categories;
pub mod subtree;

pub use index::ForestIndex;
pub use leaves::{leaf_file_records, leaf_files};
pub use categories::{category_counts, k_largest_categories};
pub use subtree::{largest_file_size, largest_file_size_with_config, root_subtree_totals, subtree_total};
pub use file_forest_common::{FileQueryError, NoRootsPolicy, QueryConfig};
pub use file_forest_domain::{CategoryCount, File, FileId, ROOT_SENTINEL};
