use file_forest_query::{File, ROOT_SENTINEL};

/// 12 个文件、3 个根（3、55、233）的样例森林
pub fn sample_files() -> Vec<File> {
    vec![
        File::new(1, "Document.txt", ["Documents"], 3, 1024),
        File::new(2, "Image.jpg", ["Media", "Photos"], 34, 2048),
        File::new(3, "Folder", ["Folder"], ROOT_SENTINEL, 0),
        File::new(5, "Spreadsheet.xlsx", ["Documents", "Excel"], 3, 4096),
        File::new(8, "Backup.zip", ["Backup"], 233, 8192),
        File::new(13, "Presentation.pptx", ["Documents", "Presentation"], 3, 3072),
        File::new(21, "Video.mp4", ["Media", "Videos"], 34, 6144),
        File::new(34, "Folder2", ["Folder"], 3, 0),
        File::new(55, "Code.py", ["Programming"], ROOT_SENTINEL, 1536),
        File::new(89, "Audio.mp3", ["Media", "Audio"], 34, 2560),
        File::new(144, "Spreadsheet2.xlsx", ["Documents", "Excel"], 3, 2048),
        File::new(233, "Folder3", ["Folder"], ROOT_SENTINEL, 4096),
    ]
}
