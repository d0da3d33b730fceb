#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub renamed_files: u64,
    pub missing_files: u64,
    pub updated_files: u64,
    pub unchanged_files: u64,
    pub unreadable_paths: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renamer_summary(&self) -> String {
        format!(
            "Renamed files:    {}\nMissing files:    {}\nUpdated files:    {}\nUnchanged files:  {}\nUnreadable paths: {}\n",
            self.renamed_files, self.missing_files, self.updated_files, self.unchanged_files, self.unreadable_paths
        )
    }

    pub fn import_fixer_summary(&self) -> String {
        format!(
            "Updated files:    {}\nUnchanged files:  {}\nUnreadable paths: {}\n",
            self.updated_files, self.unchanged_files, self.unreadable_paths
        )
    }
}
