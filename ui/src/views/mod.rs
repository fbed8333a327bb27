mod dashboard;
pub use dashboard::Dashboard;

mod export;
pub use export::ExportPanel;

mod metadata_table;
pub use metadata_table::MetadataTable;

mod subject_select;
pub use subject_select::SubjectSelect;
