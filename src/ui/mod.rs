/// UI layer: top bar, filter panel, record table, detail view.
pub mod panels;
pub mod table;
