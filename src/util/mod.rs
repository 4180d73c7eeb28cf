pub mod entry_date;
pub mod os_helper;
