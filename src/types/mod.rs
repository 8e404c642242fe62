pub(crate) mod calendar;
pub mod dated_row;
pub mod raw_record;
pub mod record_book_row;
pub mod selection_window;
pub mod weather_table;
