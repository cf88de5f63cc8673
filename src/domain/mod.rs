pub mod fragment;
pub mod scraped_record;
